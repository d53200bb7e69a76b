use std::borrow::Cow;

use fxhash::FxHashMap as HashMap;
use log::debug;

use crate::errors::{LiftoverError, Result};
use crate::table::AlleleTable;
use crate::tokenizer::{substitute_tokens, tokenize};
use crate::utils::strip_hla_prefix;
use crate::version::VersionKey;

///
/// Replace every allele of a source-version GL String with its stable identifier.
///
/// Every distinct allele is resolved before any output is built, so a single unknown or
/// ambiguous allele fails the whole conversion.
///
/// # Arguments:
/// - `glstring`: GL String of allele names valid in `source`
/// - `source`: the release the allele names come from
/// - `table`: the allele history
///
/// # Returns:
/// - the GL String with the same delimiters and identifiers in place of allele names
///
pub fn to_ids(glstring: &str, source: &VersionKey, table: &AlleleTable) -> Result<String> {
    let column = table
        .column(source)
        .ok_or_else(|| LiftoverError::UnknownVersion(source.label().to_string()))?;

    let mut ids: HashMap<&str, &str> = HashMap::default();
    for allele in tokenize(glstring) {
        let candidates = strip_hla_prefix(allele)
            .map(|name| column.find(name))
            .unwrap_or_default();

        match candidates {
            [id] => {
                ids.insert(allele, id.as_str());
            }
            [] => {
                return Err(LiftoverError::AlleleNotFound {
                    allele: allele.to_string(),
                    version: source.label().to_string(),
                });
            }
            _ => {
                return Err(LiftoverError::AmbiguousAllele {
                    allele: allele.to_string(),
                    ids: candidates.to_vec(),
                });
            }
        }
    }

    let gl_ids = substitute_tokens(glstring, |allele| {
        Cow::Borrowed(ids.get(allele).copied().unwrap_or(allele))
    });
    debug!("IDs = {}", gl_ids);

    Ok(gl_ids)
}
