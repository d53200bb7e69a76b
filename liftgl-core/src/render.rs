use std::borrow::Cow;

use fxhash::FxHashMap as HashMap;
use log::debug;

use crate::consts::{HLA_PREFIX, MISSING_ALLELE};
use crate::table::AlleleTable;
use crate::tokenizer::{substitute_tokens, tokenize};
use crate::version::VersionKey;

///
/// Render a GL String of stable identifiers as allele names of the target release.
///
/// Identifiers without a name in `target` become the missing marker `HLA-nan`; they are
/// removed later by [`crate::normalize::clean`]. This step never fails.
///
/// # Arguments:
/// - `gl_ids`: GL String of stable identifiers, as produced by [`crate::mapper::to_ids`]
/// - `target`: the release to render
/// - `table`: the allele history
///
pub fn to_target(gl_ids: &str, target: &VersionKey, table: &AlleleTable) -> String {
    let alleles: HashMap<&str, String> = tokenize(gl_ids)
        .into_iter()
        .map(|id| {
            let allele = match table.allele_name(id, target) {
                Some(name) => format!("{}{}", HLA_PREFIX, name),
                None => MISSING_ALLELE.to_string(),
            };
            (id, allele)
        })
        .collect();

    let raw = substitute_tokens(gl_ids, |id| match alleles.get(id) {
        Some(allele) => Cow::Owned(allele.clone()),
        None => Cow::Borrowed(id),
    });
    debug!("raw target GL = {}", raw);

    raw
}

/// The identifiers of `gl_ids` that have no allele name in `target`.
pub fn dropped_ids(gl_ids: &str, target: &VersionKey, table: &AlleleTable) -> Vec<String> {
    tokenize(gl_ids)
        .into_iter()
        .filter(|id| table.allele_name(id, target).is_none())
        .map(str::to_string)
        .collect()
}
