use log::{debug, warn};

use crate::errors::{LiftoverError, Result};
use crate::mapper::to_ids;
use crate::normalize::clean;
use crate::render::{dropped_ids, to_target};
use crate::resource::{ResourceType, classify};
use crate::table::AlleleTable;
use crate::version::VersionKey;

/// Result of lifting one GL String, including the intermediate identifier form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedGl {
    pub source_gl: String,
    pub id_gl: String,
    pub target_gl: String,
    pub resource: ResourceType,
    /// Identifiers that have no allele name in the target release.
    pub dropped: Vec<String>,
}

/// Lifts GL Strings from one IMGT/HLA release to another.
pub struct Liftover<'t> {
    table: &'t AlleleTable,
    source: VersionKey,
    target: VersionKey,
}

impl<'t> Liftover<'t> {
    ///
    /// Create a liftover between two releases of `table`.
    ///
    /// # Arguments:
    /// - `table`: the allele history
    /// - `source`: dotted release the input GL Strings are written in, e.g. `3.20.0`
    /// - `target`: dotted release to lift to, e.g. `3.25.0`
    ///
    pub fn new(table: &'t AlleleTable, source: &str, target: &str) -> Result<Self> {
        let source = VersionKey::from_dotted(source)?;
        let target = VersionKey::from_dotted(target)?;

        for version in [&source, &target] {
            if !table.has_version(version) {
                return Err(LiftoverError::UnknownVersion(version.label().to_string()));
            }
        }

        Ok(Liftover {
            table,
            source,
            target,
        })
    }

    pub fn source(&self) -> &VersionKey {
        &self.source
    }

    pub fn target(&self) -> &VersionKey {
        &self.target
    }

    ///
    /// Lift a GL String to the target release.
    ///
    /// # Returns:
    /// - the lifted GL String, or `EmptyTarget` if every allele was dropped
    ///
    pub fn lift(&self, glstring: &str) -> Result<LiftedGl> {
        debug!(
            "gl = {}, source = {}, target = {}",
            glstring, self.source, self.target
        );

        let resource = classify(glstring);
        let id_gl = to_ids(glstring, &self.source, self.table)?;
        let raw = to_target(&id_gl, &self.target, self.table);
        let target_gl = clean(&raw);

        let dropped = dropped_ids(&id_gl, &self.target, self.table);
        if !dropped.is_empty() {
            warn!(
                "{} not present in IMGT/HLA ver {}, dropped from target GL String",
                dropped.join(", "),
                self.target
            );
        }

        if target_gl.is_empty() {
            return Err(LiftoverError::EmptyTarget);
        }

        Ok(LiftedGl {
            source_gl: glstring.to_string(),
            id_gl,
            target_gl,
            resource,
            dropped,
        })
    }
}

///
/// Lift a single GL String from `source` to `target`.
///
/// # Arguments:
/// - `glstring`: GL String of allele names valid in `source`
/// - `source`: dotted source release
/// - `target`: dotted target release
/// - `table`: the allele history
///
pub fn liftover(glstring: &str, source: &str, target: &str, table: &AlleleTable) -> Result<String> {
    let lifted = Liftover::new(table, source, target)?.lift(glstring)?;
    Ok(lifted.target_gl)
}
