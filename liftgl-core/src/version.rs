//!
//! IMGT/HLA release versions and the compact keys used as allele history column names.
//!
//! The history file strips the dots from a release and pads the middle field to two digits,
//! so release `3.1.0` is stored in column `3010` and release `3.25.0` in column `3250`.
//!
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::LiftoverError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionKey {
    label: String,
    key: String,
}

impl VersionKey {
    ///
    /// Build a version key from a dotted three-field release such as `3.25.0`.
    ///
    /// # Arguments:
    /// - `version`: the dotted release label
    ///
    /// # Returns:
    /// - the version key, or `InvalidVersion` when the label is not three numeric fields
    ///
    pub fn from_dotted(version: &str) -> Result<Self, LiftoverError> {
        let fields: Vec<&str> = version.trim().split('.').collect();
        if fields.len() != 3
            || fields
                .iter()
                .any(|f| f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(LiftoverError::InvalidVersion(version.to_string()));
        }

        let key = format!("{}{:0>2}{}", fields[0], fields[1], fields[2]);

        Ok(VersionKey {
            label: version.trim().to_string(),
            key,
        })
    }

    /// The dotted release label, e.g. `3.25.0`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The allele history column name, e.g. `3250`.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for VersionKey {
    type Err = LiftoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionKey::from_dotted(s)
    }
}

impl Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
