use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

///
/// Configuration of a [`crate::service::LiftoverService`], read from a TOML file.
///
/// ```toml
/// table = "Allelelist_history.txt"
/// registry = "http://gl.nmdp.org"
/// namespace = "imgt-hla"
/// target_version = "3.25.0"
/// timeout_secs = 30
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LiftoverConfig {
    /// allele history path, relative to the config file
    pub table: String,
    pub registry: Option<String>,
    pub namespace: Option<String>,
    pub target_version: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Error, Debug)]
pub enum LiftoverConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type LiftoverConfigResult<T> = std::result::Result<T, LiftoverConfigError>;

impl TryFrom<&Path> for LiftoverConfig {
    type Error = LiftoverConfigError;

    fn try_from(path: &Path) -> LiftoverConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
