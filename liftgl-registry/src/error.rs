use thiserror::Error;

use liftgl_core::LiftoverError;

use crate::config::LiftoverConfigError;
use crate::registry::GlSide;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("GL registry returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GL registry response from {url} has no Location header")]
    MissingLocation { url: String },

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Not a GL Service URI: {0}")]
    InvalidUri(String),

    #[error("A source IMGT/HLA version is required for GL String input")]
    MissingSourceVersion,

    #[error("Failed to register {side} GL String: {source}")]
    Submission {
        side: GlSide,
        #[source]
        source: Box<RegistryError>,
    },

    #[error(transparent)]
    Liftover(#[from] LiftoverError),

    #[error(transparent)]
    Config(#[from] LiftoverConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// Attribute a failed registration to the source or target GL String.
    pub fn on_side(self, side: GlSide) -> Self {
        RegistryError::Submission {
            side,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
