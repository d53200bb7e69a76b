use std::env;

use liftgl_core::{ResourceType, VersionKey};

use super::consts::{DEFAULT_REGISTRY_URL, REGISTRY_URL_ENV};
use super::error::{RegistryError, Result};

/// Get default registry base URL from environment variable
///
/// # Returns
/// - registry base url
pub fn get_default_registry_url() -> String {
    env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string())
}

/// What a GL Service URI says about the GL String it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlUri {
    pub namespace: String,
    pub version: String,
    pub resource: ResourceType,
}

///
/// Parse a GL Service URI such as
/// `http://gl.nmdp.org/imgt-hla/3.20.0/multilocus-unphased-genotype/3`.
///
/// The third-from-last and second-from-last path segments are the IMGT/HLA version and the
/// resource type; the segment before them is the namespace.
///
pub fn parse_gl_uri(uri: &str) -> Result<GlUri> {
    let invalid = || RegistryError::InvalidUri(uri.to_string());

    let segments: Vec<&str> = uri.trim_end_matches('/').split('/').collect();
    let n = segments.len();
    if n < 4 {
        return Err(invalid());
    }

    let version = segments[n - 3];
    VersionKey::from_dotted(version).map_err(|_| invalid())?;
    let resource: ResourceType = segments[n - 2].parse().map_err(|_| invalid())?;
    let namespace = segments[n - 4];
    if namespace.is_empty() {
        return Err(invalid());
    }

    Ok(GlUri {
        namespace: namespace.to_string(),
        version: version.to_string(),
        resource,
    })
}

///
/// Get the IMGT/HLA version a GL Service namespace URI points at, e.g. `3.25.0` for
/// `http://gl.nmdp.org/imgt-hla/3.25.0/`.
///
pub fn parse_target_namespace(namespace: &str) -> Result<String> {
    let version = namespace
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .ok_or_else(|| RegistryError::InvalidUri(namespace.to_string()))?;

    VersionKey::from_dotted(version).map_err(|_| RegistryError::InvalidUri(namespace.to_string()))?;

    Ok(version.to_string())
}
