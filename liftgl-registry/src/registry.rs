use std::fmt::{self, Display};

use liftgl_core::ResourceType;

use crate::error::Result;

/// Which half of a liftover a registry call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlSide {
    Source,
    Target,
}

impl Display for GlSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlSide::Source => f.write_str("source"),
            GlSide::Target => f.write_str("target"),
        }
    }
}

/// Registry address of a GL String: `<namespace>/<version>/<resource-type>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub namespace: String,
    pub version: String,
    pub resource: ResourceType,
}

impl Endpoint {
    pub fn new(namespace: &str, version: &str, resource: ResourceType) -> Self {
        Endpoint {
            namespace: namespace.to_string(),
            version: version.to_string(),
            resource,
        }
    }

    /// Path of the endpoint relative to the registry base URL.
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.namespace, self.version, self.resource)
    }
}

/// A GL String stored by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredGl {
    /// GL String as echoed back by the registry.
    pub glstring: String,
    /// URI the registry stored the GL String under.
    pub location: String,
}

///
/// A GL registry service: stores GL Strings and hands them back by URI.
///
/// The liftover pipeline only talks to the registry through this trait, so a service can
/// be backed by HTTP ([`crate::client::RegistryClient`]) or by anything else.
///
pub trait GlRegistry {
    /// Store `glstring` under `endpoint` and return where it was stored.
    fn register(&self, endpoint: &Endpoint, glstring: &str) -> Result<RegisteredGl>;

    /// Fetch a previously stored GL String.
    fn retrieve(&self, uri: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_endpoint_path() {
        let endpoint = Endpoint::new("imgt-hla", "3.25.0", ResourceType::MultilocusUnphasedGenotype);
        assert_eq!(endpoint.path(), "imgt-hla/3.25.0/multilocus-unphased-genotype");
    }

    #[rstest]
    fn test_side_names() {
        assert_eq!(GlSide::Source.to_string(), "source");
        assert_eq!(GlSide::Target.to_string(), "target");
    }
}
