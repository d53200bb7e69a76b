//! End-to-end liftover requests against a GL registry.
//!
//! A request names a GL String (or the registry URI of one), a source release and a target
//! release. The service lifts it with the allele history and stores both the source and the
//! lifted GL String in the registry. Nothing is stored unless the liftover itself succeeded.

use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;

use liftgl_core::AlleleTable;
use liftgl_core::Liftover;
use liftgl_core::consts::DEFAULT_TARGET_VERSION;

use crate::client::RegistryClient;
use crate::config::LiftoverConfig;
use crate::consts::DEFAULT_NAMESPACE;
use crate::envelope::LiftoverEnvelope;
use crate::error::{RegistryError, Result};
use crate::registry::{Endpoint, GlRegistry, GlSide};
use crate::utils::{parse_gl_uri, parse_target_namespace};

/// Where the source GL String comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlInput {
    GlString(String),
    /// URI of a GL String already stored in the registry
    Uri(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftoverRequest {
    pub input: GlInput,
    /// Required for GL String input. URI input always takes the version from the URI.
    pub source_version: Option<String>,
    pub target_version: Option<String>,
    pub namespace: Option<String>,
}

impl LiftoverRequest {
    pub fn from_glstring(glstring: &str, source_version: &str) -> Self {
        LiftoverRequest {
            input: GlInput::GlString(glstring.to_string()),
            source_version: Some(source_version.to_string()),
            target_version: None,
            namespace: None,
        }
    }

    pub fn from_uri(uri: &str) -> Self {
        LiftoverRequest {
            input: GlInput::Uri(uri.to_string()),
            source_version: None,
            target_version: None,
            namespace: None,
        }
    }

    ///
    /// Create a request from a source URI and the GL Service namespace to lift it into,
    /// e.g. `http://gl.nmdp.org/imgt-hla/3.25.0/`. The target version is the namespace's last
    /// path segment.
    ///
    pub fn from_target_namespace(source_uri: &str, target_namespace: &str) -> Result<Self> {
        let target = parse_target_namespace(target_namespace)?;
        Ok(LiftoverRequest::from_uri(source_uri).with_target_version(&target))
    }

    ///
    /// Read a request from a JSON file in the GL Service liftover format:
    ///
    /// ```json
    /// {
    ///     "sourceUri": "http://gl.nmdp.org/imgt-hla/3.20.0/genotype/7",
    ///     "targetNamespace": "http://gl.nmdp.org/imgt-hla/3.25.0/"
    /// }
    /// ```
    ///
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = read_to_string(path)?;
        let input: NamespacedInput = serde_json::from_str(&json)?;
        LiftoverRequest::from_target_namespace(&input.source_uri, &input.target_namespace)
    }

    pub fn with_source_version(mut self, version: &str) -> Self {
        self.source_version = Some(version.to_string());
        self
    }

    pub fn with_target_version(mut self, version: &str) -> Self {
        self.target_version = Some(version.to_string());
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct NamespacedInput {
    source_uri: String,
    target_namespace: String,
}

/// Lifts GL Strings with one allele history and records them in a GL registry.
pub struct LiftoverService<R: GlRegistry> {
    registry: R,
    table: AlleleTable,
    namespace: String,
    default_target: String,
}

impl LiftoverService<RegistryClient> {
    ///
    /// Create a service from a TOML config file. The allele history path in the config is
    /// resolved relative to the config file's directory.
    ///
    pub fn from_config<P: AsRef<Path>>(cfg_path: P) -> Result<Self> {
        let config = LiftoverConfig::try_from(cfg_path.as_ref())?;

        let config_dir = cfg_path.as_ref().parent().unwrap_or(Path::new(""));
        let table = AlleleTable::from_path(config_dir.join(&config.table))?;

        let mut builder = RegistryClient::builder();
        if let Some(url) = config.registry {
            builder = builder.with_registry_url(url);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.with_timeout(Duration::from_secs(secs));
        }

        let mut service = LiftoverService::new(builder.finish(), table);
        if let Some(namespace) = config.namespace {
            service = service.with_namespace(&namespace);
        }
        if let Some(target) = config.target_version {
            service = service.with_default_target(&target);
        }

        Ok(service)
    }
}

impl<R: GlRegistry> LiftoverService<R> {
    pub fn new(registry: R, table: AlleleTable) -> Self {
        LiftoverService {
            registry,
            table,
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_target: DEFAULT_TARGET_VERSION.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn with_default_target(mut self, version: &str) -> Self {
        self.default_target = version.to_string();
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn table(&self) -> &AlleleTable {
        &self.table
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }

    ///
    /// Lift the requested GL String and register the source and target GL Strings.
    ///
    /// Mapping errors and a GL String whose alleles were all dropped abort before anything is
    /// posted to the registry. For URI input the source version and resource type come from
    /// the URI; otherwise the resource type is classified from the source GL String.
    ///
    pub fn run(&self, request: &LiftoverRequest) -> Result<LiftoverEnvelope> {
        let mut namespace = request.namespace.clone();

        let (glstring, source_version, uri_resource) = match &request.input {
            GlInput::GlString(glstring) => {
                let source = request
                    .source_version
                    .clone()
                    .ok_or(RegistryError::MissingSourceVersion)?;
                (glstring.clone(), source, None)
            }
            GlInput::Uri(uri) => {
                let parsed = parse_gl_uri(uri)?;
                if let Some(ignored) = &request.source_version {
                    warn!(
                        "source version {} ignored, using {} from {}",
                        ignored, parsed.version, uri
                    );
                }
                let glstring = self.registry.retrieve(uri)?;
                namespace = namespace.or(Some(parsed.namespace));
                (glstring, parsed.version, Some(parsed.resource))
            }
        };

        let namespace = namespace.unwrap_or_else(|| self.namespace.clone());
        let target_version = request
            .target_version
            .as_deref()
            .unwrap_or(&self.default_target);

        let lifted = Liftover::new(&self.table, &source_version, target_version)?.lift(&glstring)?;
        info!("target GL = {}", lifted.target_gl);
        let resource = uri_resource.unwrap_or(lifted.resource);

        let source = self
            .registry
            .register(
                &Endpoint::new(&namespace, &source_version, resource),
                &lifted.source_gl,
            )
            .map_err(|err| err.on_side(GlSide::Source))?;

        let target = self
            .registry
            .register(
                &Endpoint::new(&namespace, target_version, resource),
                &lifted.target_gl,
            )
            .map_err(|err| err.on_side(GlSide::Target))?;

        Ok(LiftoverEnvelope::new(source, target))
    }
}
