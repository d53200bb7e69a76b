//! HTTP client for GL registry services.
//!
//! This module provides [`RegistryClient`], the blocking HTTP implementation of
//! [`GlRegistry`], and its builder.

use std::time::Duration;

use log::info;
use ureq::Agent;

use super::consts::{GL_CONTENT_TYPE, STATUS_CREATED, STATUS_OK};
use super::error::{RegistryError, Result};
use super::registry::{Endpoint, GlRegistry, RegisteredGl};
use super::utils::get_default_registry_url;

/// Builder for constructing a [`RegistryClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use liftgl_registry::client::RegistryClient;
///
/// let client = RegistryClient::builder()
///     .with_registry_url("http://localhost:8080".to_string())
///     .with_timeout(Duration::from_secs(30))
///     .finish();
/// ```
#[derive(Default)]
pub struct RegistryClientBuilder {
    registry_url: Option<String>,
    timeout: Option<Duration>,
}

impl RegistryClientBuilder {
    /// Creates a new, empty RegistryClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registry base URL. Defaults to `$LIFTGL_REGISTRY`, then `http://gl.nmdp.org`.
    pub fn with_registry_url(mut self, url: String) -> Self {
        self.registry_url = Some(url);
        self
    }

    /// Sets a global timeout for every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a RegistryClient.
    pub fn finish(self) -> RegistryClient {
        let registry_url = self
            .registry_url
            .unwrap_or_else(get_default_registry_url)
            .trim_end_matches('/')
            .to_string();

        // non-2xx responses carry the registry's error text, keep them as responses
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(self.timeout)
            .build();

        RegistryClient {
            registry_url,
            agent: Agent::new_with_config(config),
        }
    }
}

/// Client for storing and fetching GL Strings in a GL registry over HTTP.
pub struct RegistryClient {
    /// Registry base URL, without a trailing slash
    pub registry_url: String,
    agent: Agent,
}

impl RegistryClient {
    /// Creates a new builder for constructing a [`RegistryClient`].
    pub fn builder() -> RegistryClientBuilder {
        RegistryClientBuilder::default()
    }

    /// Full URL GL Strings for `endpoint` are posted to.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.registry_url, endpoint.path())
    }
}

impl GlRegistry for RegistryClient {
    fn register(&self, endpoint: &Endpoint, glstring: &str) -> Result<RegisteredGl> {
        let url = self.endpoint_url(endpoint);
        info!("Registering GL String at {}", url);

        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", GL_CONTENT_TYPE)
            .send(glstring)
            .map_err(|err| RegistryError::Transport {
                url: url.clone(),
                reason: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| RegistryError::Transport {
                url: url.clone(),
                reason: err.to_string(),
            })?;

        if status != STATUS_CREATED {
            return Err(RegistryError::Status { status, body });
        }

        let location = location.ok_or(RegistryError::MissingLocation { url })?;
        info!("Registered GL String as {}", location);

        Ok(RegisteredGl {
            glstring: body,
            location,
        })
    }

    fn retrieve(&self, uri: &str) -> Result<String> {
        info!("Fetching GL String from {}", uri);

        let mut response = self
            .agent
            .get(uri)
            .call()
            .map_err(|err| RegistryError::Transport {
                url: uri.to_string(),
                reason: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| RegistryError::Transport {
                url: uri.to_string(),
                reason: err.to_string(),
            })?;

        if status != STATUS_OK {
            return Err(RegistryError::Status { status, body });
        }

        Ok(body.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use liftgl_core::ResourceType;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8080", "http://localhost:8080/imgt-hla/3.25.0/genotype")]
    #[case("http://localhost:8080/", "http://localhost:8080/imgt-hla/3.25.0/genotype")]
    fn test_endpoint_url(#[case] base: &str, #[case] expected: &str) {
        let client = RegistryClient::builder()
            .with_registry_url(base.to_string())
            .finish();
        let endpoint = Endpoint::new("imgt-hla", "3.25.0", ResourceType::Genotype);

        assert_eq!(client.endpoint_url(&endpoint), expected);
    }

    #[rstest]
    fn test_unreachable_registry_is_a_transport_error() {
        let client = RegistryClient::builder()
            .with_registry_url("http://127.0.0.1:1".to_string())
            .with_timeout(Duration::from_secs(5))
            .finish();
        let endpoint = Endpoint::new("imgt-hla", "3.25.0", ResourceType::Allele);

        let result = client.register(&endpoint, "HLA-A*01:01:01:01");
        assert!(matches!(result, Err(RegistryError::Transport { .. })));
    }
}
