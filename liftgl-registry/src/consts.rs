//! Constants for registry configuration.

/// Environment variable name for setting the GL registry base URL.
///
/// When set, this overrides the default registry (`http://gl.nmdp.org`).
///
/// # Example
///
/// ```bash
/// export LIFTGL_REGISTRY=http://localhost:8080
/// ```
pub const REGISTRY_URL_ENV: &str = "LIFTGL_REGISTRY";

/// Default GL registry base URL.
pub const DEFAULT_REGISTRY_URL: &str = "http://gl.nmdp.org";

/// Default registry namespace for IMGT/HLA GL Strings.
pub const DEFAULT_NAMESPACE: &str = "imgt-hla";

/// Content type of GL String request bodies.
pub const GL_CONTENT_TYPE: &str = "text/plain";

/// Status returned by the registry when a GL String was stored.
pub const STATUS_CREATED: u16 = 201;

/// Status returned by the registry when a GL String was retrieved.
pub const STATUS_OK: u16 = 200;
