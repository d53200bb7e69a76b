//! # liftgl-registry
//!
//! Runs GL String liftovers against a GL Service registry.
//!
//! The registry stores GL Strings under `<namespace>/<version>/<resource-type>` and answers
//! with the URI it stored them under. A liftover request registers the source GL String and
//! the lifted target GL String, and reports both URIs in a [`LiftoverEnvelope`].
//!
//! ## Main Components
//!
//! - **`GlRegistry`**: the registry seam, implemented over HTTP by `RegistryClient`
//! - **`LiftoverService`**: lift, then register source and target
//! - **`LiftoverConfig`**: TOML configuration of a service
//!
//! ## Example
//!
//! ```rust,no_run
//! use liftgl_registry::{LiftoverRequest, LiftoverService};
//!
//! let service = LiftoverService::from_config("liftgl.toml").unwrap();
//! let request = LiftoverRequest::from_glstring("HLA-A*24:03:01", "3.20.0");
//!
//! let envelope = service.run(&request).unwrap();
//! println!("{}", envelope.to_json().unwrap());
//! ```
//!
pub mod client;
pub mod config;
pub mod consts;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod service;
pub mod utils;

// re-export things
pub use client::{RegistryClient, RegistryClientBuilder};
pub use config::*;
pub use envelope::LiftoverEnvelope;
pub use error::*;
pub use registry::*;
pub use service::*;
pub use utils::{GlUri, parse_gl_uri, parse_target_namespace};
