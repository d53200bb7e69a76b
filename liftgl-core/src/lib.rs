//! # liftgl-core
//!
//! GL String algebra for lifting HLA genotypes from one IMGT/HLA release to another.
//!
//! ## Purpose
//!
//! A GL String names HLA alleles joined by five delimiters (`^`, `|`, `+`, `~`, `/`).
//! Allele names change between IMGT/HLA releases, but every allele keeps a stable accession
//! (`HLA00053`). Lifting a GL String therefore goes through the accession:
//!
//! 1. every source allele is mapped to its accession using the allele history,
//! 2. every accession is rendered as its target release name, or dropped,
//! 3. the delimiters left around dropped alleles are cleaned up.
//!
//! Alleles are never expanded: an allele absent from the target release is dropped, not
//! replaced by related alleles.
//!
//! ## Main Components
//!
//! - **`AlleleTable`**: the allele history, one column per release
//! - **`Liftover`**: the pipeline for a pair of releases
//! - **`clean`**: delimiter repair after alleles were dropped
//! - **`classify`**: GL resource type from the delimiters present
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use liftgl_core::{AlleleTable, liftover};
//!
//! let history = "HLA_ID\t3250\t3200\nHLA00053\tA*24:03:01:01\tA*24:03:01\n";
//! let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();
//!
//! let lifted = liftover("HLA-A*24:03:01", "3.20.0", "3.25.0", &table).unwrap();
//! assert_eq!(lifted, "HLA-A*24:03:01:01");
//! ```
//!
pub mod consts;
pub mod delimiter;
pub mod errors;
pub mod liftover;
pub mod mapper;
pub mod normalize;
pub mod render;
pub mod resource;
pub mod table;
pub mod tokenizer;
pub mod utils;
pub mod version;

// re-export things
pub use delimiter::*;
pub use errors::*;
pub use liftover::*;
pub use mapper::to_ids;
pub use normalize::clean;
pub use render::to_target;
pub use resource::*;
pub use table::*;
pub use tokenizer::*;
pub use version::*;
