//! **Convert CycloneDX SBOMs into SPDX v2.3 documents.**
//!
//! `sbom-convert` takes a decoded [CycloneDX](https://cyclonedx.org/) bill of
//! materials and produces an equivalent SPDX document, preserving component
//! identity, containment structure, and dependency relationships. It powers
//! a small CLI (`show`, `convert`) and can be embedded as a library by
//! supply-chain tools that emit CycloneDX but need SPDX for downstream
//! consumers.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: serde object models for both schemas: the decoded
//!   CycloneDX input ([`model::cyclonedx::Bom`]) and the SPDX output
//!   ([`model::spdx::SpdxDocument`]).
//! - **[`convert`]**: the conversion engine. A single [`DocumentBuilder`]
//!   owns the reference map, type tally, and output document for one run;
//!   [`convert::convert_document`] orchestrates the component walk and the
//!   dependency pass. Diagnostics flow through an injected [`EventSink`].
//! - **[`conformance`]**: baseline SPDX checks over a converted document,
//!   used by `convert --validate`.
//! - **[`pipeline`]**: file and JSON plumbing shared by the CLI handlers.
//!
//! ## Getting Started: Converting a BOM
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_convert::{convert::convert, pipeline::load_cyclonedx};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bom = load_cyclonedx(Path::new("path/to/sbom.cdx.json"))?;
//!     let document = convert(&bom)?;
//!
//!     println!(
//!         "Converted {} packages, {} relationships.",
//!         document.packages.len(),
//!         document.relationships.len()
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Asserting on Diagnostics
//!
//! The engine never logs directly; it emits structured events through a
//! sink, so tests can assert on diagnostics instead of captured text:
//!
//! ```
//! use sbom_convert::convert::{convert_document, CollectingSink};
//! use sbom_convert::model::cyclonedx::Bom;
//!
//! let mut sink = CollectingSink::new();
//! let document = convert_document(&Bom::default(), &mut sink).unwrap();
//! assert!(document.packages.is_empty());
//! assert!(sink.warnings.is_empty());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational here
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod conformance;
pub mod convert;
pub mod error;
pub mod model;
pub mod pipeline;

// Re-export main types for convenience
pub use conformance::{ConformanceChecker, ConformanceResult, Violation, ViolationSeverity};
pub use convert::{
    convert_document, derive_namespace, CollectingSink, ConversionEvent, DocumentBuilder,
    EventSink, TracingSink,
};
pub use error::{ConvertError, Result};
pub use model::{Bom, Component, Dependency, SpdxDocument};
pub use pipeline::SbomFormat;
