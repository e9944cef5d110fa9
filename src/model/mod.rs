//! SBOM object models.
//!
//! This module defines the two schema-bound object graphs the converter
//! works with: the decoded `CycloneDX` input ([`cyclonedx::Bom`]) and the
//! SPDX v2.3 output ([`spdx::SpdxDocument`]). Neither side is normalized;
//! the conversion engine in [`crate::convert`] maps directly between them.

pub mod cyclonedx;
pub mod spdx;

pub use cyclonedx::{Bom, Component, Dependency, ExternalReference, Metadata, Supplier};
pub use spdx::{
    CreationInfo, Creator, ExternalRef, Package, PackageSupplier, Relationship, RelationshipType,
    SpdxDocument, DOCUMENT_SPDX_ID, NOASSERTION,
};
