//! CycloneDX → SPDX conversion engine.
//!
//! The engine reconciles CycloneDX's two graph representations, nested
//! component trees and the flat dependency list, into one SPDX document:
//!
//! - the component pass ([`DocumentBuilder::add_component`]) walks the tree,
//!   assigns every component a stable `SPDXRef-` identifier, emits packages
//!   for package-like components, and links nesting edges with CONTAINS;
//! - the dependency pass ([`DocumentBuilder::add_dependency`]) resolves the
//!   flat list against the completed reference map and emits DEPENDS_ON
//!   edges.
//!
//! [`convert_document`] orchestrates both around document-level metadata.
//! The whole run is synchronous and owns all of its state; converting the
//! same input twice yields structurally equivalent output (the namespace may
//! differ only when the input has no serial number).

mod builder;
mod component;
mod dependency;
mod events;

pub use builder::DocumentBuilder;
pub use component::is_spdx_package;
pub use events::{CollectingSink, ConversionEvent, EventSink, TracingSink};

use crate::error::Result;
use crate::model::cyclonedx::Bom;
use crate::model::spdx::{CreationInfo, Creator, SpdxDocument};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Convert a decoded CycloneDX BOM into an SPDX document, reporting
/// diagnostics through `tracing`.
pub fn convert(bom: &Bom) -> Result<SpdxDocument> {
    convert_document(bom, &mut TracingSink)
}

/// Convert a decoded CycloneDX BOM into an SPDX document.
///
/// Seeds document-level metadata from the BOM metadata block, maps the
/// metadata component first, then every top-level component, then resolves
/// the flat dependency list. Returns the first error any pass produces.
pub fn convert_document(bom: &Bom, events: &mut dyn EventSink) -> Result<SpdxDocument> {
    let mut builder = DocumentBuilder::new(events);

    if let Some(metadata) = &bom.metadata {
        let created = metadata
            .timestamp
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map_or_else(Utc::now, |dt| dt.with_timezone(&Utc));
        let mut creators = Vec::new();

        if let Some(component) = &metadata.component {
            builder.document_mut().name = component.name.clone();
            if let Some(supplier) = &component.supplier {
                creators.push(Creator::organization(supplier.name.clone()));
            }
        }
        builder.document_mut().creation_info = Some(CreationInfo { created, creators });

        if let Some(component) = &metadata.component {
            builder.add_component(component)?;
        }
    }

    if builder.document().document_namespace.is_empty() {
        let namespace =
            derive_namespace(&builder.document().name, bom.serial_number.as_deref());
        builder.document_mut().document_namespace = namespace;
    }

    for component in bom.components.iter().flatten() {
        builder.add_component(component)?;
    }

    for dependency in bom.dependencies.iter().flatten() {
        builder.add_dependency(dependency)?;
    }

    Ok(builder.finish())
}

/// Derive the document namespace URI from the document name and serial
/// number.
///
/// A `urn:uuid:` prefix on the serial number is stripped; any other serial
/// is used verbatim. Without a serial number a fresh v4 UUID is generated,
/// so two conversions of such an input legitimately differ here.
pub fn derive_namespace(document_name: &str, serial_number: Option<&str>) -> String {
    let doc_id = match serial_number {
        None | Some("") => Uuid::new_v4().to_string(),
        Some(serial) => serial
            .strip_prefix("urn:uuid:")
            .unwrap_or(serial)
            .to_string(),
    };
    format!("http://spdx.org/spdxdocs/{document_name}-{doc_id}")
}
