//! Component mapping pass.
//!
//! Walks a CycloneDX component and its nested children, registers every
//! component in the reference map, and emits one SPDX package per
//! package-like component plus a CONTAINS relationship per nesting edge.

use crate::convert::builder::DocumentBuilder;
use crate::convert::events::ConversionEvent;
use crate::error::{ConvertError, Result};
use crate::model::cyclonedx::{Component, EXTERNAL_REF_DISTRIBUTION};
use crate::model::spdx::{
    spdx_ref, ExternalRef, Package, PackageSupplier, Relationship, RelationshipType, NOASSERTION,
};

/// Whether a CycloneDX component maps to an SPDX package.
///
/// More cdx component types may become package-like later; only the
/// classification changes, not the walk.
pub fn is_spdx_package(component: &Component) -> bool {
    matches!(component.component_type.as_str(), "library")
}

impl<'bom> DocumentBuilder<'bom, '_> {
    /// Map one component and, recursively, its nested children.
    ///
    /// A duplicate BOM reference anywhere in the subtree aborts the walk
    /// with [`ConvertError::DuplicateReference`]. Each successfully mapped
    /// child is linked to its parent with a CONTAINS relationship.
    pub fn add_component(&mut self, component: &'bom Component) -> Result<()> {
        let reference = component.reference();
        if self.reference_map.contains_key(reference) {
            return Err(ConvertError::duplicate_reference(reference));
        }

        self.reference_map.insert(reference.to_string(), component);
        *self
            .type_tally
            .entry(component.component_type.clone())
            .or_insert(0) += 1;

        if is_spdx_package(component) {
            let package = self.build_package(component);
            self.document.packages.push(package);
        }

        for child in component.components.iter().flatten() {
            self.add_component(child)?;
            self.document.relationships.push(Relationship::new(
                spdx_ref(component.reference()),
                spdx_ref(child.reference()),
                RelationshipType::Contains,
            ));
        }

        Ok(())
    }

    /// Extract package-level metadata from a package-like component.
    fn build_package(&mut self, component: &Component) -> Package {
        let mut external_refs = Vec::new();
        if let Some(purl) = component.purl.as_deref().filter(|p| !p.is_empty()) {
            external_refs.push(ExternalRef::purl(purl));
        }
        if let Some(cpe) = component.cpe.as_deref().filter(|c| !c.is_empty()) {
            external_refs.push(ExternalRef::cpe(cpe));
        }
        if external_refs.is_empty() {
            self.events.record_warning(ConversionEvent::MissingIdentifier {
                name: component.name.clone(),
                component_type: component.component_type.clone(),
                mime_type: component.mime_type.clone(),
            });
        }

        let supplier = component
            .supplier
            .as_ref()
            .map(|s| PackageSupplier::new(s.name.clone()));

        // Last distribution reference wins; no precedence beyond iteration
        // order.
        let mut download_location: Option<&str> = None;
        for ext_ref in component.external_references.iter().flatten() {
            if ext_ref.ref_type == EXTERNAL_REF_DISTRIBUTION {
                download_location = Some(ext_ref.url.as_str());
            }
        }
        let download_location = download_location
            .filter(|url| !url.is_empty())
            .unwrap_or(NOASSERTION)
            .to_string();

        Package {
            spdx_id: spdx_ref(component.reference()),
            name: component.name.clone(),
            version_info: component.version.clone(),
            description: component.description.clone(),
            download_location,
            supplier,
            external_refs,
        }
    }
}
