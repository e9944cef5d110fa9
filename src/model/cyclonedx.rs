//! CycloneDX SBOM object model.
//!
//! Serde bindings for the CycloneDX 1.6 JSON wire format, limited to the
//! parts the converter consumes. Unknown fields are ignored on decode, so
//! `show` output is a normalized rendering rather than a byte-level echo.

use serde::{Deserialize, Serialize};

/// External reference type marking a distribution URL.
///
/// A component's last `distribution` reference becomes the SPDX package
/// download location.
pub const EXTERNAL_REF_DISTRIBUTION: &str = "distribution";

/// A decoded CycloneDX BOM document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bom_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
}

impl Bom {
    /// Total number of components in the document, counting the metadata
    /// component and all nested children.
    pub fn component_count(&self) -> usize {
        let meta = self
            .metadata
            .as_ref()
            .and_then(|m| m.component.as_ref())
            .map_or(0, |c| c.subtree_size());
        let top: usize = self
            .components
            .iter()
            .flatten()
            .map(Component::subtree_size)
            .sum();
        meta + top
    }
}

/// Document-level metadata block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
}

/// A CycloneDX component, possibly with nested children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Type label (library, application, file, operating-system, ...)
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "mime-type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_references: Option<Vec<ExternalReference>>,
    /// Nested child components (assemblies)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

impl Component {
    /// The document-unique reference string for this component.
    ///
    /// CycloneDX allows `bom-ref` to be absent; such components share the
    /// empty-string key, so a second ref-less component is reported as a
    /// duplicate reference.
    pub fn reference(&self) -> &str {
        self.bom_ref.as_deref().unwrap_or_default()
    }

    /// Number of components in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .components
            .iter()
            .flatten()
            .map(Component::subtree_size)
            .sum::<usize>()
    }
}

/// Organizational entity supplying a component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<String>>,
}

/// An external reference attached to a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReference {
    #[serde(rename = "type")]
    pub ref_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One entry of the flat dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(rename = "ref")]
    pub dependency_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}
