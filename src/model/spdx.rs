//! SPDX v2.3 output object model.
//!
//! Write-only during conversion: the builder appends packages and
//! relationships, then the document is serialized as-is. Field names follow
//! the SPDX JSON spelling so downstream SPDX consumers can ingest the output
//! directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SPDX version emitted by this converter.
pub const SPDX_VERSION: &str = "SPDX-2.3";

/// Data license required by the SPDX specification for the document itself.
pub const DATA_LICENSE: &str = "CC0-1.0";

/// SPDX sentinel meaning "no claim is made about this field".
pub const NOASSERTION: &str = "NOASSERTION";

/// Identifier of the document element.
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// Derive an SPDX element identifier from a BOM reference.
///
/// The mapping is a plain prefix so it stays stable and reversible for any
/// reference string.
pub fn spdx_ref(bom_ref: &str) -> String {
    format!("SPDXRef-{bom_ref}")
}

/// An SPDX document under construction or ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    pub spdx_version: String,
    pub data_license: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl SpdxDocument {
    /// Create an empty document with the fixed version, license, and
    /// document identifier fields populated.
    pub fn new() -> Self {
        Self {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            name: String::new(),
            document_namespace: String::new(),
            creation_info: None,
            packages: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

impl Default for SpdxDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Document creation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creator>,
}

/// A document creator entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub creator: String,
    pub creator_type: String,
}

impl Creator {
    /// An `Organization` creator.
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            creator: name.into(),
            creator_type: "Organization".to_string(),
        }
    }
}

/// One SPDX package, produced from a package-like CycloneDX component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub download_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<PackageSupplier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
}

/// Supplier of a package.
///
/// CycloneDX does not say whether a supplier is an organization or a person,
/// so the type tag is always the `NOASSERTION` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSupplier {
    pub supplier: String,
    pub supplier_type: String,
}

impl PackageSupplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            supplier: name.into(),
            supplier_type: NOASSERTION.to_string(),
        }
    }
}

/// External identifier attached to a package (purl or CPE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

impl ExternalRef {
    /// A `SECURITY`-category package URL reference.
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            reference_category: "SECURITY".to_string(),
            reference_type: "purl".to_string(),
            reference_locator: locator.into(),
        }
    }

    /// A `SECURITY`-category CPE 2.2 reference.
    pub fn cpe(locator: impl Into<String>) -> Self {
        Self {
            reference_category: "SECURITY".to_string(),
            reference_type: "cpe22Type".to_string(),
            reference_locator: locator.into(),
        }
    }
}

/// Directed relationship between two SPDX elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: String,
    pub related_spdx_element: String,
    pub relationship_type: RelationshipType,
}

impl Relationship {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationshipType) -> Self {
        Self {
            spdx_element_id: source.into(),
            related_spdx_element: target.into(),
            relationship_type: kind,
        }
    }
}

/// Relationship kinds the converter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Source element structurally contains the target element.
    Contains,
    /// Source element depends on the target element.
    DependsOn,
}
