//! SPDX conformance checking.
//!
//! Validates a converted document against the baseline SPDX v2.3 document
//! and package requirements. Run optionally after conversion (`convert
//! --validate`); findings never affect the conversion result.

use crate::model::spdx::{SpdxDocument, NOASSERTION};
use packageurl::PackageUrl;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Severity of a conformance violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationSeverity {
    /// Must be fixed for a conforming document
    Error,
    /// Should be fixed, but not strictly required
    Warning,
}

impl ViolationSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }
}

/// A conformance violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub severity: ViolationSeverity,
    /// Human-readable message
    pub message: String,
    /// Element the violation is about (if applicable)
    pub element: Option<String>,
}

/// Result of checking one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceResult {
    pub is_conformant: bool,
    pub violations: Vec<Violation>,
    pub error_count: usize,
    pub warning_count: usize,
    pub packages_checked: usize,
}

impl ConformanceResult {
    /// Render a human-readable summary for the CLI.
    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Checked {} packages: {} errors, {} warnings",
            self.packages_checked, self.error_count, self.warning_count
        );
        for violation in &self.violations {
            match &violation.element {
                Some(element) => {
                    let _ = writeln!(
                        out,
                        "  [{}] {}: {}",
                        violation.severity.name(),
                        element,
                        violation.message
                    );
                }
                None => {
                    let _ = writeln!(out, "  [{}] {}", violation.severity.name(), violation.message);
                }
            }
        }
        if self.is_conformant {
            let _ = writeln!(out, "Document conforms to SPDX v2.3 baseline checks.");
        }
        out
    }
}

/// Checks a converted SPDX document against baseline requirements.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConformanceChecker;

impl ConformanceChecker {
    pub fn new() -> Self {
        Self
    }

    /// Run all checks over a document.
    pub fn check(&self, document: &SpdxDocument) -> ConformanceResult {
        let mut violations = Vec::new();

        self.check_document(document, &mut violations);
        for package in &document.packages {
            self.check_package(package, &mut violations);
        }
        self.check_relationships(document, &mut violations);

        let error_count = violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .count();
        let warning_count = violations.len() - error_count;

        ConformanceResult {
            is_conformant: error_count == 0,
            violations,
            error_count,
            warning_count,
            packages_checked: document.packages.len(),
        }
    }

    fn check_document(&self, document: &SpdxDocument, violations: &mut Vec<Violation>) {
        if document.name.is_empty() {
            violations.push(Violation {
                severity: ViolationSeverity::Error,
                message: "document has no name".to_string(),
                element: None,
            });
        }
        if document.document_namespace.is_empty() {
            violations.push(Violation {
                severity: ViolationSeverity::Error,
                message: "document has no namespace URI".to_string(),
                element: None,
            });
        }
        if document.creation_info.is_none() {
            violations.push(Violation {
                severity: ViolationSeverity::Warning,
                message: "document has no creation info".to_string(),
                element: None,
            });
        }
    }

    fn check_package(
        &self,
        package: &crate::model::spdx::Package,
        violations: &mut Vec<Violation>,
    ) {
        if package.name.is_empty() {
            violations.push(Violation {
                severity: ViolationSeverity::Error,
                message: "package has no name".to_string(),
                element: Some(package.spdx_id.clone()),
            });
        }
        if package.version_info.as_deref().unwrap_or_default().is_empty() {
            violations.push(Violation {
                severity: ViolationSeverity::Warning,
                message: "package has no version".to_string(),
                element: Some(package.spdx_id.clone()),
            });
        }
        if package.external_refs.is_empty() {
            violations.push(Violation {
                severity: ViolationSeverity::Warning,
                message: "package has no external identifier (purl or CPE)".to_string(),
                element: Some(package.spdx_id.clone()),
            });
        }
        for ext_ref in &package.external_refs {
            if ext_ref.reference_type == "purl"
                && PackageUrl::from_str(&ext_ref.reference_locator).is_err()
            {
                violations.push(Violation {
                    severity: ViolationSeverity::Error,
                    message: format!("malformed purl {:?}", ext_ref.reference_locator),
                    element: Some(package.spdx_id.clone()),
                });
            }
        }
        if package.download_location.is_empty() {
            // The converter always fills NOASSERTION; empty means a
            // hand-edited document.
            violations.push(Violation {
                severity: ViolationSeverity::Error,
                message: "package has no download location".to_string(),
                element: Some(package.spdx_id.clone()),
            });
        } else if package.download_location == NOASSERTION {
            violations.push(Violation {
                severity: ViolationSeverity::Warning,
                message: "package download location is NOASSERTION".to_string(),
                element: Some(package.spdx_id.clone()),
            });
        }
    }

    fn check_relationships(&self, document: &SpdxDocument, violations: &mut Vec<Violation>) {
        let known: std::collections::HashSet<&str> = document
            .packages
            .iter()
            .map(|p| p.spdx_id.as_str())
            .chain(std::iter::once(document.spdx_id.as_str()))
            .collect();

        for relationship in &document.relationships {
            for id in [
                relationship.spdx_element_id.as_str(),
                relationship.related_spdx_element.as_str(),
            ] {
                if !known.contains(id) {
                    // Non-package components are mapped but carry no
                    // package entity, so this stays a warning.
                    violations.push(Violation {
                        severity: ViolationSeverity::Warning,
                        message: format!("relationship references element {id:?} with no package entity"),
                        element: Some(id.to_string()),
                    });
                }
            }
        }
    }
}
