//! Integration tests for sbom-convert
//!
//! These tests verify end-to-end functionality: decoding CycloneDX JSON
//! fixtures, running the conversion engine, and inspecting the resulting
//! SPDX document.

use sbom_convert::{
    convert::{convert_document, CollectingSink, ConversionEvent},
    model::spdx::RelationshipType,
    pipeline::{load_cyclonedx, spdx_to_pretty_json},
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn convert_fixture(name: &str) -> (sbom_convert::SpdxDocument, CollectingSink) {
    let bom = load_cyclonedx(&fixture_path(name)).expect("fixture decodes");
    let mut sink = CollectingSink::new();
    let document = convert_document(&bom, &mut sink).expect("fixture converts");
    (document, sink)
}

// ============================================================================
// Conversion Tests
// ============================================================================

mod minimal_fixture {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let (doc, _) = convert_fixture("cyclonedx/minimal.cdx.json");

        assert_eq!(doc.spdx_version, "SPDX-2.3");
        assert_eq!(doc.data_license, "CC0-1.0");
        assert_eq!(doc.spdx_id, "SPDXRef-DOCUMENT");
        assert_eq!(doc.name, "test-app");
        assert_eq!(
            doc.document_namespace,
            "http://spdx.org/spdxdocs/test-app-3e671687-395b-41f5-a30f-a58921a69b79"
        );

        let creation = doc.creation_info.as_ref().expect("creation info");
        assert_eq!(creation.created.to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert_eq!(creation.creators.len(), 1);
        assert_eq!(creation.creators[0].creator, "Example Org");
        assert_eq!(creation.creators[0].creator_type, "Organization");
    }

    #[test]
    fn test_only_libraries_become_packages() {
        let (doc, _) = convert_fixture("cyclonedx/minimal.cdx.json");

        // The application metadata component is mapped but emits no package.
        assert_eq!(doc.packages.len(), 2);
        assert_eq!(doc.packages[0].name, "lodash");
        assert_eq!(doc.packages[1].name, "express");
    }

    #[test]
    fn test_package_fields() {
        let (doc, _) = convert_fixture("cyclonedx/minimal.cdx.json");

        let lodash = &doc.packages[0];
        assert_eq!(lodash.spdx_id, "SPDXRef-pkg:npm/lodash@4.17.21");
        assert_eq!(lodash.version_info.as_deref(), Some("4.17.21"));
        assert_eq!(lodash.description.as_deref(), Some("Lodash modular utilities."));
        assert_eq!(
            lodash.download_location,
            "https://registry.npmjs.org/lodash/-/lodash-4.17.21.tgz"
        );
        assert_eq!(lodash.external_refs.len(), 1);
        assert_eq!(lodash.external_refs[0].reference_type, "purl");

        let express = &doc.packages[1];
        assert_eq!(express.download_location, "NOASSERTION");
        assert_eq!(express.external_refs.len(), 2);
        assert_eq!(express.external_refs[0].reference_type, "purl");
        assert_eq!(express.external_refs[1].reference_type, "cpe22Type");
        let supplier = express.supplier.as_ref().expect("supplier");
        assert_eq!(supplier.supplier, "OpenJS Foundation");
        assert_eq!(supplier.supplier_type, "NOASSERTION");
    }

    #[test]
    fn test_dependency_relationships_preserve_order() {
        let (doc, _) = convert_fixture("cyclonedx/minimal.cdx.json");

        let depends: Vec<_> = doc
            .relationships
            .iter()
            .filter(|r| r.relationship_type == RelationshipType::DependsOn)
            .collect();
        assert_eq!(depends.len(), 2);
        assert_eq!(depends[0].spdx_element_id, "SPDXRef-pkg:npm/test-app@1.0.0");
        assert_eq!(
            depends[0].related_spdx_element,
            "SPDXRef-pkg:npm/lodash@4.17.21"
        );
        assert_eq!(
            depends[1].related_spdx_element,
            "SPDXRef-pkg:npm/express@4.18.2"
        );
    }

    #[test]
    fn test_walk_statistics_events() {
        let (_, sink) = convert_fixture("cyclonedx/minimal.cdx.json");

        assert!(sink
            .infos
            .contains(&ConversionEvent::ComponentsMapped { count: 3 }));
        assert!(sink.warnings.is_empty());
    }

    #[test]
    fn test_conversion_is_deterministic() {
        // The fixture carries a serial number and timestamp, so two runs
        // must serialize byte-identically.
        let (first, _) = convert_fixture("cyclonedx/minimal.cdx.json");
        let (second, _) = convert_fixture("cyclonedx/minimal.cdx.json");

        let first_json = spdx_to_pretty_json(&first).expect("encodes");
        let second_json = spdx_to_pretty_json(&second).expect("encodes");
        assert_eq!(first_json, second_json);
    }
}

mod nested_fixture {
    use super::*;

    #[test]
    fn test_containment_matches_nesting_edges() {
        let (doc, _) = convert_fixture("cyclonedx/nested.cdx.json");

        let contains: Vec<_> = doc
            .relationships
            .iter()
            .filter(|r| r.relationship_type == RelationshipType::Contains)
            .collect();
        // base-os→busybox, busybox→musl, base-os→config.ini
        assert_eq!(contains.len(), 3);

        let edges: Vec<(&str, &str)> = contains
            .iter()
            .map(|r| (r.spdx_element_id.as_str(), r.related_spdx_element.as_str()))
            .collect();
        assert!(edges.contains(&("SPDXRef-base-os", "SPDXRef-pkg:generic/busybox@1.36.0")));
        assert!(edges.contains(&(
            "SPDXRef-pkg:generic/busybox@1.36.0",
            "SPDXRef-pkg:generic/musl@1.2.4"
        )));
        assert!(edges.contains(&("SPDXRef-base-os", "SPDXRef-etc-config")));
    }

    #[test]
    fn test_non_package_types_are_mapped_but_not_packaged() {
        let (doc, sink) = convert_fixture("cyclonedx/nested.cdx.json");

        // Only busybox and musl are libraries.
        assert_eq!(doc.packages.len(), 2);
        assert!(sink
            .infos
            .contains(&ConversionEvent::ComponentsMapped { count: 5 }));
        assert!(sink.infos.iter().any(|e| matches!(
            e,
            ConversionEvent::TypeTally { counts }
                if counts.contains(&("operating-system".to_string(), 1))
                    && counts.contains(&("file".to_string(), 1))
        )));
    }

    #[test]
    fn test_dependencies_between_nested_components_resolve() {
        let (doc, _) = convert_fixture("cyclonedx/nested.cdx.json");

        let depends: Vec<_> = doc
            .relationships
            .iter()
            .filter(|r| r.relationship_type == RelationshipType::DependsOn)
            .collect();
        assert_eq!(depends.len(), 1);
        assert_eq!(
            depends[0].spdx_element_id,
            "SPDXRef-pkg:generic/busybox@1.36.0"
        );
        assert_eq!(
            depends[0].related_spdx_element,
            "SPDXRef-pkg:generic/musl@1.2.4"
        );
    }
}

// ============================================================================
// Failure Modes
// ============================================================================

mod failure_modes {
    use super::*;
    use sbom_convert::{
        model::cyclonedx::{Bom, Dependency},
        ConvertError,
    };

    #[test]
    fn test_dangling_dependency_source_names_the_reference() {
        let content = r#"{
            "components": [{"type": "library", "bom-ref": "A", "name": "a-lib"}],
            "dependencies": [{"ref": "X", "dependsOn": ["A"]}]
        }"#;
        let bom: Bom = serde_json::from_str(content).expect("decodes");

        let mut sink = CollectingSink::new();
        let err = convert_document(&bom, &mut sink).expect_err("dangling source");
        assert!(matches!(
            err,
            ConvertError::DanglingSourceReference { ref reference } if reference == "X"
        ));
    }

    #[test]
    fn test_dangling_dependency_target_names_the_reference() {
        let bom = Bom {
            components: Some(vec![sbom_convert::Component {
                component_type: "library".to_string(),
                bom_ref: Some("A".to_string()),
                name: "a-lib".to_string(),
                ..Default::default()
            }]),
            dependencies: Some(vec![Dependency {
                dependency_ref: "A".to_string(),
                depends_on: Some(vec!["ghost".to_string()]),
            }]),
            ..Default::default()
        };

        let mut sink = CollectingSink::new();
        let err = convert_document(&bom, &mut sink).expect_err("dangling target");
        assert_eq!(err.reference(), Some("ghost"));
    }

    #[test]
    fn test_duplicate_reference_across_nesting_depths() {
        let content = r#"{
            "components": [
                {"type": "library", "bom-ref": "outer", "name": "outer-lib",
                 "components": [{"type": "library", "bom-ref": "inner", "name": "inner-lib"}]},
                {"type": "library", "bom-ref": "inner", "name": "impostor"}
            ]
        }"#;
        let bom: Bom = serde_json::from_str(content).expect("decodes");

        let mut sink = CollectingSink::new();
        let err = convert_document(&bom, &mut sink).expect_err("duplicate ref");
        assert!(matches!(
            err,
            ConvertError::DuplicateReference { ref reference } if reference == "inner"
        ));
    }
}

// ============================================================================
// Conformance
// ============================================================================

mod conformance_tests {
    use super::*;
    use sbom_convert::ConformanceChecker;

    #[test]
    fn test_converted_fixture_passes_baseline_checks() {
        let (doc, _) = convert_fixture("cyclonedx/minimal.cdx.json");
        let result = ConformanceChecker::new().check(&doc);
        assert!(result.is_conformant, "violations: {:?}", result.violations);
    }

    #[test]
    fn test_nested_fixture_reports_noassertion_warnings() {
        let (doc, _) = convert_fixture("cyclonedx/nested.cdx.json");
        let result = ConformanceChecker::new().check(&doc);
        // busybox and musl have no distribution reference.
        assert!(result.is_conformant);
        assert!(result.warning_count > 0);
    }
}
