//! File I/O and JSON plumbing around the conversion engine.
//!
//! The engine itself never touches the filesystem; everything here is
//! decode/encode glue shared by the CLI command handlers.

use crate::model::cyclonedx::Bom;
use crate::model::spdx::SpdxDocument;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// SBOM wire formats the CLI knows about.
///
/// Only CycloneDX JSON is implemented; the other formats are accepted on
/// the command line and rejected with an explicit error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SbomFormat {
    /// CycloneDX 1.6 JSON
    #[value(name = "cyclonedx-json")]
    CycloneDxJson,
    /// CycloneDX 1.6 protobuf (not yet supported)
    #[value(name = "cyclonedx-proto")]
    CycloneDxProto,
    /// SPDX 2.3 JSON (not yet supported)
    #[value(name = "spdx-json")]
    SpdxJson,
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CycloneDxJson => "cyclonedx-json",
            Self::CycloneDxProto => "cyclonedx-proto",
            Self::SpdxJson => "spdx-json",
        };
        f.write_str(name)
    }
}

/// Read and decode a CycloneDX JSON document.
pub fn load_cyclonedx(path: &Path) -> Result<Bom> {
    tracing::debug!("reading CycloneDX SBOM: {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read SBOM file: {}", path.display()))?;
    let bom: Bom = serde_json::from_str(&content)
        .with_context(|| format!("failed to decode CycloneDX JSON: {}", path.display()))?;

    tracing::debug!("decoded {} components", bom.component_count());
    Ok(bom)
}

/// Encode a BOM back to indented JSON for display.
pub fn bom_to_pretty_json(bom: &Bom) -> Result<String> {
    serde_json::to_string_pretty(bom).context("failed to encode CycloneDX JSON")
}

/// Encode an SPDX document to indented JSON.
pub fn spdx_to_pretty_json(document: &SpdxDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("failed to encode SPDX JSON")
}

/// Write converter output to a file.
pub fn write_output(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_cyclonedx_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"bomFormat":"CycloneDX","specVersion":"1.6","components":[
                {{"type":"library","bom-ref":"a","name":"a-lib"}}
            ]}}"#
        )
        .expect("write fixture");

        let bom = load_cyclonedx(file.path()).expect("loads");
        assert_eq!(bom.component_count(), 1);
    }

    #[test]
    fn test_load_cyclonedx_missing_file() {
        let err = load_cyclonedx(Path::new("/nonexistent/bom.json")).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/bom.json"));
    }

    #[test]
    fn test_load_cyclonedx_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write fixture");

        let err = load_cyclonedx(file.path()).expect_err("invalid JSON");
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn test_spdx_json_uses_two_space_indent() {
        let doc = SpdxDocument::new();
        let json = spdx_to_pretty_json(&doc).expect("encodes");
        assert!(json.contains("\n  \"spdxVersion\": \"SPDX-2.3\""));
    }

    #[test]
    fn test_format_display_names() {
        assert_eq!(SbomFormat::CycloneDxJson.to_string(), "cyclonedx-json");
        assert_eq!(SbomFormat::CycloneDxProto.to_string(), "cyclonedx-proto");
        assert_eq!(SbomFormat::SpdxJson.to_string(), "spdx-json");
    }
}
