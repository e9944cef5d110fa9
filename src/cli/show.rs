//! Show command handler.
//!
//! Decodes an SBOM and pretty-prints it to stdout.

use crate::pipeline::{bom_to_pretty_json, load_cyclonedx, SbomFormat};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Configuration for the `show` command
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Path to the SBOM file
    pub sbom_path: PathBuf,
    /// Wire format of the input
    pub format: SbomFormat,
}

/// Run the show command
pub fn run_show(config: &ShowConfig) -> Result<()> {
    let rendered = render_sbom(config)?;
    println!("SBOM:");
    println!("{rendered}");
    Ok(())
}

/// Decode the SBOM and render it as indented JSON.
fn render_sbom(config: &ShowConfig) -> Result<String> {
    match config.format {
        SbomFormat::CycloneDxJson => {
            let bom = load_cyclonedx(&config.sbom_path)?;
            bom_to_pretty_json(&bom)
        }
        SbomFormat::CycloneDxProto | SbomFormat::SpdxJson => {
            bail!("unsupported input format: {}", config.format)
        }
    }
}
