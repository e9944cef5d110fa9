//! Convert command handler.
//!
//! Decodes a CycloneDX file, runs the conversion engine, optionally checks
//! the result for SPDX conformance, and writes the SPDX JSON output.

use crate::conformance::ConformanceChecker;
use crate::convert::{convert_document, TracingSink};
use crate::pipeline::{load_cyclonedx, spdx_to_pretty_json, write_output, SbomFormat};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Configuration for the `convert` command
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path to the input SBOM
    pub input_path: PathBuf,
    /// Path the SPDX JSON output is written to
    pub output_path: PathBuf,
    /// Wire format of the input
    pub format: SbomFormat,
    /// Run conformance checks over the converted document
    pub validate: bool,
}

/// Run the convert command
pub fn run_convert(config: &ConvertConfig) -> Result<()> {
    if config.format != SbomFormat::CycloneDxJson {
        bail!("unsupported input format: {}", config.format);
    }

    let bom = load_cyclonedx(&config.input_path)?;
    let document = convert_document(&bom, &mut TracingSink).with_context(|| {
        format!(
            "failed to convert {} to SPDX",
            config.input_path.display()
        )
    })?;

    if config.validate {
        let result = ConformanceChecker::new().check(&document);
        println!("Conformance Results:");
        print!("{}", result.text_summary());
    }

    let json = spdx_to_pretty_json(&document)?;
    write_output(&json, &config.output_path)?;
    println!("Wrote output to {:?}", config.output_path.display());
    Ok(())
}
