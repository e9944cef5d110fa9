//! sbom-convert: CycloneDX to SPDX SBOM conversion tool

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_convert::{
    cli::{run_convert, run_show, ConvertConfig, ShowConfig},
    pipeline::SbomFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported input formats:",
        "\n  CycloneDX: 1.6 (JSON)",
        "\n\nOutput formats:",
        "\n  SPDX: 2.3 (JSON)"
    )
}

#[derive(Parser)]
#[command(name = "sbom-convert")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "CycloneDX to SPDX SBOM conversion tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Inspect a CycloneDX SBOM
    sbom-convert show app.cdx.json

    # Convert to SPDX 2.3 JSON
    sbom-convert convert app.cdx.json app.spdx.json

    # Convert and run conformance checks on the result
    sbom-convert convert app.cdx.json app.spdx.json --validate")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `show` subcommand
#[derive(Parser)]
struct ShowArgs {
    /// Path to the SBOM file
    sbom: PathBuf,

    /// Wire format of the SBOM
    #[arg(long, default_value = "cyclonedx-json", env = "SBOM_CONVERT_FORMAT")]
    format: SbomFormat,
}

/// Arguments for the `convert` subcommand
#[derive(Parser)]
struct ConvertArgs {
    /// Path to the input CycloneDX SBOM
    input: PathBuf,

    /// Path to write the SPDX JSON output to
    output: PathBuf,

    /// Wire format of the input SBOM
    #[arg(long, default_value = "cyclonedx-json", env = "SBOM_CONVERT_FORMAT")]
    format: SbomFormat,

    /// Run SPDX conformance checks over the converted document
    #[arg(long)]
    validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an SBOM and pretty-print it
    Show(ShowArgs),

    /// Convert a CycloneDX SBOM to an SPDX document
    Convert(ConvertArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Show(args) => {
            let config = ShowConfig {
                sbom_path: args.sbom,
                format: args.format,
            };
            run_show(&config)
        }

        Commands::Convert(args) => {
            let config = ConvertConfig {
                input_path: args.input,
                output_path: args.output,
                format: args.format,
                validate: args.validate,
            };
            run_convert(&config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-convert", &mut io::stdout());
            Ok(())
        }
    }
}
