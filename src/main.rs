//! torgba32 CLI - Convert an image to an RGBA-32 PNG or a PT1 image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use torgba32::{Compression, Config, Converter};

/// Convert an image to 8-bit-per-channel RGBA and save it as PNG.
#[derive(Parser, Debug)]
#[command(name = "torgba32")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output path. Overwritten if it exists.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// PNG compression effort. Ignored for PT1 output.
    #[arg(short, long, value_enum, default_value_t = CompressionArg::Default)]
    compression: CompressionArg,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// 8-bit RGBA PNG.
    Png,
    /// Type 0 PT1 image.
    Pt1,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CompressionArg {
    Fast,
    Default,
    Best,
}

impl From<CompressionArg> for Compression {
    fn from(value: CompressionArg) -> Self {
        match value {
            CompressionArg::Fast => Self::Fast,
            CompressionArg::Default => Self::Default,
            CompressionArg::Best => Self::Best,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("torgba32={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    match args.format {
        OutputFormat::Png => {
            let config = Config {
                compression: args.compression.into(),
                ..Config::default()
            };

            Converter::new(config)
                .convert(&args.input, &args.output)
                .with_context(|| format!("Failed to convert {}", args.input.display()))?;
        }
        OutputFormat::Pt1 => {
            torgba32::pack_pt1(&args.input, &args.output)
                .with_context(|| format!("Failed to pack {}", args.input.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_paths_and_defaults() {
        let args = Args::try_parse_from(["torgba32", "A0_CG01.png", "output_rgba32.png"]).unwrap();

        assert_eq!(args.input, PathBuf::from("A0_CG01.png"));
        assert_eq!(args.output, PathBuf::from("output_rgba32.png"));
        assert_eq!(Compression::from(args.compression), Compression::Default);
        assert_eq!(args.format, OutputFormat::Png);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_pt1_format() {
        let args =
            Args::try_parse_from(["torgba32", "A0_CG01.png", "A0_CG01.pt1", "--format", "pt1"])
                .unwrap();
        assert_eq!(args.format, OutputFormat::Pt1);

        assert!(Args::try_parse_from(["torgba32", "in.png", "out", "-f", "bmp"]).is_err());
    }

    #[test]
    fn test_parse_compression() {
        let args = Args::try_parse_from(["torgba32", "in.png", "out.png", "-c", "best"]).unwrap();
        assert_eq!(Compression::from(args.compression), Compression::Best);
    }

    #[test]
    fn test_output_required() {
        assert!(Args::try_parse_from(["torgba32", "in.png"]).is_err());
    }
}
