use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vd2svg::{parse_android_resource, transform, OverrideMap, TransformOptions};

#[derive(Debug, Parser)]
#[command(
    name = "vd2svg",
    version,
    about = "Convert an Android VectorDrawable into SVG"
)]
struct Args {
    /// VectorDrawable XML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// SVG file to create; must not exist yet
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    /// Indent the generated SVG
    #[arg(short, long)]
    pretty: bool,
    /// Android resource file (values/*.xml) used to resolve `@type/name` references
    #[arg(short, long = "resources", value_name = "FILE")]
    resources: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.input.exists() {
        bail!("input file does not exist: {}", args.input.display());
    }
    if args.output.exists() {
        bail!("output already exists: {}", args.output.display());
    }

    info!("reading {}", args.input.display());
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    let mut options = TransformOptions::new().pretty(args.pretty);
    if !args.resources.is_empty() {
        options = options.with_overrides(load_overrides(&args.resources)?);
    }

    let svg = transform(&content, &options)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write output file {}", args.output.display()))?;
    Ok(())
}

/// Merge resource files into one override map; later files win
fn load_overrides(paths: &[PathBuf]) -> Result<OverrideMap> {
    let mut overrides = OverrideMap::new();
    for path in paths {
        overrides.extend(read_resources(path)?);
    }
    debug!("loaded {} resource overrides", overrides.len());
    Ok(overrides)
}

fn read_resources(path: &Path) -> Result<OverrideMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read resource file {}", path.display()))?;
    match parse_android_resource(&content) {
        Some(resources) => Ok(resources),
        None => bail!("{} is not an android resource file", path.display()),
    }
}
