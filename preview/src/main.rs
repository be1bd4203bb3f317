use anyhow::{anyhow, Context, Result};
use clap::Parser;
use noise_field::{synthesize_and_colorize, FieldConfig, NoiseVariant, TuneKey, TuningSession};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
mod export;

/// Renders a fractal noise field to PNG.
#[derive(Debug, Parser)]
#[command(name = "noise_preview", version)]
struct Args {
    /// RON or JSON field config; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "noise.png")]
    out: PathBuf,
    /// Tuning keys 0-4 applied in order, one frame per redraw (e.g. "1,2,0,3").
    #[arg(long)]
    tune: Option<String>,
    /// Use turbulence instead of the configured variant.
    #[arg(long)]
    turbulence: bool,
    #[arg(long)]
    parallel: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        warn!("tracing subscriber already installed");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FieldConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => FieldConfig::default(),
    };
    if args.turbulence { config.frame.variant = NoiseVariant::Turbulence; }
    if args.parallel { config.frame.parallel = true; }
    config.validate()?;

    let keys = match &args.tune {
        Some(s) => TuneKey::parse_sequence(s).map_err(|c| anyhow!("unknown tuning key '{c}', expected 0-4"))?,
        None => Vec::new(),
    };

    let source = config.build_source();
    let mut session = TuningSession::new(config.frame.params);
    info!("{session}");

    let frame = synthesize_and_colorize(&*source, &config.frame);
    let first_path = if keys.is_empty() { args.out.clone() } else { export::numbered_path(&args.out, 0) };
    export::save_png(&frame, &first_path)?;

    let mut written = 1;
    for key in keys {
        if !session.apply(key) { continue; }
        let request = config.frame.with_params(session.params());
        let frame = synthesize_and_colorize(&*source, &request);
        export::save_png(&frame, &export::numbered_path(&args.out, written))?;
        written += 1;
    }
    info!("Done, {written} frame(s)");
    Ok(())
}
