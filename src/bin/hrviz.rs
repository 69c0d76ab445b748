use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hrviz::chart::ChartConfig;
use hrviz::theme::ChartTheme;
use hrviz::{chart, dashboard, render, storage};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "hrviz",
    version,
    about = "Build, export & render heart-rate dashboard charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the zone-distribution pie chart from per-zone time shares.
    Zones(ZonesArgs),
    /// Build the heart-rate time-series chart from recorded samples.
    Series(SeriesArgs),
}

#[derive(Args, Debug)]
struct ZonesArgs {
    /// JSON file with an array of `{zone, percent, color}` shares.
    #[arg(short, long)]
    shares: PathBuf,
    /// Save the chart configuration as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Render the chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print the colored zone-percentage label strip to stdout.
    #[arg(long, default_value_t = false)]
    progress: bool,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    /// CSV file with `seconds,bpm` samples.
    #[arg(short = 'i', long)]
    samples: PathBuf,
    /// Optional JSON file with zone definitions for threshold overlays.
    #[arg(short, long)]
    zones: Option<PathBuf>,
    /// Save the chart configuration as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Render the chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Zones(args) => run_zones(args),
        Command::Series(args) => run_series(args),
    }
}

fn run_zones(args: ZonesArgs) -> Result<()> {
    let shares = storage::load_shares_json(&args.shares)?;
    log::info!(
        "loaded {} zone shares from {}",
        shares.len(),
        args.shares.display()
    );

    let theme = ChartTheme::default();
    let labels: Vec<String> = shares.iter().map(|s| s.zone.clone()).collect();
    let data: Vec<f64> = shares.iter().map(|s| s.percent).collect();
    let colors: Vec<String> = shares.iter().map(|s| s.color.clone()).collect();
    let config = chart::zone_pie_chart(&labels, &data, &colors, &theme)?;

    if args.progress {
        for label in dashboard::zone_progress(&shares).labels {
            println!("{}\t{}", label.text, label.tooltip.title);
        }
    }

    emit(
        &config,
        args.out.as_deref(),
        args.plot.as_deref(),
        args.width,
        args.height,
        !args.progress,
    )
}

fn run_series(args: SeriesArgs) -> Result<()> {
    let samples = storage::load_samples_csv(&args.samples)?;
    log::info!(
        "loaded {} samples from {}",
        samples.len(),
        args.samples.display()
    );
    let zones = match &args.zones {
        Some(path) => storage::load_zones_json(path)?,
        None => Vec::new(),
    };

    let theme = ChartTheme::default();
    let (time_data, heart_rate) = hrviz::models::split_samples(&samples);
    let config = chart::heart_rate_chart(&time_data, &heart_rate, &zones, &theme)?;

    emit(
        &config,
        args.out.as_deref(),
        args.plot.as_deref(),
        args.width,
        args.height,
        true,
    )
}

/// Write and/or render the config; with no output flags, print it to stdout.
fn emit(
    config: &ChartConfig,
    out: Option<&Path>,
    plot: Option<&Path>,
    width: u32,
    height: u32,
    print_default: bool,
) -> Result<()> {
    if let Some(path) = out {
        storage::save_config_json(config, path)?;
        log::info!("wrote chart config to {}", path.display());
    }
    if let Some(path) = plot {
        render::render_config(config, path, width, height)?;
        log::info!("rendered chart to {}", path.display());
    }
    if out.is_none() && plot.is_none() && print_default {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}
