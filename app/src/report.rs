use std::{fs::read_to_string, path::PathBuf};

use clap::{Args, ValueEnum};
use common::{
    config::Config,
    dataset::Dataset,
    table::render_table,
    transform::{Mode, derive_view},
};
use eyre::{Context, Result};
use line_basic::LineBasic;
use tracing::debug;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// View(s) to generate
    #[arg(short, long, default_value = "all")]
    pub mode: ModeArg,
    /// Results file to load
    #[arg(short, long, default_value = "results.json")]
    pub results: PathBuf,
    /// Directory the chart files are written to
    #[arg(short, long, default_value = "media")]
    pub out: PathBuf,
    /// Report config file; the built-in scheduling variant is used if absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Raw,
    Throughput,
    All,
}

impl ModeArg {
    pub fn modes(self) -> &'static [Mode] {
        match self {
            ModeArg::Raw => &[Mode::Raw],
            ModeArg::Throughput => &[Mode::Throughput],
            ModeArg::All => &[Mode::Raw, Mode::Throughput],
        }
    }
}

pub struct Sinks {
    pub table: bool,
    pub charts: bool,
}

/// Runs the pipeline strictly in sequence for each requested mode: derive the
/// view, print its table, write its charts. Every run regenerates everything.
pub fn run(args: &RunArgs, sinks: Sinks) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => serde_yml::from_str(
            &read_to_string(path).with_context(|| format!("Read config {}", path.display()))?,
        )
        .with_context(|| format!("Parse config {}", path.display()))?,
        None => Config::scheduling_default(),
    };
    if config.plots.is_empty() {
        config.plots.push(Box::new(LineBasic::default()));
    }
    debug!("Running report {} with {} series", config.name, config.series.len());

    let dataset = Dataset::load(&args.results)?;

    for &mode in args.mode.modes() {
        let view = derive_view(&dataset, &config, mode);
        if sinks.table {
            println!("{}", render_table(&view));
            println!();
        }
        if sinks.charts {
            for plot in &config.plots {
                let path = plot.render(&view, &args.out)?;
                println!("{} -> {}", plot.name(), path.display());
            }
        }
    }

    Ok(())
}
