use clap::{Parser, Subcommand};
use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::report::{RunArgs, Sinks};

mod report;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print result tables and write charts
    Report {
        #[command(flatten)]
        args: RunArgs,
    },
    /// Print result tables only
    Table {
        #[command(flatten)]
        args: RunArgs,
    },
    /// Write charts only
    Plot {
        #[command(flatten)]
        args: RunArgs,
    },
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!(
        "sched_report={log_level},common={log_level},line_basic={log_level}"
    ));
    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    let (run_args, sinks) = match args.command {
        Commands::Report { args } => (args, Sinks { table: true, charts: true }),
        Commands::Table { args } => (args, Sinks { table: true, charts: false }),
        Commands::Plot { args } => (args, Sinks { table: false, charts: true }),
    };

    if let Err(err) = report::run(&run_args, sinks) {
        error!("{err:#?}");
        return Err(err);
    }

    Ok(())
}
