//! # Easel Replay
//!
//! Replays an editor event script and prints the final state.

use clap::Parser;
use easel_cli::{CliArgs, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("easel=info"));

    // Logs go to stderr so stdout carries only the report.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_format);

    tracing::info!("Replaying {}", args.script.display());
    let report = easel_cli::run(&args)?;
    println!("{report}");
    Ok(())
}
