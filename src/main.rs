mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use satpower::config::loader::LoadedConfig;
use satpower::models::summary::RunSummary;
use satpower::output::csv_export::export_csv;
use satpower::output::report::{build_loads_table, build_summary_table, depletion_message};
use satpower::simulation::battery_simulator::BatterySimulator;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let default_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    if level.parse::<LevelFilter>().is_err() {
        warn!("Invalid log level '{}', defaulting to 'info'", level);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let loaded = LoadedConfig::resolve(args.config.as_deref())
        .and_then(|loaded| loaded.with_timing(args.step, args.duration))
        .context("failed to load configuration")?;

    if let Some(loads) = &loaded.subsystems {
        println!("{}", build_loads_table(loads));
    }

    let result = BatterySimulator::new(loaded.simulation).run();
    let summary = RunSummary::new(&loaded.simulation, &result);
    println!("{}", build_summary_table(&summary));

    if let Some(message) = depletion_message(&result) {
        println!("{message}");
    }

    if !args.no_csv {
        let path = export_csv(&args.output, &loaded.simulation, &result, loaded.start_epoch)
            .context("failed to write CSV output")?;
        println!("Simulation data has been written to {}", path.display());
    }

    Ok(())
}
