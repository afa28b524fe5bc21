use clap::Parser;
use std::path::PathBuf;

/// Battery state of charge of a satellite over one orbital day.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// TOML configuration file. Defaults to `<config dir>/satpower/config.toml` when present.
    #[arg(short, long, env = "SATPOWER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory receiving the CSV export.
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Override the time step (s).
    #[arg(long, value_name = "SECONDS")]
    pub step: Option<f64>,

    /// Override the simulated time span (s).
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Skip writing the CSV file.
    #[arg(long)]
    pub no_csv: bool,

    /// Default log level; `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}
