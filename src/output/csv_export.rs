use super::output_errors::OutputError;
use crate::config::simulation::SimulationConfig;
use crate::constants::SECONDS_PER_HOUR;
use crate::models::result::SimulationResult;
use csv::Writer;
use hifitime::{Duration, Epoch};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_FILE: &str = "power_budget.csv";

const HEADER: [&str; 7] = [
    "UTC Time",
    "Time (s)",
    "Time (h)",
    "Sunlit",
    "Battery Charge (Wh)",
    "Power Draw (W)",
    "Solar Generation (W)",
];

/// Writes the charge history together with the constant draw and generation reference
/// lines, one row per sample.
pub fn write_series<W: Write>(
    writer: W,
    config: &SimulationConfig,
    result: &SimulationResult,
    start_epoch: Epoch,
) -> Result<(), OutputError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    let power_draw = config.power_draw_w().to_string();
    let solar_power = config.solar_power_w().to_string();
    for sample in result.samples() {
        let epoch = start_epoch + Duration::from_seconds(sample.t_s);
        let sunlit = if sample.sunlit { "1" } else { "0" };
        writer.write_record(&[
            epoch.to_string(),
            sample.t_s.to_string(),
            format!("{:.4}", sample.t_s / SECONDS_PER_HOUR),
            sunlit.to_string(),
            sample.charge_wh.to_string(),
            power_draw.clone(),
            solar_power.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Creates `output_dir` if needed and writes [`CSV_FILE`] into it.
pub fn export_csv(
    output_dir: &Path,
    config: &SimulationConfig,
    result: &SimulationResult,
    start_epoch: Epoch,
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(CSV_FILE);
    write_series(File::create(&path)?, config, result, start_epoch)?;
    info!(path = %path.display(), rows = result.len(), "wrote charge history");
    Ok(path)
}
