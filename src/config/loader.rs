use super::config_errors::ConfigError;
use super::simulation::{SimulationConfig, SimulationParameters};
use super::subsystems::SubsystemLoads;
use crate::constants::DEFAULT_START_EPOCH;
use hifitime::Epoch;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "satpower";
const CONFIG_FILE: &str = "config.toml";

/// On-disk layout of a configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    duration_s: Option<f64>,
    step_s: Option<f64>,
    power_draw_w: Option<f64>,
    solar_power_w: Option<f64>,
    battery_capacity_wh: Option<f64>,
    initial_charge_wh: Option<f64>,
    orbit_period_s: Option<f64>,
    eclipse_fraction: Option<f64>,
    start_epoch: Option<String>,
    subsystems: Option<SubsystemLoads>,
}

/// Everything needed to run and label one simulation.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub simulation: SimulationConfig,
    pub subsystems: Option<SubsystemLoads>,
    pub start_epoch: Epoch,
}

impl Default for LoadedConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            subsystems: Some(SubsystemLoads::default()),
            start_epoch: default_start_epoch(),
        }
    }
}

fn default_start_epoch() -> Epoch {
    Epoch::from_gregorian_utc(2024, 3, 15, 0, 0, 0, 0)
}

fn parse_epoch(text: &str) -> Result<Epoch, ConfigError> {
    Epoch::from_gregorian_str(text).map_err(|e| ConfigError::InvalidEpoch {
        epoch: text.to_string(),
        reason: e.to_string(),
    })
}

impl LoadedConfig {
    /// Parses TOML text, filling missing keys with defaults and validating the result.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = SimulationParameters::default();

        let (power_draw_w, subsystems) = match (file.power_draw_w, file.subsystems) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::invalid(
                    "power_draw_w",
                    "cannot be combined with a [subsystems] table",
                ))
            }
            (Some(draw), None) => (draw, None),
            (None, Some(loads)) => (loads.total_w(), Some(loads)),
            (None, None) => (defaults.power_draw_w, Some(SubsystemLoads::default())),
        };

        let params = SimulationParameters {
            duration_s: file.duration_s.unwrap_or(defaults.duration_s),
            step_s: file.step_s.unwrap_or(defaults.step_s),
            power_draw_w,
            solar_power_w: file.solar_power_w.unwrap_or(defaults.solar_power_w),
            battery_capacity_wh: file.battery_capacity_wh.unwrap_or(defaults.battery_capacity_wh),
            initial_charge_wh: file.initial_charge_wh.unwrap_or(defaults.initial_charge_wh),
            orbit_period_s: file.orbit_period_s.unwrap_or(defaults.orbit_period_s),
            eclipse_fraction: file.eclipse_fraction.unwrap_or(defaults.eclipse_fraction),
        };

        let start_epoch = parse_epoch(file.start_epoch.as_deref().unwrap_or(DEFAULT_START_EPOCH))?;

        Ok(Self {
            simulation: SimulationConfig::try_from(params)?,
            subsystems,
            start_epoch,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&text)
    }

    /// Loads `path` if given, else the per-user config file if it exists, else the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with the timing overridden, re-validating the combination.
    pub fn with_timing(
        self,
        step_s: Option<f64>,
        duration_s: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if step_s.is_none() && duration_s.is_none() {
            return Ok(self);
        }
        let mut params = self.simulation.parameters();
        if let Some(step_s) = step_s {
            params.step_s = step_s;
        }
        if let Some(duration_s) = duration_s {
            params.duration_s = duration_s;
        }
        Ok(Self {
            simulation: SimulationConfig::try_from(params)?,
            ..self
        })
    }
}

/// `<config dir>/satpower/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let loaded = LoadedConfig::from_toml_str("").unwrap();
        assert_eq!(loaded.simulation, SimulationConfig::default());
        assert_eq!(loaded.subsystems, Some(SubsystemLoads::default()));
        assert_eq!(loaded.start_epoch, default_start_epoch());
    }

    #[test]
    fn subsystem_table_is_summed() {
        let loaded = LoadedConfig::from_toml_str(
            r#"
            solar_power_w = 150.0

            [subsystems]
            payload_w = 40.0
            communications_w = 25.0
            "#,
        )
        .unwrap();
        // Omitted subsystem keys keep their defaults: 40 + 25 + 10 + 20.
        assert_abs_diff_eq!(loaded.simulation.power_draw_w(), 95.0);
        assert_abs_diff_eq!(loaded.simulation.solar_power_w(), 150.0);
    }

    #[test]
    fn aggregate_draw_replaces_subsystems() {
        let loaded = LoadedConfig::from_toml_str("power_draw_w = 42.0").unwrap();
        assert_abs_diff_eq!(loaded.simulation.power_draw_w(), 42.0);
        assert!(loaded.subsystems.is_none());
    }

    #[test]
    fn draw_and_subsystems_conflict() {
        let err = LoadedConfig::from_toml_str(
            "power_draw_w = 42.0\n[subsystems]\npayload_w = 1.0\n",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("power_draw_w"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LoadedConfig::from_toml_str("solar_panels = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn out_of_range_values_surface_as_invalid_config() {
        let err = LoadedConfig::from_toml_str("eclipse_fraction = 2.0").unwrap_err();
        assert_eq!(err.field(), Some("eclipse_fraction"));
    }

    #[test]
    fn bad_epoch_is_reported() {
        let err = LoadedConfig::from_toml_str(r#"start_epoch = "yesterday""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEpoch { .. }), "{err}");
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "step_s = 30.0\nduration_s = 600.0").unwrap();
        let loaded = LoadedConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded.simulation.num_steps(), 21);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LoadedConfig::from_path(Path::new("/nonexistent/satpower.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    }

    #[test]
    fn timing_overrides_are_validated() {
        let loaded = LoadedConfig::default().with_timing(Some(120.0), None).unwrap();
        assert_abs_diff_eq!(loaded.simulation.step_s(), 120.0);

        let err = LoadedConfig::default()
            .with_timing(Some(600.0), Some(300.0))
            .unwrap_err();
        assert_eq!(err.field(), Some("step_s"));
    }
}
