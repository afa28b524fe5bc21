use super::config_errors::ConfigError;
use super::subsystems::SubsystemLoads;
use crate::constants::*;

// Step indices above 2^53 no longer map to distinct f64 timestamps.
const MAX_STEPS: f64 = 9_007_199_254_740_992.0;

/// Raw simulation inputs, not yet checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub duration_s: f64,
    pub step_s: f64,
    pub power_draw_w: f64,
    pub solar_power_w: f64,
    pub battery_capacity_wh: f64,
    pub initial_charge_wh: f64,
    pub orbit_period_s: f64,
    pub eclipse_fraction: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            duration_s: DEFAULT_DURATION_S,
            step_s: DEFAULT_STEP_S,
            power_draw_w: SubsystemLoads::default().total_w(),
            solar_power_w: DEFAULT_SOLAR_POWER_W,
            battery_capacity_wh: DEFAULT_BATTERY_CAPACITY_WH,
            initial_charge_wh: DEFAULT_INITIAL_CHARGE_WH,
            orbit_period_s: DEFAULT_ORBIT_PERIOD_S,
            eclipse_fraction: DEFAULT_ECLIPSE_FRACTION,
        }
    }
}

/// Validated, immutable simulation inputs.
///
/// The only way to obtain one is through [`TryFrom<SimulationParameters>`] (or
/// [`Default`]), so a value of this type always satisfies every range constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    params: SimulationParameters,
}

impl TryFrom<SimulationParameters> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(params: SimulationParameters) -> Result<Self, Self::Error> {
        let SimulationParameters {
            duration_s,
            step_s,
            power_draw_w,
            solar_power_w,
            battery_capacity_wh,
            initial_charge_wh,
            orbit_period_s,
            eclipse_fraction,
        } = params;

        for (field, value) in [
            ("duration_s", duration_s),
            ("step_s", step_s),
            ("power_draw_w", power_draw_w),
            ("solar_power_w", solar_power_w),
            ("battery_capacity_wh", battery_capacity_wh),
            ("initial_charge_wh", initial_charge_wh),
            ("orbit_period_s", orbit_period_s),
            ("eclipse_fraction", eclipse_fraction),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        require_positive("duration_s", duration_s)?;
        require_positive("step_s", step_s)?;
        if step_s > duration_s {
            return Err(ConfigError::invalid(
                "step_s",
                format!("must not exceed duration_s ({duration_s}), got {step_s}"),
            ));
        }
        let steps = (duration_s / step_s).floor();
        if steps >= MAX_STEPS.min(usize::MAX as f64) {
            return Err(ConfigError::invalid(
                "step_s",
                format!("yields {steps} steps over duration_s ({duration_s}), limit is {MAX_STEPS}"),
            ));
        }
        require_non_negative("power_draw_w", power_draw_w)?;
        require_non_negative("solar_power_w", solar_power_w)?;
        require_positive("battery_capacity_wh", battery_capacity_wh)?;
        if !(0.0..=battery_capacity_wh).contains(&initial_charge_wh) {
            return Err(ConfigError::invalid(
                "initial_charge_wh",
                format!("must lie in [0, {battery_capacity_wh}], got {initial_charge_wh}"),
            ));
        }
        require_positive("orbit_period_s", orbit_period_s)?;
        if !(0.0..=1.0).contains(&eclipse_fraction) {
            return Err(ConfigError::invalid(
                "eclipse_fraction",
                format!("must lie in [0, 1], got {eclipse_fraction}"),
            ));
        }

        Ok(Self { params })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be > 0, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
        }
    }
}

impl SimulationConfig {
    pub fn duration_s(&self) -> f64 {
        self.params.duration_s
    }

    pub fn step_s(&self) -> f64 {
        self.params.step_s
    }

    pub fn power_draw_w(&self) -> f64 {
        self.params.power_draw_w
    }

    pub fn solar_power_w(&self) -> f64 {
        self.params.solar_power_w
    }

    pub fn battery_capacity_wh(&self) -> f64 {
        self.params.battery_capacity_wh
    }

    pub fn initial_charge_wh(&self) -> f64 {
        self.params.initial_charge_wh
    }

    pub fn orbit_period_s(&self) -> f64 {
        self.params.orbit_period_s
    }

    pub fn eclipse_fraction(&self) -> f64 {
        self.params.eclipse_fraction
    }

    pub fn parameters(&self) -> SimulationParameters {
        self.params
    }

    /// Number of samples a full run records: t = 0 plus every whole step up to `duration_s`.
    pub fn num_steps(&self) -> usize {
        (self.params.duration_s / self.params.step_s).floor() as usize + 1
    }
}
