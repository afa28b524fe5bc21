use super::result::SimulationResult;
use crate::config::simulation::SimulationConfig;
use crate::constants::SECONDS_PER_HOUR;

/// Aggregate figures of one run, as shown by the console report.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub samples: usize,
    pub simulated_s: f64,
    pub final_charge_wh: f64,
    pub min_charge_wh: f64,
    pub max_charge_wh: f64,
    /// Deepest discharge as a fraction of capacity.
    pub depth_of_discharge: f64,
    pub eclipse_s: f64,
    pub curtailed_wh: f64,
    pub depleted_at_h: Option<f64>,
}

impl RunSummary {
    pub fn new(config: &SimulationConfig, result: &SimulationResult) -> Self {
        let charges = result.charge_wh();
        let initial = config.initial_charge_wh();
        let min_charge_wh = charges.iter().copied().fold(initial, f64::min);
        let max_charge_wh = charges.iter().copied().fold(initial, f64::max);

        // Sample 0 is the zero-length initial step.
        let eclipse_steps = result.sunlit().iter().skip(1).filter(|&&lit| !lit).count();

        Self {
            samples: result.len(),
            simulated_s: result.timestamps_s().last().copied().unwrap_or(0.0),
            final_charge_wh: result.final_charge_wh().unwrap_or(initial),
            min_charge_wh,
            max_charge_wh,
            depth_of_discharge: 1.0 - min_charge_wh / config.battery_capacity_wh(),
            eclipse_s: eclipse_steps as f64 * config.step_s(),
            curtailed_wh: result.curtailed_wh(),
            depleted_at_h: result.depleted_at_s().map(|t| t / SECONDS_PER_HOUR),
        }
    }
}
