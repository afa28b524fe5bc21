use crate::config::simulation::SimulationConfig;
use crate::constants::SECONDS_PER_HOUR;
use crate::fsm::battery_states::BatteryMode;
use crate::fsm::state_machine::BatteryFSM;
use crate::models::result::SimulationResult;
use crate::physics::power::{is_sunlit, net_power_w};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

// Upper bound on the up-front reservation; longer runs grow on demand.
const PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Advances the battery charge one step at a time over a validated configuration.
///
/// Sample 0 is the initial charge at t = 0. Every later sample `k` holds the charge after
/// the step spanning `[t_{k-1}, t_k]`, whose illumination is taken at the step start.
/// Charging is clamped at capacity, discharging is not floored, and the run stops at the
/// first sample whose charge is at or below zero.
pub struct BatterySimulator {
    config: SimulationConfig,
}

impl BatterySimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run(&self) -> SimulationResult {
        self.run_with_cancel(&AtomicBool::new(false))
    }

    /// Same as [`run`](Self::run), checking `cancel` between steps. A cancelled run returns
    /// the samples recorded so far with `interrupted()` set.
    pub fn run_with_cancel(&self, cancel: &AtomicBool) -> SimulationResult {
        self.run_until(|_| cancel.load(Ordering::Relaxed))
    }

    /// Steps until the run finishes or `should_stop` returns true for the next step index.
    pub(crate) fn run_until(&self, mut should_stop: impl FnMut(usize) -> bool) -> SimulationResult {
        let config = &self.config;
        let step_s = config.step_s();
        let capacity_wh = config.battery_capacity_wh();
        let num_steps = config.num_steps();
        let sunlit_at = |t_s: f64| is_sunlit(t_s, config.orbit_period_s(), config.eclipse_fraction());
        let power_at = |sunlit: bool| net_power_w(sunlit, config.solar_power_w(), config.power_draw_w());

        info!(
            steps = num_steps,
            step_s,
            net_sunlight_w = power_at(true),
            net_eclipse_w = power_at(false),
            "starting power budget simulation"
        );

        let mut result = SimulationResult::with_capacity(num_steps.min(PREALLOCATED_SAMPLES));
        let mut charge_wh = config.initial_charge_wh();

        let initially_sunlit = sunlit_at(0.0);
        let mut fsm = BatteryFSM::new(BatteryMode::for_net_power(power_at(initially_sunlit)));
        result.record(0.0, charge_wh, initially_sunlit);
        if fsm.evaluate_charge(charge_wh, 0.0).is_terminal() {
            result.mark_depleted(0.0);
            return result;
        }

        for k in 1..num_steps {
            if should_stop(k) {
                warn!(completed = k, "simulation cancelled");
                result.mark_interrupted();
                break;
            }

            let step_start_s = (k - 1) as f64 * step_s;
            let t_s = k as f64 * step_s;
            let sunlit = sunlit_at(step_start_s);
            let p_net = power_at(sunlit);
            let delta_wh = p_net * step_s / SECONDS_PER_HOUR;

            charge_wh = match fsm.evaluate_power(p_net, step_start_s) {
                BatteryMode::Charging => {
                    let unclamped = charge_wh + delta_wh;
                    if unclamped > capacity_wh {
                        result.add_curtailed(unclamped - capacity_wh);
                        capacity_wh
                    } else {
                        unclamped
                    }
                }
                BatteryMode::Discharging | BatteryMode::Depleted => charge_wh + delta_wh,
            };

            result.record(t_s, charge_wh, sunlit);
            if fsm.evaluate_charge(charge_wh, t_s).is_terminal() {
                result.mark_depleted(t_s);
                break;
            }
        }

        info!(
            samples = result.len(),
            final_charge_wh = result.final_charge_wh().unwrap_or(charge_wh),
            mode_changes = fsm.transitions(),
            depleted = result.depleted(),
            "simulation finished"
        );
        result
    }
}

/// Runs one simulation over `config`.
pub fn run(config: &SimulationConfig) -> SimulationResult {
    BatterySimulator::new(*config).run()
}
