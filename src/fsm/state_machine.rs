use super::battery_states::BatteryMode;
use tracing::{debug, info};

/// Tracks the battery mode across steps and records when it last changed.
#[derive(Debug, Clone)]
pub struct BatteryFSM {
    current_mode: BatteryMode,
    last_mode_change: f64,
    transitions: usize,
}

impl BatteryFSM {
    pub fn new(initial_mode: BatteryMode) -> Self {
        Self {
            current_mode: initial_mode,
            last_mode_change: 0.0,
            transitions: 0,
        }
    }

    pub fn current_mode(&self) -> BatteryMode {
        self.current_mode
    }

    pub fn last_mode_change(&self) -> f64 {
        self.last_mode_change
    }

    pub fn transitions(&self) -> usize {
        self.transitions
    }

    fn transition_to(&mut self, new_mode: BatteryMode, time: f64) {
        if self.current_mode == new_mode {
            return;
        }
        if new_mode.is_terminal() {
            info!(t_s = time, from = %self.current_mode, "battery depleted");
        } else {
            debug!(t_s = time, from = %self.current_mode, to = %new_mode, "battery mode change");
        }
        self.current_mode = new_mode;
        self.last_mode_change = time;
        self.transitions += 1;
    }

    /// Mode selected by the sign of net power. Ignored once depleted.
    pub fn evaluate_power(&mut self, net_power_w: f64, time: f64) -> BatteryMode {
        if !self.current_mode.is_terminal() {
            self.transition_to(BatteryMode::for_net_power(net_power_w), time);
        }
        self.current_mode
    }

    /// Enters `Depleted` when the post-update charge is at or below zero.
    pub fn evaluate_charge(&mut self, charge_wh: f64, time: f64) -> BatteryMode {
        if charge_wh <= 0.0 {
            self.transition_to(BatteryMode::Depleted, time);
        }
        self.current_mode
    }

    pub fn is_depleted(&self) -> bool {
        self.current_mode.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_sign_of_net_power() {
        let mut fsm = BatteryFSM::new(BatteryMode::Discharging);
        assert_eq!(fsm.evaluate_power(40.0, 60.0), BatteryMode::Charging);
        assert_eq!(fsm.evaluate_power(0.0, 120.0), BatteryMode::Discharging);
        assert_eq!(fsm.evaluate_power(-110.0, 180.0), BatteryMode::Discharging);
        assert_eq!(fsm.transitions(), 2);
        assert_eq!(fsm.last_mode_change(), 120.0);
    }

    #[test]
    fn depleted_is_absorbing() {
        let mut fsm = BatteryFSM::new(BatteryMode::Discharging);
        assert_eq!(fsm.evaluate_charge(-0.5, 3600.0), BatteryMode::Depleted);
        assert_eq!(fsm.evaluate_power(500.0, 3660.0), BatteryMode::Depleted);
        assert_eq!(fsm.evaluate_charge(10.0, 3720.0), BatteryMode::Depleted);
        assert!(fsm.is_depleted());
        assert_eq!(fsm.last_mode_change(), 3600.0);
    }

    #[test]
    fn positive_charge_does_not_deplete() {
        let mut fsm = BatteryFSM::new(BatteryMode::Charging);
        assert_eq!(fsm.evaluate_charge(1e-9, 0.0), BatteryMode::Charging);
        assert_eq!(fsm.transitions(), 0);
    }
}
