use crate::constants::{AOCS_POWER_W, COMMUNICATIONS_POWER_W, OBC_POWER_W, PAYLOAD_POWER_W};
use serde::Deserialize;

/// Constant power consumers on board. Only their sum reaches the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubsystemLoads {
    pub payload_w: f64,
    pub communications_w: f64,
    pub on_board_computer_w: f64,
    pub attitude_control_w: f64,
}

impl SubsystemLoads {
    pub fn total_w(&self) -> f64 {
        self.payload_w + self.communications_w + self.on_board_computer_w + self.attitude_control_w
    }

    /// Pairs of (name, load) in the order they are reported.
    pub fn breakdown(&self) -> [(&'static str, f64); 4] {
        [
            ("payload", self.payload_w),
            ("communications", self.communications_w),
            ("on-board computer", self.on_board_computer_w),
            ("attitude/orbit control", self.attitude_control_w),
        ]
    }
}

impl Default for SubsystemLoads {
    fn default() -> Self {
        Self {
            payload_w: PAYLOAD_POWER_W,
            communications_w: COMMUNICATIONS_POWER_W,
            on_board_computer_w: OBC_POWER_W,
            attitude_control_w: AOCS_POWER_W,
        }
    }
}
