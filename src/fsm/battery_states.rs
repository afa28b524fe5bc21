use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryMode {
    /// Net power is positive; charge is clamped at capacity.
    Charging,
    /// Net power is zero or negative; charge is not floored.
    Discharging,
    /// Charge reached zero. Absorbing.
    Depleted,
}

impl BatteryMode {
    pub fn for_net_power(net_power_w: f64) -> Self {
        if net_power_w > 0.0 {
            BatteryMode::Charging
        } else {
            BatteryMode::Discharging
        }
    }

    pub fn is_terminal(self) -> bool {
        self == BatteryMode::Depleted
    }
}

impl fmt::Display for BatteryMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatteryMode::Charging => write!(f, "Charging"),
            BatteryMode::Discharging => write!(f, "Discharging"),
            BatteryMode::Depleted => write!(f, "Depleted"),
        }
    }
}
