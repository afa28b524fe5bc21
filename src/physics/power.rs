use std::fmt;

/// Illumination state of the spacecraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitPhase {
    Sunlight,
    Eclipse,
}

impl OrbitPhase {
    pub fn at(t_s: f64, orbit_period_s: f64, eclipse_fraction: f64) -> Self {
        if is_sunlit(t_s, orbit_period_s, eclipse_fraction) {
            OrbitPhase::Sunlight
        } else {
            OrbitPhase::Eclipse
        }
    }

    pub fn is_sunlit(self) -> bool {
        self == OrbitPhase::Sunlight
    }
}

impl fmt::Display for OrbitPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OrbitPhase::Sunlight => write!(f, "Sunlight"),
            OrbitPhase::Eclipse => write!(f, "Eclipse"),
        }
    }
}

/// Square-wave illumination model: each orbit starts with `(1 - eclipse_fraction)` of
/// sunlight followed by the eclipse tail. The boundary itself belongs to the eclipse.
pub fn is_sunlit(t_s: f64, orbit_period_s: f64, eclipse_fraction: f64) -> bool {
    let phase = t_s.rem_euclid(orbit_period_s);
    phase < sunlight_duration_s(orbit_period_s, eclipse_fraction)
}

/// Power flowing into the battery (negative when it discharges).
pub fn net_power_w(sunlit: bool, solar_power_w: f64, power_draw_w: f64) -> f64 {
    if sunlit {
        solar_power_w - power_draw_w
    } else {
        -power_draw_w
    }
}

pub fn sunlight_duration_s(orbit_period_s: f64, eclipse_fraction: f64) -> f64 {
    (1.0 - eclipse_fraction) * orbit_period_s
}

pub fn eclipse_duration_s(orbit_period_s: f64, eclipse_fraction: f64) -> f64 {
    eclipse_fraction * orbit_period_s
}
