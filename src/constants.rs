pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Simulation timing
pub const DEFAULT_STEP_S: f64 = 60.0; // One sample per minute
pub const DEFAULT_DURATION_S: f64 = 86_400.0; // One orbital day (s)

// Orbit
pub const DEFAULT_ORBIT_PERIOD_S: f64 = 6000.0; // LEO-like period (s)
pub const DEFAULT_ECLIPSE_FRACTION: f64 = 0.4; // Share of each orbit spent in shadow

// Power
pub const DEFAULT_SOLAR_POWER_W: f64 = 100.0; // Array output while sunlit (W)
pub const DEFAULT_BATTERY_CAPACITY_WH: f64 = 500.0;
pub const DEFAULT_INITIAL_CHARGE_WH: f64 = 500.0; // Launch fully charged

// Subsystem loads (W)
pub const PAYLOAD_POWER_W: f64 = 50.0;
pub const COMMUNICATIONS_POWER_W: f64 = 30.0;
pub const OBC_POWER_W: f64 = 10.0; // On-board computer
pub const AOCS_POWER_W: f64 = 20.0; // Attitude and orbit control

// Labelling of output rows
pub const DEFAULT_START_EPOCH: &str = "2024-03-15T00:00:00 UTC";
