pub mod config_errors;
pub mod loader;
pub mod simulation;
pub mod subsystems;
