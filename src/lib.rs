pub mod config;
pub mod constants;
pub mod fsm;
pub mod models;
pub mod output;
pub mod physics;
pub mod simulation;
