pub mod battery_simulator;
