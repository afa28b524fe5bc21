pub mod battery_states;
pub mod state_machine;
