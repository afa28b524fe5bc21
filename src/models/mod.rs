pub mod result;
pub mod summary;

pub use result::{Sample, SimulationResult};
