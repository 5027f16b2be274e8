pub mod config;
pub mod core;
pub mod input;
pub mod sim;

pub use config::{Quantum, SimConfig};
pub use crate::core::{FinishedProcess, RoundRobinCore, SchedEvent};
pub use input::InputError;
pub use sim::{Job, Report, Sim, SimError};
