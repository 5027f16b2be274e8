pub mod driver;
pub mod job;
pub mod metrics;
pub mod workload;

pub use driver::{Sim, SimError};
pub use job::Job;
pub use metrics::Report;
pub use workload::bernoulli_jobs;
