use crate::core::{Pid, Ticks};

/// One process as described by the workload, before simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}
