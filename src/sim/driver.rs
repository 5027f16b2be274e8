use std::fmt;

use log::info;

use super::job::Job;
use crate::{
    config::Quantum,
    core::{FinishedProcess, ProcessRecord, RoundRobinCore, SchedEvent},
    input::EINVAL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    EmptyWorkload,
}

impl SimError {
    pub fn exit_code(&self) -> i32 {
        EINVAL
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorkload => write!(f, "workload declares no processes"),
        }
    }
}

impl std::error::Error for SimError {}

/// A batch of jobs replayed through the Round-Robin engine.
pub struct Sim {
    pub core: RoundRobinCore,
}

impl Sim {
    pub fn new(jobs: Vec<Job>, quantum: Quantum) -> Result<Self, SimError> {
        if jobs.is_empty() {
            return Err(SimError::EmptyWorkload);
        }

        let mut core = RoundRobinCore::new(quantum);
        for job in jobs {
            core.add_task(job.pid, job.arrival_time, job.burst_time);
        }
        Ok(Self { core })
    }

    pub fn step(&mut self) -> Vec<SchedEvent> {
        self.core.step()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.all_retired()
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.core.ctx.tasks
    }

    pub fn jobs_map<T>(&self, f: impl Fn(&ProcessRecord) -> T) -> impl Iterator<Item = T> {
        self.records().iter().map(f)
    }

    /// Finished views of every record, in input order. `None` until all retired.
    pub fn finished(&self) -> Option<Vec<FinishedProcess>> {
        self.jobs_map(ProcessRecord::finished).collect()
    }

    pub fn run_to_completion(mut self) -> Vec<FinishedProcess> {
        self.core.run();
        let ctx = &self.core.ctx;
        info!(
            "simulated {} processes with quantum {} in {} ticks ({} busy, {} idle)",
            ctx.tasks.len(),
            self.core.quantum().get(),
            ctx.now,
            ctx.busy_ticks,
            ctx.idle_ticks
        );
        self.finished()
            .expect("All tasks retired but some record is unfinished")
    }
}
