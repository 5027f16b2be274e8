use average::Mean;
use log::info;

use crate::core::{FinishedProcess, Ticks};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub processes: usize,
    pub total_waiting_time: Ticks,
    pub total_response_time: Ticks,
    pub average_waiting_time: f64,
    pub average_response_time: f64,
    pub average_turnaround_time: f64,
    pub longest_waiting_time: Ticks,
    pub makespan: Ticks,
}

impl Report {
    /// Aggregates retired processes. `None` for an empty batch.
    pub fn from_finished(finished: &[FinishedProcess]) -> Option<Self> {
        if finished.is_empty() {
            return None;
        }

        let total_waiting_time: Ticks = finished.iter().map(FinishedProcess::waiting_time).sum();
        let total_response_time: Ticks = finished.iter().map(FinishedProcess::response_time).sum();
        let count = finished.len() as f64;

        Some(Self {
            processes: finished.len(),
            total_waiting_time,
            total_response_time,
            average_waiting_time: total_waiting_time as f64 / count,
            average_response_time: total_response_time as f64 / count,
            average_turnaround_time: avg(finished.iter().map(|p| p.turnaround_time() as f64)),
            longest_waiting_time: finished.iter().map(FinishedProcess::waiting_time).max()?,
            makespan: finished.iter().map(|p| p.completion_time).max()?,
        })
    }

    pub fn log_summary(&self) {
        info!(
            "{} processes, makespan {} ticks, average turnaround {:.2}, longest wait {}",
            self.processes, self.makespan, self.average_turnaround_time, self.longest_waiting_time
        );
        info!(
            "total waiting {} ticks, total response {} ticks",
            self.total_waiting_time, self.total_response_time
        );
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().mean()
}
