use rand::prelude::*;

use super::job::Job;
use crate::core::{Pid, Ticks};

/// Seeded synthetic batch: on every tick in `0..ticks` one job arrives with
/// probability `p_arrival`; it is short with probability `p_short`.
/// Pids are assigned sequentially from 1.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst_time = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            let pid = Pid::try_from(jobs.len() + 1).expect("Workload exceeds the pid space");
            jobs.push(Job {
                pid,
                arrival_time: t,
                burst_time,
            });
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_batch() {
        assert_eq!(
            bernoulli_jobs(100, 0.5, 0.5, 1, 4, 7),
            bernoulli_jobs(100, 0.5, 0.5, 1, 4, 7)
        );
    }

    #[test]
    fn jobs_are_sorted_and_shaped() {
        let jobs = bernoulli_jobs(300, 0.4, 0.25, 2, 6, 11);
        assert!(!jobs.is_empty());
        assert!(jobs.windows(2).all(|w| w[0].arrival_time < w[1].arrival_time));
        assert!(jobs.iter().all(|j| j.burst_time == 2 || j.burst_time == 6));
        assert!(jobs.iter().enumerate().all(|(i, j)| j.pid as usize == i + 1));
    }

    #[test]
    fn certain_arrival_fills_every_tick() {
        let jobs = bernoulli_jobs(10, 1.0, 0.0, 1, 3, 0);
        assert_eq!(jobs.len(), 10);
        assert!(jobs.iter().all(|j| j.burst_time == 3));
    }
}
