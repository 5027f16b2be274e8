use super::state::SimCtx;

/// Re-checks the engine invariants after every step in debug builds.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert!(
            ctx.current.is_none(),
            "Task {:?} still on the CPU between steps",
            ctx.current
        );
        debug_assert_eq!(
            ctx.now,
            ctx.busy_ticks + ctx.idle_ticks,
            "Clock drifted from busy + idle ticks"
        );

        let mut delivered = 0;
        for task in &ctx.tasks {
            let id = task.id;
            debug_assert!(
                task.remaining_time <= task.burst_time,
                "Task {id} has more work left than its burst"
            );
            delivered += task.executed();

            if let Some(first_run) = task.first_run_time {
                debug_assert!(
                    first_run >= task.arrival_time,
                    "Task {id} ran before it arrived"
                );
            }
            if let Some(completion) = task.completion_time {
                debug_assert_eq!(task.remaining_time, 0, "Task {id} retired with work left");
                debug_assert!(
                    task.first_run_time.is_some_and(|first_run| first_run <= completion),
                    "Task {id} completed before it first ran"
                );
                debug_assert!(
                    !ctx.ready.contains(id),
                    "Retired task {id} still present in the ready queue"
                );
            }
            if ctx.ready.contains(id) {
                debug_assert!(task.enqueued, "Task {id} queued without being admitted");
            }
        }
        debug_assert_eq!(
            delivered, ctx.busy_ticks,
            "CPU time delivered does not match busy ticks"
        );
    }
}
