use log::{debug, trace};

use super::{
    event::SchedEvent,
    observer::Observer,
    state::{Pid, SimCtx, TaskId, Ticks},
};
use crate::config::Quantum;

/// Single-CPU Round-Robin engine.
///
/// Each [`step`](Self::step) either idles the CPU for one tick or runs the
/// head of the ready queue for one full slice. Arrivals reached during a
/// slice are admitted tick by tick, so they land ahead of the task being
/// preempted at the end of that slice.
pub struct RoundRobinCore {
    pub ctx: SimCtx,
    quantum: Quantum,
    observer: Observer,
}

impl RoundRobinCore {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            ctx: SimCtx::new(),
            quantum,
            observer: Observer::new(),
        }
    }

    pub fn add_task(&mut self, pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> TaskId {
        self.ctx.create_task(pid, arrival_time, burst_time)
    }

    pub fn step(&mut self) -> Vec<SchedEvent> {
        let mut events = Vec::new();
        if self.ctx.all_retired() {
            return events;
        }

        self.admit(&mut events);

        let Some(task_id) = self.ctx.ready.dequeue_head() else {
            trace!("t={} cpu idle", self.ctx.now);
            events.push(SchedEvent::CpuIdle { at: self.ctx.now });
            self.ctx.idle_tick();
            self.observer.observe(&self.ctx);
            return events;
        };

        let start = self.ctx.now;
        let slice = self.ctx.set_running(task_id, self.quantum);
        let pid = self.ctx.task(task_id).pid;
        debug!("t={start} dispatch pid {pid} for {slice} ticks");
        events.push(SchedEvent::Dispatched {
            task: task_id,
            pid,
            at: start,
            slice,
        });

        for _ in 0..slice {
            self.ctx.run_current_tick();
            self.admit(&mut events);
        }

        let now = self.ctx.now;
        if self.ctx.task(task_id).remaining_time == 0 {
            self.ctx.retire_current();
            debug!("t={now} pid {pid} retired");
            events.push(SchedEvent::Retired {
                task: task_id,
                pid,
                at: now,
            });
        } else {
            self.ctx.preempt_current();
            debug!(
                "t={now} pid {pid} preempted with {} ticks left",
                self.ctx.task(task_id).remaining_time
            );
            events.push(SchedEvent::Preempted {
                task: task_id,
                pid,
                at: now,
            });
        }

        self.observer.observe(&self.ctx);
        events
    }

    /// Steps until every task has retired.
    pub fn run(&mut self) {
        while !self.ctx.all_retired() {
            self.step();
        }
    }

    fn admit(&mut self, events: &mut Vec<SchedEvent>) {
        let now = self.ctx.now;
        for task in self.ctx.admit_arrivals() {
            let pid = self.ctx.task(task).pid;
            trace!("t={now} admit pid {pid}");
            events.push(SchedEvent::Admitted { task, pid, at: now });
        }
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    pub fn all_retired(&self) -> bool {
        self.ctx.all_retired()
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
