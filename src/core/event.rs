use crate::core::{Pid, TaskId, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    // Arrival admitted to the tail of the ready queue
    Admitted {
        task: TaskId,
        pid: Pid,
        at: Ticks,
    },
    Dispatched {
        task: TaskId,
        pid: Pid,
        at: Ticks,
        slice: Ticks,
    },
    // Quantum expired with work left; task went back to the tail
    Preempted {
        task: TaskId,
        pid: Pid,
        at: Ticks,
    },
    Retired {
        task: TaskId,
        pid: Pid,
        at: Ticks,
    },
    // Ready queue empty for one tick
    CpuIdle {
        at: Ticks,
    },
}

impl SchedEvent {
    pub fn at(&self) -> Ticks {
        match *self {
            Self::Admitted { at, .. }
            | Self::Dispatched { at, .. }
            | Self::Preempted { at, .. }
            | Self::Retired { at, .. }
            | Self::CpuIdle { at } => at,
        }
    }
}
