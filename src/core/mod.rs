pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::RoundRobinCore;
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{
    ArrivalKey, FinishedProcess, Pid, ProcessRecord, ReadyQueue, SimCtx, TaskId, Ticks,
};
