use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::config::Quantum;

// Index into the task Vec; equals the process' position in the input
pub type TaskId = usize;
pub type Pid = u32;
pub type Ticks = u64;

#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct ArrivalKey {
    pub time: Ticks,
    pub task: TaskId,
}

// KeyedPriorityQueue is a max-heap, so the earliest arrival (then the lowest
// input position) has to compare greatest
impl PartialOrd for ArrivalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArrivalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.time, other.task).cmp(&(self.time, self.task))
    }
}

/// Static and dynamic scheduling state of one process.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub id: TaskId,
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub first_run_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub enqueued: bool,
}

impl ProcessRecord {
    pub fn new(id: TaskId, pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            first_run_time: None,
            completion_time: None,
            enqueued: false,
        }
    }

    pub fn is_retired(&self) -> bool {
        self.completion_time.is_some()
    }

    /// CPU time delivered so far.
    pub fn executed(&self) -> Ticks {
        self.burst_time - self.remaining_time
    }

    /// Read-only view of a retired record, `None` while the process still has work.
    pub fn finished(&self) -> Option<FinishedProcess> {
        Some(FinishedProcess {
            pid: self.pid,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            first_run_time: self.first_run_time?,
            completion_time: self.completion_time?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedProcess {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub first_run_time: Ticks,
    pub completion_time: Ticks,
}

impl FinishedProcess {
    pub fn waiting_time(&self) -> Ticks {
        self.completion_time - self.arrival_time - self.burst_time
    }

    pub fn response_time(&self) -> Ticks {
        self.first_run_time - self.arrival_time
    }

    pub fn turnaround_time(&self) -> Ticks {
        self.completion_time - self.arrival_time
    }
}

/// FIFO of tasks eligible to run.
///
/// Membership is mirrored in a hash set so `contains` and the double-enqueue
/// check stay O(1); order lives only in the deque.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    tasks: VecDeque<TaskId>,
    members: FxHashSet<TaskId>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, task: TaskId) {
        assert!(
            self.members.insert(task),
            "Task {task} already present in the ready queue"
        );
        self.tasks.push_back(task);
    }

    pub fn dequeue_head(&mut self) -> Option<TaskId> {
        let task = self.tasks.pop_front()?;
        let removed = self.members.remove(&task);
        debug_assert!(removed, "Task {task} missing ready queue membership");
        Some(task)
    }

    /// Pulls `task` out from anywhere in the queue. Returns whether it was queued.
    pub fn remove(&mut self, task: TaskId) -> bool {
        if !self.members.remove(&task) {
            return false;
        }
        let position = self
            .tasks
            .iter()
            .position(|&queued| queued == task)
            .expect("Ready queue membership out of sync with order");
        self.tasks.remove(position);
        true
    }

    pub fn head(&self) -> Option<TaskId> {
        self.tasks.front().copied()
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.members.contains(&task)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().copied()
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub tasks: Vec<ProcessRecord>,
    pub ready: ReadyQueue,
    pub current: Option<TaskId>,
    pub busy_ticks: Ticks,
    pub idle_ticks: Ticks,

    // Not-yet-admitted tasks ordered by (arrival_time, TaskId)
    arrivals: KeyedPriorityQueue<TaskId, ArrivalKey>,
    retired: usize,
}

impl Default for SimCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl SimCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            tasks: Vec::new(),
            ready: ReadyQueue::new(),
            current: None,
            busy_ticks: 0,
            idle_ticks: 0,
            arrivals: KeyedPriorityQueue::new(),
            retired: 0,
        }
    }

    pub fn create_task(&mut self, pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> TaskId {
        let id = self.tasks.len();
        self.tasks
            .push(ProcessRecord::new(id, pid, arrival_time, burst_time));
        self.arrivals.push(
            id,
            ArrivalKey {
                time: arrival_time,
                task: id,
            },
        );
        id
    }

    /// Moves every task arriving at `now` to the tail of the ready queue, in
    /// input order, and returns them.
    pub fn admit_arrivals(&mut self) -> Vec<TaskId> {
        let mut admitted = Vec::new();
        while let Some((_, &key)) = self.arrivals.peek() {
            if key.time > self.now {
                break;
            }
            debug_assert_eq!(
                key.time, self.now,
                "Task {} missed its arrival tick",
                key.task
            );
            self.arrivals.pop();

            let task = self.task_mut(key.task);
            assert!(!task.enqueued, "Task {} admitted twice", key.task);
            task.enqueued = true;
            self.ready.enqueue(key.task);
            admitted.push(key.task);
        }
        admitted
    }

    pub fn pending_arrivals(&self) -> usize {
        self.arrivals.len()
    }

    /// Puts `task_id` on the CPU and returns the length of its slice.
    pub fn set_running(&mut self, task_id: TaskId, quantum: Quantum) -> Ticks {
        debug_assert!(
            self.current.is_none(),
            "CPU already running task {:?}",
            self.current
        );
        debug_assert!(
            !self.ready.contains(task_id),
            "Running task {task_id} must not be queued"
        );

        self.current = Some(task_id);
        let now = self.now;
        let task = self.task_mut(task_id);
        if task.first_run_time.is_none() {
            task.first_run_time = Some(now);
        }
        task.remaining_time.min(quantum.get())
    }

    /// Charges one unit of CPU time to the running task.
    pub fn run_current_tick(&mut self) {
        let task_id = self.current.expect("No task on the CPU to charge");
        let task = self.task_mut(task_id);
        assert!(
            task.remaining_time > 0,
            "Task {task_id} ran past its burst"
        );
        task.remaining_time -= 1;
        self.busy_ticks += 1;
        self.now += 1;
    }

    pub fn idle_tick(&mut self) {
        debug_assert!(self.current.is_none(), "Idle tick with a task on the CPU");
        self.idle_ticks += 1;
        self.now += 1;
    }

    pub fn preempt_current(&mut self) -> TaskId {
        let task_id = self.current.take().expect("No task on the CPU to preempt");
        self.ready.enqueue(task_id);
        task_id
    }

    pub fn retire_current(&mut self) -> TaskId {
        let task_id = self.current.take().expect("No task on the CPU to retire");
        let now = self.now;
        let task = self.task_mut(task_id);
        debug_assert_eq!(
            task.remaining_time, 0,
            "Task {task_id} retired with work left"
        );
        debug_assert!(task.completion_time.is_none(), "Task {task_id} retired twice");
        task.completion_time = Some(now);
        self.retired += 1;
        task_id
    }

    pub fn all_retired(&self) -> bool {
        self.retired == self.tasks.len()
    }

    pub fn task(&self, task_id: TaskId) -> &ProcessRecord {
        &self.tasks[task_id]
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> &mut ProcessRecord {
        &mut self.tasks[task_id]
    }
}
