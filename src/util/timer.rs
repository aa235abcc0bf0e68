//! One-shot timer scheduling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Debounce, throttle, alert dismissal, and the submit failsafe all need
//! delayed callbacks. In the browser these are `setTimeout` timers owned by
//! `gloo_timers`; natively they run against [`VirtualClock`], which only fires
//! tasks when time is advanced explicitly.
//!
//! Every scheduled task is owned by the [`TimerHandle`] returned for it.
//! Dropping the handle cancels the task, so a component that is disposed
//! cannot be called back later.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Shared, single-threaded scheduler reference.
pub type SharedScheduler = Rc<dyn Scheduler>;

/// Source of delayed one-shot callbacks.
pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds unless the returned
    /// handle is dropped first.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle;
}

/// Ownership token for a scheduled task. Dropping it cancels the task.
#[must_use = "dropping a TimerHandle cancels the scheduled task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Build a handle that runs `cancel` when dropped.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Cancel the task explicitly.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle").field("armed", &self.cancel.is_some()).finish()
    }
}

/// `setTimeout`-backed scheduler for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let timeout = gloo_timers::callback::Timeout::new(delay_ms, task);
        TimerHandle::new(move || drop(timeout))
    }
}

/// Scheduler used by the page bootstrap.
#[cfg(feature = "hydrate")]
pub fn browser_scheduler() -> SharedScheduler {
    Rc::new(BrowserScheduler)
}

/// Deterministic scheduler driven by [`VirtualClock::advance`].
///
/// Tasks due at the same instant run in the order they were scheduled. A task
/// may schedule further tasks; those run within the same `advance` call when
/// they fall due before its target time.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<ClockInner>,
}

#[derive(Default)]
struct ClockInner {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<PendingTask>>,
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.inner.now_ms.get()
    }

    /// Number of scheduled tasks that have neither run nor been cancelled.
    pub fn pending(&self) -> usize {
        self.inner
            .queue
            .borrow()
            .iter()
            .filter(|task| !task.cancelled.get())
            .count()
    }

    /// Move time forward by `delta_ms`, running every task that falls due.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, delta_ms: u64) -> usize {
        let target = self.now_ms().saturating_add(delta_ms);
        let mut ran = 0;
        while let Some(next) = self.take_next_due(target) {
            self.inner.now_ms.set(next.due_ms.max(self.now_ms()));
            (next.task)();
            ran += 1;
        }
        self.inner.now_ms.set(target);
        ran
    }

    fn take_next_due(&self, target: u64) -> Option<PendingTask> {
        let mut queue = self.inner.queue.borrow_mut();
        queue.retain(|task| !task.cancelled.get());
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= target)
            .min_by_key(|(_, task)| (task.due_ms, task.seq))
            .map(|(index, _)| index)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        let cancelled = Rc::new(Cell::new(false));
        self.inner.queue.borrow_mut().push(PendingTask {
            due_ms: self.now_ms().saturating_add(u64::from(delay_ms)),
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        TimerHandle::new(move || cancelled.set(true))
    }
}

impl std::fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualClock")
            .field("now_ms", &self.now_ms())
            .field("pending", &self.pending())
            .finish()
    }
}
