//! Debounce and throttle wrappers over a [`Scheduler`].
//!
//! `Debounced` is trailing-edge: every call re-arms a single timer and only
//! the last call in a burst runs, `wait_ms` after it was made. `Throttled` is
//! leading-edge: a call runs immediately and opens a cooldown window during
//! which further calls are dropped.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::util::timer::{SharedScheduler, TimerHandle};

/// Wrap `func` so bursts of calls collapse into one call with the last
/// arguments, made `wait_ms` after the burst ends.
pub fn debounce<A, F>(func: F, wait_ms: u32, scheduler: SharedScheduler) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        inner: Rc::new(DebounceInner {
            func: Box::new(func),
            wait_ms,
            scheduler,
            pending: RefCell::new(None),
        }),
    }
}

/// Wrap `func` so it runs at most once per `limit_ms` window.
pub fn throttle<A, F>(func: F, limit_ms: u32, scheduler: SharedScheduler) -> Throttled<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Throttled {
        inner: Rc::new(ThrottleInner {
            func: Box::new(func),
            limit_ms,
            scheduler,
            cooldown: RefCell::new(None),
            invocations: Cell::new(0),
        }),
    }
}

/// Trailing-edge debounced callback. Clones share the same pending timer.
pub struct Debounced<A> {
    inner: Rc<DebounceInner<A>>,
}

struct DebounceInner<A> {
    func: Box<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: SharedScheduler,
    pending: RefCell<Option<TimerHandle>>,
}

impl<A: 'static> Debounced<A> {
    /// Record a trigger, superseding any call still waiting.
    pub fn call(&self, args: A) {
        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.wait_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let fired = inner.pending.take();
                drop(fired);
                (inner.func)(args);
            }),
        );
        let superseded = self.inner.pending.replace(Some(handle));
        drop(superseded);
    }

    /// Drop the waiting call, if any, without running it.
    pub fn cancel(&self) {
        let pending = self.inner.pending.take();
        drop(pending);
    }

    /// Whether a call is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

/// Leading-edge throttled callback. Clones share the same cooldown window.
pub struct Throttled<A> {
    inner: Rc<ThrottleInner<A>>,
}

struct ThrottleInner<A> {
    func: Box<dyn Fn(A)>,
    limit_ms: u32,
    scheduler: SharedScheduler,
    cooldown: RefCell<Option<TimerHandle>>,
    invocations: Cell<u64>,
}

impl<A: 'static> Throttled<A> {
    /// Run immediately unless a cooldown window is open.
    ///
    /// Returns `true` when the wrapped function ran.
    pub fn call(&self, args: A) -> bool {
        if self.inner.cooldown.borrow().is_some() {
            return false;
        }

        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.limit_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let expired = inner.cooldown.take();
                    drop(expired);
                }
            }),
        );
        *self.inner.cooldown.borrow_mut() = Some(handle);

        self.inner.invocations.set(self.inner.invocations.get() + 1);
        (self.inner.func)(args);
        true
    }

    /// Whether calls are currently being dropped.
    pub fn is_cooling_down(&self) -> bool {
        self.inner.cooldown.borrow().is_some()
    }

    /// Total number of calls that reached the wrapped function.
    pub fn invocations(&self) -> u64 {
        self.inner.invocations.get()
    }
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}
