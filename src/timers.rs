//! Timers
//!
//! One-shot timeouts behind [`TimerDriver`], a [`TimerScope`] that owns every
//! timer a page schedules, and [`debounce`].

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Handle returned by [`TimerDriver::set_timeout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        TimerId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

pub trait TimerDriver {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Clearing a fired or unknown timer is a no-op
    fn clear_timeout(&self, id: TimerId);
}

struct ScopeInner<T: TimerDriver> {
    driver: Rc<T>,
    pending: RefCell<HashSet<TimerId>>,
    closed: Cell<bool>,
}

/// Tracks the timers scheduled on behalf of one page.
///
/// `cancel_all` clears everything still pending and closes the scope; later
/// `schedule` calls return `None` without touching the driver.
pub struct TimerScope<T: TimerDriver> {
    inner: Rc<ScopeInner<T>>,
}

impl<T: TimerDriver> Clone for TimerScope<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: TimerDriver + 'static> TimerScope<T> {
    pub fn new(driver: Rc<T>) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                driver,
                pending: RefCell::new(HashSet::new()),
                closed: Cell::new(false),
            }),
        }
    }

    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<TimerId> {
        if self.inner.closed.get() {
            return None;
        }

        let slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        let fired_slot = Rc::clone(&slot);
        let inner = Rc::downgrade(&self.inner);
        let id = self.inner.driver.set_timeout(
            delay_ms,
            Box::new(move || {
                if let (Some(inner), Some(id)) = (inner.upgrade(), fired_slot.get()) {
                    inner.pending.borrow_mut().remove(&id);
                }
                callback();
            }),
        );
        slot.set(Some(id));
        self.inner.pending.borrow_mut().insert(id);
        Some(id)
    }

    pub fn cancel(&self, id: TimerId) {
        let was_pending = self.inner.pending.borrow_mut().remove(&id);
        if was_pending {
            self.inner.driver.clear_timeout(id);
        }
    }

    pub fn cancel_all(&self) {
        self.inner.closed.set(true);
        let pending: Vec<TimerId> = self.inner.pending.borrow_mut().drain().collect();
        for id in pending {
            self.inner.driver.clear_timeout(id);
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.get()
    }
}

/// Wrap `f` so it runs only after `wait_ms` pass without another call.
///
/// Each call cancels the pending invocation; the last call's argument wins.
pub fn debounce<T, A, F>(timers: TimerScope<T>, wait_ms: u32, f: F) -> impl Fn(A)
where
    T: TimerDriver + 'static,
    A: 'static,
    F: Fn(A) + 'static,
{
    let f = Rc::new(f);
    let pending: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
    move |arg: A| {
        if let Some(id) = pending.take() {
            timers.cancel(id);
        }
        let f = Rc::clone(&f);
        let fired = Rc::clone(&pending);
        let id = timers.schedule(wait_ms, move || {
            fired.set(None);
            f(arg);
        });
        pending.set(id);
    }
}
