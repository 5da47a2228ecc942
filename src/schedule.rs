//! Scheduled Tasks
//!
//! Every delayed effect (alert dismissal, notification removal, label restore,
//! debounced lookup) goes through one registry so it can be cancelled at teardown.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

thread_local! {
    static PENDING: RefCell<HashMap<u64, Timeout>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Handle to a pending task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Run `task` after `delay_ms`, unless cancelled first
pub fn schedule<F>(delay_ms: u32, task: F) -> TaskId
where
    F: FnOnce() + 'static,
{
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    let timeout = Timeout::new(delay_ms, move || {
        let fired = PENDING.with(|pending| pending.borrow_mut().remove(&id));
        task();
        drop(fired);
    });
    PENDING.with(|pending| pending.borrow_mut().insert(id, timeout));

    TaskId(id)
}

/// Cancel a pending task; a task that already ran is ignored
pub fn cancel(id: TaskId) {
    let removed = PENDING.with(|pending| pending.borrow_mut().remove(&id.0));
    drop(removed);
}

/// Cancel everything still pending
pub fn cancel_all() {
    let drained: Vec<Timeout> = PENDING.with(|pending| pending.borrow_mut().drain().map(|(_, t)| t).collect());
    drop(drained);
}

/// Number of tasks waiting to fire
pub fn pending_count() -> usize {
    PENDING.with(|pending| pending.borrow().len())
}

/// Trailing-edge debounce: only the last call inside the quiet window runs
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<Cell<Option<TaskId>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Replace any waiting call with `f`
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(previous) = self.pending.take() {
            cancel(previous);
        }

        let slot = Rc::clone(&self.pending);
        let id = schedule(self.delay_ms, move || {
            slot.set(None);
            f();
        });
        self.pending.set(Some(id));
    }
}
