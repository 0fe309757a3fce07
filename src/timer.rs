//! One-shot deferred actions for single-threaded screens.
//!
//! Scheduling returns a [`TimerHandle`] that owns the pending action:
//! dropping the handle cancels it. Screens keep their handles as fields, so
//! tearing a screen down cancels whatever it still had scheduled.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use chrono::{DateTime, Utc};
use tracing::trace;

type Action = Box<dyn FnOnce()>;

struct PendingTimer {
    deadline: DateTime<Utc>,
    action: Action,
}

#[derive(Default)]
struct TimerState {
    next_id: u64,
    pending: BTreeMap<u64, PendingTimer>,
}

/// Queue of deferred actions, driven by [`TimerQueue::run_due`].
#[derive(Clone, Default)]
pub struct TimerQueue {
    state: Rc<RefCell<TimerState>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run on the first `run_due` at or after `deadline`.
    pub fn schedule_once(
        &self,
        deadline: DateTime<Utc>,
        action: impl FnOnce() + 'static,
    ) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.pending.insert(
            id,
            PendingTimer {
                deadline,
                action: Box::new(action),
            },
        );
        trace!(timer = id, %deadline, "scheduled deferred action");
        TimerHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Runs every action whose deadline has passed, earliest first.
    pub fn run_due(&self, now: DateTime<Utc>) -> usize {
        let due = {
            let mut state = self.state.borrow_mut();
            let mut ids: Vec<(DateTime<Utc>, u64)> = state
                .pending
                .iter()
                .filter(|(_, timer)| timer.deadline <= now)
                .map(|(id, timer)| (timer.deadline, *id))
                .collect();
            ids.sort();
            ids.into_iter()
                .filter_map(|(_, id)| state.pending.remove(&id))
                .collect::<Vec<_>>()
        };
        let fired = due.len();
        for timer in due {
            (timer.action)();
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.state
            .borrow()
            .pending
            .values()
            .map(|timer| timer.deadline)
            .min()
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Owned reference to a scheduled action. Dropping it cancels the action.
#[derive(Debug)]
pub struct TimerHandle {
    id: u64,
    state: Weak<RefCell<TimerState>>,
}

impl TimerHandle {
    /// `true` while the action has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.state
            .upgrade()
            .map(|state| state.borrow().pending.contains_key(&self.id))
            .unwrap_or(false)
    }

    /// Cancels the action. Consuming the handle runs its `Drop`, which does the work.
    pub fn cancel(self) {}
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if state.borrow_mut().pending.remove(&self.id).is_some() {
                trace!(timer = self.id, "cancelled deferred action");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::cell::Cell;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn action_runs_once_at_deadline() {
        let queue = TimerQueue::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handle = queue.schedule_once(epoch() + Duration::milliseconds(2000), move || {
            counter.set(counter.get() + 1)
        });

        assert_eq!(queue.run_due(epoch() + Duration::milliseconds(1999)), 0);
        assert!(handle.is_pending());
        assert_eq!(queue.run_due(epoch() + Duration::milliseconds(2000)), 1);
        assert_eq!(queue.run_due(epoch() + Duration::milliseconds(5000)), 0);
        assert_eq!(hits.get(), 1);
        assert!(!handle.is_pending());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let queue = TimerQueue::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handle = queue.schedule_once(epoch(), move || counter.set(counter.get() + 1));
        assert_eq!(queue.pending(), 1);

        drop(handle);

        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.run_due(epoch() + Duration::seconds(10)), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn due_actions_run_earliest_first() {
        let queue = TimerQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let late = Rc::clone(&order);
        let early = Rc::clone(&order);
        let _a = queue.schedule_once(epoch() + Duration::seconds(2), move || {
            late.borrow_mut().push("late")
        });
        let _b = queue.schedule_once(epoch() + Duration::seconds(1), move || {
            early.borrow_mut().push("early")
        });

        assert_eq!(queue.next_deadline(), Some(epoch() + Duration::seconds(1)));
        queue.run_due(epoch() + Duration::seconds(3));

        assert_eq!(*order.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn explicit_cancel_removes_the_action() {
        let queue = TimerQueue::new();
        let handle = queue.schedule_once(epoch(), || {});

        handle.cancel();

        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn handle_outliving_queue_is_harmless() {
        let queue = TimerQueue::new();
        let handle = queue.schedule_once(epoch(), || {});
        drop(queue);

        assert!(!handle.is_pending());
        handle.cancel();
    }
}
