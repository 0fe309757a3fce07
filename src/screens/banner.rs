use std::{cell::RefCell, rc::Rc};

use chrono::{DateTime, Duration, Utc};

use crate::timer::{TimerHandle, TimerQueue};

/// Transient message that clears itself after a fixed delay.
///
/// The pending clear is owned by the banner. Showing a new message replaces
/// it, and dropping the banner cancels it.
#[derive(Debug)]
pub struct Banner {
    message: Rc<RefCell<Option<String>>>,
    timeout: Duration,
    clear: Option<TimerHandle>,
}

impl Banner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            message: Rc::new(RefCell::new(None)),
            timeout,
            clear: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, timers: &TimerQueue, now: DateTime<Utc>) {
        *self.message.borrow_mut() = Some(message.into());
        let slot = Rc::clone(&self.message);
        let deadline = now
            .checked_add_signed(self.timeout)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.clear = Some(timers.schedule_once(deadline, move || {
            slot.borrow_mut().take();
        }));
    }

    pub fn message(&self) -> Option<String> {
        self.message.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.message.borrow().is_some()
    }

    pub fn clear_pending(&self) -> bool {
        self.clear.as_ref().is_some_and(TimerHandle::is_pending)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
