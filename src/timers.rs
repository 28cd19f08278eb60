//! Fire-and-forget one-shot timers

use crate::state::FormKind;
use std::time::{Duration, Instant};

/// Deferred effects with fixed delays and no cancellation. Every effect
/// re-derives from current state when it fires, so a stale one is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    /// Hide a form's message area and release a Blocked submission
    HideFormMessage(FormKind),
    /// Drop the error highlight from a form's fields
    ClearFieldErrors(FormKind),
    /// Focus the first popup input once the open transition settled
    FocusPopupField,
    /// Hide the loading overlay after the bar has been full for the delay
    HideLoadingOverlay,
    /// Re-trigger a product card's appear animation after a filter change
    RestartCardAnimation(String),
}

#[derive(Debug)]
struct Scheduled {
    fire_at: Instant,
    action: DeferredAction,
}

/// One-shot timer queue. Due actions fire in schedule order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: DeferredAction) {
        self.pending.push(Scheduled {
            fire_at: now + delay,
            action,
        });
    }

    /// Remove and return every action whose deadline has passed
    pub fn fire_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.fire_at <= now {
                due.push(scheduled.action.clone());
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
