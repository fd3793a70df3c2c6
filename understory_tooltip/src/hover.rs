// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-driven show/close delays for a single anchor.
//!
//! [`HoverGate`] turns pointer enter/leave events into delayed open and close requests.
//! It does not own a timer: the host feeds it timestamps and calls [`HoverGate::poll`]
//! when a deadline (see [`HoverGate::next_deadline`]) may have passed.
//!
//! ```
//! use understory_tooltip::hover::{HoverAction, HoverGate};
//!
//! let mut gate = HoverGate::new(500, 200);
//! gate.on_enter(1_000);
//! assert_eq!(gate.poll(1_200), None);
//! assert_eq!(gate.poll(1_500), Some(HoverAction::Open));
//!
//! gate.on_leave(2_000);
//! assert_eq!(gate.poll(2_200), Some(HoverAction::Close));
//! ```
//!
//! Leaving before the show delay elapses cancels the pending open and schedules nothing;
//! there is no tooltip to close.

use crate::config::TooltipConfig;

/// Request emitted by [`HoverGate::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    /// Open the tooltip for this anchor.
    Open,
    /// Close the tooltip.
    Close,
}

/// Delay state machine for one anchor.
#[derive(Clone, Debug, Default)]
pub struct HoverGate {
    /// Delay before opening, in milliseconds.
    pub show_delay: u64,
    /// Delay before closing, in milliseconds.
    pub close_delay: u64,
    /// Deadline of a pending open.
    show_at: Option<u64>,
    /// Deadline of a pending close.
    close_at: Option<u64>,
}

impl HoverGate {
    /// Create a gate with explicit delays.
    pub fn new(show_delay: u64, close_delay: u64) -> Self {
        Self {
            show_delay,
            close_delay,
            show_at: None,
            close_at: None,
        }
    }

    /// Create a gate using the delays of `config`.
    pub fn from_config(config: &TooltipConfig) -> Self {
        Self::new(config.show_delay_ms, config.close_delay_ms)
    }

    /// Pointer entered the anchor at `now`.
    ///
    /// Restarts the show delay. A close that is already scheduled stays scheduled.
    pub fn on_enter(&mut self, now: u64) {
        self.show_at = Some(now.saturating_add(self.show_delay));
    }

    /// Pointer left the anchor at `now`.
    ///
    /// If the show delay has not elapsed yet, the pending open is cancelled and nothing
    /// else happens. Otherwise a close is scheduled after the close delay.
    pub fn on_leave(&mut self, now: u64) {
        if self.show_at.take().is_some() {
            return;
        }
        self.close_at = Some(now.saturating_add(self.close_delay));
    }

    /// Whether an open is waiting for its delay.
    pub fn is_show_pending(&self) -> bool {
        self.show_at.is_some()
    }

    /// Whether a close is waiting for its delay.
    pub fn is_close_pending(&self) -> bool {
        self.close_at.is_some()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.show_at, self.close_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop every pending deadline.
    pub fn cancel(&mut self) {
        self.show_at = None;
        self.close_at = None;
    }

    /// Fire the earliest deadline that has passed at `now`.
    ///
    /// Each deadline fires at most once. When both have passed, the earlier one fires
    /// first and the other is returned by the next call.
    pub fn poll(&mut self, now: u64) -> Option<HoverAction> {
        let show_due = self.show_at.filter(|&t| t <= now);
        let close_due = self.close_at.filter(|&t| t <= now);
        match (show_due, close_due) {
            (Some(s), Some(c)) if c < s => {
                self.close_at = None;
                Some(HoverAction::Close)
            }
            (Some(_), _) => {
                self.show_at = None;
                Some(HoverAction::Open)
            }
            (None, Some(_)) => {
                self.close_at = None;
                Some(HoverAction::Close)
            }
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_after_show_delay() {
        let mut gate = HoverGate::new(500, 200);
        gate.on_enter(100);
        assert_eq!(gate.next_deadline(), Some(600), "show deadline armed");
        assert_eq!(gate.poll(599), None, "not yet due");
        assert_eq!(gate.poll(600), Some(HoverAction::Open), "due at deadline");
        assert_eq!(gate.poll(700), None, "fires only once");
    }

    #[test]
    fn early_leave_cancels_without_closing() {
        let mut gate = HoverGate::from_config(&TooltipConfig::default());
        gate.on_enter(0);
        gate.on_leave(100);
        assert!(!gate.is_show_pending(), "pending open cancelled");
        assert!(!gate.is_close_pending(), "no close scheduled");
        assert_eq!(gate.poll(10_000), None, "nothing ever fires");
    }

    #[test]
    fn leave_after_open_schedules_close() {
        let mut gate = HoverGate::new(500, 200);
        gate.on_enter(0);
        assert_eq!(gate.poll(500), Some(HoverAction::Open), "opened");
        gate.on_leave(800);
        assert_eq!(gate.poll(999), None, "close delay not elapsed");
        assert_eq!(
            gate.poll(1_000),
            Some(HoverAction::Close),
            "closed after delay"
        );
    }

    #[test]
    fn reenter_keeps_scheduled_close() {
        let mut gate = HoverGate::new(500, 200);
        gate.on_enter(0);
        let _ = gate.poll(500);
        gate.on_leave(600);
        gate.on_enter(650);
        assert_eq!(
            gate.poll(800),
            Some(HoverAction::Close),
            "close timer is independent"
        );
        assert_eq!(
            gate.poll(1_150),
            Some(HoverAction::Open),
            "new show fires later"
        );
    }

    #[test]
    fn earlier_deadline_fires_first() {
        let mut gate = HoverGate::new(100, 50);
        gate.on_enter(0);
        let _ = gate.poll(100);
        gate.on_leave(200); // close at 250
        gate.on_enter(210); // show at 310
        assert_eq!(
            gate.poll(400),
            Some(HoverAction::Close),
            "close was due first"
        );
        assert_eq!(gate.poll(400), Some(HoverAction::Open), "then the open");
        assert_eq!(gate.poll(400), None, "nothing left");
    }

    #[test]
    fn cancel_clears_everything() {
        let mut gate = HoverGate::new(10, 10);
        gate.on_enter(0);
        gate.cancel();
        assert_eq!(gate.next_deadline(), None, "no deadlines after cancel");
    }
}
