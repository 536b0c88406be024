//! Transient notifications.
//!
//! A toast is visible for [`TOAST_DURATION`] after it is shown. Showing a new
//! toast replaces the message and restarts the timer; there is no queue.
//! Time is always passed in by the caller so expiry is deterministic in tests.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Error and success toasts differ only in colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    /// True until [`TOAST_DURATION`] has elapsed since the toast was shown.
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < TOAST_DURATION
    }
}

/// Single toast slot.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    current: Option<Toast>,
}

impl Toaster {
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::debug!(?kind, %message, "toast");
        self.current = Some(Toast { message, kind, shown_at: now });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastKind::Error, now);
    }

    /// The toast to draw at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|t| t.is_visible(now))
    }

    /// Drops an expired toast. Called on every logic tick.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| !t.is_visible(now)) {
            self.current = None;
        }
    }

    /// The last toast shown, visible or not.
    pub fn last(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_hides_after_three_seconds() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.error("boom", t0);

        assert!(toaster.visible(t0 + Duration::from_millis(2999)).is_some());
        assert!(toaster.visible(t0 + TOAST_DURATION).is_none());

        toaster.expire(t0 + TOAST_DURATION);
        assert!(toaster.last().is_none());
    }

    #[test]
    fn second_toast_replaces_text_and_restarts_timer() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.error("first", t0);
        let t1 = t0 + Duration::from_secs(2);
        toaster.success("second", t1);

        let shown = toaster.visible(t0 + Duration::from_millis(4500)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, ToastKind::Success);
        assert!(toaster.visible(t1 + TOAST_DURATION).is_none());
    }

    #[test]
    fn expire_keeps_a_live_toast() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.success("copied", t0);
        toaster.expire(t0 + Duration::from_secs(1));
        assert_eq!(toaster.last().map(|t| t.message.as_str()), Some("copied"));
    }
}
