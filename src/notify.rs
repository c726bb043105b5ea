//! Notification sink contract.
//!
//! The submission lifecycle reports outcomes through this trait; the TUI
//! implements it with transient toasts, tests with a recording fake. Calls
//! are fire-and-forget.

/// Receiver for transient success/failure notices.
pub trait NotificationSink {
    /// Reports a successful operation.
    fn notify_success(&mut self, message: &str);

    /// Reports a failed operation.
    fn notify_failure(&mut self, message: &str);
}
