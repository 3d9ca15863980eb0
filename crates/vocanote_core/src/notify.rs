//! User-visible notification boundary.
//!
//! # Responsibility
//! - Define the two notification surfaces the core raises: a transient
//!   success toast and a blocking alert.
//!
//! # Invariants
//! - Notifications are fire-and-forget; the core never waits on them.

use log::{info, warn};

/// Sink for user-visible notifications.
///
/// Host shells plug in their toast/alert widgets; the core only decides
/// when to raise which surface.
pub trait Notifier {
    /// Transient success toast (raised after note creation).
    fn toast_success(&self, message: &str);
    /// Blocking notice (raised when the speech capability is unavailable).
    fn blocking_alert(&self, message: &str);
}

/// Default sink that routes notifications into the log stream.
///
/// Used by headless hosts and the CLI probe.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn toast_success(&self, message: &str) {
        info!("event=notify module=notify kind=toast_success message={message}");
    }

    fn blocking_alert(&self, message: &str) {
        warn!("event=notify module=notify kind=blocking_alert message={message}");
    }
}
