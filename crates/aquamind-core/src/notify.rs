//! Notification collaborator.
//!
//! Mirrors the browser Notification permission model: a notifier starts in
//! `Default`, the user grants or denies, and `notify` is fire-and-forget,
//! silently skipped unless permission is granted.

use serde::{Deserialize, Serialize};

/// Reminder notification title.
pub const REMINDER_TITLE: &str = "💧 Su Zamanı!";

/// Templated reminder body embedding the current user name.
pub fn reminder_body(name: &str) -> String {
    format!("Selam {name}, biraz su içip tazelenmeye ne dersin?")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    Granted,
    Denied,
    Default,
}

/// Host notification surface.
///
/// `notify` must never fail: implementations silently ignore the call when
/// permission is not granted.
pub trait Notifier: Send {
    fn permission(&self) -> NotificationPermission;

    /// Ask the host for permission, returning the resulting status.
    fn request_permission(&mut self) -> NotificationPermission;

    /// Fire-and-forget delivery of a notification.
    fn notify(&self, title: &str, body: &str);
}

/// Terminal-backed notifier used by the CLI. Requesting permission always
/// grants; there is no host prompt to deny from.
pub struct ConsoleNotifier {
    permission: NotificationPermission,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            permission: NotificationPermission::Default,
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_permission(&mut self) -> NotificationPermission {
        self.permission = NotificationPermission::Granted;
        self.permission
    }

    fn notify(&self, title: &str, body: &str) {
        if self.permission != NotificationPermission::Granted {
            return;
        }
        println!("{title}");
        println!("{body}");
    }
}
