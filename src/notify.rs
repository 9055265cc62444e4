//! User-facing notifications
//!
//! Fire-and-forget messages (toasts in the browser). The controller only
//! knows the `Notifier` trait; backends decide how to show them.

use serde::{Deserialize, Serialize};

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

/// A titled message with a short description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Shown when a game starts
    pub fn game_started() -> Self {
        Self::new(Severity::Info, "Use the arrow keys to move", "Score in the top goal!")
    }

    /// Shown after each goal with the updated score
    pub fn goal(score: u32) -> Self {
        Self::new(Severity::Success, "GOAL!", format!("Score: {}", score))
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        log::info!(
            "[{}] {}: {}",
            notification.severity.as_str(),
            notification.title,
            notification.description
        );
    }
}

/// Collects notifications in order
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_message_carries_score() {
        let n = Notification::goal(3);
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.description, "Score: 3");
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::game_started());
        sink.notify(Notification::goal(1));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Info);
        assert_eq!(sink[1].title, "GOAL!");
    }
}
