//! Notification state management
//!
//! Transient messages for config warnings and provider fallbacks.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info (gray) - short duration
    #[default]
    Info,
    /// Warning (yellow) - long duration - for invalid config or fallbacks
    Warning,
    /// Error (red) - permanent until dismissed
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None, // Permanent
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationType::Warning => NotificationStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            NotificationType::Error => NotificationStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = permanent
}

impl Notification {
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    /// Check if notification has expired
    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false, // Permanent notifications never expire
        }
    }
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (gray, 1.5s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification (yellow, 10s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    /// Show an error notification (red, permanent)
    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Error));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Get current notification if visible
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Get current notification message if visible (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_warning_notification() {
        let notif = Notification::with_type("Invalid config", NotificationType::Warning);
        assert_eq!(notif.message, "Invalid config");
        assert_eq!(notif.duration, Some(Duration::from_secs(10)));
        assert_eq!(notif.style.bg, Color::Yellow);
        assert!(!notif.is_expired());
    }

    #[test]
    fn test_error_notification_is_permanent() {
        let mut state = NotificationState::new();
        state.show_error("Worker crashed");
        assert_eq!(state.current_message(), Some("Worker crashed"));
        assert!(!state.clear_if_expired());
        assert!(state.current().is_some());
    }

    #[test]
    fn test_notification_expiration() {
        let mut notif = Notification::with_type("Expiring", NotificationType::Info);
        notif.duration = Some(Duration::from_millis(10));
        assert!(!notif.is_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(notif.is_expired());
    }

    #[test]
    fn test_notification_replacement() {
        let mut state = NotificationState::new();
        state.show("First");
        state.show_warning("Second");
        assert_eq!(state.current_message(), Some("Second"));
    }

    #[test]
    fn test_clear_if_expired() {
        let mut state = NotificationState::new();
        state.show("Test");
        if let Some(ref mut notif) = state.current {
            notif.duration = Some(Duration::from_millis(10));
        }

        assert!(!state.clear_if_expired()); // Not expired yet
        thread::sleep(Duration::from_millis(20));
        assert!(state.clear_if_expired()); // Now expired
        assert!(state.current().is_none());
    }
}
