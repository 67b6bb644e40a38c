//! Click event model for asynchronous click counting.

/// A pending click on a short link.
///
/// Sent from the redirect handler to
/// [`crate::domain::click_worker::run_click_worker`] through a bounded
/// channel, so the redirect never waits on the counter update.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    pub short_code: String,
}

impl ClickEvent {
    /// Creates a click event for `short_code`.
    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation() {
        let event = ClickEvent::new("abc123");
        assert_eq!(event.short_code, "abc123");
    }

    #[test]
    fn test_click_event_clone() {
        let event = ClickEvent::new(String::from("xyz"));
        assert_eq!(event.clone(), event);
    }
}
