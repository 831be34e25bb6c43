use crate::core::constants::{
    EMPTY_RESULT_DISMISS, EMPTY_RESULT_TEXT, FETCH_ERROR_DISMISS, LOADING_TEXT,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Info,
    Error,
}

/// A transient banner shown by the display collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub shown_at: Instant,
    /// Hide automatically after this long; `None` stays until replaced
    pub auto_dismiss: Option<Duration>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
            auto_dismiss: None,
        }
    }

    pub fn with_auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss = Some(duration);
        self
    }

    pub fn loading() -> Self {
        Self::new(StatusKind::Loading, LOADING_TEXT)
    }

    pub fn no_results() -> Self {
        Self::new(StatusKind::Info, EMPTY_RESULT_TEXT).with_auto_dismiss(EMPTY_RESULT_DISMISS)
    }

    pub fn fetch_failed(reason: &str) -> Self {
        Self::new(StatusKind::Error, format!("Error loading POIs: {}", reason))
            .with_auto_dismiss(FETCH_ERROR_DISMISS)
    }

    pub fn location_failed(reason: &str) -> Self {
        Self::new(
            StatusKind::Error,
            format!("Location error: {}. Please enable location services.", reason),
        )
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.auto_dismiss {
            Some(duration) => now.saturating_duration_since(self.shown_at) >= duration,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_presets() {
        let loading = StatusMessage::loading();
        assert_eq!(loading.kind, StatusKind::Loading);
        assert!(loading.auto_dismiss.is_none());

        let empty = StatusMessage::no_results();
        assert_eq!(empty.auto_dismiss, Some(Duration::from_secs(3)));
        assert!(empty.text.starts_with("No points of interest found nearby"));

        let failed = StatusMessage::fetch_failed("HTTP 500");
        assert_eq!(failed.kind, StatusKind::Error);
        assert_eq!(failed.text, "Error loading POIs: HTTP 500");
        assert_eq!(failed.auto_dismiss, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_auto_dismiss_expiry() {
        let status = StatusMessage::no_results();
        let shown = status.shown_at;
        assert!(!status.is_expired_at(shown + Duration::from_secs(2)));
        assert!(status.is_expired_at(shown + Duration::from_secs(3)));

        let sticky = StatusMessage::location_failed("User denied Geolocation");
        assert!(!sticky.is_expired_at(shown + Duration::from_secs(3600)));
        assert_eq!(
            sticky.text,
            "Location error: User denied Geolocation. Please enable location services."
        );
    }
}
