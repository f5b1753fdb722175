//! Node liveness notifications.

use serde::{Deserialize, Serialize};

/// One liveness notification for a node.
///
/// When `error` holds a non-empty message the event reports a failure and
/// `alive`/`podname` carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub nodename: String,
    #[serde(default)]
    pub podname: String,
    #[serde(default)]
    pub alive: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusEvent {
    /// A successful liveness report
    pub fn alive(nodename: impl Into<String>, podname: impl Into<String>, alive: bool) -> Self {
        Self {
            nodename: nodename.into(),
            podname: podname.into(),
            alive,
            error: None,
        }
    }

    /// A failed status lookup
    pub fn failed(nodename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            nodename: nodename.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// The failure reason, if any. Empty strings count as no failure.
    pub fn failure(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_requires_non_empty_error() {
        assert_eq!(StatusEvent::alive("n1", "pod", true).failure(), None);
        assert_eq!(StatusEvent::failed("n1", "").failure(), None);
        assert_eq!(StatusEvent::failed("n1", "timeout").failure(), Some("timeout"));
    }

    #[test]
    fn test_deserialize_without_error() {
        let event: StatusEvent =
            serde_json::from_str(r#"{"nodename":"n1","podname":"p","alive":true}"#).unwrap();
        assert_eq!(event, StatusEvent::alive("n1", "p", true));
    }
}
