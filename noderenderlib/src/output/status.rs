//! Line-by-line reporting of node status events.

use tracing::Level;

use crate::data::StatusEvent;

const TAG: &str = "[WatchNodeStatus]";

/// A human-readable report for one status event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: Level,
    pub message: String,
}

impl StatusLine {
    pub fn from_event(event: &StatusEvent) -> Self {
        match event.failure() {
            Some(error) => StatusLine {
                level: Level::ERROR,
                message: format!(
                    "{} Error when get status for node {}: {}",
                    TAG, event.nodename, error
                ),
            },
            None => StatusLine {
                level: Level::INFO,
                message: format!(
                    "{} Node {} on pod {}, alive: {}",
                    TAG, event.nodename, event.podname, event.alive
                ),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::ERROR
    }

    /// Emit through `tracing` at the line's level.
    pub fn emit(&self) {
        if self.is_error() {
            tracing::error!("{}", self.message);
        } else {
            tracing::info!("{}", self.message);
        }
    }
}

/// Report each event as soon as it is pulled, in arrival order.
///
/// Failed events are reported and never stop the loop. Returns the number of
/// events reported.
pub fn report_status_events<I>(events: I) -> usize
where
    I: IntoIterator<Item = StatusEvent>,
{
    let mut reported = 0;
    for event in events {
        StatusLine::from_event(&event).emit();
        reported += 1;
    }
    reported
}
