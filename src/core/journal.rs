use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Journals keep at most this many events before trimming
const MAX_EVENTS: usize = 1000;
/// Number of oldest events dropped on each trim
const TRIM_BATCH: usize = 500;

/// One entry in a mission journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionEvent {
    /// Event timestamp
    pub timestamp: DateTime<Utc>,
    /// Event kind
    pub kind: EventKind,
    /// Event description
    pub description: String,
    /// Associated data
    pub data: Option<serde_json::Value>,
}

/// Kinds of mission events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A page was mounted
    Mount,
    /// A user action was applied
    Action,
    /// A timer cue was delivered
    Cue,
    /// The sequencer changed views
    Navigation,
    /// The ship visual was resolved
    Visual,
    /// Something was rejected or fell back
    Warning,
}

/// Bounded event log of a mission session, mirrored to the logger
#[derive(Debug, Clone)]
pub struct Journal {
    owner: String,
    events: Vec<MissionEvent>,
}

impl Journal {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            events: Vec::new(),
        }
    }

    /// Record an event
    pub fn record(&mut self, kind: EventKind, description: &str, data: Option<serde_json::Value>) {
        match kind {
            EventKind::Warning => warn!("{}: {}", self.owner, description),
            _ => debug!("{}: {}", self.owner, description),
        }

        self.events.push(MissionEvent {
            timestamp: Utc::now(),
            kind,
            description: description.to_string(),
            data,
        });

        if self.events.len() > MAX_EVENTS {
            self.events.drain(0..TRIM_BATCH);
        }
    }

    /// The newest `limit` events, oldest first
    pub fn recent(&self, limit: usize) -> Vec<MissionEvent> {
        let start = self.events.len().saturating_sub(limit);
        self.events[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_returns_newest() {
        let mut journal = Journal::new("mission-test");
        for i in 0..5 {
            journal.record(EventKind::Action, &format!("event {}", i), None);
        }

        let recent = journal.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "event 3");
        assert_eq!(recent[1].description, "event 4");
        assert_eq!(journal.recent(50).len(), 5);
    }

    #[test]
    fn test_trims_when_full() {
        let mut journal = Journal::new("mission-test");
        for i in 0..=MAX_EVENTS {
            journal.record(EventKind::Cue, &format!("cue {}", i), None);
        }

        assert_eq!(journal.len(), MAX_EVENTS + 1 - TRIM_BATCH);
        assert_eq!(journal.recent(1)[0].description, format!("cue {}", MAX_EVENTS));
    }
}
