use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::page::{MissionError, Navigation, ViewId};

/// History is trimmed once it grows past this many transitions
const MAX_HISTORY: usize = 1000;
/// Oldest transitions dropped per trim
const HISTORY_TRIM: usize = 500;

/// The page sequencer owns the identifier of the displayed view and moves
/// it through the fixed mission order. It never holds more than one
/// primary view; the only overlap is the scripted transitional overlay
/// while the landing wall departs.
#[derive(Debug, Clone)]
pub struct PageSequencer {
    /// Currently displayed primary view
    current: ViewId,
    /// View rendering behind the primary one during a transition
    overlay: Option<ViewId>,
    /// Recent transitions, oldest first
    history: Vec<ViewTransition>,
}

/// What a renderer should put on screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screen {
    pub primary: ViewId,
    pub overlay: Option<ViewId>,
}

/// A recorded view change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewTransition {
    pub from: ViewId,
    pub to: ViewId,
    pub at: DateTime<Utc>,
    pub trigger: TransitionTrigger,
}

/// Why a transition happened
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransitionTrigger {
    Navigation(Navigation),
    /// A transitional overlay became the primary view
    Settled,
}

/// Result of applying a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerOutcome {
    /// The primary view changed
    Switched(ViewId),
    /// The target is rendering behind the current view until settled
    OverlayStarted(ViewId),
    /// Nothing to do
    Unchanged,
}

impl PageSequencer {
    /// Start a sequencer on the landing view
    pub fn new() -> Self {
        Self {
            current: ViewId::Landing,
            overlay: None,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn overlay(&self) -> Option<ViewId> {
        self.overlay
    }

    pub fn screen(&self) -> Screen {
        Screen {
            primary: self.current,
            overlay: self.overlay,
        }
    }

    pub fn history(&self) -> &[ViewTransition] {
        &self.history
    }

    /// Apply a navigation request. A pending overlay is settled first, so
    /// the request always starts from a single primary view.
    pub fn apply(&mut self, navigation: Navigation) -> Result<SequencerOutcome, MissionError> {
        let settled = self.settle();

        let target = match navigation {
            Navigation::Advance => self.current.next(),
            Navigation::Back => self.current.previous(),
            Navigation::Restart => Some(ViewId::Landing),
        };

        let target = match target {
            Some(target) => target,
            None => {
                return Err(MissionError::InvalidNavigation {
                    from: self.current,
                    navigation,
                })
            }
        };

        if target == self.current {
            debug!("Navigation {:?} leaves {} in place", navigation, self.current);
            return Ok(match settled {
                Some(view) => SequencerOutcome::Switched(view),
                None => SequencerOutcome::Unchanged,
            });
        }

        // Leaving the landing view forward renders the next view behind it
        // until the wall animation clears.
        if navigation == Navigation::Advance && self.current == ViewId::Landing {
            self.overlay = Some(target);
            info!("Transition started: {} behind {}", target, self.current);
            return Ok(SequencerOutcome::OverlayStarted(target));
        }

        self.switch_to(target, TransitionTrigger::Navigation(navigation));
        Ok(SequencerOutcome::Switched(target))
    }

    /// Promote a pending overlay to the primary view
    pub fn settle(&mut self) -> Option<ViewId> {
        let target = self.overlay.take()?;
        self.switch_to(target, TransitionTrigger::Settled);
        Some(target)
    }

    fn switch_to(&mut self, target: ViewId, trigger: TransitionTrigger) {
        let from = self.current;
        self.current = target;
        self.history.push(ViewTransition {
            from,
            to: target,
            at: Utc::now(),
            trigger,
        });
        if self.history.len() > MAX_HISTORY {
            self.history.drain(0..HISTORY_TRIM);
        }
        info!("View changed: {} -> {}", from, target);
    }
}

impl Default for PageSequencer {
    fn default() -> Self {
        Self::new()
    }
}
