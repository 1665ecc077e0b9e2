use std::error::Error;
use std::fmt::{Debug, Display};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pages::ship::ShipRig;

/// The named views of the mission, in forward order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Title screen with the boarding wall
    Landing,
    /// Era A: countdown and blast-off
    LaunchStation,
    /// Era B: flag planting and boost-away
    Moon,
    /// Era C: descent, colonisation and mission success
    Mars,
    /// Badges and works cited
    Completion,
}

impl ViewId {
    /// Every view in forward order
    pub const ORDER: [ViewId; 5] = [
        ViewId::Landing,
        ViewId::LaunchStation,
        ViewId::Moon,
        ViewId::Mars,
        ViewId::Completion,
    ];

    /// The view that follows this one, if any
    pub fn next(self) -> Option<ViewId> {
        let idx = Self::ORDER.iter().position(|v| *v == self)?;
        Self::ORDER.get(idx + 1).copied()
    }

    /// The view a "back" button leads to, if the view offers one
    pub fn previous(self) -> Option<ViewId> {
        match self {
            ViewId::LaunchStation => Some(ViewId::Landing),
            ViewId::Moon => Some(ViewId::LaunchStation),
            ViewId::Mars => Some(ViewId::Moon),
            ViewId::Landing | ViewId::Completion => None,
        }
    }

    /// Stable name used in URLs and template names
    pub fn slug(self) -> &'static str {
        match self {
            ViewId::Landing => "landing",
            ViewId::LaunchStation => "launch_station",
            ViewId::Moon => "moon",
            ViewId::Mars => "mars",
            ViewId::Completion => "completion",
        }
    }
}

impl Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// User actions a page may respond to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageAction {
    Board,
    BlastOff,
    PlantFlag,
    Colonize,
    MissionSuccess,
    WorksCited,
    Back,
    Restart,
    GalleryNext,
    GalleryPrevious,
}

impl PageAction {
    pub fn slug(self) -> &'static str {
        match self {
            PageAction::Board => "board",
            PageAction::BlastOff => "blast_off",
            PageAction::PlantFlag => "plant_flag",
            PageAction::Colonize => "colonize",
            PageAction::MissionSuccess => "mission_success",
            PageAction::WorksCited => "works_cited",
            PageAction::Back => "back",
            PageAction::Restart => "restart",
            PageAction::GalleryNext => "gallery_next",
            PageAction::GalleryPrevious => "gallery_previous",
        }
    }
}

impl FromStr for PageAction {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "board" => Ok(PageAction::Board),
            "blast_off" => Ok(PageAction::BlastOff),
            "plant_flag" => Ok(PageAction::PlantFlag),
            "colonize" => Ok(PageAction::Colonize),
            "mission_success" => Ok(PageAction::MissionSuccess),
            "works_cited" => Ok(PageAction::WorksCited),
            "back" => Ok(PageAction::Back),
            "restart" => Ok(PageAction::Restart),
            "gallery_next" => Ok(PageAction::GalleryNext),
            "gallery_previous" => Ok(PageAction::GalleryPrevious),
            other => Err(MissionError::UnknownAction(other.to_string())),
        }
    }
}

impl Display for PageAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One-shot timer events. A cue is addressed to the page that scheduled it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    WallLatched,
    WallDeparting,
    WallCleared,
    /// Handled by the sequencer rather than the mounted page
    TransitionSettled,
    CountdownTick,
    LiftoffComplete,
    BoostAway,
    BoostComplete,
    TouchDown,
    FadeComplete,
}

/// Navigation requests a page hands to the sequencer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Advance,
    Back,
    Restart,
}

/// Side effects requested by a page state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver `cue` to the same page mount after `after`
    Schedule { after: Duration, cue: Cue },
    /// Ask the sequencer to move to another view
    Navigate(Navigation),
}

/// Error type for mission operations
#[derive(Debug)]
pub enum MissionError {
    /// No live session with this id
    UnknownSession(String),
    /// Action slug not recognised
    UnknownAction(String),
    /// Action not valid in the current page state
    InvalidAction { view: ViewId, action: PageAction, reason: String },
    /// Sequencer cannot perform the navigation from the current view
    InvalidNavigation { from: ViewId, navigation: Navigation },
    /// No era with this id
    UnknownEra(u8),
    /// Optional asset could not be loaded
    AssetLoad(String),
    /// Configuration could not be read or is invalid
    Config(String),
    /// Template rendering failed
    Template(String),
}

impl Display for MissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionError::UnknownSession(id) => write!(f, "Unknown mission session: {}", id),
            MissionError::UnknownAction(action) => write!(f, "Unknown action: {}", action),
            MissionError::InvalidAction { view, action, reason } => {
                write!(f, "Action '{}' is not available on {}: {}", action, view, reason)
            }
            MissionError::InvalidNavigation { from, navigation } => {
                write!(f, "Cannot navigate {:?} from {}", navigation, from)
            }
            MissionError::UnknownEra(id) => write!(f, "Era with id {} not found", id),
            MissionError::AssetLoad(msg) => write!(f, "Asset load error: {}", msg),
            MissionError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MissionError::Template(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl Error for MissionError {}

impl MissionError {
    /// Shorthand for rejecting an action in the current state
    pub fn invalid(view: ViewId, action: PageAction, reason: &str) -> Self {
        MissionError::InvalidAction {
            view,
            action,
            reason: reason.to_string(),
        }
    }
}

/// A mission page: an explicit state machine driven by user actions and
/// timer cues. Pages never touch timers or the sequencer directly; they
/// return [`Effect`]s for the session to carry out.
pub trait Page: Send + Sync + Debug {
    /// Which view this page implements
    fn view(&self) -> ViewId;

    /// Effects to run right after the page is mounted
    fn on_mount(&mut self) -> Vec<Effect> {
        Vec::new()
    }

    /// Apply a user action
    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError>;

    /// Apply a timer cue scheduled by this page
    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect>;

    /// The ship rig, for pages that show the starship
    fn ship(&self) -> Option<&ShipRig> {
        None
    }

    /// Mutable ship rig access for key input and visual resolution
    fn ship_mut(&mut self) -> Option<&mut ShipRig> {
        None
    }

    /// Whether a timed phase is running, so renderers know to refresh
    fn is_animating(&self) -> bool;

    /// Template context for the current state
    fn context(&self) -> serde_json::Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_order() {
        assert_eq!(ViewId::Landing.next(), Some(ViewId::LaunchStation));
        assert_eq!(ViewId::Mars.next(), Some(ViewId::Completion));
        assert_eq!(ViewId::Completion.next(), None);
    }

    #[test]
    fn test_back_targets() {
        assert_eq!(ViewId::Moon.previous(), Some(ViewId::LaunchStation));
        assert_eq!(ViewId::Landing.previous(), None);
        assert_eq!(ViewId::Completion.previous(), None);
    }

    #[test]
    fn test_action_slugs_parse() {
        for action in [PageAction::Board, PageAction::BlastOff, PageAction::GalleryPrevious] {
            assert_eq!(action.slug().parse::<PageAction>().unwrap(), action);
        }
        assert!(matches!(
            "warp".parse::<PageAction>(),
            Err(MissionError::UnknownAction(_))
        ));
    }
}
