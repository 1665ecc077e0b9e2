use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::config::Timings;
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};

/// Phases of the boarding wall animation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WallPhase {
    Idle,
    Closing,
    Latched,
    Departing,
}

/// Title screen. Boarding closes the hangar wall, latches it and then sends
/// it away while the launch station renders behind.
#[derive(Debug)]
pub struct LandingPage {
    phase: WallPhase,
    timings: Timings,
}

impl LandingPage {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: WallPhase::Idle,
            timings,
        }
    }

    pub fn phase(&self) -> WallPhase {
        self.phase
    }
}

impl Page for LandingPage {
    fn view(&self) -> ViewId {
        ViewId::Landing
    }

    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError> {
        match action {
            PageAction::Board if self.phase == WallPhase::Idle => {
                self.phase = WallPhase::Closing;
                Ok(vec![Effect::Schedule {
                    after: self.timings.wall_latch(),
                    cue: Cue::WallLatched,
                }])
            }
            PageAction::Board => {
                debug!("Boarding ignored, wall is {:?}", self.phase);
                Ok(Vec::new())
            }
            other => Err(MissionError::invalid(
                ViewId::Landing,
                other,
                "the landing page only offers boarding",
            )),
        }
    }

    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect> {
        match (self.phase, cue) {
            (WallPhase::Closing, Cue::WallLatched) => {
                self.phase = WallPhase::Latched;
                vec![Effect::Schedule {
                    after: self.timings.wall_depart(),
                    cue: Cue::WallDeparting,
                }]
            }
            (WallPhase::Latched, Cue::WallDeparting) => {
                self.phase = WallPhase::Departing;
                vec![
                    Effect::Navigate(Navigation::Advance),
                    Effect::Schedule {
                        after: self.timings.wall_clear(),
                        cue: Cue::WallCleared,
                    },
                ]
            }
            (WallPhase::Departing, Cue::WallCleared) => {
                self.phase = WallPhase::Idle;
                Vec::new()
            }
            (phase, cue) => {
                debug!("Landing ignores {:?} while {:?}", cue, phase);
                Vec::new()
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.phase != WallPhase::Idle
    }

    fn context(&self) -> serde_json::Value {
        json!({
            "title": "The Space Race",
            "subtitle": "Cold War rivalry to corporate conquest",
            "tagline": "Enjoy the journey from German Master Minds to Corporate Starships",
            "wall": self.phase,
            "show_wall": self.phase != WallPhase::Idle,
            "hide_content": self.phase == WallPhase::Departing,
            "can_board": self.phase == WallPhase::Idle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_boarding_sequence() {
        let mut page = LandingPage::new(Timings::default());

        let effects = page.handle_action(PageAction::Board).unwrap();
        assert_eq!(
            effects,
            vec![Effect::Schedule { after: Duration::from_millis(1000), cue: Cue::WallLatched }]
        );
        assert_eq!(page.phase(), WallPhase::Closing);

        let effects = page.handle_cue(Cue::WallLatched);
        assert_eq!(
            effects,
            vec![Effect::Schedule { after: Duration::from_millis(800), cue: Cue::WallDeparting }]
        );

        let effects = page.handle_cue(Cue::WallDeparting);
        assert_eq!(effects[0], Effect::Navigate(Navigation::Advance));
        assert_eq!(page.phase(), WallPhase::Departing);
        assert!(page.context()["hide_content"].as_bool().unwrap());

        assert!(page.handle_cue(Cue::WallCleared).is_empty());
        assert_eq!(page.phase(), WallPhase::Idle);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_repeated_boarding_ignored() {
        let mut page = LandingPage::new(Timings::default());
        page.handle_action(PageAction::Board).unwrap();
        assert!(page.handle_action(PageAction::Board).unwrap().is_empty());
        assert_eq!(page.phase(), WallPhase::Closing);
    }

    #[test]
    fn test_out_of_order_cue_ignored() {
        let mut page = LandingPage::new(Timings::default());
        assert!(page.handle_cue(Cue::WallDeparting).is_empty());
        assert_eq!(page.phase(), WallPhase::Idle);
    }

    #[test]
    fn test_other_actions_rejected() {
        let mut page = LandingPage::new(Timings::default());
        let err = page.handle_action(PageAction::BlastOff).unwrap_err();
        assert!(matches!(err, MissionError::InvalidAction { view: ViewId::Landing, .. }));
    }
}
