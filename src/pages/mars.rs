use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::config::Timings;
use crate::content::gallery::ERA_C_GALLERY;
use crate::content::GalleryItem;
use crate::core::choreography::PhaseClock;
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};
use crate::pages::carousel::Carousel;
use crate::pages::ship::ShipRig;
use crate::pages::{merge, scene_context, SceneHeader};

const HEADER: SceneHeader = SceneHeader {
    eyebrow: "Space Cadet Academy",
    title: "ERA C — Corporate Conquest of the New Space Race",
    years: "2006–Present & Future",
    theme: "United States space exploration evolves into a private industry of corporate conquest that push the boundaries of rocket science in the modern day",
    timeline_era: 6,
    badge: "C",
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarsPhase {
    Descending,
    Landed,
    Colonized,
}

/// Era C: the ship descends on its own, then the cadet colonises mars and
/// claims mission success.
#[derive(Debug)]
pub struct MarsPage {
    phase: MarsPhase,
    timings: Timings,
    ship: ShipRig,
    gallery: Carousel<GalleryItem>,
    clock: Option<PhaseClock>,
}

impl MarsPage {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: MarsPhase::Descending,
            timings,
            ship: ShipRig::new(true),
            gallery: Carousel::new(ERA_C_GALLERY.to_vec()),
            clock: None,
        }
    }

    pub fn phase(&self) -> MarsPhase {
        self.phase
    }

    fn status_text(&self) -> &'static str {
        match self.phase {
            MarsPhase::Descending => "🚀 Landing on Mars... 🚀",
            MarsPhase::Landed => "Rocket has landed on Mars! Ready to colonize Mars?",
            MarsPhase::Colonized => "Click Mission Success to earn your ERA C badge",
        }
    }
}

impl Page for MarsPage {
    fn view(&self) -> ViewId {
        ViewId::Mars
    }

    fn on_mount(&mut self) -> Vec<Effect> {
        self.clock = Some(PhaseClock::start(self.timings.descent()));
        vec![Effect::Schedule {
            after: self.timings.descent(),
            cue: Cue::TouchDown,
        }]
    }

    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError> {
        match (action, self.phase) {
            (PageAction::Colonize, MarsPhase::Landed) => {
                self.phase = MarsPhase::Colonized;
                Ok(Vec::new())
            }
            (PageAction::Colonize, MarsPhase::Colonized) => {
                debug!("Mars is already colonized");
                Ok(Vec::new())
            }
            (PageAction::Colonize, MarsPhase::Descending) => Err(MissionError::invalid(
                ViewId::Mars,
                action,
                "the ship has not landed yet",
            )),
            (PageAction::MissionSuccess, MarsPhase::Colonized) => {
                Ok(vec![Effect::Navigate(Navigation::Advance)])
            }
            (PageAction::MissionSuccess, _) => Err(MissionError::invalid(
                ViewId::Mars,
                action,
                "mars has not been colonized yet",
            )),
            (PageAction::Back, _) => Ok(vec![Effect::Navigate(Navigation::Back)]),
            (PageAction::GalleryNext, _) => {
                self.gallery.next();
                Ok(Vec::new())
            }
            (PageAction::GalleryPrevious, _) => {
                self.gallery.previous();
                Ok(Vec::new())
            }
            (other, _) => Err(MissionError::invalid(ViewId::Mars, other, "not available on mars")),
        }
    }

    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect> {
        match (self.phase, cue) {
            (MarsPhase::Descending, Cue::TouchDown) => {
                self.phase = MarsPhase::Landed;
                self.ship.set_flames(false);
                self.clock = None;
            }
            (phase, cue) => debug!("Mars ignores {:?} while {:?}", cue, phase),
        }
        Vec::new()
    }

    fn ship(&self) -> Option<&ShipRig> {
        Some(&self.ship)
    }

    fn ship_mut(&mut self) -> Option<&mut ShipRig> {
        Some(&mut self.ship)
    }

    fn is_animating(&self) -> bool {
        self.phase == MarsPhase::Descending
    }

    fn context(&self) -> serde_json::Value {
        merge(
            scene_context(&HEADER, &self.gallery),
            json!({
                "phase": self.phase,
                "status_text": self.status_text(),
                "can_colonize": self.phase == MarsPhase::Landed,
                "can_succeed": self.phase == MarsPhase::Colonized,
                "colony": self.phase == MarsPhase::Colonized,
                "progress": self.clock.map(|c| c.progress()),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_descent_starts_on_mount() {
        let mut page = MarsPage::new(Timings::default());
        assert_eq!(
            page.on_mount(),
            vec![Effect::Schedule { after: Duration::from_millis(3000), cue: Cue::TouchDown }]
        );
        assert!(page.ship.flames());
        assert!(page.is_animating());

        page.handle_cue(Cue::TouchDown);
        assert_eq!(page.phase(), MarsPhase::Landed);
        assert!(!page.ship.flames());
    }

    #[test]
    fn test_colonize_requires_landing() {
        let mut page = MarsPage::new(Timings::default());
        page.on_mount();
        assert!(matches!(
            page.handle_action(PageAction::Colonize),
            Err(MissionError::InvalidAction { view: ViewId::Mars, action: PageAction::Colonize, .. })
        ));
        assert_eq!(page.phase(), MarsPhase::Descending);
    }

    #[test]
    fn test_mission_success_requires_colony() {
        let mut page = MarsPage::new(Timings::default());
        page.on_mount();
        page.handle_cue(Cue::TouchDown);
        assert!(page.handle_action(PageAction::MissionSuccess).is_err());

        page.handle_action(PageAction::Colonize).unwrap();
        assert_eq!(page.context()["status_text"], "Click Mission Success to earn your ERA C badge");
        assert_eq!(
            page.handle_action(PageAction::MissionSuccess).unwrap(),
            vec![Effect::Navigate(Navigation::Advance)]
        );
    }
}
