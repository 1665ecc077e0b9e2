use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::config::Timings;
use crate::content::gallery::ERA_B_GALLERY;
use crate::content::GalleryItem;
use crate::core::choreography::PhaseClock;
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};
use crate::pages::carousel::Carousel;
use crate::pages::ship::ShipRig;
use crate::pages::{merge, scene_context, SceneHeader};

const HEADER: SceneHeader = SceneHeader {
    eyebrow: "Space Cadet Academy",
    title: "ERA B — Race to the Moon",
    years: "1961–2006",
    theme: "America lands astronauts on the Moon and begins global cooperation on building the International Space Station",
    timeline_era: 2,
    badge: "B",
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    Orbiting,
    FlagPlanted,
    BoostingAway,
    Departed,
}

/// Era B: plant the flag, hold a moment, then boost away toward mars.
/// The ship flies past the moon with its engines lit the whole time.
#[derive(Debug)]
pub struct MoonPage {
    phase: MoonPhase,
    timings: Timings,
    ship: ShipRig,
    gallery: Carousel<GalleryItem>,
    clock: Option<PhaseClock>,
}

impl MoonPage {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: MoonPhase::Orbiting,
            timings,
            ship: ShipRig::new(true),
            gallery: Carousel::new(ERA_B_GALLERY.to_vec()),
            clock: None,
        }
    }

    pub fn phase(&self) -> MoonPhase {
        self.phase
    }
}

impl Page for MoonPage {
    fn view(&self) -> ViewId {
        ViewId::Moon
    }

    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError> {
        match action {
            PageAction::PlantFlag if self.phase == MoonPhase::Orbiting => {
                self.phase = MoonPhase::FlagPlanted;
                Ok(vec![Effect::Schedule {
                    after: self.timings.flag_hold(),
                    cue: Cue::BoostAway,
                }])
            }
            PageAction::PlantFlag => {
                debug!("Flag already planted");
                Ok(Vec::new())
            }
            PageAction::Back => Ok(vec![Effect::Navigate(Navigation::Back)]),
            PageAction::GalleryNext => {
                self.gallery.next();
                Ok(Vec::new())
            }
            PageAction::GalleryPrevious => {
                self.gallery.previous();
                Ok(Vec::new())
            }
            other => Err(MissionError::invalid(ViewId::Moon, other, "not available on the moon")),
        }
    }

    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect> {
        match (self.phase, cue) {
            (MoonPhase::FlagPlanted, Cue::BoostAway) => {
                self.phase = MoonPhase::BoostingAway;
                self.clock = Some(PhaseClock::start(self.timings.boost()));
                vec![Effect::Schedule {
                    after: self.timings.boost(),
                    cue: Cue::BoostComplete,
                }]
            }
            (MoonPhase::BoostingAway, Cue::BoostComplete) => {
                self.phase = MoonPhase::Departed;
                self.clock = None;
                vec![Effect::Navigate(Navigation::Advance)]
            }
            (phase, cue) => {
                debug!("Moon ignores {:?} while {:?}", cue, phase);
                Vec::new()
            }
        }
    }

    fn ship(&self) -> Option<&ShipRig> {
        Some(&self.ship)
    }

    fn ship_mut(&mut self) -> Option<&mut ShipRig> {
        Some(&mut self.ship)
    }

    fn is_animating(&self) -> bool {
        matches!(self.phase, MoonPhase::FlagPlanted | MoonPhase::BoostingAway)
    }

    fn context(&self) -> serde_json::Value {
        merge(
            scene_context(&HEADER, &self.gallery),
            json!({
                "phase": self.phase,
                "flag_planted": self.phase != MoonPhase::Orbiting,
                "can_plant_flag": self.phase == MoonPhase::Orbiting,
                "boosting": matches!(self.phase, MoonPhase::BoostingAway | MoonPhase::Departed),
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
    fn test_flag_then_boost_then_advance() {
        let mut page = MoonPage::new(Timings::default());

        let effects = page.handle_action(PageAction::PlantFlag).unwrap();
        assert_eq!(
            effects,
            vec![Effect::Schedule { after: Duration::from_millis(1500), cue: Cue::BoostAway }]
        );
        assert!(page.handle_action(PageAction::PlantFlag).unwrap().is_empty());

        let effects = page.handle_cue(Cue::BoostAway);
        assert_eq!(
            effects,
            vec![Effect::Schedule { after: Duration::from_millis(2000), cue: Cue::BoostComplete }]
        );
        assert_eq!(page.phase(), MoonPhase::BoostingAway);

        assert_eq!(page.handle_cue(Cue::BoostComplete), vec![Effect::Navigate(Navigation::Advance)]);
        assert!(page.handle_cue(Cue::BoostComplete).is_empty());
    }

    #[test]
    fn test_flames_always_on() {
        let mut page = MoonPage::new(Timings::default());
        assert!(page.ship.flames());
        page.handle_action(PageAction::PlantFlag).unwrap();
        page.handle_cue(Cue::BoostAway);
        assert!(page.ship.flames());
    }

    #[test]
    fn test_boost_cue_before_flag_ignored() {
        let mut page = MoonPage::new(Timings::default());
        assert!(page.handle_cue(Cue::BoostAway).is_empty());
        assert_eq!(page.phase(), MoonPhase::Orbiting);
        assert!(matches!(
            page.handle_action(PageAction::Colonize),
            Err(MissionError::InvalidAction { view: ViewId::Moon, .. })
        ));
    }
}
