use log::debug;
use serde_json::json;

use crate::config::Timings;
use crate::content::gallery::ERA_A_GALLERY;
use crate::content::GalleryItem;
use crate::core::choreography::PhaseClock;
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};
use crate::pages::carousel::Carousel;
use crate::pages::ship::ShipRig;
use crate::pages::{merge, scene_context, SceneHeader};

const HEADER: SceneHeader = SceneHeader {
    eyebrow: "Space Cadet Academy",
    title: "ERA A — Dawn of Spaceflight",
    years: "1945–1961",
    theme: "The United States jump starts a Rocket Program and enters The Space Race",
    timeline_era: 1,
    badge: "A",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    Ready,
    /// Seconds left on the countdown
    Countdown(u32),
    BlastingOff,
    Departed,
}

/// Era A: counts down from the configured value, blasts off and hands over
/// to the moon.
#[derive(Debug)]
pub struct LaunchStationPage {
    phase: LaunchPhase,
    timings: Timings,
    ship: ShipRig,
    gallery: Carousel<GalleryItem>,
    clock: Option<PhaseClock>,
}

impl LaunchStationPage {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: LaunchPhase::Ready,
            timings,
            ship: ShipRig::new(false),
            gallery: Carousel::new(ERA_A_GALLERY.to_vec()),
            clock: None,
        }
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    /// Value on the countdown display
    pub fn countdown(&self) -> u32 {
        match self.phase {
            LaunchPhase::Ready => self.timings.countdown_from,
            LaunchPhase::Countdown(n) => n,
            LaunchPhase::BlastingOff | LaunchPhase::Departed => 0,
        }
    }

    fn blast_off(&mut self) -> Vec<Effect> {
        self.phase = LaunchPhase::BlastingOff;
        self.ship.set_flames(true);
        self.clock = Some(PhaseClock::start(self.timings.blast_off()));
        vec![Effect::Schedule {
            after: self.timings.blast_off(),
            cue: Cue::LiftoffComplete,
        }]
    }

    fn badge_text(&self) -> String {
        match self.phase {
            LaunchPhase::BlastingOff | LaunchPhase::Departed => "🚀 LAUNCHING! 🚀".to_string(),
            LaunchPhase::Countdown(n) => format!("Launch in {}s", n),
            LaunchPhase::Ready => "Blast Off to earn your ERA A badge!".to_string(),
        }
    }
}

impl Page for LaunchStationPage {
    fn view(&self) -> ViewId {
        ViewId::LaunchStation
    }

    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError> {
        match action {
            PageAction::BlastOff => match self.phase {
                LaunchPhase::Ready if self.timings.countdown_from == 0 => Ok(self.blast_off()),
                LaunchPhase::Ready => {
                    self.phase = LaunchPhase::Countdown(self.timings.countdown_from);
                    Ok(vec![Effect::Schedule {
                        after: self.timings.countdown_tick(),
                        cue: Cue::CountdownTick,
                    }])
                }
                phase => {
                    debug!("Blast off ignored while {:?}", phase);
                    Ok(Vec::new())
                }
            },
            PageAction::Back => Ok(vec![Effect::Navigate(Navigation::Back)]),
            PageAction::GalleryNext => {
                self.gallery.next();
                Ok(Vec::new())
            }
            PageAction::GalleryPrevious => {
                self.gallery.previous();
                Ok(Vec::new())
            }
            other => Err(MissionError::invalid(
                ViewId::LaunchStation,
                other,
                "not part of the launch sequence",
            )),
        }
    }

    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect> {
        match (self.phase, cue) {
            (LaunchPhase::Countdown(n), Cue::CountdownTick) if n <= 1 => self.blast_off(),
            (LaunchPhase::Countdown(n), Cue::CountdownTick) => {
                self.phase = LaunchPhase::Countdown(n - 1);
                vec![Effect::Schedule {
                    after: self.timings.countdown_tick(),
                    cue: Cue::CountdownTick,
                }]
            }
            (LaunchPhase::BlastingOff, Cue::LiftoffComplete) => {
                self.phase = LaunchPhase::Departed;
                self.clock = None;
                vec![Effect::Navigate(Navigation::Advance)]
            }
            (phase, cue) => {
                debug!("Launch station ignores {:?} while {:?}", cue, phase);
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
        matches!(self.phase, LaunchPhase::Countdown(_) | LaunchPhase::BlastingOff)
    }

    fn context(&self) -> serde_json::Value {
        merge(
            scene_context(&HEADER, &self.gallery),
            json!({
                "badge_text": self.badge_text(),
                "can_blast_off": self.phase == LaunchPhase::Ready,
                "counting_down": matches!(self.phase, LaunchPhase::Countdown(_)),
                "countdown": self.countdown(),
                "progress": self.clock.map(|c| c.progress()),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_until_navigation(page: &mut LaunchStationPage) -> (Vec<u32>, usize) {
        let mut seen = vec![page.countdown()];
        let mut follow_ons = 0;
        let mut pending = page.handle_action(PageAction::BlastOff).unwrap();
        while let Some(effect) = pending.pop() {
            match effect {
                Effect::Schedule { cue, .. } => {
                    if cue == Cue::LiftoffComplete {
                        follow_ons += 1;
                    }
                    pending.extend(page.handle_cue(cue));
                    seen.push(page.countdown());
                }
                Effect::Navigate(nav) => {
                    assert_eq!(nav, Navigation::Advance);
                    break;
                }
            }
        }
        (seen, follow_ons)
    }

    #[test]
    fn test_countdown_reaches_zero_once() {
        let mut page = LaunchStationPage::new(Timings::default());
        let (seen, follow_ons) = tick_until_navigation(&mut page);

        assert_eq!(seen, vec![3, 2, 1, 0, 0]);
        assert_eq!(follow_ons, 1);
        assert_eq!(page.phase(), LaunchPhase::Departed);
    }

    #[test]
    fn test_countdown_from_other_values() {
        for from in [0u32, 1, 5] {
            let timings = Timings {
                countdown_from: from,
                ..Timings::default()
            };
            let mut page = LaunchStationPage::new(timings);
            let (seen, follow_ons) = tick_until_navigation(&mut page);

            let mut expected: Vec<u32> = (0..=from).rev().collect();
            expected.push(0);
            assert_eq!(seen, expected);
            assert_eq!(follow_ons, 1);
        }
    }

    #[test]
    fn test_repeated_blast_off_ignored() {
        let mut page = LaunchStationPage::new(Timings::default());
        assert_eq!(page.handle_action(PageAction::BlastOff).unwrap().len(), 1);
        assert!(page.handle_action(PageAction::BlastOff).unwrap().is_empty());
        assert_eq!(page.phase(), LaunchPhase::Countdown(3));
        assert_eq!(page.context()["badge_text"], "Launch in 3s");
    }

    #[test]
    fn test_flames_only_while_blasting_off() {
        let mut page = LaunchStationPage::new(Timings::default());
        assert!(!page.ship.flames());
        page.handle_action(PageAction::BlastOff).unwrap();
        for _ in 0..3 {
            page.handle_cue(Cue::CountdownTick);
        }
        assert_eq!(page.phase(), LaunchPhase::BlastingOff);
        assert!(page.ship.flames());
        assert_eq!(page.context()["badge_text"], "🚀 LAUNCHING! 🚀");
    }

    #[test]
    fn test_gallery_and_back() {
        let mut page = LaunchStationPage::new(Timings::default());
        page.handle_action(PageAction::GalleryPrevious).unwrap();
        assert_eq!(page.context()["gallery"]["index"], 5);
        assert_eq!(
            page.handle_action(PageAction::Back).unwrap(),
            vec![Effect::Navigate(Navigation::Back)]
        );
        assert!(page.handle_action(PageAction::PlantFlag).is_err());
    }
}
