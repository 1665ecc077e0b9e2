use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::config::Timings;
use crate::content::{Citation, CITATIONS};
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPhase {
    Badges,
    FadingOut,
    WorksCited,
}

/// Badge screen with the works cited list behind a short fade
#[derive(Debug)]
pub struct CompletionPage {
    phase: CompletionPhase,
    timings: Timings,
}

impl CompletionPage {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: CompletionPhase::Badges,
            timings,
        }
    }

    pub fn phase(&self) -> CompletionPhase {
        self.phase
    }
}

impl Page for CompletionPage {
    fn view(&self) -> ViewId {
        ViewId::Completion
    }

    fn handle_action(&mut self, action: PageAction) -> Result<Vec<Effect>, MissionError> {
        match (action, self.phase) {
            (PageAction::WorksCited, CompletionPhase::Badges) => {
                self.phase = CompletionPhase::FadingOut;
                Ok(vec![Effect::Schedule {
                    after: self.timings.fade(),
                    cue: Cue::FadeComplete,
                }])
            }
            (PageAction::WorksCited, phase) => {
                debug!("Works cited already requested ({:?})", phase);
                Ok(Vec::new())
            }
            (PageAction::Back, CompletionPhase::WorksCited) => {
                self.phase = CompletionPhase::Badges;
                Ok(Vec::new())
            }
            (PageAction::Restart, _) => Ok(vec![Effect::Navigate(Navigation::Restart)]),
            (other, phase) => Err(MissionError::invalid(
                ViewId::Completion,
                other,
                &format!("not available while {:?}", phase),
            )),
        }
    }

    fn handle_cue(&mut self, cue: Cue) -> Vec<Effect> {
        match (self.phase, cue) {
            (CompletionPhase::FadingOut, Cue::FadeComplete) => {
                self.phase = CompletionPhase::WorksCited;
            }
            (phase, cue) => debug!("Completion ignores {:?} while {:?}", cue, phase),
        }
        Vec::new()
    }

    fn is_animating(&self) -> bool {
        self.phase == CompletionPhase::FadingOut
    }

    fn context(&self) -> serde_json::Value {
        let citations: &[Citation] = if self.phase == CompletionPhase::WorksCited {
            CITATIONS
        } else {
            &[]
        };
        json!({
            "title": "CONGRATULATIONS! YOU PASSED SPACE CADET ACADEMY!",
            "phase": self.phase,
            "show_badges": self.phase != CompletionPhase::WorksCited,
            "fading": self.phase == CompletionPhase::FadingOut,
            "badges": [
                { "icon": "A", "label": "ERA A" },
                { "icon": "B", "label": "ERA B" },
                { "icon": "C", "label": "ERA C" },
            ],
            "citations": citations,
        })
    }
}
