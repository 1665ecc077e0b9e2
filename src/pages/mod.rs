//! Mission pages
//!
//! Each page is a small state machine implementing [`Page`]. Pages are
//! rebuilt from scratch every time the sequencer mounts them, so all their
//! state starts over on re-entry.

pub mod carousel;
pub mod completion;
pub mod landing;
pub mod launch_station;
pub mod mars;
pub mod moon;
pub mod ship;

use serde::Serialize;
use serde_json::json;

use crate::config::Timings;
use crate::content::{timeline_for, GalleryItem};
use crate::core::page::{Page, ViewId};

use self::carousel::Carousel;

pub use completion::CompletionPage;
pub use landing::LandingPage;
pub use launch_station::LaunchStationPage;
pub use mars::MarsPage;
pub use moon::MoonPage;

/// Build a fresh page for `view`
pub fn build(view: ViewId, timings: &Timings) -> Box<dyn Page> {
    match view {
        ViewId::Landing => Box::new(LandingPage::new(timings.clone())),
        ViewId::LaunchStation => Box::new(LaunchStationPage::new(timings.clone())),
        ViewId::Moon => Box::new(MoonPage::new(timings.clone())),
        ViewId::Mars => Box::new(MarsPage::new(timings.clone())),
        ViewId::Completion => Box::new(CompletionPage::new(timings.clone())),
    }
}

/// Sidebar heading of a scene page
#[derive(Debug, Clone, Serialize)]
pub struct SceneHeader {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub years: &'static str,
    pub theme: &'static str,
    /// Era whose timeline fills the sidebar
    pub timeline_era: u8,
    /// Badge letter awarded by the scene
    pub badge: &'static str,
}

/// Context shared by every scene page: heading, timeline and gallery
pub(crate) fn scene_context(header: &SceneHeader, gallery: &Carousel<GalleryItem>) -> serde_json::Value {
    let timeline = timeline_for(header.timeline_era).map(|t| {
        let items: Vec<serde_json::Value> = t
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                json!({
                    "number": idx + 1,
                    "year": item.year,
                    "title": item.title,
                    "what_happened": item.what_happened,
                    "american_significance": item.american_significance,
                })
            })
            .collect();
        json!({ "theme_color": t.theme_color, "items": items })
    });

    json!({
        "header": header,
        "timeline": timeline,
        "gallery": gallery.context(),
    })
}

/// Merge page-specific fields into a scene context
pub(crate) fn merge(mut base: serde_json::Value, extra: serde_json::Value) -> serde_json::Value {
    if let (Some(base_map), serde_json::Value::Object(extra_map)) = (base.as_object_mut(), extra) {
        base_map.extend(extra_map);
    }
    base
}
