//! Static narrative content: eras, timelines, galleries and works cited.
//!
//! Everything here is immutable and compiled into the binary. Lookups that
//! miss return `None` and callers render nothing in that slot.

pub mod citations;
pub mod eras;
pub mod gallery;
pub mod timeline;

pub use citations::{Citation, CITATIONS};
pub use eras::{era, Era, ERAS};
pub use gallery::GalleryItem;
pub use timeline::{timeline_for, EraTimeline};
