//! Mission core: the page contract, the view sequencer, timer choreography
//! and the session journal.

pub mod choreography;
pub mod journal;
pub mod page;
pub mod sequencer;
