//! Mission sessions and the registry that keeps them alive

pub mod registry;
pub mod session;

pub use registry::MissionRegistry;
pub use session::MissionSnapshot;
