//! HTTP surface: JSON API, rendered screens and static assets

pub mod handlers;
pub mod models;
pub mod server;
