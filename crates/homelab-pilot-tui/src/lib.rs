//! homelab-pilot-tui: Terminal front end for homelab-pilot
//!
//! Draws the dashboard with ratatui and runs the network work the
//! controller schedules on tokio tasks.

pub mod action;
pub mod app;
pub mod components;
pub mod tui;
pub mod ui_ext;
pub mod worker;

pub use app::App;
