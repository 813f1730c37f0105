//! Library entry for pokedex exposing the controller, provider and TUI for the binary and integration tests.

pub mod app;
pub mod args;
pub mod error;
pub mod events;
pub mod logic;
pub mod render;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
