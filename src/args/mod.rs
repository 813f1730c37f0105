//! Command-line argument parsing and the one-shot print mode.

pub mod definition;
pub mod oneshot;

pub use definition::{Args, OneShot, determine_log_level};
pub use oneshot::run_one_shot;
