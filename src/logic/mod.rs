//! Controller logic independent of any particular display.

mod controller;
mod flavor;

pub use controller::{ControllerConfig, ViewController};
pub use flavor::{DEFAULT_LANGUAGE, pick_flavor_text};
