//! Headless behavior core for the landing page.
//!
//! Nothing in here touches the DOM: the sequencer and counter operate through
//! capability traits whose browser implementations live in `crate::ui`. This
//! keeps every timing invariant unit-testable without a browser.

#[cfg(feature = "ssr")]
pub mod config;
pub mod counter;
pub mod sequencer;
#[cfg(test)]
mod tests;

pub use counter::{Counter, Direction, parse_target};
pub use sequencer::{Playable, Region, Scheduler, Sequence, Step, Surface, TaskId, all_to};
