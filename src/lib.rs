//! A simulation engine for Conway's Game of Life and two of its variants,
//! [Day & Night](https://conwaylife.com/wiki/OCA:Day_%26_Night) and
//! [HighLife](https://conwaylife.com/wiki/OCA:HighLife).
//!
//! The engine owns a fixed-size grid without edge wrapping, advances it one
//! generation at a time, and notifies registered listeners after every step.
//! Rendering, scheduling and user input are left to the caller.
//!
//! # Example
//!
//! ```
//! use golife::{Config, RuleSet};
//!
//! let mut world = Config::new(16, 16, 0.0).world().unwrap();
//! // A blinker.
//! world.set_state((4, 5), golife::State::Alive).unwrap();
//! world.set_state((5, 5), golife::State::Alive).unwrap();
//! world.set_state((6, 5), golife::State::Alive).unwrap();
//! let report = world.step();
//! assert_eq!(report.living, 3);
//! assert_eq!(world.rule(), RuleSet::Classic);
//! ```

mod cells;
mod commands;
mod config;
mod error;
mod observer;
mod pattern;
mod rules;
mod world;

pub use cells::{Cell, Coord, State};
pub use commands::Command;
pub use config::{Config, MAX_DIMENSION};
pub use error::Error;
pub use observer::{GenerationListener, GenerationObserver, GenerationReport, ListenerId};
pub use pattern::{Pattern, PatternSource};
pub use rules::RuleSet;
pub use world::World;
