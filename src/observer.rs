//! Generation listeners.
//!
//! After every generation, the world synchronously notifies its listeners
//! in registration order. Listeners only read the world; all mutation goes
//! through the world itself.

use crate::world::World;
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics of one generation, handed to every listener after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationReport {
    /// Number of generations the world has stepped through.
    pub generation: u64,
    /// Number of living cells after the step.
    pub living: usize,
    /// Number of dead cells after the step.
    pub dead: usize,
}

/// A listener notified after every generation.
pub trait GenerationListener {
    /// Called once per generation, after all commands have been applied.
    ///
    /// `world` is the state after the step; `report` carries the exact
    /// living/dead counts, so listeners do not need to rescan the grid.
    fn on_generation(&mut self, world: &World, report: &GenerationReport);
}

/// Lets the caller keep a handle to a registered listener.
impl<L: GenerationListener> GenerationListener for Rc<RefCell<L>> {
    fn on_generation(&mut self, world: &World, report: &GenerationReport) {
        self.borrow_mut().on_generation(world, report);
    }
}

/// A handle returned by [`World::add_listener`], used to remove the
/// listener again. The same listener type may be registered any number
/// of times; each registration gets its own handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A listener that tracks generation statistics.
///
/// It keeps its own generation counter, incremented by exactly 1 on every
/// notification and reset only by an explicit [`reset`](Self::reset) call,
/// independently of the world's own counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationObserver {
    generation: u64,
    last: Option<GenerationReport>,
}

impl GenerationObserver {
    /// Creates an observer with its counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received since creation or the last reset.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Living cell count from the latest notification.
    pub fn living(&self) -> Option<usize> {
        self.last.map(|report| report.living)
    }

    /// Dead cell count from the latest notification.
    pub fn dead(&self) -> Option<usize> {
        self.last.map(|report| report.dead)
    }

    /// The latest report, with the generation replaced by this observer's
    /// own counter.
    pub fn report(&self) -> Option<GenerationReport> {
        self.last.map(|report| GenerationReport {
            generation: self.generation,
            ..report
        })
    }

    /// Resets the generation counter to zero and forgets the last report.
    pub fn reset(&mut self) {
        self.generation = 0;
        self.last = None;
    }
}

impl GenerationListener for GenerationObserver {
    fn on_generation(&mut self, _world: &World, report: &GenerationReport) {
        self.generation += 1;
        self.last = Some(*report);
    }
}
