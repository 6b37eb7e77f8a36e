//! Cells in the grid.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The cell is alive.
    Alive,
    /// The cell is dead.
    Dead,
}

impl State {
    /// The state after resurrecting a cell in this state.
    ///
    /// Resurrecting an already living cell is a no-op.
    #[inline]
    pub const fn live(self) -> Self {
        State::Alive
    }

    /// The state after killing a cell in this state.
    ///
    /// Killing an already dead cell is a no-op.
    #[inline]
    pub const fn die(self) -> Self {
        State::Dead
    }

    /// Whether this is the [`Alive`](State::Alive) state.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are 0-indexed,
/// `x` growing to the right and `y` growing downwards.
pub type Coord = (i32, i32);

/// A cell in the grid.
///
/// Its coordinates are fixed at creation; only the state changes,
/// and only through [`live`](Cell::live), [`die`](Cell::die) and
/// [`toggle`](Cell::toggle).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The coordinates of the cell.
    pub coord: Coord,

    /// The state of the cell.
    state: State,
}

impl Cell {
    /// Creates a new cell with the given state.
    #[inline]
    pub(crate) const fn new(coord: Coord, state: State) -> Self {
        Self { coord, state }
    }

    /// The state of the cell.
    #[inline]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Resurrects the cell. Idempotent.
    #[inline]
    pub(crate) fn live(&mut self) {
        self.state = self.state.live();
    }

    /// Kills the cell. Idempotent.
    #[inline]
    pub(crate) fn die(&mut self) {
        self.state = self.state.die();
    }

    /// Flips the state of the cell.
    #[inline]
    pub(crate) fn toggle(&mut self) {
        self.state = !self.state;
    }

    /// Sets the state of the cell.
    #[inline]
    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
