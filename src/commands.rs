//! Deferred state changes.

use crate::cells::Coord;

/// A pending state change for one cell.
///
/// Commands are produced while a generation is being evaluated and applied
/// in one batch once every cell has been evaluated, so that the evaluation
/// of later cells still sees the previous generation. The queue lives inside
/// the [`World`](crate::World) and is empty outside of
/// [`World::step`](crate::World::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resurrects the cell at the coordinates.
    Live(Coord),
    /// Kills the cell at the coordinates.
    Die(Coord),
}

impl Command {
    /// The coordinates of the cell the command targets.
    #[inline]
    pub const fn target(self) -> Coord {
        match self {
            Command::Live(coord) | Command::Die(coord) => coord,
        }
    }
}
