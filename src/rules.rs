//! Rule sets of the cellular automaton.
//!
//! For the background of these rules, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Cellular_automaton).

use crate::{
    cells::{Coord, State},
    commands::Command,
};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rule set that decides survival and birth.
///
/// A rule set is a pair of pure predicates over the number of living
/// neighbors of a cell. Switching the rule set of a running world takes
/// effect from the next generation.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleSet {
    /// `B3/S23`.
    ///
    /// Conway's original rules.
    #[educe(Default)]
    Classic,
    /// `B3678/S34678`.
    ///
    /// Day & Night. Dead regions behave like inverted living regions.
    DayNight,
    /// `B36/S23`.
    ///
    /// HighLife. Like the classic rules, but a dead cell with 6 living
    /// neighbors is also born; famous for its replicator.
    HighLife,
}

impl RuleSet {
    /// Whether a living cell with `neighbors` living neighbors survives
    /// to the next generation.
    pub fn survives(self, neighbors: usize) -> bool {
        match self {
            RuleSet::Classic => matches!(neighbors, 2 | 3),
            RuleSet::DayNight => !(neighbors < 3 || neighbors == 5),
            RuleSet::HighLife => matches!(neighbors, 2 | 3),
        }
    }

    /// Whether a dead cell with `neighbors` living neighbors is born
    /// in the next generation.
    pub fn resurrects(self, neighbors: usize) -> bool {
        match self {
            RuleSet::Classic => neighbors == 3,
            RuleSet::DayNight => neighbors == 3 || neighbors > 5,
            RuleSet::HighLife => neighbors == 3 || neighbors == 6,
        }
    }

    /// Evaluates one cell against the rule set.
    ///
    /// The neighbor count is computed once by the caller against the
    /// previous generation. Returns a [`Command`] when the cell has to
    /// change, `None` when it keeps its state.
    pub fn evaluate(self, state: State, coord: Coord, neighbors: usize) -> Option<Command> {
        match state {
            State::Alive if !self.survives(neighbors) => Some(Command::Die(coord)),
            State::Dead if self.resurrects(neighbors) => Some(Command::Live(coord)),
            _ => None,
        }
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Classic" | "B3/S23" => Ok(RuleSet::Classic),
            "DayNight" | "Day & Night" | "B3678/S34678" => Ok(RuleSet::DayNight),
            "HighLife" | "B36/S23" => Ok(RuleSet::HighLife),
            _ => Err(String::from("invalid RuleSet")),
        }
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            RuleSet::Classic => "Classic",
            RuleSet::DayNight => "Day & Night",
            RuleSet::HighLife => "HighLife",
        };
        write!(f, "{}", s)
    }
}
