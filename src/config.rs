//! World configuration.

use crate::{error::Error, rules::RuleSet, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest allowed width or height of the grid.
pub const MAX_DIMENSION: i32 = 500;

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width.
    #[educe(Default = 32)]
    pub width: i32,

    /// Height.
    #[educe(Default = 32)]
    pub height: i32,

    /// Probability for each cell to start alive, between 0 and 1.
    #[educe(Default = 0.5)]
    pub density: f64,

    /// The initial rule set.
    pub rule: RuleSet,

    /// Seed of the random number generator used for the initial grid.
    ///
    /// `None` means that a random seed is chosen from entropy,
    /// so that every run gives a different grid.
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new configuration with given size and density,
    /// and default values for other fields.
    pub fn new(width: i32, height: i32, density: f64) -> Self {
        Config {
            width,
            height,
            density,
            ..Config::default()
        }
    }

    /// Sets the initial rule set.
    pub const fn set_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the seed of the random number generator.
    pub const fn set_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks whether the configuration is valid.
    pub fn check(&self) -> Result<(), Error> {
        if self.width <= 0
            || self.height <= 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(Error::InvalidDimensions(self.width, self.height));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the configuration is invalid;
    /// no grid is allocated in that case.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self)
    }
}
