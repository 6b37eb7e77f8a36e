//! The world.

use crate::{
    cells::{Cell, Coord, State},
    commands::Command,
    config::Config,
    error::Error,
    observer::{GenerationListener, GenerationReport, ListenerId},
    pattern::{Pattern, PatternSource},
    rules::RuleSet,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt::{self, Debug, Formatter},
    mem,
};

/// The world.
///
/// It owns the grid, the active rule set, the transient command queue and
/// the list of generation listeners, and advances the grid one generation
/// per [`step`](Self::step) call.
///
/// Every mutating operation takes `&mut self`, so a generation step can
/// never interleave with a cell edit, a reset or a pattern load. Callers
/// that drive the world from a timer and from user input at the same time
/// serialize both through the same `&mut World`.
pub struct World {
    /// Width of the grid.
    width: i32,

    /// Height of the grid.
    height: i32,

    /// All cells of the grid, in row-major order.
    ///
    /// The cell at `(x, y)` lives at index `y * width + x`.
    cells: Box<[Cell]>,

    /// The active rule set.
    ///
    /// Swapping it takes effect from the next [`step`](Self::step).
    rule: RuleSet,

    /// Pending state changes of the generation being computed.
    ///
    /// Empty outside of [`step`](Self::step).
    commands: Vec<Command>,

    /// Registered listeners, in registration order.
    listeners: Vec<(ListenerId, Box<dyn GenerationListener>)>,

    /// The id handed out to the next registered listener.
    next_listener_id: u64,

    /// Number of generations stepped through since creation or the last
    /// [`reset_generation`](Self::reset_generation).
    generation: u64,
}

impl World {
    /// Creates a new world from the configuration.
    ///
    /// Each cell independently starts alive with probability
    /// `config.density`, drawn from a generator seeded by `config.seed`
    /// (or from entropy when the seed is `None`).
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.check()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let size = (config.width * config.height) as usize;
        let mut cells = Vec::with_capacity(size);
        for y in 0..config.height {
            for x in 0..config.width {
                let state = if rng.gen_bool(config.density) {
                    State::Alive
                } else {
                    State::Dead
                };
                cells.push(Cell::new((x, y), state));
            }
        }

        Ok(World {
            width: config.width,
            height: config.height,
            cells: cells.into_boxed_slice(),
            rule: config.rule,
            commands: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            generation: 0,
        })
    }

    /// Width of the grid.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The active rule set.
    pub const fn rule(&self) -> RuleSet {
        self.rule
    }

    /// Swaps the active rule set.
    ///
    /// Takes effect from the next [`step`](Self::step).
    pub fn set_rule(&mut self, rule: RuleSet) {
        self.rule = rule;
    }

    /// Number of generations stepped through since creation or the last
    /// [`reset_generation`](Self::reset_generation).
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Resets the world's generation counter to zero.
    ///
    /// The grid itself is left untouched.
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// The index of the cell at `coord`, or `None` outside the grid.
    fn index(&self, (x, y): Coord) -> Option<usize> {
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, coord: Coord) -> Result<&Cell, Error> {
        self.index(coord)
            .map(|i| &self.cells[i])
            .ok_or(Error::OutOfBounds(coord))
    }

    /// Gets the state of the cell at the given coordinates.
    pub fn get_state(&self, coord: Coord) -> Result<State, Error> {
        self.get(coord).map(Cell::state)
    }

    /// Sets the state of a single cell.
    ///
    /// Setting a cell to the state it already has is a no-op.
    pub fn set_state(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let i = self.index(coord).ok_or(Error::OutOfBounds(coord))?;
        self.cells[i].set_state(state);
        Ok(())
    }

    /// Flips the state of a single cell.
    pub fn toggle(&mut self, coord: Coord) -> Result<State, Error> {
        let i = self.index(coord).ok_or(Error::OutOfBounds(coord))?;
        self.cells[i].toggle();
        Ok(self.cells[i].state())
    }

    /// Kills every cell. Dimensions are unchanged.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.die();
        }
    }

    /// Number of living cells, by a linear scan.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of dead cells, by a linear scan.
    pub fn dead_count(&self) -> usize {
        self.cells.len() - self.living_count()
    }

    /// All cells of the grid, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of living cells among the up to 8 neighbors of `coord`.
    ///
    /// The grid does not wrap: neighbors outside the grid are skipped,
    /// so cells on the edge have fewer than 8 neighbors.
    pub fn living_neighbors(&self, coord: Coord) -> Result<usize, Error> {
        if self.index(coord).is_none() {
            return Err(Error::OutOfBounds(coord));
        }
        Ok(self.count_living_neighbors(coord))
    }

    /// Neighbor count for an in-grid coordinate.
    fn count_living_neighbors(&self, (x, y): Coord) -> usize {
        let mut count = 0;
        for i in -1..=1 {
            for j in -1..=1 {
                if i == 0 && j == 0 {
                    continue;
                }
                if let Some(index) = self.index((x + i, y + j)) {
                    if self.cells[index].is_alive() {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Advances the world by one generation and notifies all listeners.
    ///
    /// The step runs in two phases. First every cell is evaluated, in
    /// row-major order, against the current grid; cells that have to change
    /// enqueue a [`Command`]. Only then are all commands applied in one
    /// batch. Mutating during evaluation would let later cells see
    /// neighbors that already changed in this very generation, which is
    /// the classic Game of Life correctness bug.
    pub fn step(&mut self) -> GenerationReport {
        let mut commands = mem::take(&mut self.commands);

        for y in 0..self.height {
            for x in 0..self.width {
                let coord = (x, y);
                let neighbors = self.count_living_neighbors(coord);
                let state = self.cells[(y * self.width + x) as usize].state();
                if let Some(command) = self.rule.evaluate(state, coord, neighbors) {
                    commands.push(command);
                }
            }
        }

        for command in commands.drain(..) {
            // Commands are only ever created for in-grid cells.
            if let Some(i) = self.index(command.target()) {
                match command {
                    Command::Live(_) => self.cells[i].live(),
                    Command::Die(_) => self.cells[i].die(),
                }
            }
        }
        self.commands = commands;

        self.generation += 1;
        let report = GenerationReport {
            generation: self.generation,
            living: self.living_count(),
            dead: self.dead_count(),
        };
        self.notify(&report);
        report
    }

    /// Notifies all listeners, in registration order.
    fn notify(&mut self, report: &GenerationReport) {
        let mut listeners = mem::take(&mut self.listeners);
        for (_, listener) in &mut listeners {
            listener.on_generation(self, report);
        }
        // A listener may have registered new listeners; keep them after
        // the existing ones.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    /// Registers a listener. Returns a handle for removing it again.
    ///
    /// The same listener type may be registered multiple times.
    pub fn add_listener(&mut self, listener: Box<dyn GenerationListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener by its handle.
    ///
    /// Returns the listener, or `None` if the handle is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn GenerationListener>> {
        let index = self.listeners.iter().position(|(i, _)| *i == id)?;
        Some(self.listeners.remove(index).1)
    }

    /// Applies a pattern to the grid, its top-left corner at the origin.
    ///
    /// Every cell covered by the pattern is overwritten; cells outside the
    /// pattern's extent keep their state. A pattern larger than the grid is
    /// clipped at the grid's edges.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        for (y, row) in pattern.rows().iter().enumerate() {
            for (x, &state) in row.iter().enumerate() {
                if let Some(i) = self.index((x as i32, y as i32)) {
                    self.cells[i].set_state(state);
                }
            }
        }
    }

    /// Looks `name` up in `source` and applies the pattern at the origin.
    ///
    /// The lookup happens before any mutation, so the grid is unchanged
    /// when the pattern is missing.
    pub fn load_named_pattern(
        &mut self,
        source: &PatternSource,
        name: &str,
    ) -> Result<(), Error> {
        let pattern = source.get(name)?;
        self.load_pattern(pattern);
        Ok(())
    }

    /// Renders the grid in the pattern source format:
    /// one line per row, `.` for dead cells and `x` for living ones.
    pub fn plaintext(&self) -> String {
        let mut text = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = &self.cells[(y * self.width + x) as usize];
                text.push(if cell.is_alive() { 'x' } else { '.' });
            }
            text.push('\n');
        }
        text
    }
}

impl Debug for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("World")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rule", &self.rule)
            .field("generation", &self.generation)
            .field("living", &self.living_count())
            .finish()
    }
}
