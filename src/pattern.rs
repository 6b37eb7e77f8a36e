//! The pattern source format.
//!
//! A pattern source is a line-oriented text resource holding any number of
//! named patterns:
//!
//! ```text
//! #blinker
//! ...
//! xxx
//! ...
//! !
//! ```
//!
//! A header line starting with `#` names the pattern; the following lines
//! are grid rows, where `.` is a dead cell and `x` a living one; a `!`
//! (either on its own line or at the end of the last row) terminates the
//! pattern. Blank lines between patterns are ignored.
//!
//! The whole source is parsed before anything touches a grid, so a parse
//! error can never leave a half-written pattern behind.

use crate::{
    cells::State,
    error::Error,
};
use std::{fs, path::Path, str::FromStr};

/// A parsed, named pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The name from the header line, without the leading `#`.
    name: String,
    /// Grid rows, from top to bottom. Rows may have different lengths.
    rows: Vec<Vec<State>>,
}

impl Pattern {
    /// The name of the pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The rows of the pattern.
    pub fn rows(&self) -> &[Vec<State>] {
        &self.rows
    }
}

/// A parsed pattern source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternSource {
    patterns: Vec<Pattern>,
}

impl PatternSource {
    /// Reads and parses a pattern source from a file.
    ///
    /// I/O failures are reported as
    /// [`PatternSourceUnavailable`](Error::PatternSourceUnavailable),
    /// distinct from parse errors.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::PatternSourceUnavailable(e.to_string()))?;
        text.parse()
    }

    /// Looks a pattern up by name.
    pub fn get(&self, name: &str) -> Result<&Pattern, Error> {
        self.patterns
            .iter()
            .find(|pattern| pattern.name == name)
            .ok_or_else(|| Error::PatternNotFound(name.to_string()))
    }

    /// Names of all patterns, in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.name.as_str())
    }

    /// Number of patterns in the source.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the source holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromStr for PatternSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut patterns = Vec::new();
        let mut current: Option<(usize, Pattern)> = None;

        for (index, line) in s.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim_end();

            if current.is_none() {
                if line.is_empty() {
                    continue;
                }
                let name = line.strip_prefix('#').ok_or_else(|| Error::MalformedPattern {
                    line: line_no,
                    reason: String::from("expected a `#name` header line"),
                })?;
                if name.is_empty() {
                    return Err(Error::MalformedPattern {
                        line: line_no,
                        reason: String::from("empty pattern name"),
                    });
                }
                current = Some((
                    line_no,
                    Pattern {
                        name: name.to_string(),
                        rows: Vec::new(),
                    },
                ));
                continue;
            }

            let (body, terminated) = match line.strip_suffix('!') {
                Some(body) => (body, true),
                None => (line, false),
            };
            if !body.is_empty() {
                let mut row = Vec::with_capacity(body.len());
                for c in body.chars() {
                    match c {
                        '.' => row.push(State::Dead),
                        'x' => row.push(State::Alive),
                        _ => {
                            return Err(Error::MalformedPattern {
                                line: line_no,
                                reason: format!("unexpected character {:?}", c),
                            })
                        }
                    }
                }
                if let Some((_, pattern)) = &mut current {
                    pattern.rows.push(row);
                }
            }
            if terminated {
                if let Some((_, pattern)) = current.take() {
                    patterns.push(pattern);
                }
            }
        }

        if let Some((header_line, _)) = current {
            return Err(Error::MalformedPattern {
                line: header_line,
                reason: String::from("pattern is missing its `!` terminator"),
            });
        }

        Ok(PatternSource { patterns })
    }
}
