//! Roster layer: which automata run, where they start, and under what limits.
//!
//! A [`Roster`] bundles the automata of one exploration together with the
//! outer safety limits ([`SearchLimits`]). `Roster::validate` is the
//! validation boundary: the enumerator itself assumes well-formed inputs and
//! has no validation duty of its own.

use std::fmt;

use crate::core::cell::Cell;
use crate::core::pattern::Pattern;

/// Identity of one automaton (the original uses single letters A, B, C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub char);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One independently moving automaton: fixed start and goal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Automaton {
    pub id: TokenId,
    pub start: Cell,
    pub goal: Cell,
}

/// Outer safety limits for one exploration.
///
/// - `max_moves` bounds the requested path length `n` (a performance guard,
///   enforced by validation, not by the search itself)
/// - `max_expansions` is the global soft budget shared by the whole search
///   tree of one enumeration call
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_moves: usize,
    pub max_expansions: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_moves: 100,
            max_expansions: 300_000,
        }
    }
}

#[derive(Debug)]
/// Structured errors for roster validation and bundle I/O.
pub enum RouteError {
    /// The roster/pattern combination is internally inconsistent.
    InvalidRoster { reason: String },
    /// I/O failure while exporting or loading a route bundle.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidRoster { reason } => write!(f, "invalid roster: {reason}"),
            RouteError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// A fully specified exploration: automata plus limits.
#[derive(Debug, Clone)]
pub struct Roster {
    pub name: &'static str,
    pub automata: Vec<Automaton>,
    pub limits: SearchLimits,
}

impl Roster {
    /// Validate the roster against one pattern per automaton.
    ///
    /// Returns the common path length `n`. Pattern glyphs are already
    /// restricted to the two colors by construction of [`Pattern`].
    pub fn validate(&self, patterns: &[Pattern]) -> Result<usize, RouteError> {
        if self.automata.is_empty() {
            return Err(RouteError::InvalidRoster {
                reason: "roster has no automata".to_string(),
            });
        }

        if patterns.len() != self.automata.len() {
            return Err(RouteError::InvalidRoster {
                reason: format!(
                    "expected {} patterns, got {}",
                    self.automata.len(),
                    patterns.len()
                ),
            });
        }

        for (i, a) in self.automata.iter().enumerate() {
            for b in &self.automata[i + 1..] {
                if a.id == b.id {
                    return Err(RouteError::InvalidRoster {
                        reason: format!("duplicate automaton id {}", a.id),
                    });
                }
                if a.start == b.start {
                    return Err(RouteError::InvalidRoster {
                        reason: format!(
                            "automata {} and {} share start cell {}",
                            a.id, b.id, a.start
                        ),
                    });
                }
            }
        }

        let n = patterns[0].len();
        for (automaton, pattern) in self.automata.iter().zip(patterns) {
            if pattern.len() != n {
                return Err(RouteError::InvalidRoster {
                    reason: format!(
                        "pattern for {} has length {}, expected {}",
                        automaton.id,
                        pattern.len(),
                        n
                    ),
                });
            }
        }

        if n > self.limits.max_moves {
            return Err(RouteError::InvalidRoster {
                reason: format!("n = {n} exceeds max_moves = {}", self.limits.max_moves),
            });
        }

        Ok(n)
    }
}
