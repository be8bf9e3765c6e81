//! Built-in rosters (compile-time configs).

use crate::automaton::{Automaton, Roster, SearchLimits, TokenId};
use crate::core::cell::Cell;

/// The original three automata: A races 1→16, B races 4→13, C races 3→14.
pub fn classic() -> Roster {
    Roster {
        name: "classic",
        automata: vec![
            Automaton {
                id: TokenId('A'),
                start: Cell::new_unchecked(1),
                goal: Cell::new_unchecked(16),
            },
            Automaton {
                id: TokenId('B'),
                start: Cell::new_unchecked(4),
                goal: Cell::new_unchecked(13),
            },
            Automaton {
                id: TokenId('C'),
                start: Cell::new_unchecked(3),
                goal: Cell::new_unchecked(14),
            },
        ],
        limits: SearchLimits::default(),
    }
}

/// A single automaton crossing the full diagonal; handy for demos and tests.
pub fn solo() -> Roster {
    Roster {
        name: "solo",
        automata: vec![Automaton {
            id: TokenId('A'),
            start: Cell::new_unchecked(1),
            goal: Cell::new_unchecked(16),
        }],
        limits: SearchLimits::default(),
    }
}

/// Return a roster by name.
pub fn by_name(name: &str) -> Option<Roster> {
    match name {
        "classic" => Some(classic()),
        "solo" => Some(solo()),
        _ => None,
    }
}

/// Names of all built-in rosters.
pub fn names() -> &'static [&'static str] {
    &["classic", "solo"]
}
