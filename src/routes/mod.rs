//! Generation driver: validate a roster, enumerate per automaton, choose one
//! winning route each.

use rand::Rng;

use crate::automaton::{Roster, RouteError, TokenId};
use crate::core::cell::Cell;
use crate::core::pattern::Pattern;
use crate::search::enumerate::{enumerate, Route, SearchOutcome};
use crate::search::select::select_winner;

/// Enumeration results for one automaton, plus its chosen route (if any
/// winning route exists).
#[derive(Debug, Clone)]
pub struct TokenRoutes {
    pub id: TokenId,
    pub start: Cell,
    pub goal: Cell,
    pub pattern: Pattern,
    pub outcome: SearchOutcome,
    pub chosen: Option<Route>,
}

/// One full generation pass over a roster.
#[derive(Debug, Clone)]
pub struct Generated {
    pub roster_name: &'static str,
    pub n: usize,
    pub tokens: Vec<TokenRoutes>,
}

impl Generated {
    /// The automata that have a route to play, with their chosen routes.
    pub fn playable(&self) -> impl Iterator<Item = (TokenId, &Route)> {
        self.tokens
            .iter()
            .filter_map(|t| t.chosen.as_ref().map(|r| (t.id, r)))
    }
}

/// Run the search for every automaton of the roster with its pattern.
///
/// Enumeration runs to completion (or budget) synchronously per automaton;
/// nothing reads an outcome while its search is in progress. An automaton
/// without winning routes is not an error: it carries `chosen = None` and is
/// simply excluded from playback.
pub fn generate<R: Rng + ?Sized>(
    roster: &Roster,
    patterns: &[Pattern],
    rng: &mut R,
) -> Result<Generated, RouteError> {
    let n = roster.validate(patterns)?;

    let mut tokens: Vec<TokenRoutes> = Vec::with_capacity(roster.automata.len());
    for (automaton, pattern) in roster.automata.iter().zip(patterns) {
        let outcome = enumerate(
            automaton.start,
            n,
            pattern,
            automaton.goal,
            roster.limits.max_expansions,
        );
        log::info!(
            "{}: total={}, winning={}, expansions={}",
            automaton.id,
            outcome.all.len(),
            outcome.wins.len(),
            outcome.expansions
        );

        let chosen = select_winner(&outcome.wins, rng);
        if chosen.is_none() {
            log::warn!("{}: no winning route", automaton.id);
        }

        tokens.push(TokenRoutes {
            id: automaton.id,
            start: automaton.start,
            goal: automaton.goal,
            pattern: pattern.clone(),
            outcome,
            chosen,
        });
    }

    Ok(Generated {
        roster_name: roster.name,
        n,
        tokens,
    })
}
