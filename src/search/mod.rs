//! Bounded route search.
//!
//! Searches over the board are exponential in the path length, so every
//! enumeration call carries an [`budget::ExpansionBudget`]: a shared counter
//! that stops further expansion once spent. Exhaustion degrades the result to
//! whatever was found so far; it is never an error.

pub mod budget;
pub mod enumerate;
pub mod select;

pub use enumerate::{enumerate, Route, SearchOutcome};
pub use select::select_winner;
