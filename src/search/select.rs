use rand::seq::SliceRandom;
use rand::Rng;

use crate::search::enumerate::Route;

/// Pick one winning route uniformly at random, `None` when there is none.
///
/// No bias toward shorter or longer routes; selection is independent across
/// automata. The generator is injected so tests can seed it.
pub fn select_winner<R: Rng + ?Sized>(wins: &[Route], rng: &mut R) -> Option<Route> {
    wins.choose(rng).cloned()
}
