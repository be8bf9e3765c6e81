//! Tick-driven playback of chosen routes.
//!
//! Single-threaded and cooperative: exactly one automaton attempts exactly one
//! step per tick, in a turn order shuffled once at start. Cells hold at most
//! one automaton; a contested destination skips the turn and is retried when
//! the cycle comes back around.
//!
//! Two automata each waiting on the other's cell block forever. That is a
//! known property of the scheduling, kept on purpose; drivers bound their
//! tick loops instead.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::automaton::TokenId;
use crate::core::cell::Cell;
use crate::search::enumerate::Route;

/// Progress of one automaton along its chosen route.
#[derive(Debug, Clone)]
pub struct TokenState {
    pub route: Route,
    pub index: usize,
    pub finished: bool,
}

impl TokenState {
    #[inline]
    pub fn current(&self) -> Cell {
        self.route[self.index]
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index + 1 >= self.route.len()
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The automaton moved one step along its route.
    Advanced {
        token: TokenId,
        from: Cell,
        to: Cell,
        /// Step index of the traversed transition (edge key into the layered
        /// graph).
        step: usize,
    },
    /// The desired cell is held by another automaton; retried next cycle.
    Blocked {
        token: TokenId,
        at: Cell,
        desired: Cell,
        by: TokenId,
    },
    /// The automaton's route is complete (a one-cell route completes on its
    /// first turn); it is done from now on.
    Finished { token: TokenId, at: Cell },
    /// Already finished; the turn passes.
    Idle { token: TokenId },
}

/// Playback scheduler over one chosen route per automaton.
///
/// The occupancy index and the per-automaton states are only ever mutated
/// together through [`Playback::relocate`], so a cell never holds two
/// automata.
#[derive(Debug, Clone)]
pub struct Playback {
    order: Vec<TokenId>,
    turn: usize,
    states: FxHashMap<TokenId, TokenState>,
    occupied: FxHashMap<Cell, TokenId>,
}

impl Playback {
    /// Seed playback from non-empty routes; the turn order is shuffled once.
    pub fn new<R: Rng + ?Sized>(routes: Vec<(TokenId, Route)>, rng: &mut R) -> Playback {
        let mut order: Vec<TokenId> = routes.iter().map(|(id, _)| *id).collect();
        order.shuffle(rng);

        let mut states: FxHashMap<TokenId, TokenState> = FxHashMap::default();
        let mut occupied: FxHashMap<Cell, TokenId> = FxHashMap::default();
        for (id, route) in routes {
            assert!(!route.is_empty(), "routes must contain at least the start");
            occupied.insert(route[0], id);
            states.insert(
                id,
                TokenState {
                    route,
                    index: 0,
                    finished: false,
                },
            );
        }

        Playback {
            order,
            turn: 0,
            states,
            occupied,
        }
    }

    pub fn order(&self) -> &[TokenId] {
        &self.order
    }

    pub fn state(&self, token: TokenId) -> Option<&TokenState> {
        self.states.get(&token)
    }

    pub fn occupant(&self, cell: Cell) -> Option<TokenId> {
        self.occupied.get(&cell).copied()
    }

    /// Playback is over only when every automaton has finished its route.
    pub fn is_done(&self) -> bool {
        self.states.values().all(|s| s.finished)
    }

    /// Give the next automaton in cyclic order its one move attempt.
    ///
    /// Returns `None` once playback is over. Blocked and idle turns still
    /// consume a tick, so a mutually blocked pair keeps yielding `Blocked`
    /// events indefinitely.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if self.order.is_empty() || self.is_done() {
            return None;
        }

        let token = self.order[self.turn % self.order.len()];
        self.turn += 1;

        let state = self.states.get_mut(&token).expect("ordered token has state");
        if state.finished {
            return Some(TickEvent::Idle { token });
        }
        if state.at_end() {
            state.finished = true;
            return Some(TickEvent::Finished {
                token,
                at: state.current(),
            });
        }

        let from = state.route[state.index];
        let desired = state.route[state.index + 1];
        if let Some(&holder) = self.occupied.get(&desired) {
            if holder != token {
                return Some(TickEvent::Blocked {
                    token,
                    at: from,
                    desired,
                    by: holder,
                });
            }
        }

        let step = self.relocate(token, from, desired);
        Some(TickEvent::Advanced {
            token,
            from,
            to: desired,
            step,
        })
    }

    /// The single occupancy mutator: removes the old entry, installs the new
    /// one, and advances the automaton, atomically from the scheduler's point
    /// of view. Returns the step index of the traversed transition.
    fn relocate(&mut self, token: TokenId, from: Cell, to: Cell) -> usize {
        self.occupied.remove(&from);
        self.occupied.insert(to, token);

        let state = self.states.get_mut(&token).expect("relocating known token");
        let step = state.index;
        state.index += 1;
        if state.at_end() {
            state.finished = true;
        }
        step
    }
}
