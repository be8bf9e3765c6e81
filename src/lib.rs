//! Route exploration and playback for automata racing on a 4×4 checkerboard.
//!
//! Each automaton has a fixed start and goal cell and a color pattern: a
//! sequence of required cell colors, one per move. The crate enumerates every
//! route satisfying the pattern under a global expansion budget, picks one
//! winning route per automaton at random, folds the winners into a layered
//! DAG for presentation, and replays the chosen routes on a tick scheduler
//! with single-occupancy cells.
//!
//! Rendering is not part of this crate: every component exposes plain data
//! (routes, graphs, tick events) for any front end to draw.

pub mod automata;
pub mod automaton;
pub mod core;
pub mod graph;
pub mod report;
pub mod routes;
pub mod search;
pub mod sim;

pub use crate::core::cell::{Cell, Color};
pub use crate::core::pattern::Pattern;
pub use crate::search::enumerate::{enumerate, Route, SearchOutcome};
