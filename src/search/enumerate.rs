//! Bounded depth-first enumeration of color-constrained routes.

use crate::core::cell::Cell;
use crate::core::pattern::Pattern;
use crate::search::budget::ExpansionBudget;

/// A route: `n + 1` cells, start first. Value data, freely copied.
pub type Route = Vec<Cell>;

/// Everything one enumeration call produced.
///
/// `wins` is the subset of `all` ending at the goal; both keep DFS discovery
/// order. `budget_hit` means the expansion budget stopped the search early and
/// the collections are partial.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub all: Vec<Route>,
    pub wins: Vec<Route>,
    pub expansions: u64,
    pub budget_hit: bool,
}

struct Frame {
    neighbors: Vec<Cell>,
    next: usize,
}

impl Frame {
    fn scan(cell: Cell) -> Frame {
        Frame {
            neighbors: cell.neighbors(),
            next: 0,
        }
    }
}

/// Enumerate every route of length `n + 1` from `start` whose step `i`
/// (1-indexed) lands on a cell of color `pattern[i - 1]`, with one exception:
/// on the final step the goal cell is admitted regardless of color.
///
/// Each admitted transition spends one budget unit; a spent budget stops
/// further expansion and the partial results are returned as-is. The search
/// uses an explicit frame stack, so deep routes cannot overflow the call
/// stack.
///
/// `n == 0` yields exactly the trivial route `[start]` (a win iff
/// `start == goal`) without consulting the budget; a zero-step search needs
/// no expansion.
pub fn enumerate(start: Cell, n: usize, pattern: &Pattern, goal: Cell, cap: u64) -> SearchOutcome {
    assert_eq!(pattern.len(), n, "pattern length must equal n");

    let mut all: Vec<Route> = Vec::new();
    let mut wins: Vec<Route> = Vec::new();
    let mut budget = ExpansionBudget::new(cap);

    let mut path: Route = vec![start];

    if n == 0 {
        record(&path, goal, &mut all, &mut wins);
        return outcome(all, wins, &budget);
    }

    let required = pattern.colors();
    let mut frames: Vec<Frame> = vec![Frame::scan(start)];

    while let Some(frame) = frames.last_mut() {
        if budget.is_spent() || frame.next >= frame.neighbors.len() {
            frames.pop();
            path.pop();
            continue;
        }

        // Path and frames move in lockstep, so the path length is the
        // 1-indexed step currently being extended.
        let step = path.len();
        let nx = frame.neighbors[frame.next];
        frame.next += 1;

        let admitted = nx.color() == required[step - 1] || (step == n && nx == goal);
        if !admitted {
            continue;
        }

        budget.spend();
        path.push(nx);

        // A child entered exactly at the cap contributes nothing, matching
        // the recursive formulation where the cap check precedes recording.
        if budget.is_spent() {
            path.pop();
            continue;
        }

        if path.len() == n + 1 {
            record(&path, goal, &mut all, &mut wins);
            path.pop();
            continue;
        }

        frames.push(Frame::scan(nx));
    }

    if budget.hit() {
        log::warn!(
            "expansion budget ({}) exhausted; route collections are partial",
            budget.cap()
        );
    }

    outcome(all, wins, &budget)
}

fn record(path: &[Cell], goal: Cell, all: &mut Vec<Route>, wins: &mut Vec<Route>) {
    all.push(path.to_vec());
    if path.last() == Some(&goal) {
        wins.push(path.to_vec());
    }
}

fn outcome(all: Vec<Route>, wins: Vec<Route>, budget: &ExpansionBudget) -> SearchOutcome {
    SearchOutcome {
        all,
        wins,
        expansions: budget.spent(),
        budget_hit: budget.hit(),
    }
}
