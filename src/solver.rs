use crate::grid::{Digit, Grid};
use crate::rng::{Rng, Seed};

/// Terminal condition for the backtracking search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Return at the first complete assignment, leaving it in the grid.
    FirstSolution,
    /// Explore until two assignments have been seen or the space is
    /// exhausted. Used for uniqueness checks; the count never exceeds 2.
    CountUpToTwo,
}

#[derive(Clone, Debug)]
pub struct SolveOutcome {
    pub solved: bool,
    /// Reported only under `CountUpToTwo`; always 0, 1, or 2.
    pub solutions: Option<usize>,
    pub grid: Grid,
}

const DIGITS: [Digit; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Depth-first search over the empty cells of an owned copy of `grid`,
/// in row-major order, trying candidate digits in an order shuffled
/// fresh per cell from a single seed-derived stream. With the same seed
/// the whole sequence of shuffles, and hence the search, is
/// deterministic.
pub fn solve(grid: &Grid, seed: Option<&Seed>, policy: SearchPolicy) -> SolveOutcome {
    let mut rng = Rng::new(seed);
    let mut work = grid.clone();
    let mut solutions = 0usize;
    let solved = backtrack(&mut work, &mut rng, policy, &mut solutions);
    match policy {
        SearchPolicy::FirstSolution => SolveOutcome { solved, solutions: None, grid: work },
        SearchPolicy::CountUpToTwo => {
            SolveOutcome { solved: solutions > 0, solutions: Some(solutions), grid: work }
        }
    }
}

fn backtrack(work: &mut Grid, rng: &mut Rng, policy: SearchPolicy, solutions: &mut usize) -> bool {
    let Some(pos) = work.find_empty() else {
        *solutions += 1;
        return true;
    };
    for d in rng.shuffle(&DIGITS) {
        if work.can_place(pos, d) {
            work.set(pos, d);
            if backtrack(work, rng, policy, solutions) {
                match policy {
                    // first solution stays in place
                    SearchPolicy::FirstSolution => return true,
                    SearchPolicy::CountUpToTwo if *solutions >= 2 => return true,
                    SearchPolicy::CountUpToTwo => {}
                }
            }
            work.clear(pos);
        }
    }
    false
}
