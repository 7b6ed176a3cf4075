use anyhow::{ensure, Result};
use itertools::iproduct;

use crate::grid::{Grid, Pos};
use crate::rng::{Rng, Seed};
use crate::solver::{solve, SearchPolicy};

/// A generated puzzle together with the full solution it was dug from.
/// Every clue left in `puzzle` equals the corresponding `solution` cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub puzzle: Grid,
    pub solution: Grid,
}

/// Solve the empty grid to a full valid assignment. An empty 9x9 grid is
/// always solvable, so a failure here is a defect in the constraint
/// logic and surfaces as an error rather than a normal outcome.
pub fn generate_full_solution(seed: Option<&Seed>) -> Result<Grid> {
    let outcome = solve(&Grid::empty(), seed, SearchPolicy::FirstSolution);
    ensure!(outcome.solved, "empty grid admitted no solution");
    Ok(outcome.grid)
}

/// Number of completions of `grid`, capped at 2.
pub fn count_solutions(grid: &Grid, seed: Option<&Seed>) -> usize {
    solve(grid, seed, SearchPolicy::CountUpToTwo).solutions.unwrap_or(0)
}

/// Generate a puzzle with a guaranteed-unique solution.
///
/// The seed feeds two independent streams: the generator's own RNG fixes
/// the removal order, and every nested solve derives its own RNG from
/// the same seed value. Greedy digging: each cell is cleared once, in
/// shuffled order, and restored if the remaining grid no longer has
/// exactly one completion. Rejected removals are never retried.
pub fn generate_puzzle(seed: Option<&Seed>) -> Result<Puzzle> {
    let mut rng = Rng::new(seed);
    let solution = generate_full_solution(seed)?;
    let mut puzzle = solution.clone();

    let positions: Vec<Pos> = iproduct!(0..9, 0..9).map(|(r, c)| Pos { r, c }).collect();
    for p in rng.shuffle(&positions) {
        let backup = puzzle.get(p);
        puzzle.clear(p);
        if count_solutions(&puzzle, seed) != 1 {
            puzzle.set(p, backup);
        }
    }
    Ok(Puzzle { puzzle, solution })
}
