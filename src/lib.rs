pub mod generator;
pub mod grid;
pub mod rng;
pub mod solver;

pub use generator::{count_solutions, generate_full_solution, generate_puzzle, Puzzle};
pub use grid::{Grid, Pos};
pub use rng::{Rng, Seed};
pub use solver::{solve, SearchPolicy, SolveOutcome};
