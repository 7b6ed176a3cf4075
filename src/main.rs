use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sudogen::{generate_puzzle, Seed};

#[derive(Parser, Debug)]
#[command(name = "sudogen", version, about = "Generate a 9x9 Sudoku puzzle with a guaranteed-unique solution")]
struct Cli {
    /// Seed for deterministic generation. A value that parses as an
    /// unsigned 32-bit integer seeds the PRNG directly; anything else is
    /// hashed as text.
    #[arg(long)]
    seed: Option<String>,

    /// Color the section headers
    #[arg(long)]
    color: bool,
}

fn parse_seed(raw: &str) -> Seed {
    match raw.parse::<u32>() {
        Ok(n) => Seed::Number(n),
        Err(_) => Seed::Text(raw.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.as_deref().map(parse_seed);
    let result = generate_puzzle(seed.as_ref())?;

    let (puzzle_hdr, solution_hdr) = if cli.color {
        ("Puzzle:".green().bold().to_string(), "Solution:".blue().bold().to_string())
    } else {
        ("Puzzle:".to_string(), "Solution:".to_string())
    };

    println!("{puzzle_hdr}");
    println!("{}", result.puzzle.to_pretty_string());
    println!();
    println!("{solution_hdr}");
    println!("{}", result.solution.to_pretty_string());
    Ok(())
}
