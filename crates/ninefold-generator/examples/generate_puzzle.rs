//! Example demonstrating basic sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty
//! - Generate a random puzzle
//! - Display the puzzle, solution, and seed
//! - Reproduce a puzzle from its seed or from a phrase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Select the difficulty profile (easy, medium, hard, expert):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty easy
//! ```
//!
//! Reproduce a puzzle from a 64-digit hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed deadbeef...
//! ```
//!
//! Derive the seed from a phrase, daily-puzzle style:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase 2026-08-25
//! ```
//!
//! Generate several puzzles in parallel:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 8
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use ninefold_core::Difficulty;
use ninefold_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Difficulty {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty profile to carve for.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Reproduce the puzzle for a 64-digit hex seed.
    #[arg(long, value_name = "HEX", conflicts_with_all = ["phrase", "count"])]
    seed: Option<String>,

    /// Derive the seed from a phrase, e.g. a date.
    #[arg(long, value_name = "PHRASE", conflicts_with = "count")]
    phrase: Option<String>,

    /// Number of random puzzles to generate in parallel.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    if let Some(hex) = &args.seed {
        let seed = match hex.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Invalid seed: {e}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    if let Some(phrase) = &args.phrase {
        print_puzzle(&generator.generate_with_seed(PuzzleSeed::from_phrase(phrase)));
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let puzzles: Vec<_> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();
    for (i, puzzle) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_puzzle(puzzle);
    }
    if puzzles.len() > 1 {
        println!();
        println!(
            "Generated {} {} puzzles.",
            puzzles.len(),
            generator.difficulty()
        );
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Problem ({} givens):", puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
