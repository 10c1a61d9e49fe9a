//! Basic example of using the multidoku engine

use multidoku_core::{BoardSize, Difficulty, Error, Generator, Solver};

fn main() -> Result<(), Error> {
    let size = BoardSize::new(9)?;

    // Generate a puzzle
    println!("Generating a Medium difficulty {} puzzle...\n", size);
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium, size)?;

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    let solution = solver.solve(&puzzle)?;
    println!("Solution:");
    println!("{}", solution);

    // The 6x6 variant uses 2x3 sub-blocks
    let six = BoardSize::new(6)?;
    let small = generator.generate(Difficulty::Easy, six)?;
    println!("A 6x6 Easy puzzle:");
    println!("{}", small);

    Ok(())
}
