//! Basic example: fair dice, one game, every statistic
//!
//! This example demonstrates:
//! - Creating dice and a game
//! - Playing and showing results in both forms
//! - Running the analyzer

use montecarlo::*;

fn main() -> Result<(), DiceError> {
    // Three fair six-sided dice
    let dice = (0..3).map(|_| Die::new(1..=6)).collect::<Result<Vec<_>, _>>()?;
    let mut game = Game::new(dice)?;

    println!("Playing 10 rolls of 3 dice...");
    game.play(10)?;

    println!("\n=== Wide Results ===");
    for (roll, outcomes) in game.outcomes()?.iter_rows() {
        let cells: Vec<String> = outcomes.iter().map(|f| f.to_string()).collect();
        println!("  roll {:>2}: {}", roll, cells.join(" "));
    }

    let narrow = game.narrow_results()?;
    println!("\nNarrow form has shape {:?}", narrow.shape());

    let analyzer = Analyzer::new(&game);
    println!("\nJackpots: {}", analyzer.jackpot_count()?);

    println!("\n=== Face Counts ===");
    let counts = analyzer.face_count()?;
    for (roll, row) in counts.iter() {
        println!("  roll {:>2}: {:?}", roll, row);
    }

    println!("\n=== Combinations ===");
    for (combo, count) in analyzer.combo_count()?.iter() {
        println!("  {:?}: {}", combo, count);
    }

    println!(
        "\nDistinct permutations: {}",
        analyzer.permutation_count()?.len()
    );

    Ok(())
}
