//! Loaded dice example: compare a fair coin game with an unfair one
//!
//! This example demonstrates:
//! - Changing face weights with numbers and numeric strings
//! - Reproducible plays with a seeded generator
//! - Comparing jackpot rates

use montecarlo::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ROLLS: usize = 1000;

fn coin_game(heads_weight: &str, coins: usize) -> Result<Game, DiceError> {
    let mut dice = Vec::with_capacity(coins);
    for _ in 0..coins {
        let mut coin = Die::new(["H", "T"])?;
        coin.set_weight("H", heads_weight)?;
        dice.push(coin);
    }
    Game::new(dice)
}

fn main() -> Result<(), DiceError> {
    let mut rng = StdRng::seed_from_u64(2024);

    let mut fair = coin_game("1", 3)?;
    let mut unfair = coin_game("5", 3)?;

    fair.play_with(&mut rng, ROLLS)?;
    unfair.play_with(&mut rng, ROLLS)?;

    let state = unfair.dice()[0].state();
    println!(
        "Unfair coin: P(H) = {:.3}",
        state.probability(&Face::from("H")).unwrap_or(0.0)
    );

    let fair_jackpots = Analyzer::new(&fair).jackpot_count()?;
    let unfair_jackpots = Analyzer::new(&unfair).jackpot_count()?;

    println!("\n=== Jackpot Rate over {} rolls ===", ROLLS);
    println!("  fair:   {:.3}", fair_jackpots as f64 / ROLLS as f64);
    println!("  unfair: {:.3}", unfair_jackpots as f64 / ROLLS as f64);

    println!("\n=== Unfair Combinations ===");
    for (combo, count) in Analyzer::new(&unfair).combo_count()?.iter() {
        let label: Vec<String> = combo.iter().map(|f| f.to_string()).collect();
        println!("  {}: {}", label.join(""), count);
    }

    Ok(())
}
