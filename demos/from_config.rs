//! Config example: build and play a game from JSON
//!
//! This example demonstrates:
//! - Describing dice and weights in JSON
//! - Running a seeded game from a config
//! - Exporting statistics as JSON

use montecarlo::*;

const CONFIG: &str = r#"{
    "dice": [
        { "faces": [1, 2, 3, 4, 5, 6], "weights": [{ "face": 6, "weight": 3 }] },
        { "faces": [1, 2, 3, 4, 5, 6], "weights": [{ "face": 1, "weight": "0.5" }] }
    ],
    "rolls": 500,
    "seed": 7
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::from_json(CONFIG)?;
    println!("Loaded config:\n{}", config.to_json()?);

    let game = config.run()?;
    let analyzer = Analyzer::new(&game);

    println!("\nJackpots: {}", analyzer.jackpot_count()?);
    println!(
        "\nCombinations as JSON:\n{}",
        serde_json::to_string_pretty(&analyzer.combo_count()?)?
    );

    Ok(())
}
