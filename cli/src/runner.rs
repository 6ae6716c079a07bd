// SPDX-License-Identifier: MIT OR Apache-2.0

//! Running games from input files

use anyhow::{Context, Result};
use lindom_core::{Game, GameConfig, Outcome, PlayObserver};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read a JSON configuration, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    GameConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Output file for an input file.
///
/// `input` in the file name becomes `output` (`pa2_input_1.txt` gives
/// `pa2_output_1.txt`); names without it get `.out` appended.
pub fn output_path_for(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let output_name = if name.contains("input") {
        OsString::from(name.replacen("input", "output", 1))
    } else {
        let mut name = OsString::from(name);
        name.push(".out");
        name
    };

    input.with_file_name(output_name)
}

/// Title shown above a game: the input file's stem
pub fn game_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Load, play and save one game.
///
/// The output file is only created once the game finished without error.
pub fn run_game<O>(input: &Path, output: &Path, config: GameConfig, observer: &mut O) -> Result<Outcome>
where
    O: PlayObserver + ?Sized,
{
    let game = Game::load(input, config)
        .with_context(|| format!("Failed to load game from {}", input.display()))?;

    let outcome = game
        .play(observer, &mut io::sink())
        .with_context(|| format!("Failed to play game from {}", input.display()))?;

    outcome
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), "Saved game");

    Ok(outcome)
}
