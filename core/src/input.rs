// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game input parsing
//!
//! An input is a board width, a history window, then any number of plays
//! given as four 1-indexed integers `tail_row tail_col head_row head_col`.
//! Tokens are whitespace separated; line breaks carry no meaning.

use crate::line::ParametricLine;
use crate::GameError;
use std::fs;
use std::path::Path;

/// Everything needed to set up a game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSetup {
    /// Width of the square board
    pub board_width: usize,
    /// Number of earlier plays each play is checked against
    pub history_window: usize,
    /// Plays in turn order
    pub plays: Vec<ParametricLine>,
}

/// Read and parse a game input file
pub fn parse_file(path: &Path) -> Result<GameSetup, GameError> {
    let content = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

/// Parse game input text.
///
/// Play parsing stops at the first group of four tokens that is incomplete
/// or not made of integers; anything after it is ignored.
pub fn parse_str(content: &str) -> Result<GameSetup, GameError> {
    let mut tokens = content.split_whitespace();

    let board_width = header(tokens.next(), "board width")?;
    let history_window = header(tokens.next(), "history window")?;
    if board_width == 0 {
        return Err(GameError::ZeroWidth);
    }

    let rest: Vec<&str> = tokens.collect();
    let mut plays = Vec::new();

    for group in rest.chunks(4) {
        let values: Option<Vec<usize>> = group.iter().map(|t| t.parse().ok()).collect();
        let values = match values {
            Some(values) if values.len() == 4 => values,
            _ => break,
        };

        let play = ParametricLine::from_one_indexed(values[0], values[1], values[2], values[3])
            .ok_or(GameError::ZeroCoordinate { play: plays.len() })?;
        plays.push(play);
    }

    let consumed = plays.len() * 4;
    if consumed < rest.len() {
        tracing::warn!(
            ignored = rest.len() - consumed,
            "Ignoring trailing input after play {}",
            plays.len()
        );
    }

    Ok(GameSetup {
        board_width,
        history_window,
        plays,
    })
}

fn header(token: Option<&str>, field: &'static str) -> Result<usize, GameError> {
    let token = token.ok_or(GameError::MissingHeader(field))?;
    token.parse().map_err(|_| GameError::InvalidHeader {
        field,
        token: token.to_string(),
    })
}
