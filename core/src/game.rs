// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single game of Linear Domination, from input to report

use crate::board::{Board, Score};
use crate::config::GameConfig;
use crate::input::{self, GameSetup};
use crate::line::ParametricLine;
use crate::observer::{PlayEvent, PlayObserver};
use crate::rules::{PlayValidator, Rejection};
use crate::{Color, GameError};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// A loaded game that has not been played yet
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    plays: Vec<ParametricLine>,
    history_window: usize,
    config: GameConfig,
}

/// What happened to one play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Index of the play
    pub index: usize,
    /// The player who made it
    pub color: Color,
    /// Why it was refused, `None` if it was drawn
    pub rejection: Option<Rejection>,
}

impl Verdict {
    /// Whether the play was drawn
    pub fn is_drawn(&self) -> bool {
        self.rejection.is_none()
    }
}

/// A finished game
#[derive(Debug, Clone)]
pub struct Outcome {
    board: Board,
    verdicts: Vec<Verdict>,
    score: Score,
}

impl Game {
    /// Set up a game from already parsed input
    pub fn new(setup: GameSetup, config: GameConfig) -> Result<Self, GameError> {
        let board = Board::with_tolerance(setup.board_width, config.tolerance)?;

        info!(
            width = setup.board_width,
            history_window = setup.history_window,
            plays = setup.plays.len(),
            "Loaded game"
        );

        Ok(Self {
            board,
            plays: setup.plays,
            history_window: setup.history_window,
            config,
        })
    }

    /// Parse a game from input text
    pub fn parse(content: &str, config: GameConfig) -> Result<Self, GameError> {
        Self::new(input::parse_str(content)?, config)
    }

    /// Read a game from an input file
    pub fn load(path: &Path, config: GameConfig) -> Result<Self, GameError> {
        Self::new(input::parse_file(path)?, config)
    }

    /// The board, empty until the game is played
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays in turn order
    pub fn plays(&self) -> &[ParametricLine] {
        &self.plays
    }

    /// Number of earlier plays each play is checked against
    pub fn history_window(&self) -> usize {
        self.history_window
    }

    fn validator(&self) -> PlayValidator<'_> {
        PlayValidator::new(&self.plays, self.history_window, &self.config)
    }

    /// Check the play at `index` against its window
    pub fn check_play(&self, index: usize) -> Result<(), Rejection> {
        self.validator().check_play(index)
    }

    /// Whether the play at `index` will be drawn
    pub fn is_valid(&self, index: usize) -> bool {
        self.validator().is_valid(index)
    }

    /// Run every play in order and write the report to `sink`.
    ///
    /// Colors alternate by play index whether or not a play is drawn.
    /// The report is only written once all plays succeeded.
    #[instrument(skip_all, fields(width = self.board.size(), plays = self.plays.len()))]
    pub fn play<O, W>(mut self, observer: &mut O, sink: &mut W) -> Result<Outcome, GameError>
    where
        O: PlayObserver + ?Sized,
        W: Write + ?Sized,
    {
        observer.observe(&PlayEvent::Started, &self.board);

        let mut verdicts = Vec::with_capacity(self.plays.len());

        for index in 0..self.plays.len() {
            let color = Color::for_play(index);

            let event = match self.check_play(index) {
                Ok(()) => {
                    let cells = self.board.plot_line(&self.plays[index], color)?;
                    debug!(index, ?color, cells, "Drew play");
                    verdicts.push(Verdict {
                        index,
                        color,
                        rejection: None,
                    });
                    PlayEvent::Drawn { index, color, cells }
                }
                Err(rejection) => {
                    debug!(index, ?color, %rejection, "Rejected play");
                    verdicts.push(Verdict {
                        index,
                        color,
                        rejection: Some(rejection),
                    });
                    PlayEvent::Rejected {
                        index,
                        color,
                        rejection,
                    }
                }
            };

            observer.observe(&event, &self.board);
        }

        let score = self.board.score();
        info!(black = score.black, white = score.white, "Game finished");

        let outcome = Outcome {
            board: self.board,
            verdicts,
            score,
        };
        outcome.write_report(sink)?;
        observer.observe(&PlayEvent::Finished { score }, &outcome.board);

        Ok(outcome)
    }
}

impl Outcome {
    /// Final board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One verdict per play, in turn order
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Cells held by each player
    pub fn score(&self) -> Score {
        self.score
    }

    /// The player with the most cells, `None` on a tie
    pub fn winner(&self) -> Option<Color> {
        self.score.winner()
    }

    /// The report: the board, then the score line
    pub fn report(&self) -> String {
        format!("{}{}\n", self.board.render(), self.score)
    }

    /// Write the report to `sink`
    pub fn write_report<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), GameError> {
        sink.write_all(self.report().as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Write the report to a file, replacing it
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        std::fs::write(path, self.report()).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;

    #[test]
    fn test_colors_alternate_through_rejections() {
        let game = Game::parse("4 1\n1 1 1 2\n1 1 2 2\n3 1 3 3\n", GameConfig::default()).unwrap();
        let outcome = game.play(&mut NullObserver, &mut std::io::sink()).unwrap();

        let verdicts = outcome.verdicts();
        assert_eq!(verdicts[0].color, Color::Black);
        assert_eq!(verdicts[1].color, Color::White);
        assert!(!verdicts[1].is_drawn());
        assert_eq!(verdicts[2].color, Color::Black);
        assert!(verdicts[2].is_drawn());
        assert_eq!(outcome.score().white, 0);
    }

    #[test]
    fn test_events_in_order() {
        let game = Game::parse("3 0\n1 1 1 1\n2 2 2 2\n", GameConfig::default()).unwrap();
        let mut events = Vec::new();
        let mut record = |event: &PlayEvent, _board: &Board| events.push(event.clone());

        game.play(&mut record, &mut std::io::sink()).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0], PlayEvent::Started);
        assert!(matches!(events[1], PlayEvent::Drawn { index: 0, color: Color::Black, cells: 1 }));
        assert!(matches!(events[2], PlayEvent::Drawn { index: 1, color: Color::White, cells: 1 }));
        assert!(matches!(events[3], PlayEvent::Finished { score: Score { black: 1, white: 1 } }));
    }
}
