// SPDX-License-Identifier: MIT OR Apache-2.0

//! Printing a game to the terminal as it is played

use crate::render::{describe_event, render_board};
use lindom_core::{Board, PlayEvent, PlayObserver};
use std::io::{self, Write};

/// Observer that prints each event followed by the board
pub struct BoardPrinter<W: Write> {
    out: W,
    /// Only print the final score line
    quiet: bool,
    /// Printed before the score line in quiet mode
    title: Option<String>,
    /// First write failure; later output is skipped
    error: Option<io::Error>,
}

impl<W: Write> BoardPrinter<W> {
    /// Create a printer writing to `out`
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            title: None,
            error: None,
        }
    }

    /// Prefix the quiet score line with `title`
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Return the writer, or the first error hit while printing
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn print(&mut self, event: &PlayEvent, board: &Board) -> io::Result<()> {
        if self.quiet && matches!(event, PlayEvent::Finished { .. }) {
            if let Some(title) = &self.title {
                write!(self.out, "{}: ", title)?;
            }
        }
        writeln!(self.out, "{}", describe_event(event))?;
        match event {
            PlayEvent::Finished { .. } => {}
            _ => writeln!(self.out, "{}", render_board(board))?,
        }
        Ok(())
    }
}

impl<W: Write> PlayObserver for BoardPrinter<W> {
    fn observe(&mut self, event: &PlayEvent, board: &Board) {
        if self.error.is_some() {
            return;
        }
        if self.quiet && !matches!(event, PlayEvent::Finished { .. }) {
            return;
        }
        if let Err(err) = self.print(event, board) {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lindom_core::{Game, GameConfig};

    fn play(mut printer: BoardPrinter<Vec<u8>>) -> String {
        let game = Game::parse("2 0\n1 1 1 2\n", GameConfig::default()).unwrap();
        game.play(&mut printer, &mut io::sink()).unwrap();
        String::from_utf8(printer.finish().unwrap()).unwrap()
    }

    fn run(quiet: bool) -> String {
        play(BoardPrinter::new(Vec::new(), quiet))
    }

    #[test]
    fn test_prints_every_board() {
        let output = run(false);

        assert!(output.starts_with("Empty board\n"));
        assert!(output.contains("Play 1 (X): drew 2 cells\n"));
        assert!(output.contains(" 1  X X 1\n"));
        assert!(output.ends_with("Player X: 2 cells; Player O: 0 cells - Player X wins\n"));
    }

    #[test]
    fn test_quiet_prints_score_only() {
        assert_eq!(
            run(true),
            "Player X: 2 cells; Player O: 0 cells - Player X wins\n"
        );
    }

    #[test]
    fn test_quiet_title_comes_with_score() {
        let printer = BoardPrinter::new(Vec::new(), true).with_title("pa2_input_1");
        assert_eq!(
            play(printer),
            "pa2_input_1: Player X: 2 cells; Player O: 0 cells - Player X wins\n"
        );
    }

    #[test]
    fn test_title_not_printed_when_game_fails() {
        let game = Game::parse("2 0\n1 1 1 3\n", GameConfig::default()).unwrap();
        let mut printer = BoardPrinter::new(Vec::new(), true).with_title("off_board");

        assert!(game.play(&mut printer, &mut io::sink()).is_err());
        assert!(printer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_title_ignored_outside_quiet_mode() {
        let printer = BoardPrinter::new(Vec::new(), false).with_title("game");
        assert!(play(printer).starts_with("Empty board\n"));
    }
}
