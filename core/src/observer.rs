// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hooks for watching a game as it is played

use crate::board::{Board, Score};
use crate::rules::Rejection;
use crate::Color;
use serde::{Deserialize, Serialize};

/// Game events emitted during play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayEvent {
    /// The board has been created and no play has been made yet
    Started,
    /// A play was drawn
    Drawn {
        /// Index of the play
        index: usize,
        /// The player who made it
        color: Color,
        /// Number of cells it colored
        cells: usize,
    },
    /// A play was refused; the turn is still used up
    Rejected {
        /// Index of the play
        index: usize,
        /// The player who made it
        color: Color,
        /// Why it was refused
        rejection: Rejection,
    },
    /// All plays have been processed
    Finished {
        /// Final cell counts
        score: Score,
    },
}

/// Receives every event of a game along with the board after it
pub trait PlayObserver {
    /// Called once per event, in order
    fn observe(&mut self, event: &PlayEvent, board: &Board);
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PlayObserver for NullObserver {
    fn observe(&mut self, _event: &PlayEvent, _board: &Board) {}
}

impl<F> PlayObserver for F
where
    F: FnMut(&PlayEvent, &Board),
{
    fn observe(&mut self, event: &PlayEvent, board: &Board) {
        self(event, board)
    }
}
