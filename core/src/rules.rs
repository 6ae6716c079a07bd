// SPDX-License-Identifier: MIT OR Apache-2.0

//! Play validity rules

use crate::config::GameConfig;
use crate::line::ParametricLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a play was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Both plays start in the same cell
    SharedTail,
    /// Both plays end in the same cell
    SharedHead,
    /// Both plays have the same midpoint
    SameMidpoint,
    /// The plays' directions are perpendicular
    Perpendicular,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectionReason::SharedTail => "shares its tail cell",
            RejectionReason::SharedHead => "shares its head cell",
            RejectionReason::SameMidpoint => "has the same midpoint",
            RejectionReason::Perpendicular => "is perpendicular",
        };
        f.write_str(text)
    }
}

/// A refused play: the earlier play it conflicts with and the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Index of the earlier conflicting play
    pub against: usize,
    /// The rule that matched
    pub reason: RejectionReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with play {}", self.reason, self.against)
    }
}

/// Validates plays against the plays that came just before them
pub struct PlayValidator<'a> {
    /// All plays of the game, in turn order
    plays: &'a [ParametricLine],
    /// How many earlier plays each play is checked against
    history_window: usize,
    /// Comparison settings
    config: &'a GameConfig,
}

impl<'a> PlayValidator<'a> {
    /// Create a new validator
    pub fn new(plays: &'a [ParametricLine], history_window: usize, config: &'a GameConfig) -> Self {
        Self {
            plays,
            history_window,
            config,
        }
    }

    /// Indices of the earlier plays `index` is checked against
    pub fn window(&self, index: usize) -> std::ops::Range<usize> {
        index.saturating_sub(self.history_window)..index
    }

    /// Check the play at `index`.
    ///
    /// The window is scanned oldest first and the first conflict found is
    /// returned. With a window of zero every play is valid.
    pub fn check_play(&self, index: usize) -> Result<(), Rejection> {
        let play = &self.plays[index];

        for against in self.window(index) {
            if let Some(reason) = self.conflict(play, &self.plays[against]) {
                return Err(Rejection { against, reason });
            }
        }

        Ok(())
    }

    /// Whether the play at `index` may be drawn
    pub fn is_valid(&self, index: usize) -> bool {
        self.check_play(index).is_ok()
    }

    /// First rule the two plays break, if any
    pub fn conflict(&self, play: &ParametricLine, earlier: &ParametricLine) -> Option<RejectionReason> {
        if play.tail_cell() == earlier.tail_cell() {
            return Some(RejectionReason::SharedTail);
        }

        if play.head_cell() == earlier.head_cell() {
            return Some(RejectionReason::SharedHead);
        }

        let (a, b) = (play.midpoint(), earlier.midpoint());
        if self.config.approx_eq(a.x, b.x) && self.config.approx_eq(a.y, b.y) {
            return Some(RejectionReason::SameMidpoint);
        }

        // A single-cell play has a zero direction and so is perpendicular
        // to everything.
        if self.config.approx_eq(play.dot(earlier), 0.0) {
            return Some(RejectionReason::Perpendicular);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    fn line(tail: (usize, usize), head: (usize, usize)) -> ParametricLine {
        ParametricLine::new(Coord::new(tail.0, tail.1), Coord::new(head.0, head.1))
    }

    #[test]
    fn test_window_clamps_at_zero() {
        let config = GameConfig::default();
        let plays = vec![line((0, 0), (0, 1)); 5];
        let validator = PlayValidator::new(&plays, 2, &config);

        assert_eq!(validator.window(0), 0..0);
        assert_eq!(validator.window(1), 0..1);
        assert_eq!(validator.window(4), 2..4);
    }

    #[test]
    fn test_reason_precedence() {
        let config = GameConfig::default();
        let plays = vec![line((0, 0), (0, 2)), line((0, 0), (0, 2))];
        let validator = PlayValidator::new(&plays, 1, &config);

        assert_eq!(
            validator.check_play(1),
            Err(Rejection {
                against: 0,
                reason: RejectionReason::SharedTail
            })
        );
    }

    #[test]
    fn test_reversed_play_shares_midpoint() {
        let config = GameConfig::default();
        let plays = vec![line((0, 0), (2, 2)), line((2, 2), (0, 0))];
        let validator = PlayValidator::new(&plays, 1, &config);

        assert_eq!(
            validator.check_play(1).unwrap_err().reason,
            RejectionReason::SameMidpoint
        );
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection {
            against: 3,
            reason: RejectionReason::Perpendicular,
        };
        assert_eq!(rejection.to_string(), "is perpendicular with play 3");
    }
}
