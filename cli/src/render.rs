// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use lindom_core::{cell_symbol, Board, PlayEvent};

/// Width of the banner printed above each game
pub const BANNER_WIDTH: usize = 58;

/// Render the board with 1-indexed row and column labels on every side
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let cell_width = digits(size);
    let label_width = cell_width.max(2);
    let mut output = String::new();

    let column_labels = column_labels(size, cell_width, label_width);
    output.push_str(&column_labels);

    for (row, cells) in board.rows().enumerate() {
        // Row number (1-indexed)
        output.push_str(&format!("{:>label_width$} ", row + 1));

        for cell in cells {
            output.push_str(&format!(" {:>cell_width$}", cell_symbol(*cell)));
        }

        // Add row number again on the right
        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    output.push_str(&column_labels);
    output
}

fn column_labels(size: usize, cell_width: usize, label_width: usize) -> String {
    let mut labels = " ".repeat(label_width + 1);
    for col in 0..size {
        labels.push_str(&format!(" {:>cell_width$}", col + 1));
    }
    labels.push('\n');
    labels
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// One-line description of an event, 1-indexed like the input file
pub fn describe_event(event: &PlayEvent) -> String {
    match event {
        PlayEvent::Started => "Empty board".to_string(),
        PlayEvent::Drawn { index, color, cells } => format!(
            "Play {} ({}): drew {} cell{}",
            index + 1,
            color.symbol(),
            cells,
            if *cells == 1 { "" } else { "s" }
        ),
        PlayEvent::Rejected {
            index,
            color,
            rejection,
        } => format!(
            "Play {} ({}): rejected, {} with play {}",
            index + 1,
            color.symbol(),
            rejection.reason,
            rejection.against + 1
        ),
        PlayEvent::Finished { score } => match score.winner() {
            Some(color) => format!("{} - Player {} wins", score, color.symbol()),
            None => format!("{} - Tie", score),
        },
    }
}

/// Centered title over a rule of dashes
pub fn banner(title: &str) -> String {
    let title = title.to_uppercase();
    format!("{:^width$}\n{}\n", title, "-".repeat(BANNER_WIDTH), width = BANNER_WIDTH)
}
