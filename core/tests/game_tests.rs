// SPDX-License-Identifier: MIT OR Apache-2.0

use lindom_core::{
    Color, Game, GameConfig, GameError, NullObserver, PlayEvent, RejectionReason, Score,
};
use std::io::Write;

fn play_str(input: &str) -> (lindom_core::Outcome, String) {
    let game = Game::parse(input, GameConfig::default()).unwrap();
    let mut report: Vec<u8> = Vec::new();
    let outcome = game.play(&mut NullObserver, &mut report).unwrap();
    (outcome, String::from_utf8(report).unwrap())
}

#[test]
fn single_horizontal_play() {
    let (outcome, report) = play_str("3\n0\n1 1 1 3\n");

    assert_eq!(
        report,
        "X X X\n. . .\n. . .\nPlayer X: 3 cells; Player O: 0 cells\n"
    );
    assert_eq!(outcome.winner(), Some(Color::Black));
}

#[test]
fn shared_tail_play_is_skipped() {
    let (outcome, report) = play_str("3\n5\n1 1 1 2\n1 1 2 1\n");

    assert_eq!(
        report,
        "X X .\n. . .\n. . .\nPlayer X: 2 cells; Player O: 0 cells\n"
    );
    let verdict = outcome.verdicts()[1];
    assert_eq!(verdict.color, Color::White);
    assert_eq!(verdict.rejection.unwrap().reason, RejectionReason::SharedTail);
}

#[test]
fn white_overwrites_black() {
    // Play 1 crosses play 0 at (1, 1); window 0 so nothing is refused
    let (outcome, report) = play_str("3 0\n2 1 2 3\n1 2 3 2\n");

    assert_eq!(
        report,
        ". O .\nX O X\n. O .\nPlayer X: 2 cells; Player O: 3 cells\n"
    );
    assert_eq!(outcome.score(), Score { black: 2, white: 3 });
    assert_eq!(outcome.winner(), Some(Color::White));
}

#[test]
fn observer_sees_every_board() {
    let game = Game::parse("2 1\n1 1 1 2\n1 1 2 2\n2 2 2 1\n", GameConfig::default()).unwrap();
    let mut boards = Vec::new();
    let mut observer = |event: &PlayEvent, board: &lindom_core::Board| {
        if !matches!(event, PlayEvent::Finished { .. }) {
            boards.push(board.render());
        }
    };

    game.play(&mut observer, &mut std::io::sink()).unwrap();

    assert_eq!(
        boards,
        vec![
            ". .\n. .\n".to_string(),
            "X X\n. .\n".to_string(),
            "X X\n. .\n".to_string(),
            "X X\nX X\n".to_string(),
        ]
    );
}

#[test]
fn load_and_save_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pa2_input_test.txt");
    let output = dir.path().join("pa2_output_test.txt");

    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "4\n2\n1 1 4 4\n4 1 1 4\n2 1 2 4").unwrap();
    drop(file);

    let game = Game::load(&input, GameConfig::default()).unwrap();
    assert_eq!(game.plays().len(), 3);
    assert_eq!(game.history_window(), 2);
    assert!(game.is_valid(0));
    // Anti-diagonal against diagonal
    assert!(!game.is_valid(1));
    assert!(game.is_valid(2));

    let outcome = game.play(&mut NullObserver, &mut std::io::sink()).unwrap();
    outcome.save(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, outcome.report());
    assert!(written.ends_with("Player X: 7 cells; Player O: 0 cells\n"));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Game::load(&dir.path().join("missing.txt"), GameConfig::default());

    assert!(matches!(result, Err(GameError::Io { .. })));
}

#[test]
fn play_off_the_board_aborts() {
    let game = Game::parse("2 0\n1 1 1 3\n", GameConfig::default()).unwrap();
    let mut report: Vec<u8> = Vec::new();
    let result = game.play(&mut NullObserver, &mut report);

    assert!(matches!(result, Err(GameError::OutOfBounds { .. })));
    assert!(report.is_empty());
}

#[test]
fn refused_play_off_the_board_is_harmless() {
    // Never drawn, so its out-of-range head does not matter
    let (outcome, _) = play_str("2 1\n1 1 1 2\n1 1 1 9\n");

    assert!(!outcome.verdicts()[1].is_drawn());
    assert_eq!(outcome.score(), Score { black: 2, white: 0 });
}

#[test]
fn board_too_large_for_memory() {
    let result = Game::parse("5000000000 0\n", GameConfig::default());

    assert!(matches!(
        result,
        Err(GameError::BoardTooLarge { size: 5_000_000_000 })
    ));
}

#[test]
fn huge_coordinate_is_out_of_bounds() {
    let game = Game::parse("3 0\n9223372036854775810 1 2 1\n", GameConfig::default()).unwrap();
    let mut report: Vec<u8> = Vec::new();
    let result = game.play(&mut NullObserver, &mut report);

    assert!(matches!(
        result,
        Err(GameError::OutOfBounds { row: i64::MAX, col: 0, size: 3 })
    ));
    assert!(report.is_empty());
}
