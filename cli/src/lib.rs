// SPDX-License-Identifier: MIT OR Apache-2.0

//! Linear Domination CLI - run games from input files and show the boards

pub mod display;
pub mod render;
pub mod runner;

pub use display::BoardPrinter;
pub use runner::{game_title, load_config, output_path_for, run_game};
