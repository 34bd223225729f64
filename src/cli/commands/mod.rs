//! Subcommand implementations for the tictactoe binary

pub mod export;
pub mod selfplay;
pub mod solve;
pub mod verify;
