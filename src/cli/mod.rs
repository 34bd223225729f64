//! CLI infrastructure for the tictactoe engine
//!
//! This module provides the batch command-line interface for solving
//! positions, evaluating the engine, and exporting the optimal policy.

pub mod commands;
