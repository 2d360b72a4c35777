//! CLI module for toolsmith
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Commands};
