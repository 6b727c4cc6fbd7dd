//! Integration tests for the brdgme_game crate.
//!
//! Drives a small castle siege game through the `Gamer` boundary:
//! - Setup, player counts and seeded randomness
//! - Command parsing, turn order and rule violations
//! - Chained commands and grammar reflection

mod siege_tests;
