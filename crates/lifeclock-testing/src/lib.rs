//! Testing infrastructure for lifeclock tests.
//!
//! - `TestWorld`: isolated data directory plus a runner for the `lifeclock` binary
//! - `assertions`: grid-shape and bar-cell checks over rendered rows
//! - `fixtures`: timestamp and configuration builders

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
