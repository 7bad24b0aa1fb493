//! Core operations, separated from CLI argument parsing and output.

pub mod bake;

pub use bake::{BakeOptions, BakeReport, bake};
