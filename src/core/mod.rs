//! Core algorithms – directory discovery, image concatenation, grid assembly.
//!
//! Nothing in here prints to the terminal; progress goes through `tracing`.

pub mod compose;
pub mod fs;
pub mod grid;
