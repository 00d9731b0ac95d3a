//! Interface layer: CLI wiring and report rendering.

pub mod cli;
pub mod report;
