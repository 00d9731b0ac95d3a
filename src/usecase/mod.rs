//! Usecase layer: analysis workflow, validation, progress events.

pub mod analyze;
pub mod event;
pub mod stats;
pub mod validate;
