//! Strongly connected components of a directed graph.
//!
//! Layers:
//! - domain: graph store, traversal engine, typed errors
//! - infrastructure: Kosaraju detector, edge-list reader, NDJSON events
//! - usecase: analysis orchestration + invariant validation
//! - interface: CLI wiring and report rendering

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
