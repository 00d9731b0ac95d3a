// Infrastructure layer: algorithm implementations, file I/O, eventing
pub mod edge_list_reader;
pub mod event_ndjson;
pub mod scc_kosaraju;
