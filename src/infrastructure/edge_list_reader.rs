use crate::domain::error::InputError;
use crate::domain::graph::GraphStore;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, warn};

/// What to do with the first malformed or out-of-range edge token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Stop reading and keep the edges accepted so far.
    #[default]
    Truncate,
    /// Fail with [`InputError::MalformedEdge`].
    Strict,
}

/// Where and why edge ingestion stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    pub line: usize,
    pub reason: String,
}

/// Parsed edge-list file. Vertex ids are 1-based, as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
    pub truncated: Option<Truncation>,
}

impl EdgeList {
    /// Converts to 0-based ids and builds the graph and its transpose.
    pub fn into_store(self) -> Result<GraphStore, InputError> {
        let edges = self
            .edges
            .into_iter()
            // A 0 id wraps and is rejected as out of range.
            .map(|(tail, head)| (tail.wrapping_sub(1), head.wrapping_sub(1)));
        GraphStore::build(self.vertex_count, edges)
    }
}

/// Reads and parses `path`.
///
/// Bytes that are not UTF-8 become U+FFFD, so they fail as an ordinary
/// malformed token and follow `policy`.
pub async fn read_edge_list_file(path: &str, policy: EdgePolicy) -> Result<EdgeList, InputError> {
    let bytes = fs::read(path)
        .await
        .map_err(|source| InputError::UnreadableFile {
            path: path.to_string(),
            source,
        })?;
    parse_edge_list(&String::from_utf8_lossy(&bytes), policy)
}

/// Parses `n` from the first line, then `tail head` pairs from the rest.
///
/// Anything after the first token of line 1 is ignored. Pairs may span lines.
pub fn parse_edge_list(raw: &str, policy: EdgePolicy) -> Result<EdgeList, InputError> {
    let mut lines = raw.lines();
    let vertex_count = lines
        .next()
        .and_then(|first| first.split_whitespace().next())
        .and_then(|tok| tok.parse::<usize>().ok())
        .ok_or(InputError::MalformedVertexCount)?;

    let tokens = lines
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 2, tok)));

    let mut out = EdgeList {
        vertex_count,
        ..EdgeList::default()
    };
    let mut pending_tail: Option<(usize, usize)> = None;

    for (line, tok) in tokens {
        let vertex = match parse_vertex(tok, vertex_count) {
            Ok(v) => v,
            Err(reason) => return stop(out, policy, line, reason),
        };
        match pending_tail.take() {
            None => pending_tail = Some((line, vertex)),
            Some((_, tail)) => out.edges.push((tail, vertex)),
        }
    }

    if let Some((line, tail)) = pending_tail {
        return stop(
            out,
            policy,
            line,
            format!("tail vertex {tail} has no head vertex"),
        );
    }

    debug!(
        vertices = vertex_count,
        edges = out.edges.len(),
        "edge list parsed"
    );
    Ok(out)
}

fn parse_vertex(tok: &str, vertex_count: usize) -> Result<usize, String> {
    let v: i64 = tok
        .parse()
        .map_err(|_| format!("{tok:?} is not an integer"))?;
    if v < 1 || v as u64 > vertex_count as u64 {
        return Err(format!("vertex {v} is outside [1, {vertex_count}]"));
    }
    Ok(v as usize)
}

fn stop(
    mut out: EdgeList,
    policy: EdgePolicy,
    line: usize,
    reason: String,
) -> Result<EdgeList, InputError> {
    match policy {
        EdgePolicy::Strict => Err(InputError::MalformedEdge { line, reason }),
        EdgePolicy::Truncate => {
            warn!(
                line,
                reason = %reason,
                accepted_edges = out.edges.len(),
                "edge ingestion stopped early"
            );
            out.truncated = Some(Truncation { line, reason });
            Ok(out)
        }
    }
}
