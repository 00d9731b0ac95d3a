use crate::domain::error::InputError;
use std::collections::TryReserveError;
use std::fmt;

/// Dense vertex index in `[0, n)`.
pub type VertexId = usize;

/// Directed graph as one successor list per vertex.
///
/// Successors are reported newest edge first: adding `0 -> 1` then `0 -> 2`
/// yields `[2, 1]` for vertex 0. Component membership does not depend on this
/// order, but traversal order (and so finishing times) does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`Graph::new`], but reports an allocation failure instead of aborting.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut edges = Vec::new();
        edges.try_reserve_exact(vertex_count)?;
        edges.resize_with(vertex_count, Vec::new);
        Ok(Self {
            edges,
            edge_count: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds `tail -> head`. Duplicates and self-loops are kept.
    ///
    /// # Panics
    /// If either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) {
        assert!(head < self.edges.len(), "head {head} out of range");
        self.edges[tail].push(head);
        self.edge_count += 1;
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.edges[v].len()
    }

    /// Successors of `v`, newest edge first.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges[v].iter().rev().copied()
    }

    /// The `i`-th successor of `v` in [`Graph::successors`] order.
    pub fn successor(&self, v: VertexId, i: usize) -> Option<VertexId> {
        let outs = &self.edges[v];
        outs.len().checked_sub(i + 1).map(|j| outs[j])
    }

    pub fn has_self_loop(&self, v: VertexId) -> bool {
        self.edges[v].contains(&v)
    }

    /// Same vertex set, every edge reversed, edges re-added in original insertion order.
    pub fn transpose(&self) -> Graph {
        let mut rev = Graph::new(self.vertex_count());
        for (tail, outs) in self.edges.iter().enumerate() {
            for &head in outs {
                rev.add_edge(head, tail);
            }
        }
        rev
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph has {} vertices and {} arc(s).",
            self.vertex_count(),
            self.edge_count()
        )?;
        for v in 0..self.vertex_count() {
            write!(f, "Vertex {} has arc(s) with: ", v + 1)?;
            if self.out_degree(v) == 0 {
                write!(f, "nobody")?;
            } else {
                for head in self.successors(v) {
                    write!(f, "{} ", head + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The original graph and its transpose, built together from one edge stream.
///
/// The two adjacency structures share no state, so the transpose can be
/// dropped as soon as the finishing-time pass is done with it.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub graph: Graph,
    pub transpose: Graph,
}

impl GraphStore {
    /// Builds both graphs in O(n + m) from 0-based `(tail, head)` pairs.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let too_large = |_: TryReserveError| InputError::VertexCountTooLarge { vertex_count };
        let mut graph = Graph::try_new(vertex_count).map_err(too_large)?;
        let mut transpose = Graph::try_new(vertex_count).map_err(too_large)?;

        for (tail, head) in edges {
            for vertex in [tail, head] {
                if vertex >= vertex_count {
                    return Err(InputError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            graph.add_edge(tail, head);
            transpose.add_edge(head, tail);
        }

        Ok(Self { graph, transpose })
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn into_parts(self) -> (Graph, Graph) {
        (self.graph, self.transpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_are_newest_first() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 1);

        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 2, 1]);
        assert_eq!(g.successor(0, 0), Some(1));
        assert_eq!(g.successor(0, 1), Some(2));
        assert_eq!(g.successor(0, 3), None);
        assert_eq!(g.successor(1, 0), None);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn build_reverses_every_edge_in_transpose() {
        let store = GraphStore::build(3, [(0, 1), (1, 2), (2, 2)]).expect("build");

        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.transpose.edge_count(), 3);
        assert_eq!(store.transpose.successors(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(store.transpose.successors(2).collect::<Vec<_>>(), vec![2, 1]);
        assert!(store.graph.has_self_loop(2));
        assert_eq!(store.graph.transpose(), store.transpose);
    }

    #[test]
    fn build_rejects_out_of_range_vertex() {
        let err = GraphStore::build(2, [(0, 1), (1, 2)]).unwrap_err();
        match err {
            InputError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                assert_eq!(vertex, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn build_reports_unallocatable_vertex_count() {
        let err = GraphStore::build(usize::MAX, Vec::<(usize, usize)>::new()).unwrap_err();
        assert!(matches!(
            err,
            InputError::VertexCountTooLarge {
                vertex_count: usize::MAX
            }
        ));
    }

    #[test]
    fn display_lists_one_based_arcs() {
        let store = GraphStore::build(2, [(0, 1)]).expect("build");
        let text = store.graph.to_string();
        assert_eq!(
            text,
            "Graph has 2 vertices and 1 arc(s).\nVertex 1 has arc(s) with: 2 \nVertex 2 has arc(s) with: nobody\n"
        );
    }
}
