use crate::domain::graph::Graph;
use crate::domain::model::SccResult;

pub trait SccDetector {
    /// Labels the vertices of `graph` into strongly connected components.
    ///
    /// `transpose` must be `graph` with every edge reversed. It is consumed so
    /// implementations can release it as soon as they no longer need it.
    fn compute_scc(&self, graph: &Graph, transpose: Graph) -> SccResult;
}
