mod assignment;
mod finishing;

pub use assignment::assign_components;
pub use finishing::compute_finishing_times;

use crate::domain::graph::Graph;
use crate::domain::model::SccResult;
use crate::domain::traits::SccDetector;
use crate::domain::traversal::VisitedMarks;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph, transpose: Graph) -> SccResult {
        kosaraju_scc(graph, transpose)
    }
}

fn kosaraju_scc(graph: &Graph, transpose: Graph) -> SccResult {
    debug_assert_eq!(graph.vertex_count(), transpose.vertex_count());

    // One flag array serves both passes.
    let mut visited = VisitedMarks::new(graph.vertex_count());

    let finishing = compute_finishing_times(&transpose, &mut visited);
    drop(transpose);

    visited.reset();
    assign_components(graph, &finishing, &mut visited)
}
