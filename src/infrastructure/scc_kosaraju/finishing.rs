use crate::domain::graph::{Graph, VertexId};
use crate::domain::model::FinishingOrder;
use crate::domain::traversal::{DepthFirst, DfsVisitor, VisitedMarks, VisitedSet};

struct FinishingClock {
    order: Vec<VertexId>,
}

impl DfsVisitor for FinishingClock {
    fn finish(&mut self, v: VertexId) {
        // Next time step is the current length.
        self.order.push(v);
    }
}

/// First pass: DFS over the transpose, roots tried from `n - 1` down to `0`.
///
/// `visited` must be unmarked and sized to the vertex count; it is left fully
/// marked for the caller to reset.
pub fn compute_finishing_times(transpose: &Graph, visited: &mut VisitedMarks) -> FinishingOrder {
    let n = transpose.vertex_count();
    debug_assert_eq!(visited.len(), n);

    let mut clock = FinishingClock {
        order: Vec::with_capacity(n),
    };
    let mut dfs = DepthFirst::new(transpose);

    for v in (0..n).rev() {
        if !visited.is_visited(v) {
            dfs.explore(v, visited, &mut clock);
        }
    }

    FinishingOrder::from_order(clock.order)
}
