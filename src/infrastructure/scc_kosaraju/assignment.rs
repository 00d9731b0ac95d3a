use crate::domain::graph::{Graph, VertexId};
use crate::domain::model::{FinishingOrder, SccResult};
use crate::domain::traversal::{DepthFirst, DfsVisitor, FinishingTimeMarks, VisitedMarks, VisitedSet};

const UNASSIGNED: usize = usize::MAX;

struct ComponentCounter<'a> {
    component: usize,
    slot: usize,
    sizes_by_slot: &'a mut [usize],
    component_of: &'a mut [usize],
}

impl DfsVisitor for ComponentCounter<'_> {
    fn discover(&mut self, v: VertexId) {
        self.component_of[v] = self.component;
        self.sizes_by_slot[self.slot] += 1;
    }
}

/// Second pass: DFS over the original graph, roots taken in decreasing
/// finishing time. Every exploration covers exactly one component.
///
/// `visited` must be unmarked; it is indexed by finishing time, not vertex id.
pub fn assign_components(
    graph: &Graph,
    finishing: &FinishingOrder,
    visited: &mut VisitedMarks,
) -> SccResult {
    let n = graph.vertex_count();
    debug_assert_eq!(finishing.len(), n);
    debug_assert_eq!(visited.len(), n);

    let mut component_of = vec![UNASSIGNED; n];
    let mut sizes_by_slot = vec![0usize; n];
    let mut representatives: Vec<usize> = Vec::new();

    let mut marks = FinishingTimeMarks::new(visited, finishing.times());
    let mut dfs = DepthFirst::new(graph);

    for slot in (0..n).rev() {
        let root = finishing.vertex_at(slot);
        if marks.is_visited(root) {
            continue;
        }

        let mut counter = ComponentCounter {
            component: representatives.len(),
            slot,
            sizes_by_slot: &mut sizes_by_slot,
            component_of: &mut component_of,
        };
        representatives.push(slot);
        dfs.explore(root, &mut marks, &mut counter);
    }

    SccResult::new(component_of, representatives, sizes_by_slot)
}
