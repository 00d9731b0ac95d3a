use crate::domain::graph::{Graph, VertexId};

/// Finishing times of the transpose-graph pass and their inverse.
///
/// `times[v]` is the step at which `v` finished; `order[t]` is the vertex
/// that finished at step `t`. Both are permutations of `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishingOrder {
    times: Vec<usize>,
    order: Vec<VertexId>,
}

impl FinishingOrder {
    pub(crate) fn from_order(order: Vec<VertexId>) -> Self {
        let mut times = vec![usize::MAX; order.len()];
        for (t, &v) in order.iter().enumerate() {
            times[v] = t;
        }
        Self { times, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn time_of(&self, v: VertexId) -> usize {
        self.times[v]
    }

    pub fn vertex_at(&self, t: usize) -> VertexId {
        self.order[t]
    }

    pub fn times(&self) -> &[usize] {
        &self.times
    }

    pub fn order(&self) -> &[VertexId] {
        &self.order
    }
}

/// Labeling of vertices into strongly connected components.
///
/// Components are numbered in discovery order of the second pass. Sizes are
/// held per representative, the finishing slot of the component's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    component_of: Vec<usize>,
    representatives: Vec<usize>,
    sizes_by_slot: Vec<usize>,
}

impl SccResult {
    pub(crate) fn new(
        component_of: Vec<usize>,
        representatives: Vec<usize>,
        sizes_by_slot: Vec<usize>,
    ) -> Self {
        Self {
            component_of,
            representatives,
            sizes_by_slot,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.component_of.len()
    }

    pub fn component_count(&self) -> usize {
        self.representatives.len()
    }

    pub fn component_of(&self, v: VertexId) -> usize {
        self.component_of[v]
    }

    pub fn labels(&self) -> &[usize] {
        &self.component_of
    }

    /// Finishing slot of each component's root, in discovery order (descending).
    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    /// Zero for slots that did not start a component.
    pub fn size_of_representative(&self, slot: usize) -> usize {
        self.sizes_by_slot[slot]
    }

    pub fn component_sizes(&self) -> Vec<usize> {
        self.representatives
            .iter()
            .map(|&slot| self.sizes_by_slot[slot])
            .collect()
    }

    /// Component sizes, largest first. Invariant under traversal order.
    pub fn size_multiset(&self) -> Vec<usize> {
        let mut sizes = self.component_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Members of each component, ascending vertex ids.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut out: Vec<Vec<VertexId>> = self
            .component_sizes()
            .into_iter()
            .map(Vec::with_capacity)
            .collect();
        for (v, &c) in self.component_of.iter().enumerate() {
            out[c].push(v);
        }
        out
    }

    pub fn largest_component(&self) -> usize {
        self.component_sizes().into_iter().max().unwrap_or(0)
    }

    pub fn singleton_count(&self) -> usize {
        self.component_sizes().iter().filter(|&&s| s == 1).count()
    }

    /// Components with more than one vertex, or a single vertex with a self-loop.
    pub fn cyclic_component_count(&self, graph: &Graph) -> usize {
        let mut cyclic = vec![false; self.component_count()];
        for (c, size) in self.component_sizes().into_iter().enumerate() {
            cyclic[c] = size > 1;
        }
        for v in 0..self.vertex_count() {
            if graph.has_self_loop(v) {
                cyclic[self.component_of[v]] = true;
            }
        }
        cyclic.iter().filter(|&&b| b).count()
    }
}
