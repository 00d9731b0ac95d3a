use crate::domain::graph::{Graph, VertexId};

/// Visited-state consulted by [`DepthFirst::explore`].
pub trait VisitedSet {
    fn is_visited(&self, v: VertexId) -> bool;
    fn mark(&mut self, v: VertexId);
}

/// Per-visit side effects of a traversal.
pub trait DfsVisitor {
    /// Called once when `v` is first reached.
    fn discover(&mut self, _v: VertexId) {}

    /// Called once after every descendant of `v` has finished (post-order).
    fn finish(&mut self, _v: VertexId) {}
}

/// One flag per slot, allocated once and reset between passes.
#[derive(Debug, Clone, Default)]
pub struct VisitedMarks {
    marks: Vec<bool>,
}

impl VisitedMarks {
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn reset(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = false);
    }

    pub fn is_marked(&self, slot: usize) -> bool {
        self.marks[slot]
    }

    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

impl VisitedSet for VisitedMarks {
    fn is_visited(&self, v: VertexId) -> bool {
        self.marks[v]
    }

    fn mark(&mut self, v: VertexId) {
        self.marks[v] = true;
    }
}

/// The same flag array keyed by each vertex's finishing time instead of its id.
pub struct FinishingTimeMarks<'a> {
    marks: &'a mut VisitedMarks,
    finishing_time: &'a [usize],
}

impl<'a> FinishingTimeMarks<'a> {
    pub fn new(marks: &'a mut VisitedMarks, finishing_time: &'a [usize]) -> Self {
        Self {
            marks,
            finishing_time,
        }
    }
}

impl VisitedSet for FinishingTimeMarks<'_> {
    fn is_visited(&self, v: VertexId) -> bool {
        self.marks.is_marked(self.finishing_time[v])
    }

    fn mark(&mut self, v: VertexId) {
        self.marks.mark(self.finishing_time[v]);
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next: usize,
}

/// Depth-first exploration over one adjacency structure.
///
/// Uses an explicit frame stack, so depth is bounded by heap rather than the
/// call stack; long chains are fine. The stack is kept between calls.
pub struct DepthFirst<'g> {
    graph: &'g Graph,
    stack: Vec<Frame>,
}

impl<'g> DepthFirst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
        }
    }

    /// Explores everything reachable from `start` that is not yet visited.
    ///
    /// `start` must be unvisited. Successors are taken in adjacency order and
    /// each vertex finishes exactly once, after all of its descendants.
    pub fn explore<S, V>(&mut self, start: VertexId, visited: &mut S, visitor: &mut V)
    where
        S: VisitedSet + ?Sized,
        V: DfsVisitor + ?Sized,
    {
        debug_assert!(!visited.is_visited(start));
        debug_assert!(self.stack.is_empty());

        visited.mark(start);
        visitor.discover(start);
        self.stack.push(Frame {
            vertex: start,
            next: 0,
        });

        while let Some(top) = self.stack.last_mut() {
            let v = top.vertex;
            match self.graph.successor(v, top.next) {
                Some(to) => {
                    top.next += 1;
                    if !visited.is_visited(to) {
                        visited.mark(to);
                        visitor.discover(to);
                        self.stack.push(Frame { vertex: to, next: 0 });
                    }
                }
                None => {
                    self.stack.pop();
                    visitor.finish(v);
                }
            }
        }
    }
}
