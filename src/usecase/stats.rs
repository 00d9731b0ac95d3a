use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyzeStats {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub largest_component: usize,
    pub singleton_components: usize,
}
