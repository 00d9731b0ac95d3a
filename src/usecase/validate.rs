use crate::domain::graph::Graph;
use crate::domain::model::SccResult;
use anyhow::{anyhow, Result};

/// Checks the partition invariants of `result` against `graph`.
///
/// Does not re-derive reachability; see the property tests for that.
pub fn validate_components(graph: &Graph, result: &SccResult) -> Result<()> {
    let n = graph.vertex_count();
    if result.vertex_count() != n {
        return Err(anyhow!(
            "labeling covers {} vertices, graph has {n}",
            result.vertex_count()
        ));
    }

    let count = result.component_count();
    let mut seen = vec![0usize; count];

    for v in 0..n {
        let c = result.component_of(v);
        if c >= count {
            return Err(anyhow!(
                "vertex {v} has label {c}, only {count} components exist"
            ));
        }
        seen[c] += 1;
    }

    for (c, (&expected, &actual)) in result.component_sizes().iter().zip(&seen).enumerate() {
        if expected == 0 {
            return Err(anyhow!("component {c} is empty"));
        }
        if expected != actual {
            return Err(anyhow!(
                "component {c} reports size {expected} but has {actual} labeled vertices"
            ));
        }
    }

    let total: usize = result.component_sizes().iter().sum();
    if total != n {
        return Err(anyhow!("component sizes sum to {total}, expected {n}"));
    }

    let mut previous: Option<usize> = None;
    for &slot in result.representatives() {
        if slot >= n {
            return Err(anyhow!("representative slot {slot} is out of range"));
        }
        if previous.is_some_and(|p| p <= slot) {
            return Err(anyhow!(
                "representatives are not in decreasing finishing order at slot {slot}"
            ));
        }
        previous = Some(slot);
    }

    Ok(())
}
