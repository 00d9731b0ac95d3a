use crate::domain::graph::GraphStore;
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use crate::usecase::validate::validate_components;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// Re-check the partition invariants after the passes.
    pub verify: bool,
}

/// Everything the reporter needs from one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SccReport {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    /// Discovery order of the second pass.
    pub component_sizes: Vec<usize>,
    pub cyclic_components: usize,
    pub largest_component: usize,
    pub scc_elapsed_secs: f64,
}

impl SccReport {
    /// Sizes, largest first, truncated to `k`.
    pub fn top_sizes(&self, k: usize) -> Vec<usize> {
        let mut sizes = self.component_sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.truncate(k);
        sizes
    }
}

/// Runs both Kosaraju passes over `store` and summarises the labeling.
///
/// The store is consumed: the transpose is handed to the detector and the
/// original graph is dropped once the report is built.
pub async fn analyze_graph(
    store: GraphStore,
    scc: &dyn SccDetector,
    options: AnalyzeOptions,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SccReport, AnalyzeStats)> {
    let (graph, transpose) = store.into_parts();
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "kosaraju".into(),
        },
    )
    .await;
    let start = Instant::now();
    let result = scc.compute_scc(&graph, transpose);
    let elapsed = start.elapsed();
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "kosaraju".into(),
            elapsed_ms: elapsed.as_millis() as u64,
        },
    )
    .await;
    debug!(?elapsed, "two DFS passes done");

    if options.verify {
        emit(
            &sink,
            AppEvent::PhaseStarted {
                name: "verify".into(),
            },
        )
        .await;
        let start = Instant::now();
        validate_components(&graph, &result).context("validating component labeling")?;
        emit(
            &sink,
            AppEvent::PhaseFinished {
                name: "verify".into(),
                elapsed_ms: start.elapsed().as_millis() as u64,
            },
        )
        .await;
    }

    let stats = AnalyzeStats {
        vertices,
        edges,
        components: result.component_count(),
        cyclic_components: result.cyclic_component_count(&graph),
        largest_component: result.largest_component(),
        singleton_components: result.singleton_count(),
    };
    emit(
        &sink,
        AppEvent::SccComputed {
            vertices,
            edges,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
        },
    )
    .await;
    info!(
        vertices,
        edges,
        components = stats.components,
        largest = stats.largest_component,
        "strongly connected components computed"
    );

    let report = SccReport {
        vertices,
        edges,
        components: stats.components,
        component_sizes: result.component_sizes(),
        cyclic_components: stats.cyclic_components,
        largest_component: stats.largest_component,
        scc_elapsed_secs: elapsed.as_secs_f64(),
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((report, stats))
}

pub(crate) async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
