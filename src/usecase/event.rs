use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
        elapsed_ms: u64,
    },

    GraphLoaded {
        vertices: usize,
        edges: usize,
        truncated_at_line: Option<usize>,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
