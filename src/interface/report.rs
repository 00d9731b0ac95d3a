use crate::infrastructure::edge_list_reader::Truncation;
use crate::usecase::analyze::SccReport;
use serde::Serialize;
use std::fmt::Write as _;

const BEGIN_BANNER: &str = "------ Begin Graph Strongly Connected Components ------";
const END_BANNER: &str = "------- End Graph Strongly Connected Components -------";

/// Full outcome of one CLI run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: String,
    pub read_elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<Truncation>,
    #[serde(flatten)]
    pub scc: SccReport,
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Print every component size in discovery order.
    pub sizes: bool,
    /// Print the `k` largest component sizes.
    pub top: Option<usize>,
    /// Adjacency listing rendered before the passes ran.
    pub graph_listing: Option<String>,
}

pub fn render_text(report: &RunReport, opts: &RenderOptions) -> String {
    let scc = &report.scc;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{BEGIN_BANNER}");
    let _ = writeln!(
        out,
        "Read {} vertices and {} arc(s) from {}.",
        scc.vertices, scc.edges, report.input
    );
    if let Some(t) = &report.truncated {
        let _ = writeln!(
            out,
            "Edge input stopped early at line {}: {}.",
            t.line, t.reason
        );
    }
    let _ = writeln!(
        out,
        "Elapsed: {:.6} seconds with initializations, reading graph.",
        report.read_elapsed_secs
    );
    if let Some(listing) = &opts.graph_listing {
        out.push_str(listing);
    }
    let _ = writeln!(out, "Found {} SCC(s).", scc.components);
    let _ = writeln!(
        out,
        "Elapsed: {:.6} seconds with the two DFSs.",
        scc.scc_elapsed_secs
    );
    if let Some(k) = opts.top {
        let _ = writeln!(out, "Largest {k} SCC size(s): {}", join(&scc.top_sizes(k)));
    }
    if opts.sizes {
        let _ = writeln!(out, "SCC sizes: {}", join(&scc.component_sizes));
    }
    let _ = writeln!(out, "{END_BANNER}");
    out
}

fn join(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
