use crate::domain::error::InputError;
use crate::infrastructure::edge_list_reader::{read_edge_list_file, EdgePolicy};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::interface::report::{render_text, RenderOptions, RunReport};
use crate::usecase::analyze::{analyze_graph, emit, AnalyzeOptions};
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let Cli {
        input,
        sizes,
        top,
        json,
        strict,
        verify,
        print_graph,
        emit_events,
    } = Cli::parse(args)?;

    let policy = if strict {
        EdgePolicy::Strict
    } else {
        EdgePolicy::Truncate
    };

    // Events are buffered until the input is known to be good, so a fatal
    // input error leaves stdout empty.
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let sink = if emit_events { Some(tx) } else { None };

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "read_graph".into(),
        },
    )
    .await;
    let start = Instant::now();
    let edge_list = read_edge_list_file(&input, policy)
        .await
        .with_context(|| format!("reading edge list: {input}"))?;
    let truncated = edge_list.truncated.clone();
    let store = edge_list
        .into_store()
        .with_context(|| format!("building graph from: {input}"))?;
    let read_elapsed = start.elapsed();
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "read_graph".into(),
            elapsed_ms: read_elapsed.as_millis() as u64,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::GraphLoaded {
            vertices: store.vertex_count(),
            edges: store.edge_count(),
            truncated_at_line: truncated.as_ref().map(|t| t.line),
        },
    )
    .await;
    info!(input = %input, vertices = store.vertex_count(), edges = store.edge_count(), "graph loaded");

    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };

    let graph_listing = print_graph.then(|| {
        format!(
            "The read graph:\n{}\nThe reversed graph:\n{}\n",
            store.graph, store.transpose
        )
    });

    let detector = KosarajuSccDetector;
    let (scc, _stats) = analyze_graph(store, &detector, AnalyzeOptions { verify }, sink).await?;

    if let Some(handle) = printer {
        handle.await.ok();
    }

    let report = RunReport {
        input,
        read_elapsed_secs: read_elapsed.as_secs_f64(),
        truncated,
        scc,
    };

    let rendered = if json {
        let mut s = serde_json::to_string_pretty(&report)?;
        s.push('\n');
        s
    } else {
        render_text(
            &report,
            &RenderOptions {
                sizes,
                top,
                graph_listing,
            },
        )
    };

    // With --emit-events stdout carries NDJSON only.
    if emit_events {
        eprint!("{rendered}");
    } else {
        print!("{rendered}");
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Cli {
    input: String,
    sizes: bool,
    top: Option<usize>,
    json: bool,
    strict: bool,
    verify: bool,
    print_graph: bool,
    emit_events: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> <input> [--sizes] [--top N] [--json] [--strict] [--verify] [--print-graph] [--emit-events]
        let mut input: Option<String> = None;
        let mut cli = Cli::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--sizes" => cli.sizes = true,
                "--top" => {
                    i += 1;
                    let raw = args
                        .get(i)
                        .ok_or_else(|| anyhow!(format!("missing value for --top\n\n{}", usage())))?;
                    let k = raw.parse::<usize>().map_err(|_| {
                        anyhow!(format!("invalid value for --top: {raw}\n\n{}", usage()))
                    })?;
                    cli.top = Some(k);
                }
                "--json" => cli.json = true,
                "--strict" => cli.strict = true,
                "--verify" => cli.verify = true,
                "--print-graph" => cli.print_graph = true,
                "--emit-events" => cli.emit_events = true,
                "-h" | "--help" => return Err(anyhow!(usage())),
                other if other.starts_with("--") => {
                    return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage())))
                }
                path => {
                    if input.is_some() {
                        return Err(anyhow!(format!("unexpected extra input: {path}\n\n{}", usage())));
                    }
                    input = Some(path.to_string());
                }
            }
            i += 1;
        }

        cli.input = input
            .ok_or_else(|| anyhow::Error::new(InputError::MissingArgument).context(usage()))?;
        Ok(cli)
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph-scc <input> [--sizes] [--top N] [--json] [--strict] [--verify] [--print-graph] [--emit-events]\n\nInput:\n  First line: vertex count n. Then whitespace-separated `tail head` pairs, 1-based ids in [1, n].\n  Edge reading stops at the first malformed or out-of-range id and keeps the edges read so far;\n  --strict turns that into an error.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the report goes to stderr."
}
