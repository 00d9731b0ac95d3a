use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use cucumber::{given, then, when, World as _};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    input_path: Option<PathBuf>,
    last_cmd: Option<Output>,
    previous_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_graph-scc")
}

fn run_cmd(args: Vec<String>) -> Output {
    Command::new(exe())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run graph-scc binary")
}

fn stdout_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

fn write_fixture(world: &mut TestWorld, contents: &str) {
    let dir = world.dir.as_ref().expect("temp dir");
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents).expect("write fixture");
    world.input_path = Some(path);
}

fn input_arg(world: &TestWorld) -> String {
    world
        .input_path
        .as_ref()
        .expect("input")
        .to_string_lossy()
        .into_owned()
}

fn json_report(out: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout_string(out)).expect("stdout is a json report")
}

#[given("a temp graph workspace")]
fn a_temp_graph_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given("an input graph file containing a 4-vertex cycle")]
fn an_input_graph_file_containing_a_cycle(world: &mut TestWorld) {
    write_fixture(world, "4\n1 2\n2 3\n3 4\n4 1\n");
}

#[given("an input graph file with two 2-cycles and a lone vertex")]
fn an_input_graph_file_with_two_cycles(world: &mut TestWorld) {
    write_fixture(world, "5\n1 2\n2 1\n2 3\n3 4\n4 3\n");
}

#[given("an input graph file with a trailing zero vertex")]
fn an_input_graph_file_with_a_trailing_zero_vertex(world: &mut TestWorld) {
    write_fixture(world, "3\n1 2\n2 3\n0 1\n");
}

#[when("I run graph-scc on the input file")]
fn i_run_on_the_input_file(world: &mut TestWorld) {
    let out = run_cmd(vec![input_arg(world)]);
    world.last_cmd = Some(out);
}

#[when(expr = "I run graph-scc on the input file with {string}")]
fn i_run_on_the_input_file_with(world: &mut TestWorld, flag: String) {
    let out = run_cmd(vec![input_arg(world), flag]);
    world.last_cmd = Some(out);
}

#[when(expr = "I run graph-scc on the input file with {string} and {string}")]
fn i_run_on_the_input_file_with_two_flags(world: &mut TestWorld, first: String, second: String) {
    let out = run_cmd(vec![input_arg(world), first, second]);
    world.last_cmd = Some(out);
}

#[when("I run graph-scc without arguments")]
fn i_run_without_arguments(world: &mut TestWorld) {
    world.last_cmd = Some(run_cmd(vec![]));
}

#[when("I run graph-scc on a file that does not exist")]
fn i_run_on_a_missing_file(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let missing: &Path = &dir.path().join("missing.txt");
    world.last_cmd = Some(run_cmd(vec![missing.to_string_lossy().into_owned()]));
}

#[when(expr = "I run graph-scc twice with {string}")]
fn i_run_twice_with(world: &mut TestWorld, flag: String) {
    let first = run_cmd(vec![input_arg(world), flag.clone()]);
    assert!(first.status.success(), "first run failed: {}", stderr_string(&first));
    let second = run_cmd(vec![input_arg(world), flag]);
    world.previous_cmd = Some(first);
    world.last_cmd = Some(second);
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        stderr_string(out),
        stdout_string(out)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stdout: {}",
        stdout_string(out)
    );
}

#[then(expr = "stdout mentions {string}")]
fn stdout_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    assert!(
        stdout.contains(&needle),
        "stdout did not contain {needle:?}. stdout was:\n{stdout}"
    );
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then(expr = "stdout does not mention {string}")]
fn stdout_does_not_mention(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    assert!(
        !stdout.contains(&needle),
        "stdout unexpectedly contained {needle:?}. stdout was:\n{stdout}"
    );
}

#[then("every stdout line is a json event")]
fn every_stdout_line_is_a_json_event(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    assert!(!stdout.trim().is_empty(), "expected NDJSON events on stdout");
    for line in stdout.lines() {
        let v: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout line is not json ({e}): {line}"));
        assert!(v["type"].is_string(), "event without type: {line}");
    }
}

#[then(expr = "the last stdout event is {string}")]
fn the_last_stdout_event_is(world: &mut TestWorld, kind: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    let last = stdout.lines().last().expect("at least one event");
    let v: serde_json::Value = serde_json::from_str(last).expect("json event");
    assert_eq!(v["type"], kind.as_str());
}

#[then("stdout is empty")]
fn stdout_is_empty(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.stdout.is_empty(),
        "expected no report, got:\n{}",
        stdout_string(out)
    );
}

#[then(expr = "the json report has {int} edges and {int} components")]
fn the_json_report_has(world: &mut TestWorld, edges: u64, components: u64) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let v = json_report(out);
    assert_eq!(v["edges"], edges);
    assert_eq!(v["components"], components);
    assert_eq!(v["truncated"]["line"], 4);
}

#[then("the two component size lists are identical")]
fn the_two_component_size_lists_are_identical(world: &mut TestWorld) {
    let a = json_report(world.previous_cmd.as_ref().expect("first run"));
    let b = json_report(world.last_cmd.as_ref().expect("second run"));

    assert_eq!(a["components"], b["components"]);
    assert_eq!(a["component_sizes"], b["component_sizes"]);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
