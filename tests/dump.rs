// tests/dump.rs

mod common;
use crate::common::builders::DagBuilder;
use crate::common::{TestResult, init_tracing};

use std::path::{Path, PathBuf};

use dagman::fs::mock::MockFileSystem;
use dagman::fs::{FileSystem, RealFileSystem};
use dagman::{Dag, DagmanError, Node, Submit, SubmitDescription, write_dag};
use tempfile::tempdir;

fn inline_node(name: &str, file: &str) -> Node {
    let desc = SubmitDescription::new(file)
        .command("executable", "/bin/echo")
        .command("arguments", name)
        .queue(Some(1));
    Node::new(name, Submit::inline(desc))
}

#[test]
fn dump_writes_inline_descriptions_before_dag() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();

    let mut dag = Dag::new(
        "wf.dag",
        vec![
            inline_node("A", "a.sub"),
            Node::new("B", "existing.sub"),
            inline_node("C", "c.sub"),
        ],
    );
    dag.add_dependency(["A"], ["B", "C"])?;
    dag.dump(&fs)?;

    assert_eq!(
        fs.writes(),
        vec![
            PathBuf::from("a.sub"),
            PathBuf::from("c.sub"),
            PathBuf::from("wf.dag"),
        ]
    );
    assert_eq!(
        fs.contents("a.sub").as_deref(),
        Some("executable = /bin/echo\narguments = A\nqueue 1")
    );
    assert_eq!(
        fs.contents("wf.dag").as_deref(),
        Some("JOB A a.sub\nJOB B existing.sub\nJOB C c.sub\nPARENT A CHILD B C")
    );
    assert!(!fs.exists(Path::new("existing.sub")));
    assert!(dag.written_to_disk());
    Ok(())
}

#[test]
fn failing_dag_write_keeps_flag_false() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.fail_writes_to("wf.dag");

    let mut dag = DagBuilder::new("wf.dag").node("A").build();

    match dag.dump(&fs) {
        Err(DagmanError::Io(err)) => {
            assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied)
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!dag.written_to_disk());
}

#[test]
fn failing_descriptor_write_aborts_before_dag_file() {
    let fs = MockFileSystem::new();
    fs.fail_writes_to("c.sub");

    let mut dag = Dag::new(
        "wf.dag",
        vec![inline_node("A", "a.sub"), inline_node("C", "c.sub")],
    );

    assert!(matches!(dag.dump(&fs), Err(DagmanError::Io(_))));
    assert_eq!(fs.writes(), vec![PathBuf::from("a.sub")]);
    assert!(!fs.exists(Path::new("wf.dag")));
    assert!(!dag.written_to_disk());
}

#[test]
fn repeated_dump_overwrites_and_stays_written() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("wf.dag", "stale contents that are much longer than the DAG");

    let mut dag = DagBuilder::new("wf.dag").node("A").build();
    dag.dump(&fs)?;
    dag.dump(&fs)?;

    assert_eq!(fs.contents("wf.dag").as_deref(), Some("JOB A a.sub"));
    assert_eq!(fs.writes().len(), 2);
    assert!(dag.written_to_disk());
    Ok(())
}

#[test]
fn edges_added_after_dump_are_not_persisted_automatically() -> TestResult {
    let fs = MockFileSystem::new();
    let mut dag = DagBuilder::new("wf.dag").node("A").node("B").build();
    dag.dump(&fs)?;

    dag.add_dependency(["A"], ["B"])?;

    assert_eq!(fs.contents("wf.dag").as_deref(), Some("JOB A a.sub\nJOB B b.sub"));
    assert!(dag.written_to_disk());
    Ok(())
}

#[test]
fn dump_to_real_directory() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let dag_path = dir.path().join("wf.dag");
    let sub_path = dir.path().join("a.sub");

    let desc = SubmitDescription::new(&sub_path).command("executable", "/bin/true");
    let mut dag = Dag::new(
        &dag_path,
        vec![Node::new("A", Submit::inline(desc)), Node::new("B", "b.sub")],
    );
    dag.add_dependency(["A"], ["B"])?;
    dag.dump_to_disk()?;

    let written = std::fs::read_to_string(&dag_path)?;
    assert_eq!(
        written,
        format!("JOB A {}\nJOB B b.sub\nPARENT A CHILD B", sub_path.display())
    );
    assert_eq!(
        RealFileSystem.read_to_string(&sub_path)?,
        "executable = /bin/true\nqueue"
    );
    assert!(dag.written_to_disk());
    Ok(())
}

#[test]
fn dump_into_missing_directory_is_io_error() -> TestResult {
    let dir = tempdir()?;
    let dag_path = dir.path().join("does-not-exist").join("wf.dag");

    let mut dag = Dag::new(&dag_path, vec![Node::new("A", "a.sub")]);

    assert!(matches!(dag.dump_to_disk(), Err(DagmanError::Io(_))));
    assert!(!dag.written_to_disk());
    assert!(!dag_path.exists());
    Ok(())
}

#[test]
fn write_dag_reports_missing_submit_files_but_still_writes() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("a.sub", "queue");

    let mut dag = Dag::new(
        "wf.dag",
        vec![
            Node::new("A", "a.sub"),
            Node::new("B", "b.sub"),
            inline_node("C", "c.sub"),
        ],
    );

    assert_eq!(dag.missing_submit_files(&fs), vec![Path::new("b.sub")]);

    write_dag(&mut dag, &fs)?;
    assert!(fs.exists(Path::new("wf.dag")));
    assert!(dag.missing_submit_files(&fs).contains(&Path::new("b.sub")));
    Ok(())
}
