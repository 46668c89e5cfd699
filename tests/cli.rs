// tests/cli.rs

mod common;
use crate::common::{TestResult, init_tracing};

use std::path::PathBuf;

use clap::Parser;
use dagman::cli::{CliArgs, LogLevel};
use dagman::run;
use tempfile::tempdir;

#[test]
fn defaults_point_at_dagman_toml() -> TestResult {
    let args = CliArgs::try_parse_from(["dagman"])?;
    assert_eq!(args.config, PathBuf::from("Dagman.toml"));
    assert!(args.output.is_none());
    assert!(!args.dry_run);
    assert!(args.log_level.is_none());
    Ok(())
}

#[test]
fn flags_are_parsed() -> TestResult {
    let args = CliArgs::try_parse_from([
        "dagman",
        "--config",
        "wf/Dagman.toml",
        "-o",
        "out.dag",
        "--dry-run",
        "--log-level",
        "debug",
    ])?;
    assert_eq!(args.config, PathBuf::from("wf/Dagman.toml"));
    assert_eq!(args.output, Some(PathBuf::from("out.dag")));
    assert!(args.dry_run);
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    Ok(())
}

#[test]
fn run_writes_dag_and_inline_submit_files() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let config = dir.path().join("Dagman.toml");
    let output = dir.path().join("out.dag");
    let submit = dir.path().join("b.sub");

    std::fs::write(
        &config,
        format!(
            r#"
[dag]
filename = "ignored.dag"

[node.A]
submit = "a.sub"

[node.B.submit]
filename = "{}"
commands = {{ executable = "/bin/true" }}

[[dependency]]
parents = ["A"]
children = ["B"]
"#,
            submit.display()
        ),
    )?;

    let args = CliArgs::try_parse_from([
        "dagman".into(),
        "--config".into(),
        config.clone().into_os_string(),
        "--output".into(),
        output.clone().into_os_string(),
    ])?;
    run(args)?;

    assert_eq!(
        std::fs::read_to_string(&output)?,
        format!("JOB A a.sub\nJOB B {}\nPARENT A CHILD B", submit.display())
    );
    assert_eq!(std::fs::read_to_string(&submit)?, "executable = /bin/true\nqueue");
    assert!(!dir.path().join("ignored.dag").exists());
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> TestResult {
    let dir = tempdir()?;
    let config = dir.path().join("Dagman.toml");
    let output = dir.path().join("out.dag");
    std::fs::write(&config, "[node.A]\nsubmit = \"a.sub\"\n")?;

    let args = CliArgs {
        config,
        output: Some(output.clone()),
        log_level: None,
        dry_run: true,
    };
    run(args)?;

    assert!(!output.exists());
    Ok(())
}
