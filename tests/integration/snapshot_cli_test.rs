//! Snapshot tests for command output and written notebooks.

use std::fs;

use insta::assert_snapshot;

use super::helpers::Sandbox;

const SMALL: &str = r#"{"cells": [
  {"cell_type": "code", "execution_count": 3, "metadata": {}, "outputs": [{"output_type": "stream", "name": "stdout", "text": ["hi\n"]}], "source": ["print('hi')"]},
  {"cell_type": "code", "execution_count": 4, "metadata": {}, "outputs": [], "source": "x = bid_close"},
  {"cell_type": "markdown", "metadata": {}, "source": "Ünïcode ✓"}
 ], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cleaned_notebook_layout() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("nb.ipynb", SMALL);

    sandbox.cmd().arg("clean").arg(&path).assert().success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("}\n"));
    assert_snapshot!(written.trim_end(), @r###"
{
 "cells": [
  {
   "cell_type": "code",
   "execution_count": null,
   "metadata": {},
   "outputs": [],
   "source": [
    "print('hi')"
   ]
  },
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": "Ünïcode ✓"
  }
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}
"###);
}

#[test]
fn dry_run_summary() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("nb.ipynb", SMALL);

    let output = sandbox
        .cmd()
        .args(["clean", "--dry-run"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    insta::with_settings!({filters => vec![(r"/\S*nb\.ipynb", "[NOTEBOOK]")]}, {
        assert_snapshot!(stdout_of(&output).trim_end(), @r###"
Cells: 3 -> 2
   Outputs cleared: 2
   Dropped by deny-list: 1
   Kept by canonical marker: 0
   Truncated: 0 (terminal marker not found)

Dry run: [NOTEBOOK] would be modified (nothing written)
"###);
    });
}

#[test]
fn rules_command_lists_configured_rules() {
    let sandbox = Sandbox::new();
    let config = sandbox.write(
        "rules.toml",
        r#"
[rules]
deny_patterns = ["bid_close", 'scratch_\d+']
canonical_markers = ["keep_me"]
terminal_marker = "finish("
"#,
    );

    let output = sandbox
        .cmd()
        .args(["rules", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("[rules]"));
    assert!(stdout.contains("scratch_"));
    assert!(stdout.contains("\"keep_me\""));
    assert!(stdout.contains("terminal_marker = \"finish(\""));
    assert!(!stdout.contains("[output]"));
}
