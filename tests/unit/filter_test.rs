//! Unit tests for the cell filter

use serde_json::{json, Value};

use super::helpers::{assert_cleared, default_filter, executed, texts};
use nbscrub::filter::{Decision, FilterReport, RuleError};
use nbscrub::{Cell, CellFilter, Rules};

fn synthetic_rules() -> Rules {
    Rules::new(
        &["bid_close", r"\bVRT_THRESHOLD\b", r"tmp_\d+"],
        &["KEEP_ME", "canonical_impl"],
        "submit(",
    )
}

fn synthetic_filter() -> CellFilter {
    CellFilter::new(&synthetic_rules()).unwrap()
}

/// A spread of notebooks exercising every branch of the filter.
fn corpus() -> Vec<Vec<Cell>> {
    vec![
        vec![],
        vec![Cell::code("")],
        vec![Cell::code("a"), Cell::code("bid_close"), Cell::code("b")],
        vec![
            Cell::code("submit(1)"),
            Cell::code("x"),
            Cell::code("submit(2)"),
            Cell::markdown("after"),
        ],
        vec![
            executed("tmp_1 = 3", 1),
            Cell::markdown("KEEP_ME bid_close"),
            executed("submit(final)", 2),
            executed("canonical_impl()", 3),
        ],
        vec![
            Cell::markdown("# t"),
            executed("VRT_THRESHOLD = 2", 1),
            executed("my_VRT_THRESHOLD_x = 2", 2),
            Cell::code(vec!["bid_", "close"]),
        ],
    ]
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn output_is_a_subsequence_of_input() {
    let filter = synthetic_filter();
    for cells in corpus() {
        let out = filter.apply(&cells);
        let sources = texts(&cells);
        let mut remaining = sources.iter();
        for kept in texts(&out) {
            assert!(
                remaining.any(|s| *s == kept),
                "output cell {:?} out of order or duplicated",
                kept
            );
        }
    }
}

#[test]
fn every_output_code_cell_is_cleared() {
    let filter = synthetic_filter();
    for cells in corpus() {
        assert_cleared(&filter.apply(&cells));
    }
}

#[test]
fn canonical_marker_beats_deny_list() {
    let filter = synthetic_filter();
    let cells = vec![
        Cell::code("KEEP_ME; bid_close"),
        Cell::code("canonical_impl(VRT_THRESHOLD)"),
    ];
    assert_eq!(filter.apply(&cells).len(), 2);
}

#[test]
fn truncation_length_is_last_match_plus_one() {
    let filter = synthetic_filter();
    for cells in corpus() {
        let (out, report) = filter.apply_with_report(&cells);
        match report.terminal_index {
            Some(k) => {
                assert_eq!(out.len(), k + 1);
                assert!(out[k].text().contains("submit("));
            }
            None => assert!(out.iter().all(|c| !c.text().contains("submit("))),
        }
    }
}

#[test]
fn filter_is_idempotent_when_terminal_cell_survives() {
    let filter = synthetic_filter();
    for cells in corpus() {
        let once = filter.apply(&cells);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn report_counts_add_up() {
    let filter = synthetic_filter();
    for cells in corpus() {
        let (out, report) = filter.apply_with_report(&cells);
        assert_eq!(report.cells_in, cells.len());
        assert_eq!(report.cells_out, out.len());
        assert_eq!(
            report.cells_in,
            report.cells_out + report.dropped + report.discarded
        );
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_deny_listed_cell_is_dropped() {
    let cells = vec![
        Cell::code("import pandas as pd"),
        Cell::markdown("## Data"),
        Cell::code("spread = df.ask - df.bid_close"),
        Cell::code("df.describe()"),
        Cell::markdown("done"),
    ];
    let out = default_filter().apply(&cells);
    assert_eq!(
        texts(&out),
        ["import pandas as pd", "## Data", "df.describe()", "done"]
    );
}

#[test]
fn scenario_canonical_cell_survives_deny_match() {
    let cells = vec![
        Cell::code("d = glft_asymptotic_deltas(q)\nv = run_vrt_maker_corrected(df)"),
        Cell::code("x = 1"),
    ];
    let (out, report) = default_filter().apply_with_report(&cells);
    assert_eq!(out.len(), 2);
    assert_eq!(report.canonical, 1);
    assert_eq!(report.dropped, 0);
}

#[test]
fn scenario_truncates_at_last_terminal_call() {
    let cells: Vec<Cell> = (0..10)
        .map(|i| {
            if [1, 4, 7].contains(&i) {
                Cell::code(format!("res_{i} = run_glft_paper(df)"))
            } else {
                Cell::code(format!("step_{i}()"))
            }
        })
        .collect();

    let (out, report) = default_filter().apply_with_report(&cells);

    assert_eq!(out.len(), 8);
    assert_eq!(out[7].text(), "res_7 = run_glft_paper(df)");
    assert_eq!(report.terminal_index, Some(7));
    assert_eq!(report.discarded, 2);
}

#[test]
fn scenario_without_terminal_call_keeps_length() {
    let cells = vec![
        Cell::code("a()"),
        Cell::code("from glft import run_glft_paper"),
        Cell::markdown("b"),
    ];
    let (out, report) = default_filter().apply_with_report(&cells);
    assert_eq!(out.len(), 3);
    assert_eq!(report.terminal_index, None);
}

#[test]
fn scenario_outputs_cleared_on_kept_cell() {
    let mut cell = Cell::code("plot(pnl)");
    cell.execution_count = Some(json!(42));
    cell.outputs = Some(vec![json!({
        "output_type": "display_data",
        "data": {"image/png": "iVBORw0KGgo="},
        "metadata": {}
    })]);

    let out = default_filter().apply(&[cell]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].outputs, Some(vec![]));
    assert_eq!(out[0].execution_count, Some(Value::Null));
    assert_eq!(out[0].text(), "plot(pnl)");
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn canonical_cells_after_terminal_are_discarded() {
    let cells = vec![
        Cell::code("res = run_glft_paper(df)"),
        Cell::code("glft_asymptotic_deltas(1, 2, 3, 4, 5)"),
    ];
    let out = default_filter().apply(&cells);
    assert_eq!(out.len(), 1);
}

#[test]
fn dropped_terminal_cell_does_not_define_cutoff() {
    // The canonical marker is absent, so the deny pattern wins and the
    // earlier terminal call becomes the cutoff.
    let rules = Rules::new(&["bid_close"], &["never_present"], "submit(");
    let filter = CellFilter::new(&rules).unwrap();
    let cells = vec![
        Cell::code("submit(a)"),
        Cell::code("x"),
        Cell::code("submit(b); bid_close"),
        Cell::code("y"),
    ];
    assert_eq!(texts(&filter.apply(&cells)), ["submit(a)"]);
}

#[test]
fn deny_match_spanning_source_fragments() {
    let cells = vec![Cell::code(vec!["x = df.bid_", "close"])];
    assert!(default_filter().apply(&cells).is_empty());
}

#[test]
fn cells_without_source_are_kept() {
    let cell: Cell = serde_json::from_value(json!({"cell_type": "raw", "metadata": {}})).unwrap();
    let out = default_filter().apply(&[cell.clone()]);
    assert_eq!(out, vec![cell]);
}

#[test]
fn empty_terminal_marker_never_truncates() {
    let rules = Rules::new(&[], &[], "");
    let filter = CellFilter::new(&rules).unwrap();
    let cells = vec![Cell::code("a"), Cell::markdown("b")];
    let (out, report) = filter.apply_with_report(&cells);
    assert_eq!(out.len(), 2);
    assert_eq!(report.terminal_index, None);
}

#[test]
fn no_rules_only_clears() {
    let filter = CellFilter::new(&Rules::new(&[], &[], "unused(")).unwrap();
    let cells = vec![executed("a", 1), Cell::markdown("b"), executed("c", 2)];
    let (out, report) = filter.apply_with_report(&cells);
    assert_eq!(texts(&out), ["a", "b", "c"]);
    assert_eq!(
        report,
        FilterReport {
            cells_in: 3,
            cells_out: 3,
            outputs_cleared: 2,
            ..FilterReport::default()
        }
    );
}

#[test]
fn pattern_errors_surface_before_filtering() {
    let rules = Rules::new(&["fine", "(?P<broken"], &[], "x");
    match CellFilter::new(&rules) {
        Err(RuleError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(?P<broken"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected an invalid pattern error"),
    }
}

#[test]
fn decision_keeps() {
    assert!(Decision::Canonical.keeps());
    assert!(Decision::Keep.keeps());
    assert!(!Decision::Denied(0).keeps());
}
