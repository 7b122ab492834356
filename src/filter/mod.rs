//! Cell filter: clear outputs, drop denied cells, truncate at the terminal call.
//!
//! The filter is a pure function from a cell slice to a new cell vector. It
//! runs three stages in a fixed order, each over the full result of the one
//! before:
//!
//! 1. [`ClearOutputs`] empties `outputs` and unsets `execution_count` on every
//!    code cell, including cells that are dropped later.
//! 2. [`SelectCells`] keeps cells containing a canonical marker, drops cells
//!    matching any deny pattern, keeps the rest.
//! 3. [`TruncateAtLast`] cuts the sequence after the last cell containing the
//!    terminal marker, if there is one.
//!
//! # Example
//!
//! ```
//! use nbscrub::filter::{CellFilter, Rules};
//! use nbscrub::notebook::Cell;
//!
//! let rules = Rules::new(&["bid_close"], &["glft_asymptotic_deltas"], "run_glft_paper(");
//! let filter = CellFilter::new(&rules).unwrap();
//!
//! let cells = vec![
//!     Cell::code("df = load()"),
//!     Cell::code("spread = ask - bid_close"),
//!     Cell::code("res = run_glft_paper(df)"),
//!     Cell::markdown("scratch notes"),
//! ];
//!
//! let cleaned = filter.apply(&cells);
//! assert_eq!(cleaned.len(), 2);
//! assert_eq!(cleaned[1].text(), "res = run_glft_paper(df)");
//! ```

mod clear;
mod rules;
mod select;
mod transform;
mod truncate;

pub use clear::ClearOutputs;
pub use rules::{
    RuleError, Rules, DEFAULT_CANONICAL_MARKERS, DEFAULT_DENY_PATTERNS, DEFAULT_TERMINAL_MARKER,
};
pub use select::{Decision, SelectCells};
pub use transform::{Transform, TransformChain};
pub use truncate::TruncateAtLast;

use crate::notebook::{Cell, Notebook};

/// What a filter run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Cells in the input.
    pub cells_in: usize,
    /// Cells in the output.
    pub cells_out: usize,
    /// Code cells that had outputs or an execution count.
    pub outputs_cleared: usize,
    /// Cells removed by a deny pattern.
    pub dropped: usize,
    /// Cells kept because of a canonical marker.
    pub canonical: usize,
    /// Cells cut off after the terminal marker.
    pub discarded: usize,
    /// Position of the last terminal marker in the filtered sequence.
    pub terminal_index: Option<usize>,
}

impl FilterReport {
    /// True if the run altered anything at all.
    pub fn changed(&self) -> bool {
        self.outputs_cleared > 0 || self.cells_in != self.cells_out
    }

    /// Multi-line, human-readable summary.
    pub fn summary(&self) -> String {
        let truncation = match self.terminal_index {
            Some(index) => format!(
                "{} (after cell {} of the filtered notebook)",
                self.discarded, index
            ),
            None => "0 (terminal marker not found)".to_string(),
        };
        format!(
            "Cells: {} -> {}\n\
             \x20  Outputs cleared: {}\n\
             \x20  Dropped by deny-list: {}\n\
             \x20  Kept by canonical marker: {}\n\
             \x20  Truncated: {}",
            self.cells_in,
            self.cells_out,
            self.outputs_cleared,
            self.dropped,
            self.canonical,
            truncation
        )
    }
}

/// Compiled rule set, ready to run against any number of notebooks.
pub struct CellFilter {
    chain: TransformChain,
}

impl CellFilter {
    /// Compile the rules. Fails before any cell is looked at if a pattern or
    /// marker is unusable.
    pub fn new(rules: &Rules) -> Result<Self, RuleError> {
        rules.validate_markers()?;
        let deny = rules.compile_patterns()?;
        tracing::debug!(
            patterns = deny.len(),
            canonical = rules.canonical_markers.len(),
            terminal = %rules.terminal_marker,
            "compiled filter rules"
        );

        let chain = TransformChain::new()
            .with(ClearOutputs)
            .with(SelectCells::new(rules.canonical_markers.clone(), deny))
            .with(TruncateAtLast::new(rules.terminal_marker.clone()));
        Ok(Self { chain })
    }

    /// Run the filter, returning the cleaned cells.
    pub fn apply(&self, cells: &[Cell]) -> Vec<Cell> {
        self.apply_with_report(cells).0
    }

    /// Run the filter, returning the cleaned cells and what changed.
    pub fn apply_with_report(&self, cells: &[Cell]) -> (Vec<Cell>, FilterReport) {
        let mut output = cells.to_vec();
        let mut report = FilterReport {
            cells_in: cells.len(),
            ..FilterReport::default()
        };
        self.chain.transform(&mut output, &mut report);
        report.cells_out = output.len();
        (output, report)
    }

    /// Run the filter over a notebook, keeping every non-cell field.
    pub fn clean(&self, notebook: &Notebook) -> (Notebook, FilterReport) {
        let (cells, report) = self.apply_with_report(&notebook.cells);
        let cleaned = Notebook {
            cells,
            rest: notebook.rest.clone(),
            cells_at: notebook.cells_at,
        };
        (cleaned, report)
    }
}
