//! Output clearing stage.

use serde_json::Value;

use super::{FilterReport, Transform};
use crate::notebook::Cell;

/// Empties `outputs` and unsets `execution_count` on every code cell.
///
/// Runs on the full sequence, before any cell is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearOutputs;

impl ClearOutputs {
    /// Clear a single cell. Non-code cells are left untouched.
    ///
    /// Returns true if the cell had outputs or an execution count.
    pub fn clear(cell: &mut Cell) -> bool {
        if !cell.is_code() {
            return false;
        }
        let had_state = cell.has_execution_state();
        cell.outputs = Some(Vec::new());
        cell.execution_count = Some(Value::Null);
        had_state
    }
}

impl Transform for ClearOutputs {
    fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport) {
        for cell in cells.iter_mut() {
            if Self::clear(cell) {
                report.outputs_cleared += 1;
            }
        }
    }
}
