//! Truncation at the last terminal marker.

use super::{FilterReport, Transform};
use crate::notebook::Cell;

/// Discards every cell after the last one containing the marker.
///
/// Leaves the sequence alone when no cell contains it or the marker is empty.
#[derive(Debug, Clone)]
pub struct TruncateAtLast {
    marker: String,
}

impl TruncateAtLast {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Index of the last cell whose source contains the marker.
    ///
    /// An empty marker matches nothing.
    pub fn find_last(&self, cells: &[Cell]) -> Option<usize> {
        if self.marker.is_empty() {
            return None;
        }
        cells
            .iter()
            .rposition(|cell| cell.text().contains(self.marker.as_str()))
    }
}

impl Transform for TruncateAtLast {
    fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport) {
        let Some(last) = self.find_last(cells) else {
            tracing::debug!(marker = %self.marker, "terminal marker not found");
            return;
        };

        report.terminal_index = Some(last);
        let discarded = cells.len() - (last + 1);
        if discarded > 0 {
            tracing::info!(
                marker = %self.marker,
                cell = last,
                discarded,
                "truncating after last terminal marker"
            );
            cells.truncate(last + 1);
            report.discarded += discarded;
        }
    }
}
