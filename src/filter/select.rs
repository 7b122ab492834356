//! Keep/drop decision for each cell.

use regex::Regex;

use super::{FilterReport, Transform};
use crate::notebook::Cell;

/// Why a cell was kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Source contains a canonical marker; the deny-list was not consulted.
    Canonical,
    /// Source matched the deny pattern at this index.
    Denied(usize),
    /// Nothing matched.
    Keep,
}

impl Decision {
    pub fn keeps(self) -> bool {
        !matches!(self, Decision::Denied(_))
    }
}

/// Drops cells matching a deny pattern unless they carry a canonical marker.
#[derive(Debug, Clone)]
pub struct SelectCells {
    canonical_markers: Vec<String>,
    deny: Vec<Regex>,
}

impl SelectCells {
    pub fn new(canonical_markers: Vec<String>, deny: Vec<Regex>) -> Self {
        Self {
            canonical_markers,
            deny,
        }
    }

    /// Decide the fate of one cell from its concatenated source.
    pub fn decide(&self, text: &str) -> Decision {
        if self
            .canonical_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
        {
            return Decision::Canonical;
        }
        match self.deny.iter().position(|pattern| pattern.is_match(text)) {
            Some(index) => Decision::Denied(index),
            None => Decision::Keep,
        }
    }
}

impl Transform for SelectCells {
    fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport) {
        let mut position = 0;
        cells.retain(|cell| {
            let decision = self.decide(&cell.text());
            match decision {
                Decision::Canonical => {
                    tracing::debug!(cell = position, "kept by canonical marker");
                    report.canonical += 1;
                }
                Decision::Denied(index) => {
                    tracing::debug!(
                        cell = position,
                        pattern = self.deny[index].as_str(),
                        "dropped by deny pattern"
                    );
                    report.dropped += 1;
                }
                Decision::Keep => {}
            }
            position += 1;
            decision.keeps()
        });
    }
}
