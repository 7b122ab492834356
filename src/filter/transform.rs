//! Cell transformation pipeline.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! applying in-place modifications to a notebook's cells. Each stage works on
//! an owned `Vec<Cell>` and records what it did in a shared
//! [`FilterReport`](super::FilterReport).
//!
//! # Example
//!
//! ```
//! use nbscrub::filter::{FilterReport, Transform, TransformChain};
//! use nbscrub::notebook::Cell;
//!
//! /// A transform that removes all markdown cells.
//! struct DropMarkdown;
//!
//! impl Transform for DropMarkdown {
//!     fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport) {
//!         let before = cells.len();
//!         cells.retain(|c| c.is_code());
//!         report.dropped += before - cells.len();
//!     }
//! }
//!
//! let chain = TransformChain::new().with(DropMarkdown);
//! let mut cells = vec![Cell::markdown("# Title"), Cell::code("x = 1")];
//! let mut report = FilterReport::default();
//!
//! chain.transform(&mut cells, &mut report);
//!
//! assert_eq!(cells.len(), 1);
//! assert_eq!(report.dropped, 1);
//! ```

use super::FilterReport;
use crate::notebook::Cell;

/// A transformation that modifies cells in place.
///
/// # Infallibility
///
/// Transforms are infallible (`()` return type). Anything that can fail, such
/// as compiling patterns, happens when the transform is constructed.
pub trait Transform {
    /// Apply this transformation to the cell vector.
    fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport);
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the full result of the previous one.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn transform(&self, cells: &mut Vec<Cell>, report: &mut FilterReport) {
        for transform in &self.transforms {
            transform.transform(cells, report);
        }
    }
}
