//! Notebook and cell types.
//!
//! Only the fields the cell filter reads or resets are typed. Everything else
//! (`metadata`, `nbformat`, cell ids, attachments, ...) is carried through
//! as raw JSON in its original order.

use std::borrow::Cow;

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ============================================================================
// Cell Kind
// ============================================================================

/// The `cell_type` tag of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
    /// Any tag this tool does not know about, kept verbatim.
    Other(String),
}

impl CellKind {
    pub fn as_str(&self) -> &str {
        match self {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
            CellKind::Raw => "raw",
            CellKind::Other(tag) => tag,
        }
    }
}

impl From<String> for CellKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "code" => CellKind::Code,
            "markdown" => CellKind::Markdown,
            "raw" => CellKind::Raw,
            _ => CellKind::Other(tag),
        }
    }
}

impl From<CellKind> for String {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

// ============================================================================
// Source
// ============================================================================

/// Cell source, stored either as one string or as line fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Source {
    /// The full source text with all fragments joined.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Source::Text(text) => Cow::Borrowed(text),
            Source::Lines(lines) if lines.len() == 1 => Cow::Borrowed(&lines[0]),
            Source::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<Vec<&str>> for Source {
    fn from(lines: Vec<&str>) -> Self {
        Source::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

// ============================================================================
// Cell
// ============================================================================

/// One notebook cell.
///
/// Field order here is the key order on output: `cell_type`,
/// `execution_count`, untyped fields in input order, `outputs`, `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(
        rename = "cell_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<CellKind>,

    /// `None` when the key is absent, `Some(Value::Null)` when explicitly unset.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_count: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,

    /// `None` covers both a missing key and an explicit `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// Keeps an explicit `null` distinguishable from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Cell {
    /// A code cell with the given source and no outputs.
    pub fn code(source: impl Into<Source>) -> Self {
        Self {
            kind: Some(CellKind::Code),
            execution_count: Some(Value::Null),
            extra: Map::new(),
            outputs: Some(Vec::new()),
            source: Some(source.into()),
        }
    }

    /// A markdown cell with the given source.
    pub fn markdown(source: impl Into<Source>) -> Self {
        Self {
            kind: Some(CellKind::Markdown),
            execution_count: None,
            extra: Map::new(),
            outputs: None,
            source: Some(source.into()),
        }
    }

    pub fn is_code(&self) -> bool {
        self.kind == Some(CellKind::Code)
    }

    /// Concatenated source text; empty when the cell has no source.
    pub fn text(&self) -> Cow<'_, str> {
        self.source
            .as_ref()
            .map(Source::text)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// True when the cell carries outputs or an execution count.
    pub fn has_execution_state(&self) -> bool {
        let has_outputs = self.outputs.as_ref().is_some_and(|o| !o.is_empty());
        let has_count = self.execution_count.as_ref().is_some_and(|c| !c.is_null());
        has_outputs || has_count
    }
}

// ============================================================================
// Notebook
// ============================================================================

/// A notebook document: its cells plus every other top-level field.
///
/// `cells` is written back at the position it had among the top-level keys.
/// A document read without `cells` gets it appended last; one built with
/// [`Notebook::new`] has it first, as nbformat writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub rest: Map<String, Value>,
    /// Index of `cells` among the top-level keys.
    pub cells_at: usize,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            rest: Map::new(),
            cells_at: 0,
        }
    }
}

impl Serialize for Notebook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let at = self.cells_at.min(self.rest.len());
        let mut map = serializer.serialize_map(Some(self.rest.len() + 1))?;
        for (index, (key, value)) in self.rest.iter().enumerate() {
            if index == at {
                map.serialize_entry("cells", &self.cells)?;
            }
            map.serialize_entry(key, value)?;
        }
        if at == self.rest.len() {
            map.serialize_entry("cells", &self.cells)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Notebook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Map::<String, Value>::deserialize(deserializer)?;

        let mut cells_at = document.len();
        let mut raw_cells = None;
        let rest: Map<String, Value> = document
            .into_iter()
            .enumerate()
            .filter_map(|(index, (key, value))| {
                if key == "cells" {
                    cells_at = index;
                    raw_cells = Some(value);
                    None
                } else {
                    Some((key, value))
                }
            })
            .collect();

        let cells = match raw_cells {
            Some(value) => {
                Vec::<Cell>::deserialize(value).map_err(<D::Error as de::Error>::custom)?
            }
            None => Vec::new(),
        };
        let cells_at = cells_at.min(rest.len());
        Ok(Self {
            cells,
            rest,
            cells_at,
        })
    }
}
