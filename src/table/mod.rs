//! Column-oriented table data model
//!
//! A [`Table`] is an ordered sequence of named columns of string cells. Order
//! is significant: it decides which columns land in which subtable when the
//! partitioner slices the table up. Tables are plain values; every pipeline
//! stage that "modifies" one actually builds a new value.

use std::ops::Range;

/// A single named column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered collection of named columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pre-assembled columns
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Build a table from `(header, cells)` pairs
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, Vec<V>)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let columns = pairs
            .into_iter()
            .map(|(name, values)| {
                Column::new(name, values.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { columns }
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the longest column
    pub fn num_rows(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Cell at `(row, col)`, empty when the column is shorter than the table
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.columns
            .get(col)
            .and_then(|c| c.values.get(row))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// New table holding clones of the columns in `range`, all rows retained.
    /// Out-of-bounds ends are clamped rather than panicking.
    pub fn slice_cols(&self, range: Range<usize>) -> Table {
        let end = range.end.min(self.columns.len());
        let start = range.start.min(end);
        Table {
            columns: self.columns[start..end].to_vec(),
        }
    }
}
