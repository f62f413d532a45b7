//! Worksheet type

use crate::attr::Attr;
use crate::column::Column;
use crate::props::PropertyMap;
use crate::row::Row;
use crate::value::Value;

/// A single named sheet, owning its columns and rows
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    /// Sheet name; uniqueness is enforced when the sheet is appended to a
    /// workbook
    name: Attr<String>,
    /// Columns in declaration order
    columns: Vec<Column>,
    /// Rows in declaration order
    rows: Vec<Row>,
    /// Arbitrary metadata
    meta: PropertyMap,
}

impl Worksheet {
    /// Create an empty worksheet with no name
    pub fn new() -> Self {
        Self::default()
    }

    /// The sheet name, if set
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in declaration order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The metadata bag
    pub fn meta(&self) -> &PropertyMap {
        &self.meta
    }

    /// A read-only view of the set attributes
    pub fn attributes(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        if let Some(name) = self.name.get() {
            map.set("name", Value::from(name.clone()));
        }
        map
    }

    pub(crate) fn name_mut(&mut self) -> &mut Attr<String> {
        &mut self.name
    }

    pub(crate) fn meta_mut(&mut self) -> &mut PropertyMap {
        &mut self.meta
    }

    pub(crate) fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
