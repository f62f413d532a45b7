//! Cell type

use crate::attr::Attr;
use crate::props::PropertyMap;
use crate::value::Value;

/// How a cell's data should be rendered by the writer
///
/// Interpretation of the variants (locale, precision, date system) is
/// entirely the writer's concern; the builder only records the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellFormat {
    General,
    Number,
    Currency,
    Percentage,
    DateTime,
    Text,
}

impl CellFormat {
    /// The format's name, as exposed in attribute views
    pub fn as_str(&self) -> &'static str {
        match self {
            CellFormat::General => "general",
            CellFormat::Number => "number",
            CellFormat::Currency => "currency",
            CellFormat::Percentage => "percentage",
            CellFormat::DateTime => "datetime",
            CellFormat::Text => "text",
        }
    }
}

/// A single cell: a format intent plus a data value
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Rendering intent (unset = general)
    format: Attr<CellFormat>,
    /// The cell's value
    data: Attr<Value>,
    /// Selector class consumed by the writer's cascade
    style_class: Attr<String>,
    /// Horizontal merge span (unset = 1)
    colspan: Attr<u32>,
    /// Vertical merge span (unset = 1)
    rowspan: Attr<u32>,
    /// Arbitrary metadata
    meta: PropertyMap,
}

impl Cell {
    /// Create a cell with no settings
    pub fn new() -> Self {
        Self::default()
    }

    /// The format intent, if set
    pub fn format(&self) -> Option<CellFormat> {
        self.format.get().copied()
    }

    /// The data value, if set
    pub fn data(&self) -> Option<&Value> {
        self.data.get()
    }

    /// The style class, if set
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.get().map(String::as_str)
    }

    /// The horizontal merge span, if set
    pub fn colspan(&self) -> Option<u32> {
        self.colspan.get().copied()
    }

    /// The vertical merge span, if set
    pub fn rowspan(&self) -> Option<u32> {
        self.rowspan.get().copied()
    }

    /// The metadata bag
    pub fn meta(&self) -> &PropertyMap {
        &self.meta
    }

    /// A read-only view of the set attributes
    pub fn attributes(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        if let Some(format) = self.format.get() {
            map.set("format", format.as_str());
        }
        if let Some(data) = self.data.get() {
            map.set("data", data.clone());
        }
        if let Some(class) = self.style_class.get() {
            map.set("style_class", Value::from(class.clone()));
        }
        if let Some(colspan) = self.colspan.get() {
            map.set("colspan", *colspan);
        }
        if let Some(rowspan) = self.rowspan.get() {
            map.set("rowspan", *rowspan);
        }
        map
    }

    pub(crate) fn format_mut(&mut self) -> &mut Attr<CellFormat> {
        &mut self.format
    }

    pub(crate) fn data_mut(&mut self) -> &mut Attr<Value> {
        &mut self.data
    }

    pub(crate) fn style_class_mut(&mut self) -> &mut Attr<String> {
        &mut self.style_class
    }

    pub(crate) fn colspan_mut(&mut self) -> &mut Attr<u32> {
        &mut self.colspan
    }

    pub(crate) fn rowspan_mut(&mut self) -> &mut Attr<u32> {
        &mut self.rowspan
    }

    pub(crate) fn meta_mut(&mut self) -> &mut PropertyMap {
        &mut self.meta
    }
}
