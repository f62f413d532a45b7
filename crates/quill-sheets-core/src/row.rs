//! Row type

use crate::attr::Attr;
use crate::cell::Cell;
use crate::props::PropertyMap;
use crate::value::Value;

/// A horizontal band of a worksheet, owning its cells
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Custom height (unset = writer default)
    height: Attr<f64>,
    /// Selector class consumed by the writer's cascade
    style_class: Attr<String>,
    /// Cells in declaration order
    cells: Vec<Cell>,
    /// Arbitrary metadata
    meta: PropertyMap,
}

impl Row {
    /// Create a row with no settings
    pub fn new() -> Self {
        Self::default()
    }

    /// The custom height, if set
    pub fn height(&self) -> Option<f64> {
        self.height.get().copied()
    }

    /// The style class, if set
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.get().map(String::as_str)
    }

    /// Cells in declaration order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The metadata bag
    pub fn meta(&self) -> &PropertyMap {
        &self.meta
    }

    /// A read-only view of the set attributes
    pub fn attributes(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        if let Some(height) = self.height.get() {
            map.set("height", *height);
        }
        if let Some(class) = self.style_class.get() {
            map.set("style_class", Value::from(class.clone()));
        }
        map
    }

    pub(crate) fn height_mut(&mut self) -> &mut Attr<f64> {
        &mut self.height
    }

    pub(crate) fn style_class_mut(&mut self) -> &mut Attr<String> {
        &mut self.style_class
    }

    pub(crate) fn meta_mut(&mut self) -> &mut PropertyMap {
        &mut self.meta
    }

    pub(crate) fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_view() {
        let mut row = Row::new();
        assert!(row.attributes().is_empty());

        row.height_mut().write(500.0);
        assert_eq!(row.attributes().get("height"), Some(&Value::Number(500.0)));
    }
}
