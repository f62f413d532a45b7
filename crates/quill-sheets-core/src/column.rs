//! Column type

use crate::attr::Attr;
use crate::props::PropertyMap;
use crate::value::Value;

/// A vertical band of a worksheet
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Custom width (unset = writer default)
    width: Attr<f64>,
    /// Selector class consumed by the writer's cascade
    style_class: Attr<String>,
    /// Arbitrary metadata
    meta: PropertyMap,
}

impl Column {
    /// Create a column with no settings
    pub fn new() -> Self {
        Self::default()
    }

    /// The custom width, if set
    pub fn width(&self) -> Option<f64> {
        self.width.get().copied()
    }

    /// The style class, if set
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.get().map(String::as_str)
    }

    /// The metadata bag
    pub fn meta(&self) -> &PropertyMap {
        &self.meta
    }

    /// A read-only view of the set attributes
    pub fn attributes(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        if let Some(width) = self.width.get() {
            map.set("width", *width);
        }
        if let Some(class) = self.style_class.get() {
            map.set("style_class", Value::from(class.clone()));
        }
        map
    }

    pub(crate) fn width_mut(&mut self) -> &mut Attr<f64> {
        &mut self.width
    }

    pub(crate) fn style_class_mut(&mut self) -> &mut Attr<String> {
        &mut self.style_class
    }

    pub(crate) fn meta_mut(&mut self) -> &mut PropertyMap {
        &mut self.meta
    }
}
