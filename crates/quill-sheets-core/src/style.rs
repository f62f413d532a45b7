//! Style rules and the ordered, deduplicated style collection

use crate::props::PropertyMap;
use crate::value::Value;
use ahash::AHashMap;
use std::hash::{Hash, Hasher};

/// A reusable style rule: one or more selectors plus a property mapping
///
/// Selectors are opaque strings here; matching them against elements is
/// the writer's concern. Two styles are equal when both their selector
/// lists and their properties are equal.
#[derive(Debug, Clone, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    selectors: Vec<String>,
    properties: PropertyMap,
}

impl Style {
    /// Create a style with the given selector(s) and no properties
    pub fn new(selectors: impl IntoSelectors) -> Self {
        Self {
            selectors: selectors.into_selectors(),
            properties: PropertyMap::new(),
        }
    }

    /// Set a single property
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Replace the whole property mapping
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// The style's selectors, in declaration order
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The style's properties
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

/// Selector argument conversion: a single selector or a list
pub trait IntoSelectors {
    fn into_selectors(self) -> Vec<String>;
}

impl IntoSelectors for &str {
    fn into_selectors(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoSelectors for String {
    fn into_selectors(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoSelectors for Vec<String> {
    fn into_selectors(self) -> Vec<String> {
        self
    }
}

impl IntoSelectors for &[&str] {
    fn into_selectors(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoSelectors for [&str; N] {
    fn into_selectors(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

/// Key for style lookup (hash-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &Style) -> Self {
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

/// An ordered collection of styles, deduplicated on insertion
///
/// Insertion order is declaration order and is preserved; adding a style
/// equal to one already present is a no-op. Two sets are equal when they
/// hold equal styles in the same order.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: Vec<Style>,
    /// Fast lookup for deduplication
    index: AHashMap<StyleKey, Vec<usize>>,
}

impl StyleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style, skipping insertion if an equal style is present
    ///
    /// Returns whether the style was inserted.
    pub fn add(&mut self, style: Style) -> bool {
        let key = StyleKey::from_style(&style);

        // Hash hit still requires an equality check before skipping
        if let Some(indices) = self.index.get(&key) {
            if indices.iter().any(|&i| self.styles[i] == style) {
                return false;
            }
        }

        let idx = self.styles.len();
        self.index.entry(key).or_default().push(idx);
        self.styles.push(style);
        true
    }

    /// Number of distinct styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Get a style by position
    pub fn get(&self, index: usize) -> Option<&Style> {
        self.styles.get(index)
    }

    /// The first style in declaration order
    pub fn first(&self) -> Option<&Style> {
        self.styles.first()
    }

    /// The last style in declaration order
    pub fn last(&self) -> Option<&Style> {
        self.styles.last()
    }

    /// Iterate over styles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }
}

impl PartialEq for StyleSet {
    fn eq(&self, other: &Self) -> bool {
        self.styles == other.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_add_deduplicates() {
        let mut set = StyleSet::new();
        assert!(set.add(Style::new(".test")));
        assert!(!set.add(Style::new(".test")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_distinct_selectors_preserve_order() {
        let mut set = StyleSet::new();
        set.add(Style::new(".test"));
        set.add(Style::new(".test.awesome"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.first().unwrap().selectors(), &[".test".to_string()]);
        assert_eq!(
            set.last().unwrap().selectors(),
            &[".test.awesome".to_string()]
        );
    }

    #[test]
    fn test_properties_distinguish_styles() {
        let mut set = StyleSet::new();
        set.add(Style::new(".header").prop("weight", "bold"));
        set.add(Style::new(".header").prop("weight", "normal"));
        set.add(Style::new(".header").prop("weight", "bold"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_compound_selectors() {
        let style = Style::new([".header", ".footer"]).prop("align", "center");
        assert_eq!(style.selectors().len(), 2);

        let mut set = StyleSet::new();
        set.add(style.clone());
        set.add(style);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_equality() {
        let mut a = StyleSet::new();
        let mut b = StyleSet::new();
        assert_eq!(a, b);

        a.add(Style::new(".test"));
        assert_ne!(a, b);

        b.add(Style::new(".test"));
        assert_eq!(a, b);
    }

    proptest! {
        // Adding the same style twice never grows the set past adding it
        // once, for arbitrary selector/property shapes.
        #[test]
        fn prop_add_idempotent(
            selectors in proptest::collection::vec("[a-z.]{1,8}", 1..4),
            props in proptest::collection::vec(("[a-z]{1,6}", -1e6..1e6f64), 0..4),
        ) {
            let mut style = Style::new(selectors);
            for (k, v) in props {
                style = style.prop(k, v);
            }

            let mut set = StyleSet::new();
            set.add(style.clone());
            let len_once = set.len();
            set.add(style);
            prop_assert_eq!(set.len(), len_once);
        }

        // Declaration order survives arbitrary interleavings of duplicates.
        #[test]
        fn prop_order_preserved(names in proptest::collection::vec("[a-z]{1,6}", 1..8)) {
            let mut set = StyleSet::new();
            let mut expected: Vec<String> = Vec::new();
            for name in &names {
                let selector = format!(".{name}");
                if set.add(Style::new(selector.as_str())) {
                    expected.push(selector);
                }
            }
            let got: Vec<String> = set.iter().map(|s| s.selectors()[0].clone()).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
