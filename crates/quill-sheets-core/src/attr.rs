//! Attribute slots and the write-or-skip accessor protocol
//!
//! Every settable attribute on a document entity (title, width, height,
//! name, format, ...) is stored in an [`Attr`] slot and written through the
//! same contract: a concrete value overwrites the slot, including
//! falsy-but-meaningful values like `false` or `0`, while the explicit
//! [`Assign::Keep`] sentinel (or `None`) leaves a previously set value
//! alone. The sentinel is a tagged value distinct from any legitimate
//! stored value, so "skip this write" cannot collide with real data.

/// An attribute slot distinguishing "never set" from any stored value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attr<T>(Option<T>);

impl<T> Attr<T> {
    /// Create an unset slot
    pub const fn unset() -> Self {
        Attr(None)
    }

    /// Read the stored value, if any
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Check whether a value has been stored
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Apply a write: overwrite on [`Assign::Set`], no-op on [`Assign::Keep`]
    ///
    /// Each write is a whole-value replacement, no merging.
    pub fn write(&mut self, value: impl IntoAssign<T>) {
        if let Assign::Set(v) = value.into_assign() {
            self.0 = Some(v);
        }
    }

    /// Consume the slot, yielding the stored value if any
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Attr(None)
    }
}

/// A write that either assigns a new value or leaves the slot alone
#[derive(Debug, Clone, PartialEq)]
pub enum Assign<T> {
    /// Leave the current value untouched
    Keep,
    /// Overwrite with this value
    Set(T),
}

/// Conversion into an [`Assign`] write
///
/// Implemented for bare values (`Set`), `Option` (`None` maps to `Keep`,
/// so optional values can be forwarded without inspecting them), and
/// `Assign` itself.
pub trait IntoAssign<T> {
    fn into_assign(self) -> Assign<T>;
}

impl<T> IntoAssign<T> for Assign<T> {
    fn into_assign(self) -> Assign<T> {
        self
    }
}

impl<T> IntoAssign<T> for T {
    fn into_assign(self) -> Assign<T> {
        Assign::Set(self)
    }
}

impl<T> IntoAssign<T> for Option<T> {
    fn into_assign(self) -> Assign<T> {
        match self {
            Some(v) => Assign::Set(v),
            None => Assign::Keep,
        }
    }
}

impl IntoAssign<String> for &str {
    fn into_assign(self) -> Assign<String> {
        Assign::Set(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unset_reads_none() {
        let attr: Attr<f64> = Attr::unset();
        assert_eq!(attr.get(), None);
        assert!(!attr.is_set());
    }

    #[test]
    fn test_set_overwrites() {
        let mut attr = Attr::unset();
        attr.write(200.0);
        assert_eq!(attr.get(), Some(&200.0));
        attr.write(500.0);
        assert_eq!(attr.get(), Some(&500.0));
    }

    #[test]
    fn test_keep_skips_write() {
        let mut attr = Attr::unset();
        attr.write(false);
        assert_eq!(attr.get(), Some(&false));
        attr.write(true);
        attr.write(Assign::Keep);
        attr.write(None);
        assert_eq!(attr.get(), Some(&true));
    }

    #[test]
    fn test_option_forwarding() {
        let mut attr = Attr::unset();
        attr.write(Some(1.5));
        assert_eq!(attr.get(), Some(&1.5));
        attr.write(None);
        assert_eq!(attr.get(), Some(&1.5));
    }

    #[test]
    fn test_str_writes_string() {
        let mut attr: Attr<String> = Attr::unset();
        attr.write("Summary");
        assert_eq!(attr.get().map(String::as_str), Some("Summary"));
    }

    proptest! {
        // Sticky-unless-overwritten: after any sequence of writes and
        // skips, the slot holds the most recent concrete value.
        #[test]
        fn prop_last_set_wins(writes in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..16)) {
            let mut attr = Attr::unset();
            for w in &writes {
                attr.write(*w);
            }
            let expected = writes.iter().rev().find_map(|w| *w);
            prop_assert_eq!(attr.get().copied(), expected);
        }
    }
}
