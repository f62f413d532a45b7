//! Mixins: reusable style/template bundles
//!
//! A mixin is any value exposing a bundle of pre-declared styles and
//! templates. Absorbing one through the workbook context's `use_mixin`
//! reads both collections once, synchronously: styles merge through the
//! style set's dedup rule, templates through the template set's
//! duplicate-key rule. The mixin itself is stateless from the workbook's
//! point of view — only its contributed entities matter.

use crate::style::Style;
use crate::template::Template;

/// A bundle of styles and templates that can be absorbed into a workbook
///
/// Both methods are read exactly once per absorption. The default
/// implementations contribute nothing, so a mixin only needs to override
/// what it provides. Template bodies are constructed fresh on each call.
pub trait Mixin {
    /// The styles this mixin contributes, in declaration order
    fn styles(&self) -> Vec<Style> {
        Vec::new()
    }

    /// The templates this mixin contributes
    fn templates(&self) -> Vec<Template> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::workbook::Workbook;

    struct StyleBundle;

    impl Mixin for StyleBundle {
        fn styles(&self) -> Vec<Style> {
            vec![Style::new(".test"), Style::new(".test.awesome")]
        }
    }

    struct TemplateBundle;

    impl Mixin for TemplateBundle {
        fn templates(&self) -> Vec<Template> {
            vec![Template::row("yo_yo", 0, |row, _| {
                row.height(500.0);
                Ok(())
            })]
        }
    }

    #[test]
    fn test_absorbs_styles_and_templates() {
        let workbook = Workbook::build(|wb| {
            wb.use_mixin(&StyleBundle)?;
            wb.use_mixin(&TemplateBundle)
        })
        .unwrap();

        assert_eq!(workbook.styles().len(), 2);
        assert_eq!(workbook.templates().len(), 1);
    }

    #[test]
    fn test_template_collision_fails_loudly() {
        let err = Workbook::build(|wb| {
            wb.use_mixin(&TemplateBundle)?;
            wb.use_mixin(&TemplateBundle)
        })
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateTemplate { .. }));
    }

    #[test]
    fn test_duplicate_styles_dedup() {
        let workbook = Workbook::build(|wb| {
            wb.use_mixin(&StyleBundle)?;
            wb.use_mixin(&StyleBundle)
        })
        .unwrap();

        assert_eq!(workbook.styles().len(), 2);
    }
}
