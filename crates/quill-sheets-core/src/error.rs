//! Error types for quill-sheets-core

use crate::template::TemplateScope;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a workbook
///
/// Every variant is fatal to the build in progress: [`Workbook::build`]
/// surfaces the first error and no partial workbook is returned.
///
/// [`Workbook::build`]: crate::Workbook::build
#[derive(Debug, Error)]
pub enum Error {
    /// Two worksheets share a name within one workbook
    #[error("worksheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Two templates share a (scope, name) key
    #[error("template already registered: ({scope}, {name})")]
    DuplicateTemplate {
        scope: TemplateScope,
        name: String,
    },

    /// An invocation referenced an unregistered (scope, name)
    #[error("template not found: ({scope}, {name})")]
    TemplateNotFound {
        scope: TemplateScope,
        name: String,
    },

    /// An invocation supplied the wrong number of positional arguments
    #[error("template ({scope}, {name}) expects {expected} argument(s), got {actual}")]
    TemplateArity {
        scope: TemplateScope,
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A template (transitively) invoked itself
    #[error("template ({scope}, {name}) invokes itself")]
    TemplateCycle {
        scope: TemplateScope,
        name: String,
    },

    /// A declaration was used outside its valid nesting context
    #[error("structural error: {0}")]
    Structural(String),
}
