//! Workbook type - the root document structure

use crate::attr::Attr;
use crate::builder::WorkbookBuilder;
use crate::error::{Error, Result};
use crate::props::PropertyMap;
use crate::style::StyleSet;
use crate::template::TemplateSet;
use crate::value::Value;
use crate::worksheet::Worksheet;

/// The root document: worksheets plus the styles and templates declared
/// alongside them
///
/// A workbook is assembled in a single synchronous pass by
/// [`Workbook::build`] and is read-only afterwards; downstream writers
/// consume the finished value.
#[derive(Debug, Default)]
pub struct Workbook {
    /// Workbook title
    title: Attr<Value>,
    /// Worksheets in declaration order
    worksheets: Vec<Worksheet>,
    /// Styles in declaration order
    styles: StyleSet,
    /// Registered templates
    templates: TemplateSet,
}

impl Workbook {
    /// Assemble a workbook by running a declaration closure against a
    /// fresh [`WorkbookBuilder`]
    ///
    /// The build is all-or-nothing: the first error aborts it and no
    /// partial workbook is returned.
    ///
    /// # Example
    /// ```
    /// use quill_sheets_core::Workbook;
    ///
    /// let workbook = Workbook::build(|wb| {
    ///     wb.title("Quarterly Report");
    ///     wb.worksheet(|ws| {
    ///         ws.name("Summary");
    ///         Ok(())
    ///     })
    /// })?;
    /// assert_eq!(workbook.worksheets().len(), 1);
    /// # Ok::<(), quill_sheets_core::Error>(())
    /// ```
    pub fn build(f: impl FnOnce(&mut WorkbookBuilder) -> Result<()>) -> Result<Workbook> {
        let mut builder = WorkbookBuilder::new();
        f(&mut builder)?;
        Ok(builder.finish())
    }

    /// The workbook title, if set
    pub fn title(&self) -> Option<&Value> {
        self.title.get()
    }

    /// Worksheets in declaration order
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    /// The declared styles
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// The registered templates
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// A read-only view of the set attributes
    pub fn attributes(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        if let Some(title) = self.title.get() {
            map.set("title", title.clone());
        }
        map
    }

    pub(crate) fn title_mut(&mut self) -> &mut Attr<Value> {
        &mut self.title
    }

    pub(crate) fn styles_mut(&mut self) -> &mut StyleSet {
        &mut self.styles
    }

    pub(crate) fn templates_mut(&mut self) -> &mut TemplateSet {
        &mut self.templates
    }

    /// Append a worksheet, enforcing name uniqueness
    ///
    /// Names compare case-sensitively; a worksheet with no name collides
    /// with a previous unnamed worksheet.
    pub(crate) fn add_worksheet(&mut self, worksheet: Worksheet) -> Result<()> {
        if self.worksheets.iter().any(|ws| ws.name() == worksheet.name()) {
            return Err(Error::DuplicateSheetName(
                worksheet.name().unwrap_or("(unset)").to_string(),
            ));
        }
        self.worksheets.push(worksheet);
        Ok(())
    }
}
