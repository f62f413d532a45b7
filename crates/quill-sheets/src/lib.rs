//! # quill-sheets
//!
//! A declarative builder for spreadsheet workbooks.
//!
//! Quill-sheets lets callers describe a workbook — worksheets, columns,
//! rows, cells — together with reusable parameterized templates and
//! CSS-like styles, and resolves the description into an in-memory
//! document tree ready for a downstream writer.
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets::prelude::*;
//!
//! let workbook = Workbook::build(|wb| {
//!     wb.title("Inventory");
//!     wb.style(".heading", PropertyMap::new().with("weight", "bold"));
//!
//!     wb.template(Template::row("item", 2, |row, args| {
//!         row.cell(|cell| {
//!             cell.format(CellFormat::Text);
//!             cell.data(args[0].clone());
//!             Ok(())
//!         })?;
//!         row.cell(|cell| {
//!             cell.format(CellFormat::Number);
//!             cell.data(args[1].clone());
//!             Ok(())
//!         })
//!     }))?;
//!
//!     wb.worksheet(|ws| {
//!         ws.name("Stock");
//!         ws.row_from("item", &["widget".into(), 12.into()])?;
//!         ws.row_from("item", &["sprocket".into(), 3.into()])
//!     })
//! })?;
//!
//! assert_eq!(workbook.worksheets()[0].rows().len(), 2);
//! # Ok::<(), quill_sheets::Error>(())
//! ```

pub mod prelude;

// Re-export core types
pub use quill_sheets_core::{
    Assign,
    Attr,
    // Entity types
    Cell,
    // Builder contexts
    CellBuilder,
    CellFormat,
    Column,
    ColumnBuilder,
    // Error types
    Error,
    IntoAssign,
    IntoSelectors,
    Mixin,
    PropertyMap,
    Result,
    Row,
    RowBuilder,
    // Style types
    Style,
    StyleSet,
    // Template types
    Template,
    TemplateArgs,
    TemplateBody,
    TemplateKey,
    TemplateScope,
    TemplateSet,
    Value,
    // Main types
    Workbook,
    WorkbookBuilder,
    Worksheet,
    WorksheetBuilder,
};
