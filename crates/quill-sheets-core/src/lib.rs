//! # quill-sheets-core
//!
//! Core document model for the quill-sheets workbook builder.
//!
//! This crate provides the assembly engine: declaration closures run
//! against typed builder contexts and resolve into a fully-populated,
//! in-memory [`Workbook`] — worksheets with columns, rows, and cells,
//! plus the [`StyleSet`] and [`TemplateSet`] declared alongside them.
//! The finished workbook is read-only and is handed whole to a
//! downstream writer; serialization, style cascade resolution, and
//! file-format constraints are that writer's concern.
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{CellFormat, Workbook};
//!
//! let workbook = Workbook::build(|wb| {
//!     wb.title("Q3 Report");
//!     wb.worksheet(|ws| {
//!         ws.name("Summary");
//!         ws.row(|row| {
//!             row.cell(|cell| {
//!                 cell.format(CellFormat::Number);
//!                 cell.data(42.0);
//!                 Ok(())
//!             })
//!         })
//!     })
//! })?;
//!
//! assert_eq!(workbook.worksheets()[0].name(), Some("Summary"));
//! # Ok::<(), quill_sheets_core::Error>(())
//! ```

pub mod attr;
pub mod builder;
pub mod cell;
pub mod column;
pub mod error;
pub mod mixin;
pub mod props;
pub mod row;
pub mod style;
pub mod template;
pub mod value;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use attr::{Assign, Attr, IntoAssign};
pub use builder::{CellBuilder, ColumnBuilder, RowBuilder, WorkbookBuilder, WorksheetBuilder};
pub use cell::{Cell, CellFormat};
pub use column::Column;
pub use error::{Error, Result};
pub use mixin::Mixin;
pub use props::PropertyMap;
pub use row::Row;
pub use style::{IntoSelectors, Style, StyleSet};
pub use template::{
    Template, TemplateArgs, TemplateBody, TemplateKey, TemplateScope, TemplateSet,
};
pub use value::Value;
pub use workbook::Workbook;
pub use worksheet::Worksheet;
