//! Convenience prelude
//!
//! ```rust
//! use quill_sheets::prelude::*;
//! ```

pub use crate::{
    Assign, Cell, CellBuilder, CellFormat, Column, ColumnBuilder, Error, Mixin, PropertyMap,
    Result, Row, RowBuilder, Style, StyleSet, Template, TemplateArgs, TemplateScope, TemplateSet,
    Value, Workbook, WorkbookBuilder, Worksheet, WorksheetBuilder,
};
