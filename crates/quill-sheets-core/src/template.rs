//! Templates: named, scoped, parameterized declaration fragments
//!
//! A template stores a body closure that replays builder calls against a
//! freshly constructed entity of the template's scope. Templates are
//! registered in a [`TemplateSet`] keyed by (scope, name) and invoked by
//! name from the matching builder context, with positional arguments bound
//! to the body.

use crate::builder::{CellBuilder, ColumnBuilder, RowBuilder, WorksheetBuilder};
use crate::error::{Error, Result};
use crate::value::Value;
use ahash::AHashMap;
use std::fmt;
use std::ops::Index;

/// The entity kind a template constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateScope {
    Worksheet,
    Column,
    Row,
    Cell,
}

impl fmt::Display for TemplateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateScope::Worksheet => "worksheet",
            TemplateScope::Column => "column",
            TemplateScope::Row => "row",
            TemplateScope::Cell => "cell",
        };
        f.write_str(s)
    }
}

/// The (scope, name) pair identifying a template within a set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub scope: TemplateScope,
    pub name: String,
}

impl TemplateKey {
    pub fn new(scope: TemplateScope, name: impl Into<String>) -> Self {
        Self {
            scope,
            name: name.into(),
        }
    }
}

/// Positional arguments bound to a template body
///
/// Arity is validated before the body runs, so indexing below the declared
/// arity cannot fail; [`get`](Self::get) is the checked form.
#[derive(Debug, Clone, Default)]
pub struct TemplateArgs {
    values: Vec<Value>,
}

impl TemplateArgs {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

impl Index<usize> for TemplateArgs {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

type WorksheetBodyFn =
    dyn for<'a, 'b, 'c> Fn(&'a mut WorksheetBuilder<'b>, &'c TemplateArgs) -> Result<()>;
type ColumnBodyFn =
    dyn for<'a, 'b, 'c> Fn(&'a mut ColumnBuilder<'b>, &'c TemplateArgs) -> Result<()>;
type RowBodyFn = dyn for<'a, 'b, 'c> Fn(&'a mut RowBuilder<'b>, &'c TemplateArgs) -> Result<()>;
type CellBodyFn = dyn for<'a, 'b, 'c> Fn(&'a mut CellBuilder<'b>, &'c TemplateArgs) -> Result<()>;

/// A template's stored body, typed by the builder context it replays against
pub enum TemplateBody {
    Worksheet(Box<WorksheetBodyFn>),
    Column(Box<ColumnBodyFn>),
    Row(Box<RowBodyFn>),
    Cell(Box<CellBodyFn>),
}

impl TemplateBody {
    /// The scope this body can replay against
    pub fn scope(&self) -> TemplateScope {
        match self {
            TemplateBody::Worksheet(_) => TemplateScope::Worksheet,
            TemplateBody::Column(_) => TemplateScope::Column,
            TemplateBody::Row(_) => TemplateScope::Row,
            TemplateBody::Cell(_) => TemplateScope::Cell,
        }
    }
}

impl fmt::Debug for TemplateBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateBody::{}", self.scope())
    }
}

/// A named, scoped, parameterized declaration fragment
pub struct Template {
    key: TemplateKey,
    arity: usize,
    body: TemplateBody,
}

impl Template {
    /// Create a template from its raw parts
    ///
    /// The scope-specific constructors below keep `scope` and `body`
    /// consistent by construction; with this form a mismatch is possible
    /// and is reported as [`Error::Structural`] at invocation time.
    pub fn new(
        scope: TemplateScope,
        name: impl Into<String>,
        arity: usize,
        body: TemplateBody,
    ) -> Self {
        Self {
            key: TemplateKey::new(scope, name),
            arity,
            body,
        }
    }

    /// Create a worksheet-scoped template
    pub fn worksheet(
        name: impl Into<String>,
        arity: usize,
        body: impl for<'a, 'b, 'c> Fn(&'a mut WorksheetBuilder<'b>, &'c TemplateArgs) -> Result<()>
            + 'static,
    ) -> Self {
        Self::new(
            TemplateScope::Worksheet,
            name,
            arity,
            TemplateBody::Worksheet(Box::new(body)),
        )
    }

    /// Create a column-scoped template
    pub fn column(
        name: impl Into<String>,
        arity: usize,
        body: impl for<'a, 'b, 'c> Fn(&'a mut ColumnBuilder<'b>, &'c TemplateArgs) -> Result<()>
            + 'static,
    ) -> Self {
        Self::new(
            TemplateScope::Column,
            name,
            arity,
            TemplateBody::Column(Box::new(body)),
        )
    }

    /// Create a row-scoped template
    pub fn row(
        name: impl Into<String>,
        arity: usize,
        body: impl for<'a, 'b, 'c> Fn(&'a mut RowBuilder<'b>, &'c TemplateArgs) -> Result<()>
            + 'static,
    ) -> Self {
        Self::new(
            TemplateScope::Row,
            name,
            arity,
            TemplateBody::Row(Box::new(body)),
        )
    }

    /// Create a cell-scoped template
    pub fn cell(
        name: impl Into<String>,
        arity: usize,
        body: impl for<'a, 'b, 'c> Fn(&'a mut CellBuilder<'b>, &'c TemplateArgs) -> Result<()>
            + 'static,
    ) -> Self {
        Self::new(
            TemplateScope::Cell,
            name,
            arity,
            TemplateBody::Cell(Box::new(body)),
        )
    }

    pub fn scope(&self) -> TemplateScope {
        self.key.scope
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn key(&self) -> &TemplateKey {
        &self.key
    }

    /// Validate positional arguments against the declared arity
    pub(crate) fn bind(&self, args: &[Value]) -> Result<TemplateArgs> {
        if args.len() != self.arity {
            return Err(Error::TemplateArity {
                scope: self.scope(),
                name: self.name().to_string(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        Ok(TemplateArgs::new(args.to_vec()))
    }

    fn body_mismatch(&self) -> Error {
        Error::Structural(format!(
            "template ({}, {}) carries a {} body",
            self.scope(),
            self.name(),
            self.body.scope()
        ))
    }

    pub(crate) fn worksheet_body(&self) -> Result<&WorksheetBodyFn> {
        match &self.body {
            TemplateBody::Worksheet(f) => Ok(f.as_ref()),
            _ => Err(self.body_mismatch()),
        }
    }

    pub(crate) fn column_body(&self) -> Result<&ColumnBodyFn> {
        match &self.body {
            TemplateBody::Column(f) => Ok(f.as_ref()),
            _ => Err(self.body_mismatch()),
        }
    }

    pub(crate) fn row_body(&self) -> Result<&RowBodyFn> {
        match &self.body {
            TemplateBody::Row(f) => Ok(f.as_ref()),
            _ => Err(self.body_mismatch()),
        }
    }

    pub(crate) fn cell_body(&self) -> Result<&CellBodyFn> {
        match &self.body {
            TemplateBody::Cell(f) => Ok(f.as_ref()),
            _ => Err(self.body_mismatch()),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("key", &self.key)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A registry of templates keyed by (scope, name)
///
/// Registration rejects duplicate keys loudly; iteration follows
/// registration order.
#[derive(Debug, Default)]
pub struct TemplateSet {
    templates: Vec<Template>,
    /// Fast lookup by key
    index: AHashMap<TemplateKey, usize>,
}

impl TemplateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Register a template
    ///
    /// Fails with [`Error::DuplicateTemplate`] if the (scope, name) key is
    /// already present, leaving the set unchanged.
    pub fn register(&mut self, template: Template) -> Result<()> {
        if self.index.contains_key(template.key()) {
            return Err(Error::DuplicateTemplate {
                scope: template.scope(),
                name: template.name().to_string(),
            });
        }
        log::debug!(
            "registered template ({}, {})",
            template.scope(),
            template.name()
        );
        let idx = self.templates.len();
        self.index.insert(template.key().clone(), idx);
        self.templates.push(template);
        Ok(())
    }

    /// Look up a template by scope and name
    pub fn get(&self, scope: TemplateScope, name: &str) -> Option<&Template> {
        let key = TemplateKey::new(scope, name);
        self.index.get(&key).map(|&i| &self.templates[i])
    }

    /// Fallible lookup, failing with [`Error::TemplateNotFound`]
    pub fn lookup(&self, scope: TemplateScope, name: &str) -> Result<&Template> {
        self.get(scope, name).ok_or_else(|| Error::TemplateNotFound {
            scope,
            name: name.to_string(),
        })
    }

    /// Check if a (scope, name) key is registered
    pub fn contains(&self, scope: TemplateScope, name: &str) -> bool {
        self.get(scope, name).is_some()
    }

    /// Registered keys, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &TemplateKey> {
        self.templates.iter().map(|t| t.key())
    }

    /// Iterate over templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}
