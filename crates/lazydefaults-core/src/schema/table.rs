use serde::{Deserialize, Serialize};

use crate::schema::{
    column::ColumnDef,
    constraint::TableConstraint,
    names::TableName,
    options::LazyOverrides,
};

/// A declared model: an ordered set of columns plus its lazy options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct TableDef {
    pub name: TableName,
    pub columns: Vec<ColumnDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<TableConstraint>,
    #[serde(default, skip_serializing_if = "LazyOverrides::is_empty")]
    pub lazy_options: LazyOverrides,
}

impl TableDef {
    pub fn new(name: impl Into<TableName>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
            lazy_options: LazyOverrides::default(),
        }
    }

    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_lazy_options(mut self, lazy_options: LazyOverrides) -> Self {
        self.lazy_options = lazy_options;
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut ColumnDef> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn has_primary_key_constraint(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, TableConstraint::PrimaryKey { .. }))
    }

    /// Unquoted text of every CHECK constraint, in declaration order.
    pub fn check_exprs(&self) -> impl Iterator<Item = String> + '_ {
        self.constraints.iter().filter_map(TableConstraint::check_text)
    }

    /// Adds a constraint unless an identical one is already present.
    /// Returns whether the constraint was added.
    pub fn add_constraint(&mut self, constraint: TableConstraint) -> bool {
        if self.constraints.contains(&constraint) {
            return false;
        }
        self.constraints.push(constraint);
        true
    }
}
