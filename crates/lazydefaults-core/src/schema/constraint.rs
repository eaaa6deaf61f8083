use serde::{Deserialize, Serialize};

use crate::schema::names::ColumnName;

/// Comparison used by a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BoundOp {
    /// `column >= value`
    Gte,
    /// `column <= value`
    Lte,
}

impl BoundOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BoundOp::Gte => ">=",
            BoundOp::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TableConstraint {
    PrimaryKey { columns: Vec<ColumnName> },
    /// Raw CHECK expression, emitted verbatim.
    Check { expr: String },
    /// Range CHECK on a single column; the column name is quoted per backend.
    Bound {
        column: ColumnName,
        op: BoundOp,
        value: i64,
    },
}

impl TableConstraint {
    pub fn check(expr: impl Into<String>) -> Self {
        TableConstraint::Check { expr: expr.into() }
    }

    /// `CHECK (<column> >= <value>)`
    pub fn min(column: impl Into<ColumnName>, value: i64) -> Self {
        TableConstraint::Bound {
            column: column.into(),
            op: BoundOp::Gte,
            value,
        }
    }

    /// `CHECK (<column> <= <value>)`
    pub fn max(column: impl Into<ColumnName>, value: i64) -> Self {
        TableConstraint::Bound {
            column: column.into(),
            op: BoundOp::Lte,
            value,
        }
    }

    /// Unquoted text of a CHECK constraint, for display; `None` for keys.
    pub fn check_text(&self) -> Option<String> {
        match self {
            TableConstraint::Check { expr } => Some(expr.clone()),
            TableConstraint::Bound { column, op, value } => {
                Some(format!("{} {} {}", column, op.symbol(), value))
            }
            TableConstraint::PrimaryKey { .. } => None,
        }
    }
}
