use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Per-column hints read by the lazy configurator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", default)]
pub struct ColumnInfo {
    /// Inclusive lower bound, enforced with a CHECK constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound, enforced with a CHECK constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Populate the column with the current timestamp on insert.
    #[serde(skip_serializing_if = "is_false")]
    pub auto_now: bool,
}

impl ColumnInfo {
    pub fn bounds(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min,
            max,
            auto_now: false,
        }
    }

    pub fn auto_now() -> Self {
        Self {
            auto_now: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && !self.auto_now
    }

    pub fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}
