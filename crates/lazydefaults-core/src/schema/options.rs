use serde::{Deserialize, Serialize};

/// The five independent lazy-configuration behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", default)]
pub struct LazyOptions {
    pub min_max_check_constraints: bool,
    pub boolean_defaults: bool,
    pub string_defaults: bool,
    pub integer_defaults: bool,
    pub auto_now: bool,
}

impl Default for LazyOptions {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl LazyOptions {
    pub fn all_enabled() -> Self {
        Self {
            min_max_check_constraints: true,
            boolean_defaults: true,
            string_defaults: true,
            integer_defaults: true,
            auto_now: true,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            min_max_check_constraints: false,
            boolean_defaults: false,
            string_defaults: false,
            integer_defaults: false,
            auto_now: false,
        }
    }

    /// Entries present in `overrides` replace the corresponding toggle.
    pub fn with_overrides(&self, overrides: &LazyOverrides) -> Self {
        Self {
            min_max_check_constraints: overrides
                .min_max_check_constraints
                .unwrap_or(self.min_max_check_constraints),
            boolean_defaults: overrides.boolean_defaults.unwrap_or(self.boolean_defaults),
            string_defaults: overrides.string_defaults.unwrap_or(self.string_defaults),
            integer_defaults: overrides.integer_defaults.unwrap_or(self.integer_defaults),
            auto_now: overrides.auto_now.unwrap_or(self.auto_now),
        }
    }
}

/// Per-model options mapping. Absent entries keep the project default;
/// unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", default)]
pub struct LazyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_check_constraints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_defaults: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_defaults: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_defaults: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_now: Option<bool>,
}

impl LazyOverrides {
    /// Overrides that switch every behaviour off.
    pub fn disable_all() -> Self {
        Self {
            min_max_check_constraints: Some(false),
            boolean_defaults: Some(false),
            string_defaults: Some(false),
            integer_defaults: Some(false),
            auto_now: Some(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
