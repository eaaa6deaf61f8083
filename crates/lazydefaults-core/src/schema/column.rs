use serde::{Deserialize, Serialize};

use crate::schema::{
    default::{DefaultValue, ServerDefault},
    info::ColumnInfo,
    names::ColumnName,
};

fn default_nullable() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: ColumnName,
    pub r#type: ColumnType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique: bool,
    /// Value supplied by the application when an insert omits the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Expression evaluated by the database when an insert omits the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_default: Option<ServerDefault>,
    #[serde(default, skip_serializing_if = "ColumnInfo::is_empty")]
    pub info: ColumnInfo,
}

impl ColumnDef {
    /// A nullable column with no defaults and no metadata.
    pub fn new(name: impl Into<ColumnName>, ty: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            r#type: ty.into(),
            nullable: true,
            primary_key: false,
            unique: false,
            default: None,
            server_default: None,
            info: ColumnInfo::default(),
        }
    }

    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_server_default(mut self, server_default: ServerDefault) -> Self {
        self.server_default = Some(server_default);
        self
    }

    pub fn with_info(mut self, info: ColumnInfo) -> Self {
        self.info = info;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn as_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn as_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn kind(&self) -> ColumnKind {
        self.r#type.kind()
    }
}

/// Semantic category of a column, used to decide which defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Boolean,
    Text,
    Integer,
    Timestamp,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", untagged)]
pub enum ColumnType {
    Simple(SimpleColumnType),
    Complex(ComplexColumnType),
}

impl ColumnType {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnType::Simple(ty) => ty.kind(),
            ColumnType::Complex(ty) => ty.kind(),
        }
    }

    /// Returns true if a numeric range check makes sense for this type.
    pub fn is_numeric(&self) -> bool {
        match self {
            ColumnType::Simple(ty) => matches!(
                ty,
                SimpleColumnType::SmallInt
                    | SimpleColumnType::Integer
                    | SimpleColumnType::BigInt
                    | SimpleColumnType::Real
                    | SimpleColumnType::DoublePrecision
            ),
            ColumnType::Complex(ty) => matches!(ty, ComplexColumnType::Numeric { .. }),
        }
    }
}

impl From<SimpleColumnType> for ColumnType {
    fn from(ty: SimpleColumnType) -> Self {
        ColumnType::Simple(ty)
    }
}

impl From<ComplexColumnType> for ColumnType {
    fn from(ty: ComplexColumnType) -> Self {
        ColumnType::Complex(ty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SimpleColumnType {
    SmallInt,
    Integer,
    BigInt,
    Real,
    DoublePrecision,

    // Text types
    Text,

    // Boolean type
    Boolean,

    // Date/Time types
    Date,
    Time,
    Timestamp,
    Timestamptz,

    Bytea,
    Uuid,
    Json,
}

impl SimpleColumnType {
    pub fn kind(&self) -> ColumnKind {
        match self {
            SimpleColumnType::SmallInt | SimpleColumnType::Integer | SimpleColumnType::BigInt => {
                ColumnKind::Integer
            }
            SimpleColumnType::Text => ColumnKind::Text,
            SimpleColumnType::Boolean => ColumnKind::Boolean,
            SimpleColumnType::Timestamp | SimpleColumnType::Timestamptz => ColumnKind::Timestamp,
            _ => ColumnKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ComplexColumnType {
    Varchar { length: u32 },
    Char { length: u32 },
    Numeric { precision: u32, scale: u32 },
    Custom { custom_type: String },
}

impl ComplexColumnType {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ComplexColumnType::Varchar { .. } | ComplexColumnType::Char { .. } => ColumnKind::Text,
            ComplexColumnType::Numeric { .. } | ComplexColumnType::Custom { .. } => {
                ColumnKind::Other
            }
        }
    }
}
