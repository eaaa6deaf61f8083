use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::value::FieldValue;

/// Client-side default, evaluated by the application at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    Call { call: DefaultCall },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum DefaultCall {
    /// Current timestamp at insert.
    Now,
}

impl DefaultValue {
    pub fn now() -> Self {
        DefaultValue::Call {
            call: DefaultCall::Now,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn evaluate(&self, now: DateTime<Utc>) -> FieldValue {
        match self {
            DefaultValue::Bool(b) => FieldValue::Bool(*b),
            DefaultValue::Integer(i) => FieldValue::Integer(*i),
            DefaultValue::Text(s) => FieldValue::Text(s.clone()),
            DefaultValue::Call {
                call: DefaultCall::Now,
            } => FieldValue::Timestamp(now),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Integer(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}

/// Server-side default, rendered into the DDL `DEFAULT` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ServerDefault {
    /// Backend boolean literal.
    Boolean(bool),
    /// Quoted string literal.
    Literal(String),
    /// The backend's "now" function.
    Now,
    /// Raw SQL expression, emitted as-is.
    Expression(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("true", DefaultValue::Bool(true))]
    #[case("16", DefaultValue::Integer(16))]
    #[case("\"football\"", DefaultValue::Text("football".into()))]
    #[case("{\"call\": \"now\"}", DefaultValue::now())]
    fn test_default_value_from_json(#[case] json: &str, #[case] expected: DefaultValue) {
        let parsed: DefaultValue = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn evaluate_now_uses_given_clock() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(DefaultValue::now().evaluate(now), FieldValue::Timestamp(now));
        assert_eq!(
            DefaultValue::Integer(16).evaluate(now),
            FieldValue::Integer(16)
        );
    }

    #[rstest]
    #[case(ServerDefault::Boolean(true), r#"{"kind":"boolean","value":true}"#)]
    #[case(ServerDefault::Literal("16".into()), r#"{"kind":"literal","value":"16"}"#)]
    #[case(ServerDefault::Now, r#"{"kind":"now"}"#)]
    #[case(ServerDefault::Expression("gen_random_uuid()".into()), r#"{"kind":"expression","value":"gen_random_uuid()"}"#)]
    fn test_server_default_json_layout(#[case] value: ServerDefault, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
        let back: ServerDefault = serde_json::from_str(json).unwrap();
        assert_eq!(back, value);
    }
}
