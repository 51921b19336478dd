//! Host filter building
//!
//! Provides type-safe construction of the host's JSON filter syntax

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, String),
    In(String, Vec<String>),
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn one_of<V: Into<String>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    /// Convert filter to the host's JSON filter object
    pub fn to_json(&self) -> Value {
        match self {
            Filter::Eq(field, value) => field_rule(field, "_eq", Value::String(value.clone())),
            Filter::In(field, values) => field_rule(
                field,
                "_in",
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            ),
            Filter::And(filters) => json!({ "_and": filters.iter().map(Filter::to_json).collect::<Vec<_>>() }),
        }
    }

    /// Serialized form used as the `filter` query parameter
    pub fn to_query_string(&self) -> String {
        self.to_json().to_string()
    }
}

fn field_rule(field: &str, operator: &str, operand: Value) -> Value {
    let mut rule = Map::new();
    rule.insert(operator.to_string(), operand);
    let mut object = Map::new();
    object.insert(field.to_string(), Value::Object(rule));
    Value::Object(object)
}
