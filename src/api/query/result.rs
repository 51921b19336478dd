//! Query result handling
//!
//! Handles the `{ "data": [...] }` envelope the host wraps collection reads in

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub data: Vec<Value>,
}

impl QueryResponse {
    /// Parse response JSON into QueryResponse
    pub fn from_json(json: Value) -> anyhow::Result<Self> {
        let data = match json.get("data") {
            Some(Value::Array(records)) => records.clone(),
            // Singleton collections answer with a bare object
            Some(Value::Object(_)) => vec![json["data"].clone()],
            Some(Value::Null) => Vec::new(),
            _ => anyhow::bail!("Missing or invalid 'data' array in response"),
        };

        Ok(Self { data })
    }

    /// Deserialize every record into `T`
    pub fn into_records<T: DeserializeOwned>(self) -> anyhow::Result<Vec<T>> {
        self.data
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record).with_context(|| format!("Failed to parse record {}", index))
            })
            .collect()
    }
}

/// Extract the host's error message from an error response body, if any
pub fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("errors")?
        .as_array()?
        .iter()
        .filter_map(|error| error.get("message").and_then(Value::as_str))
        .next()
        .map(str::to_string)
}
