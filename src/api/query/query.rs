//! Reusable Query object
//!
//! Represents a complete collection read that can be executed multiple times

use super::filters::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub fields: Option<Vec<String>>,
    pub filter: Option<Filter>,
    /// Ascending sort fields, in priority order
    pub sort: Vec<String>,
    pub limit: Option<i64>,
}

impl Query {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            fields: None,
            filter: None,
            sort: Vec::new(),
            limit: None,
        }
    }

    /// Query parameters in a stable order, for use with the HTTP client
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(fields) = &self.fields {
            params.push(("fields".to_string(), fields.join(",")));
        }

        if let Some(filter) = &self.filter {
            params.push(("filter".to_string(), filter.to_query_string()));
        }

        if !self.sort.is_empty() {
            params.push(("sort".to_string(), self.sort.join(",")));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}
