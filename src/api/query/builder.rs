//! QueryBuilder for fluent query construction
//!
//! Provides a fluent API that builds Query objects for execution

use super::filters::Filter;
use super::query::Query;
use crate::api::constants::{FILE_FIELDS, FILES_COLLECTION, FOLDER_FIELDS, FOLDERS_COLLECTION, UNLIMITED};

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            query: Query::new(collection),
        }
    }

    /// Select specific fields
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.query.fields = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Set the filter; a second call replaces the first
    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Sort ascending by `field`, after any earlier sort fields
    pub fn sort(mut self, field: &str) -> Self {
        self.query.sort.push(field.to_string());
        self
    }

    /// Limit number of results
    pub fn limit(mut self, limit: i64) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Ask for every matching record
    pub fn all(self) -> Self {
        self.limit(UNLIMITED)
    }

    /// Build the final Query object (reusable)
    pub fn build(self) -> Query {
        self.query
    }
}

// Convenience constructors for the reads the registry needs
impl QueryBuilder {
    /// Folders with an exact name
    pub fn folders_named(name: &str, limit: usize) -> Self {
        let limit = i64::try_from(limit).unwrap_or(UNLIMITED);
        Self::new(FOLDERS_COLLECTION)
            .fields(FOLDER_FIELDS)
            .filter(Filter::eq("name", name))
            .limit(limit)
    }

    /// Direct children of a folder
    pub fn folders_under(parent_id: &str) -> Self {
        Self::new(FOLDERS_COLLECTION)
            .fields(FOLDER_FIELDS)
            .filter(Filter::eq("parent", parent_id))
            .sort("name")
            .all()
    }

    /// Files of one content type in any of the given folders
    pub fn files_in(folder_ids: &[String], content_type: &str) -> Self {
        Self::new(FILES_COLLECTION)
            .fields(FILE_FIELDS)
            .filter(Filter::and(vec![
                Filter::one_of("folder", folder_ids),
                Filter::eq("type", content_type),
            ]))
            .sort("filename_download")
            .all()
    }
}
