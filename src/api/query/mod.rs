//! Collection Query Builder Module
//!
//! Provides a fluent API for building reads against the host's collections.
//! Query is the reusable value, QueryBuilder the fluent way to make one.

pub mod builder;
pub mod filters;
pub mod query;
pub mod result;

pub use builder::QueryBuilder;
pub use filters::Filter;
pub use query::Query;
pub use result::QueryResponse;
