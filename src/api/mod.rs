//! Host platform REST API Module
//!
//! Reads folders, file metadata and raw file content from the headless CMS
//! that owns the icon files. The client implements the registry's reader
//! traits so the registry never talks HTTP itself.

pub mod client;
pub mod constants;
pub mod query;

pub use client::DirectusClient;
pub use query::{Filter, Query, QueryBuilder, QueryResponse};
