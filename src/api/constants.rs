//! API constants for the host platform's REST interface

/// Collection endpoint holding folder records
pub const FOLDERS_COLLECTION: &str = "folders";

/// Collection endpoint holding file metadata records
pub const FILES_COLLECTION: &str = "files";

/// Endpoint streaming raw file content
pub const ASSETS_PATH: &str = "assets";

/// `limit` value asking the host for every matching record
pub const UNLIMITED: i64 = -1;

/// Fields requested for folder records
pub const FOLDER_FIELDS: &[&str] = &["id", "name", "parent"];

/// Fields requested for file records
pub const FILE_FIELDS: &[&str] = &["id", "filename_download", "title", "description", "type", "folder"];

/// Standard headers for host requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("custom-svg-icons/", env!("CARGO_PKG_VERSION"));
}

/// Build full collection endpoint URL
pub fn collection_endpoint(base_url: &str, collection: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), collection)
}

/// Build asset content URL for a file id
pub fn asset_endpoint(base_url: &str, file_id: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        ASSETS_PATH,
        urlencoding::encode(file_id)
    )
}
