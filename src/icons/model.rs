//! Records read from the host platform and the icon shapes derived from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::naming::IconIdentity;

/// Name of the implicit group holding files placed directly in the root folder
pub const ROOT_GROUP_NAME: &str = "Icons";

/// Folder record as returned by the host's folder store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }
}

/// File metadata record as returned by the host's file store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub filename_download: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
}

/// A single icon, derived per request from a file and its decoded content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub key: String,
    pub label: String,
    pub value: String,
    pub svg: String,
    #[serde(rename = "fileId")]
    pub file_id: String,
}

impl Icon {
    pub fn from_parts(identity: IconIdentity, svg: String, file_id: impl Into<String>) -> Self {
        Self {
            key: identity.key,
            label: identity.label,
            value: identity.value,
            svg,
            file_id: file_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconGroup {
    pub name: String,
    pub icons: Vec<Icon>,
}

impl IconGroup {
    pub fn new(name: impl Into<String>, icons: Vec<Icon>) -> Self {
        Self {
            name: name.into(),
            icons,
        }
    }
}

/// Body of the group listing.
///
/// Serialises as `{ "iconGroups": [...] }` or, when nothing could be listed,
/// `{ "iconGroups": [], "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconListing {
    #[serde(rename = "iconGroups")]
    pub icon_groups: Vec<IconGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IconListing {
    pub fn groups(icon_groups: Vec<IconGroup>) -> Self {
        Self {
            icon_groups,
            error: None,
        }
    }

    pub fn empty(reason: impl Into<String>) -> Self {
        Self {
            icon_groups: Vec::new(),
            error: Some(reason.into()),
        }
    }

    pub fn icon_count(&self) -> usize {
        self.icon_groups.iter().map(|g| g.icons.len()).sum()
    }
}

/// Body of the lookup-by-value path: icons keyed by their derived value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsByValue {
    pub icons: BTreeMap<String, Icon>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_serialization_shapes() {
        let empty = IconListing::empty("nothing here");
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            json!({"iconGroups": [], "error": "nothing here"})
        );

        let icon = Icon {
            key: "home".to_string(),
            label: "Home".to_string(),
            value: "home".to_string(),
            svg: "<svg/>".to_string(),
            file_id: "f1".to_string(),
        };
        let listing = IconListing::groups(vec![IconGroup::new(ROOT_GROUP_NAME, vec![icon])]);
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!({
                "iconGroups": [{
                    "name": "Icons",
                    "icons": [{"key": "home", "label": "Home", "value": "home", "svg": "<svg/>", "fileId": "f1"}]
                }]
            })
        );
        assert_eq!(listing.icon_count(), 1);
    }

    #[test]
    fn test_file_record_from_host_json() {
        let file: FileRecord = serde_json::from_value(json!({
            "id": "abc",
            "filename_download": "arrow.svg",
            "title": null,
            "type": "image/svg+xml",
            "folder": "root"
        }))
        .unwrap();

        assert_eq!(file.filename_download, "arrow.svg");
        assert_eq!(file.title, None);
        assert_eq!(file.description, None);
        assert_eq!(file.content_type.as_deref(), Some("image/svg+xml"));
    }
}
