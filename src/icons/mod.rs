//! Icon registry: discovery, naming, lookup and presentation helpers
//!
//! The registry walks a single root folder and its direct subfolders in the
//! host's file store, turns every SVG file into an [`Icon`] and serves them
//! either grouped by folder or keyed by their derived value.

pub mod display;
pub mod model;
pub mod naming;
pub mod readers;
pub mod registry;
pub mod search;

pub use display::{DisplayOptions, render_icon, render_inline};
pub use model::{FileRecord, Folder, Icon, IconGroup, IconListing, IconsByValue, ROOT_GROUP_NAME};
pub use naming::{IconIdentity, to_kebab_case};
pub use readers::{Accountability, ContentReader, ContentStream, FileReader, FolderReader};
pub use registry::{DEFAULT_ROOT_FOLDER, IconRegistry, RegistrySettings, SVG_CONTENT_TYPE};
pub use search::filter_groups;
