//! Icon discovery over the host's folder tree
//!
//! Everything is recomputed per call from the live folder and file state.
//! Per-file content failures are logged and the file is skipped; failures of
//! the folder or file queries themselves propagate to the caller.

use anyhow::{Context, Result};
use futures::StreamExt;
use futures::future::{join_all, try_join_all};
use log::{debug, info, warn};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use super::model::{FileRecord, Folder, Icon, IconGroup, IconListing, ROOT_GROUP_NAME};
use super::naming::{IconIdentity, compare_labels};
use super::readers::{Accountability, ContentReader, FileReader, FolderReader};

pub const DEFAULT_ROOT_FOLDER: &str = "Custom SVG Icons";
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Exact name of the folder holding the icon tree
    pub root_folder: String,
    /// Content type a file must carry to be treated as an icon
    pub content_type: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            root_folder: DEFAULT_ROOT_FOLDER.to_string(),
            content_type: SVG_CONTENT_TYPE.to_string(),
        }
    }
}

pub struct IconRegistry {
    folders: Arc<dyn FolderReader>,
    files: Arc<dyn FileReader>,
    content: Arc<dyn ContentReader>,
    settings: RegistrySettings,
}

impl IconRegistry {
    pub fn new(
        folders: Arc<dyn FolderReader>,
        files: Arc<dyn FileReader>,
        content: Arc<dyn ContentReader>,
        settings: RegistrySettings,
    ) -> Self {
        Self {
            folders,
            files,
            content,
            settings,
        }
    }

    /// All icons under the root folder, grouped by direct subfolder.
    ///
    /// Root-level files form the "Icons" group, which always comes first when
    /// present. Subfolder groups follow, ordered by name. Groups without a
    /// single readable icon are left out.
    pub async fn list_icon_groups(&self, ctx: &Accountability) -> Result<IconListing> {
        let root_name = &self.settings.root_folder;

        let Some(root) = self.find_root(ctx).await? else {
            info!("[{}] Root folder '{}' not found", ctx.correlation_id, root_name);
            return Ok(IconListing::empty(format!(
                "{root_name} folder not found. Please create a folder named \"{root_name}\" and upload SVG files."
            )));
        };

        if root.id.is_empty() {
            return Ok(IconListing::empty(format!("{root_name} folder ID not found.")));
        }

        let subfolders = self
            .folders
            .children_of(ctx, &root.id)
            .await
            .with_context(|| format!("Failed to list subfolders of '{}'", root_name))?;

        let root_files = self
            .files
            .files_in(ctx, std::slice::from_ref(&root.id), &self.settings.content_type)
            .await
            .with_context(|| format!("Failed to list files in '{}'", root_name))?;

        debug!(
            "[{}] Root folder {} has {} files and {} subfolders",
            ctx.correlation_id,
            root.id,
            root_files.len(),
            subfolders.len()
        );

        let mut groups = Vec::new();

        let root_icons = self.load_icons(ctx, root_files).await;
        if !root_icons.is_empty() {
            groups.push(IconGroup::new(ROOT_GROUP_NAME, root_icons));
        }

        let subfolder_groups = try_join_all(subfolders.iter().map(|folder| self.subfolder_group(ctx, folder))).await?;
        let mut subfolder_groups: Vec<IconGroup> = subfolder_groups.into_iter().flatten().collect();
        subfolder_groups.sort_by(|a, b| compare_labels(&a.name, &b.name));
        groups.extend(subfolder_groups);

        if groups.is_empty() {
            return Ok(IconListing::empty(format!("No SVG files found in {root_name} folder.")));
        }

        warn_on_duplicate_values(ctx, &groups);

        let listing = IconListing::groups(groups);
        info!(
            "[{}] Listed {} icons in {} groups",
            ctx.correlation_id,
            listing.icon_count(),
            listing.icon_groups.len()
        );
        Ok(listing)
    }

    /// Icons whose derived value is one of `values`, keyed by that value.
    ///
    /// Content is only read for files whose value was requested. Values that
    /// match nothing are simply absent from the result. When two files derive
    /// the same value, the first readable one in store order wins.
    pub async fn icons_by_value(
        &self,
        ctx: &Accountability,
        values: &[String],
    ) -> Result<BTreeMap<String, Icon>> {
        let Some(root) = self.find_root(ctx).await? else {
            debug!("[{}] Root folder missing, lookup returns nothing", ctx.correlation_id);
            return Ok(BTreeMap::new());
        };

        let subfolders = self
            .folders
            .children_of(ctx, &root.id)
            .await
            .with_context(|| format!("Failed to list subfolders of '{}'", self.settings.root_folder))?;

        let folder_ids: Vec<String> = std::iter::once(root.id)
            .chain(subfolders.into_iter().map(|folder| folder.id))
            .collect();

        let files = self
            .files
            .files_in(ctx, &folder_ids, &self.settings.content_type)
            .await
            .context("Failed to list icon files")?;

        let requested: HashSet<&str> = values.iter().map(String::as_str).collect();
        let candidates: Vec<(IconIdentity, FileRecord)> = files
            .into_iter()
            .map(|file| (IconIdentity::derive(&file), file))
            .filter(|(identity, _)| requested.contains(identity.value.as_str()))
            .collect();

        debug!(
            "[{}] {} of {} requested values have candidate files",
            ctx.correlation_id,
            candidates.len(),
            values.len()
        );

        let loaded = join_all(
            candidates
                .into_iter()
                .map(|(identity, file)| self.load_icon(ctx, identity, file)),
        )
        .await;

        let mut icons: BTreeMap<String, Icon> = BTreeMap::new();
        for icon in loaded.into_iter().flatten() {
            match icons.entry(icon.value.clone()) {
                Entry::Occupied(existing) => warn!(
                    "[{}] Value '{}' is derived by files {} and {}; keeping {}",
                    ctx.correlation_id,
                    icon.value,
                    existing.get().file_id,
                    icon.file_id,
                    existing.get().file_id
                ),
                Entry::Vacant(slot) => {
                    slot.insert(icon);
                }
            }
        }

        Ok(icons)
    }

    async fn find_root(&self, ctx: &Accountability) -> Result<Option<Folder>> {
        let mut found = self
            .folders
            .find_by_name(ctx, &self.settings.root_folder, 1)
            .await
            .with_context(|| format!("Failed to look up folder '{}'", self.settings.root_folder))?;

        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(found.swap_remove(0)))
    }

    async fn subfolder_group(&self, ctx: &Accountability, folder: &Folder) -> Result<Option<IconGroup>> {
        let files = self
            .files
            .files_in(ctx, std::slice::from_ref(&folder.id), &self.settings.content_type)
            .await
            .with_context(|| format!("Failed to list files in subfolder '{}'", folder.name))?;

        if files.is_empty() {
            return Ok(None);
        }

        let icons = self.load_icons(ctx, files).await;
        if icons.is_empty() {
            debug!(
                "[{}] Subfolder '{}' has no readable icons",
                ctx.correlation_id, folder.name
            );
            return Ok(None);
        }

        Ok(Some(IconGroup::new(folder.name.clone(), icons)))
    }

    /// Read every file concurrently and return the readable ones sorted by label
    async fn load_icons(&self, ctx: &Accountability, files: Vec<FileRecord>) -> Vec<Icon> {
        let loaded = join_all(files.into_iter().map(|file| {
            let identity = IconIdentity::derive(&file);
            self.load_icon(ctx, identity, file)
        }))
        .await;

        let mut icons: Vec<Icon> = loaded.into_iter().flatten().collect();
        icons.sort_by(|a, b| compare_labels(&a.label, &b.label));
        icons
    }

    async fn load_icon(&self, ctx: &Accountability, identity: IconIdentity, file: FileRecord) -> Option<Icon> {
        match self.read_svg_text(ctx, &file.id).await {
            Ok(svg) => Some(Icon::from_parts(identity, svg, file.id)),
            Err(err) => {
                warn!(
                    "[{}] Error reading SVG file {}: {:#}",
                    ctx.correlation_id, file.filename_download, err
                );
                None
            }
        }
    }

    /// Drain a file's content fully and decode it as UTF-8
    pub async fn read_svg_text(&self, ctx: &Accountability, file_id: &str) -> Result<String> {
        let mut stream = self
            .content
            .open(ctx, file_id)
            .await
            .with_context(|| format!("Failed to open content of file {}", file_id))?;

        let mut buffer = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.with_context(|| format!("Failed to read content of file {}", file_id))?;
            buffer.extend_from_slice(&chunk);
        }

        let text = String::from_utf8(buffer)
            .with_context(|| format!("Content of file {} is not valid UTF-8", file_id))?;
        if text.is_empty() {
            anyhow::bail!("Content of file {} is empty", file_id);
        }
        Ok(text)
    }
}

fn warn_on_duplicate_values(ctx: &Accountability, groups: &[IconGroup]) {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for icon in groups.iter().flat_map(|group| group.icons.iter()) {
        if let Some(previous) = owners.insert(icon.value.as_str(), icon.file_id.as_str()) {
            warn!(
                "[{}] Value '{}' is shared by files {} and {}",
                ctx.correlation_id, icon.value, previous, icon.file_id
            );
        }
    }
}
