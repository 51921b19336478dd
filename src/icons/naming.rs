//! Key, label and value derivation for icons
//!
//! The derived `value` is what content fields store, so every rule here must
//! stay deterministic: the same file metadata always yields the same identity.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use super::model::FileRecord;

const SVG_EXTENSION: &str = ".svg";

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary pattern"));
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("separator pattern"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("non-word pattern"));

/// Convert an arbitrary display string into a kebab-case identifier.
///
/// Word characters are the ASCII class `[A-Za-z0-9_]`; anything else apart
/// from hyphens is dropped after whitespace and underscores become hyphens.
pub fn to_kebab_case(input: &str) -> String {
    let trimmed = input.trim();
    let split = CAMEL_BOUNDARY.replace_all(trimmed, "$1-$2");
    let hyphenated = SEPARATOR_RUN.replace_all(&split, "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    stripped.to_lowercase()
}

/// Key, label and value of an icon, computed from file metadata alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIdentity {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl IconIdentity {
    pub fn derive(file: &FileRecord) -> Self {
        let key = icon_key(&file.filename_download);
        let label = icon_label(file.title.as_deref(), &key);
        let value = icon_value(file.description.as_deref(), file.title.as_deref(), &key);
        Self { key, label, value }
    }
}

/// Filename with a trailing `.svg` removed
pub fn icon_key(filename: &str) -> String {
    filename
        .strip_suffix(SVG_EXTENSION)
        .unwrap_or(filename)
        .to_string()
}

pub fn icon_label(title: Option<&str>, key: &str) -> String {
    present(title).unwrap_or(key).to_string()
}

/// Description wins, then the kebab-cased title, then the key.
pub fn icon_value(description: Option<&str>, title: Option<&str>, key: &str) -> String {
    if let Some(description) = present(description) {
        return description.to_string();
    }
    match present(title) {
        Some(title) => to_kebab_case(title),
        None => key.to_string(),
    }
}

// Empty strings count as missing metadata.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// Locale-style ordering for labels and group names.
///
/// Compares the ASCII transliteration case-insensitively first so that
/// accented and mixed-case labels sort next to their plain forms. Ties are
/// broken by accents, then by case with lowercase first (`"apple"` before
/// `"Apple"`), then by the raw strings to keep the order total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn collation_key(label: &str) -> String {
    deunicode(label).to_lowercase()
}

// `false` for every character that is not uppercase, so lowercase sorts first
fn case_pattern(label: &str) -> impl Iterator<Item = bool> + '_ {
    label.chars().map(char::is_uppercase)
}
