//! Fuzzy filtering of icon groups, as used by the picker's search box

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::model::{Icon, IconGroup};

/// Keep icons whose label, key or value fuzzy-matches `term`.
///
/// Group order and icon order are preserved; groups left without icons are
/// dropped. A blank term returns the groups unchanged.
pub fn filter_groups(groups: &[IconGroup], term: &str) -> Vec<IconGroup> {
    let term = term.trim();
    if term.is_empty() {
        return groups.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    groups
        .iter()
        .filter_map(|group| {
            let icons: Vec<Icon> = group
                .icons
                .iter()
                .filter(|icon| matches(&matcher, icon, term))
                .cloned()
                .collect();
            (!icons.is_empty()).then(|| IconGroup::new(group.name.clone(), icons))
        })
        .collect()
}

fn matches(matcher: &SkimMatcherV2, icon: &Icon, term: &str) -> bool {
    [&icon.label, &icon.key, &icon.value]
        .iter()
        .any(|candidate| matcher.fuzzy_match(candidate, term).is_some())
}
