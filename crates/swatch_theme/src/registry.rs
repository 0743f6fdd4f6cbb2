//! Built-in theme catalog
//!
//! The catalog order is fixed: the standard theme first, then the
//! brand-personality themes, then the accessibility themes. Pickers rely on
//! this order, so groupings preserve it.

use crate::theme::{ThemeCategory, ThemeRef};
use crate::themes::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Every built-in theme in catalog order
pub fn built_in_themes() -> Vec<ThemeRef> {
    let themes: [ThemeRef; 6] = [
        Arc::new(DefaultTheme),
        Arc::new(OceanTheme),
        Arc::new(ForestTheme),
        Arc::new(SunsetTheme),
        Arc::new(LavenderTheme),
        Arc::new(HighContrastTheme),
    ];
    themes.into()
}

/// Built-in themes grouped by category, catalog order kept within a group
pub fn themes_by_category() -> FxHashMap<ThemeCategory, Vec<ThemeRef>> {
    group_by_category(&built_in_themes())
}

/// Look up a built-in theme by id
pub fn theme_with_id(id: &str) -> Option<ThemeRef> {
    find_theme(&built_in_themes(), id)
}

/// Group any theme list by category, keeping relative order
pub fn group_by_category(themes: &[ThemeRef]) -> FxHashMap<ThemeCategory, Vec<ThemeRef>> {
    let mut groups: FxHashMap<ThemeCategory, Vec<ThemeRef>> = FxHashMap::default();
    for theme in themes {
        groups
            .entry(theme.category())
            .or_default()
            .push(Arc::clone(theme));
    }
    groups
}

/// Linear lookup by id
pub fn find_theme(themes: &[ThemeRef], id: &str) -> Option<ThemeRef> {
    themes.iter().find(|t| t.id() == id).cloned()
}

/// Position of the theme with `id`, if any
pub(crate) fn position_of(themes: &[ThemeRef], id: &str) -> Option<usize> {
    themes.iter().position(|t| t.id() == id)
}

/// Insert or replace by id. Returns true when an existing entry was replaced.
pub(crate) fn upsert(themes: &mut Vec<ThemeRef>, theme: ThemeRef) -> bool {
    match position_of(themes, theme.id()) {
        Some(index) => {
            themes[index] = theme;
            true
        }
        None => {
            themes.push(theme);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(themes: &[ThemeRef]) -> Vec<&str> {
        themes.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_catalog_order() {
        let themes = built_in_themes();
        assert_eq!(
            ids(&themes),
            vec!["default", "ocean", "forest", "sunset", "lavender", "high-contrast"]
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(theme_with_id("ocean").map(|t| t.name().to_string()), Some("Ocean".into()));
        assert!(theme_with_id("does-not-exist").is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut themes = built_in_themes();
        let replaced = upsert(&mut themes, Arc::new(OceanTheme));
        assert!(replaced);
        assert_eq!(themes.len(), 6);
        assert_eq!(position_of(&themes, "ocean"), Some(1));
    }

    #[test]
    fn test_group_has_no_custom_entries() {
        let groups = themes_by_category();
        assert!(!groups.contains_key(&ThemeCategory::Custom));
        assert_eq!(groups[&ThemeCategory::Standard].len(), 1);
        assert_eq!(groups[&ThemeCategory::Accessibility].len(), 1);
    }
}
