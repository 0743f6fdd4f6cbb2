//! Built-in catalog: completeness, ordering and grouping

use std::sync::Arc;
use swatch_theme::{
    built_in_themes, themes_by_category, ColorRole, ColorScheme, CustomTheme, DefaultTheme,
    Theme, ThemeCategory, ThemeMode, ThemeProvider,
};

#[test]
fn every_built_in_defines_every_role_in_both_schemes() {
    for theme in built_in_themes() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let palette = theme.color_palette(scheme);
            for role in ColorRole::ALL {
                assert!(
                    palette.get(role).is_valid(),
                    "{} / {:?} / {} is out of range",
                    theme.id(),
                    scheme,
                    role.name()
                );
            }
        }
    }
}

#[test]
fn system_mode_matches_light_on_the_provider() {
    for theme in built_in_themes() {
        let mut provider = ThemeProvider::builder()
            .initial_theme(Arc::clone(&theme))
            .initial_mode(ThemeMode::System)
            .build();
        let system = provider.color_palette();
        provider.set_theme_mode(ThemeMode::Light);
        assert_eq!(system, provider.color_palette(), "{}", theme.id());
    }
}

#[test]
fn built_ins_have_unique_ids_and_previews() {
    let themes = built_in_themes();
    let mut ids: Vec<&str> = themes.iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), themes.len());

    for theme in &themes {
        let count = theme.preview_colors().len();
        assert!((3..=5).contains(&count), "{} has {} swatches", theme.id(), count);
    }
}

#[test]
fn brand_personality_group_keeps_catalog_order() {
    let expected: Vec<String> = built_in_themes()
        .iter()
        .filter(|t| t.category() == ThemeCategory::BrandPersonality)
        .map(|t| t.id().to_string())
        .collect();
    assert_eq!(expected, vec!["ocean", "forest", "sunset", "lavender"]);

    let groups = themes_by_category();
    let grouped: Vec<String> = groups[&ThemeCategory::BrandPersonality]
        .iter()
        .map(|t| t.id().to_string())
        .collect();
    assert_eq!(grouped, expected);
}

#[test]
fn registering_existing_id_keeps_position_and_length() {
    let mut provider = ThemeProvider::new();
    let before = provider.available_themes().len();

    let replacement = CustomTheme::from_theme(&DefaultTheme, "forest", "Forest (brand)");
    provider.register_theme(replacement.into_ref());

    assert_eq!(provider.available_themes().len(), before);
    assert_eq!(provider.available_themes()[2].id(), "forest");
    assert_eq!(provider.available_themes()[2].name(), "Forest (brand)");
}

#[test]
fn registering_new_id_appends() {
    let mut provider = ThemeProvider::new();
    let before = provider.available_themes().len();

    provider.register_theme(CustomTheme::from_theme(&DefaultTheme, "corporate", "Corporate").into_ref());

    assert_eq!(provider.available_themes().len(), before + 1);
    assert_eq!(provider.available_themes().last().map(|t| t.id()), Some("corporate"));
    assert_eq!(provider.themes_by_category()[&ThemeCategory::Custom].len(), 1);
}
