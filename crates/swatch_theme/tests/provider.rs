//! ThemeProvider behavior: selection, mode cycling and registration

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use swatch_theme::{
    Color, ColorScheme, CustomTheme, DefaultTheme, OceanTheme, Theme, ThemeChange, ThemeMode,
    ThemeProvider,
};

#[test]
fn default_provider_starts_on_default_theme_in_system_mode() {
    let provider = ThemeProvider::new();
    assert_eq!(provider.current_theme().id(), "default");
    assert_eq!(provider.theme_mode(), ThemeMode::System);
    assert_eq!(provider.available_themes().len(), 6);
}

#[test]
fn default_palette_primary_is_system_blue() {
    let provider = ThemeProvider::new();
    assert_eq!(provider.color_palette().primary, Color::from_hex(0x007AFF));
    assert_eq!(provider.color_palette().primary.to_hex_string(), "#007aff");
}

#[test]
fn switch_then_dark_uses_ocean_dark_palette() {
    let mut provider = ThemeProvider::new();
    assert!(provider.switch_to_theme("ocean"));
    provider.set_theme_mode(ThemeMode::Dark);

    assert_eq!(provider.current_theme().id(), "ocean");
    assert_eq!(
        provider.color_palette(),
        OceanTheme.color_palette(ColorScheme::Dark)
    );
}

#[test]
fn switching_to_current_theme_changes_nothing() {
    let mut provider = ThemeProvider::new();
    let before = Arc::clone(provider.current_theme());
    let revision = provider.revision();

    assert!(provider.switch_to_theme("default"));

    assert!(Arc::ptr_eq(&before, provider.current_theme()));
    assert_eq!(provider.revision(), revision);
}

#[test]
fn unknown_id_leaves_state_untouched() {
    let mut provider = ThemeProvider::new();
    provider.switch_to_theme("sunset");
    provider.set_theme_mode(ThemeMode::Dark);
    let revision = provider.revision();

    assert!(!provider.switch_to_theme("does-not-exist"));

    assert_eq!(provider.current_theme().id(), "sunset");
    assert_eq!(provider.theme_mode(), ThemeMode::Dark);
    assert_eq!(provider.revision(), revision);
}

#[test]
fn three_toggles_return_to_system() {
    let mut provider = ThemeProvider::new();
    let mut seen = Vec::new();
    for _ in 0..3 {
        provider.toggle_mode();
        seen.push(provider.theme_mode());
    }
    assert_eq!(
        seen,
        vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    );
}

#[test]
fn registering_custom_default_replaces_lookup() {
    let mut provider = ThemeProvider::new();
    let count = provider.available_themes().len();

    let custom = CustomTheme::from_theme(&OceanTheme, "default", "House Default");
    provider.register_theme(custom.into_ref());

    assert_eq!(provider.available_themes().len(), count);
    let found = provider.theme_with_id("default").unwrap();
    assert_eq!(found.name(), "House Default");
    assert_eq!(provider.available_themes()[0].name(), "House Default");

    // the current theme had the replaced id, so it follows the replacement
    assert_eq!(provider.current_theme().name(), "House Default");
    assert_eq!(
        provider.color_palette(),
        OceanTheme.color_palette(ColorScheme::Light)
    );
}

#[test]
fn applying_unregistered_theme_does_not_touch_catalog() {
    let mut provider = ThemeProvider::new();
    let count = provider.available_themes().len();

    let preview = CustomTheme::from_theme(&DefaultTheme, "preview-only", "Preview");
    provider.apply_theme(preview.into_ref());

    assert_eq!(provider.current_theme().id(), "preview-only");
    assert_eq!(provider.available_themes().len(), count);
    assert!(provider.theme_with_id("preview-only").is_none());

    // switching away and back by id is not possible for an unregistered theme
    assert!(provider.switch_to_theme("ocean"));
    assert!(!provider.switch_to_theme("preview-only"));
    assert_eq!(provider.current_theme().id(), "ocean");
}

#[test]
fn additional_themes_are_merged_at_build() {
    let corporate = CustomTheme::from_theme(&DefaultTheme, "corporate", "Corporate").into_ref();
    let provider = ThemeProvider::builder()
        .additional_themes([corporate])
        .build();

    assert_eq!(provider.available_themes().len(), 7);
    assert_eq!(provider.current_theme().id(), "default");
    assert!(provider.theme_with_id("corporate").is_some());
}

#[test]
fn listeners_observe_registration() {
    let mut provider = ThemeProvider::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    provider.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    provider.register_themes([
        CustomTheme::from_theme(&DefaultTheme, "ocean", "Ocean 2").into_ref(),
        CustomTheme::from_theme(&DefaultTheme, "mint", "Mint").into_ref(),
    ]);

    assert_eq!(
        *events.borrow(),
        vec![
            ThemeChange::ThemeRegistered {
                id: "ocean".into(),
                replaced: true,
            },
            ThemeChange::ThemeRegistered {
                id: "mint".into(),
                replaced: false,
            },
        ]
    );
}

#[test]
fn mode_serializes_in_kebab_case() {
    assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
    let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(mode, ThemeMode::Dark);
}

#[test]
fn switching_to_id_of_initial_theme_is_a_no_op() {
    let mut provider = ThemeProvider::builder()
        .initial_theme(Arc::new(OceanTheme))
        .build();
    let before = Arc::clone(provider.current_theme());
    let events = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&events);
    provider.subscribe(move |_| *sink.borrow_mut() += 1);

    assert!(provider.switch_to_theme("ocean"));

    assert_eq!(provider.revision(), 0);
    assert_eq!(*events.borrow(), 0);
    assert!(Arc::ptr_eq(&before, provider.current_theme()));
}

#[test]
fn switching_to_id_of_applied_theme_keeps_its_palette() {
    let mut provider = ThemeProvider::new();
    let shadow = CustomTheme::from_theme(&DefaultTheme, "ocean", "Ocean (preview)");
    provider.apply_theme(shadow.into_ref());
    let palette = provider.color_palette();
    let revision = provider.revision();

    assert!(provider.switch_to_theme("ocean"));

    assert_eq!(provider.color_palette(), palette);
    assert_eq!(provider.color_palette().primary, Color::from_hex(0x007AFF));
    assert_eq!(provider.current_theme().name(), "Ocean (preview)");
    assert_eq!(provider.revision(), revision);
}

#[test]
fn additional_theme_with_built_in_id_replaces_it_in_place() {
    let house = CustomTheme::from_theme(&OceanTheme, "default", "House").into_ref();
    let provider = ThemeProvider::builder()
        .additional_themes([house])
        .build();

    assert_eq!(provider.available_themes().len(), 6);
    assert_eq!(provider.available_themes()[0].id(), "default");
    assert_eq!(provider.available_themes()[0].name(), "House");
    assert_eq!(provider.current_theme().name(), "House");
    assert_eq!(
        provider.color_palette(),
        OceanTheme.color_palette(ColorScheme::Light)
    );
}
