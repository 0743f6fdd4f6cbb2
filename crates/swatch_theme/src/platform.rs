//! Platform appearance detection
//!
//! The propagation layer reads the platform's light/dark appearance through
//! an [`AppearanceSource`]. Hosts that already receive the signal from their
//! UI framework push it into a [`ManualAppearance`]; headless hosts can use
//! [`SystemAppearance`], which asks the operating system directly.
//!
//! Detection order for [`detect_system_color_scheme`]:
//! 1. `SWATCH_COLOR_SCHEME=light|dark` environment override
//! 2. the platform query (`defaults` on macOS, the registry on Windows,
//!    `GTK_THEME` / `gsettings` on Linux)
//! 3. `Light`

use crate::theme::ColorScheme;
use std::cell::Cell;
use std::process::Command;
use std::rc::Rc;

/// Environment variable that forces the detected scheme
pub const COLOR_SCHEME_ENV: &str = "SWATCH_COLOR_SCHEME";

/// Operating system family, as far as appearance detection is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Ask the OS for its appearance. `None` when it cannot be determined.
    pub fn detect_color_scheme(self) -> Option<ColorScheme> {
        match self {
            Platform::MacOS => {
                // The key is absent in light mode, which makes `defaults` fail
                match command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"]) {
                    Some(out) => Some(parse_macos_interface_style(&out)),
                    None => Some(ColorScheme::Light),
                }
            }
            Platform::Windows => command_stdout(
                "reg",
                &[
                    "query",
                    r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
                    "/v",
                    "AppsUseLightTheme",
                ],
            )
            .and_then(|out| parse_windows_personalize(&out)),
            Platform::Linux => std::env::var("GTK_THEME")
                .ok()
                .and_then(|theme| parse_gtk_theme(&theme))
                .or_else(|| {
                    command_stdout(
                        "gsettings",
                        &["get", "org.gnome.desktop.interface", "color-scheme"],
                    )
                    .and_then(|out| parse_gsettings_color_scheme(&out))
                }),
            Platform::Other => None,
        }
    }
}

/// Detect the current system color scheme, defaulting to `Light`
pub fn detect_system_color_scheme() -> ColorScheme {
    if let Some(scheme) = std::env::var(COLOR_SCHEME_ENV)
        .ok()
        .and_then(|value| parse_scheme_override(&value))
    {
        tracing::trace!(?scheme, "color scheme forced by {}", COLOR_SCHEME_ENV);
        return scheme;
    }

    let platform = Platform::current();
    match platform.detect_color_scheme() {
        Some(scheme) => {
            tracing::trace!(?platform, ?scheme, "detected system color scheme");
            scheme
        }
        None => {
            tracing::debug!(?platform, "could not detect system color scheme, using light");
            ColorScheme::Light
        }
    }
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn parse_scheme_override(value: &str) -> Option<ColorScheme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(ColorScheme::Light),
        "dark" => Some(ColorScheme::Dark),
        _ => None,
    }
}

fn parse_macos_interface_style(out: &str) -> ColorScheme {
    if out.trim().eq_ignore_ascii_case("dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

fn parse_windows_personalize(out: &str) -> Option<ColorScheme> {
    let line = out.lines().find(|l| l.contains("AppsUseLightTheme"))?;
    match line.split_whitespace().last()? {
        "0x0" => Some(ColorScheme::Dark),
        "0x1" => Some(ColorScheme::Light),
        _ => None,
    }
}

fn parse_gtk_theme(theme: &str) -> Option<ColorScheme> {
    let theme = theme.to_ascii_lowercase();
    if theme.ends_with(":dark") || theme.ends_with("-dark") {
        Some(ColorScheme::Dark)
    } else {
        None
    }
}

fn parse_gsettings_color_scheme(out: &str) -> Option<ColorScheme> {
    match out.trim().trim_matches('\'') {
        "prefer-dark" => Some(ColorScheme::Dark),
        "prefer-light" | "default" => Some(ColorScheme::Light),
        _ => None,
    }
}

/// Source of the platform's current appearance
pub trait AppearanceSource {
    fn color_scheme(&self) -> ColorScheme;
}

/// A fixed appearance
impl AppearanceSource for ColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        *self
    }
}

impl<T: AppearanceSource + ?Sized> AppearanceSource for &T {
    fn color_scheme(&self) -> ColorScheme {
        (**self).color_scheme()
    }
}

/// Appearance pushed in by the host's UI framework
///
/// Clones share the same cell: keep one clone in the theme root and update
/// another from the framework's appearance-changed callback.
#[derive(Clone, Debug, Default)]
pub struct ManualAppearance {
    scheme: Rc<Cell<ColorScheme>>,
}

impl ManualAppearance {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Rc::new(Cell::new(scheme)),
        }
    }

    pub fn set(&self, scheme: ColorScheme) {
        self.scheme.set(scheme);
    }

    pub fn get(&self) -> ColorScheme {
        self.scheme.get()
    }
}

impl AppearanceSource for ManualAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.get()
    }
}

/// Appearance read from the operating system
///
/// Detection spawns a process on some platforms, so the result is cached;
/// call [`SystemAppearance::redetect`] when the host suspects a change.
#[derive(Debug)]
pub struct SystemAppearance {
    scheme: Cell<ColorScheme>,
}

impl SystemAppearance {
    pub fn new() -> Self {
        Self {
            scheme: Cell::new(detect_system_color_scheme()),
        }
    }

    /// Query the OS again. Returns true when the scheme changed.
    pub fn redetect(&self) -> bool {
        let detected = detect_system_color_scheme();
        self.scheme.replace(detected) != detected
    }
}

impl Default for SystemAppearance {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSource for SystemAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.scheme.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_scheme_override("dark"), Some(ColorScheme::Dark));
        assert_eq!(parse_scheme_override(" Light\n"), Some(ColorScheme::Light));
        assert_eq!(parse_scheme_override("auto"), None);
    }

    #[test]
    fn test_parse_macos() {
        assert_eq!(parse_macos_interface_style("Dark\n"), ColorScheme::Dark);
        assert_eq!(parse_macos_interface_style(""), ColorScheme::Light);
    }

    #[test]
    fn test_parse_windows() {
        let dark = "\r\nHKEY_CURRENT_USER\\...\\Personalize\r\n    AppsUseLightTheme    REG_DWORD    0x0\r\n";
        let light = "    AppsUseLightTheme    REG_DWORD    0x1\r\n";
        assert_eq!(parse_windows_personalize(dark), Some(ColorScheme::Dark));
        assert_eq!(parse_windows_personalize(light), Some(ColorScheme::Light));
        assert_eq!(parse_windows_personalize("garbage"), None);
    }

    #[test]
    fn test_parse_linux() {
        assert_eq!(parse_gtk_theme("Adwaita:dark"), Some(ColorScheme::Dark));
        assert_eq!(parse_gtk_theme("Arc-Dark"), Some(ColorScheme::Dark));
        assert_eq!(parse_gtk_theme("Adwaita"), None);
        assert_eq!(
            parse_gsettings_color_scheme("'prefer-dark'\n"),
            Some(ColorScheme::Dark)
        );
        assert_eq!(
            parse_gsettings_color_scheme("'default'\n"),
            Some(ColorScheme::Light)
        );
    }

    #[test]
    fn test_manual_appearance_clones_share_state() {
        let appearance = ManualAppearance::new(ColorScheme::Light);
        let handle = appearance.clone();
        handle.set(ColorScheme::Dark);
        assert_eq!(appearance.color_scheme(), ColorScheme::Dark);
    }
}
