//! The bundled `tokens/` sources, rendered at compile time.

use nyulh_design_tokens_core::Theme;

pub const LIGHT: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-light.css"));
pub const DARK: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-dark.css"));
pub const DESKTOP: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-desktop.css"));
pub const TABLET: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-tablet.css"));
pub const MOBILE: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-mobile.css"));

pub fn stylesheet(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
        Theme::Desktop => DESKTOP,
        Theme::Tablet => TABLET,
        Theme::Mobile => MOBILE,
    }
}

/// Every stylesheet concatenated, base themes first.
pub fn bundle() -> String {
    Theme::ALL.into_iter().map(stylesheet).collect::<Vec<_>>().join("\n")
}
