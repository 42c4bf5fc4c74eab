//! Shared UI crate for Animeline: dataset, chart logic and views used by the
//! web and desktop shells.

pub mod chart;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod locale_switcher;
    pub use locale_switcher::LocaleSwitcher;
}

/// Shared theme, inlined by shells that don't serve assets.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
