//! DOM contract and tunables for the navigation controller.
//!
//! Defaults match the portfolio markup. A page can override any subset by
//! placing a JSON object in a `data-nav-config` attribute on `<body>`; missing
//! keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::Theme;

pub const DEFAULT_PAGE_ID: &str = "home";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Logo asset path per theme variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoAssets {
    pub soft: String,
    pub modern: String,
}

impl Default for LogoAssets {
    fn default() -> Self {
        Self {
            soft: "/image/logo/KBcreative_rose.png".to_owned(),
            modern: "/image/logo/logo_KBcreative_Bleu.png".to_owned(),
        }
    }
}

impl LogoAssets {
    #[must_use]
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Soft => &self.soft,
            Theme::Modern => &self.modern,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Id of the theme toggle control.
    pub color_toggle_id: String,
    /// Id of the hamburger button; its three `<span>` children are the bars.
    pub menu_button_id: String,
    pub mobile_nav_id: String,
    pub logo_id: String,
    pub nav_link_selector: String,
    pub page_selector: String,
    /// Extra clickable elements (hero buttons) that navigate via `target_attribute`.
    pub action_selector: String,
    /// Attribute naming a link's target page id.
    pub target_attribute: String,
    pub active_class: String,
    pub revealed_class: String,
    pub theme_attribute: String,
    pub storage_key: String,
    pub logos: LogoAssets,
    /// Page shown when the URL fragment names no known page.
    pub default_page: String,
    pub reveal_selectors: Vec<String>,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            color_toggle_id: "colorToggle".to_owned(),
            menu_button_id: "mobileMenuBtn".to_owned(),
            mobile_nav_id: "mobileNav".to_owned(),
            logo_id: "logo".to_owned(),
            nav_link_selector: ".nav-link".to_owned(),
            page_selector: ".page".to_owned(),
            action_selector: ".hero-actions .btn".to_owned(),
            target_attribute: "data-page".to_owned(),
            active_class: "active".to_owned(),
            revealed_class: "animate-on-scroll".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            logos: LogoAssets::default(),
            default_page: DEFAULT_PAGE_ID.to_owned(),
            reveal_selectors: vec![
                ".cv-section".to_owned(),
                ".passion-category".to_owned(),
                ".competence-category".to_owned(),
            ],
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl NavConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// The reveal threshold is clamped into `0.0..=1.0`, the range the
    /// intersection observer accepts.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal_threshold = clamp_threshold(config.reveal_threshold);
        Ok(config)
    }

    /// Comma-joined selector list for every reveal category.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

fn clamp_threshold(raw: f64) -> f64 {
    if raw.is_nan() {
        DEFAULT_REVEAL_THRESHOLD
    } else {
        raw.clamp(0.0, 1.0)
    }
}
