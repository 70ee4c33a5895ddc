//! The two presentation variants and how they are named.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::config::NavConfig;
use crate::host::{SessionStore, ThemeSurface};
use crate::state::NavState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Soft,
    Modern,
}

impl Theme {
    /// Name written to the root theme attribute and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Modern => "modern",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Soft => Self::Modern,
            Self::Modern => Self::Soft,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "soft" => Ok(Self::Soft),
            "modern" => Ok(Self::Modern),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Write the theme attribute and logo for `theme`. Both always move together.
pub fn apply_theme<H: ThemeSurface + ?Sized>(theme: Theme, host: &mut H, config: &NavConfig) {
    host.set_root_attribute(&config.theme_attribute, theme.as_str());
    host.set_logo_src(config.logos.for_theme(theme));
}

/// Flip the theme, repaint, then persist the choice on a best-effort basis.
///
/// A storage failure is logged and dropped; the visual update has already
/// happened by then.
pub fn toggle_theme<H: ThemeSurface + SessionStore + ?Sized>(
    state: &mut NavState,
    host: &mut H,
    config: &NavConfig,
) -> Theme {
    state.theme = state.theme.toggled();
    apply_theme(state.theme, host, config);
    if let Err(err) = host.set(&config.storage_key, state.theme.as_str()) {
        log::warn!("theme: preference not saved: {err}");
    }
    state.theme
}

/// Load the stored preference, falling back to the default variant, and apply it.
pub fn restore_theme<H: ThemeSurface + SessionStore + ?Sized>(
    state: &mut NavState,
    host: &mut H,
    config: &NavConfig,
) -> Theme {
    state.theme = match host.get(&config.storage_key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: UnknownTheme| {
            log::debug!("theme: ignoring stored value: {err}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            log::warn!("theme: preference not loaded: {err}");
            Theme::default()
        }
    };
    apply_theme(state.theme, host, config);
    state.theme
}
