//! Theme preference use-cases.
//!
//! # Invariants
//! - A missing or unrecognized stored value reads as `Theme::Light`.

use crate::model::preference::Theme;
use crate::repo::preference_repo::{PreferenceRepository, RepoResult};
use log::{info, warn};

/// Storage key shared with earlier portal builds.
pub const THEME_PREFERENCE_KEY: &str = "nexus-theme";

pub struct ThemeService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> ThemeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> RepoResult<Theme> {
        let stored = self.repo.get(THEME_PREFERENCE_KEY)?;
        let theme = match stored.as_deref() {
            None => Theme::default(),
            Some(value) => Theme::parse(value).unwrap_or_else(|| {
                warn!("event=theme_load module=preferences status=fallback reason=unrecognized_value");
                Theme::default()
            }),
        };
        Ok(theme)
    }

    pub fn save(&self, theme: Theme) -> RepoResult<()> {
        self.repo.set(THEME_PREFERENCE_KEY, theme.as_str())?;
        info!(
            "event=theme_save module=preferences status=ok theme={}",
            theme.as_str()
        );
        Ok(())
    }

    /// Flips and persists the theme, returning the new value.
    pub fn toggle(&self) -> RepoResult<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}
