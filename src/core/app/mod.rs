use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::responder::ResponderService;
use crate::ui::appearance::{detect_preferred_appearance, Appearance};
use crate::ui::builtin_themes::find_builtin_theme;
use crate::ui::theme::toggled_theme_id;

pub mod conversation;
pub mod session;
pub mod ui_state;

pub use conversation::ConversationController;
pub use session::SessionContext;
pub use ui_state::{ChatPanel, Mode, Screen, UiState};

pub struct App {
    pub session: SessionContext,
    pub ui: UiState,
    /// Where theme changes are persisted; `None` disables persistence
    /// (session-only `--theme` override, tests).
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        responder: ResponderService,
        log_file: Option<String>,
        theme_override: Option<&str>,
    ) -> Self {
        let theme_id = resolve_startup_theme(
            theme_override,
            config.theme.as_deref(),
            detect_preferred_appearance(),
        );
        tracing::debug!(theme = %theme_id, "session starting");

        Self {
            ui: UiState::new(theme_id),
            session: SessionContext::new(config, responder, log_file),
            config_path,
        }
    }

    pub fn conversation(&mut self) -> ConversationController<'_> {
        ConversationController::new(&mut self.session, &mut self.ui)
    }

    /// Switch to a built-in theme; persists the choice when a config path
    /// is attached.
    pub fn apply_theme_by_id(&mut self, id: &str) -> Result<(), String> {
        let spec = find_builtin_theme(id).ok_or_else(|| format!("unknown theme: {id}"))?;
        self.ui.apply_theme(&spec.id);
        self.persist_theme();
        Ok(())
    }

    /// Flip light/dark, write the config, and surface the change.
    pub fn toggle_theme(&mut self) {
        let next = toggled_theme_id(&self.ui.theme_id);
        self.ui.apply_theme(next);
        self.persist_theme();
        self.ui.set_status(format!("Theme: {next}"));
    }

    fn persist_theme(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        self.session.config.theme = Some(self.ui.theme_id.clone());
        if let Err(e) = self.session.config.save_to_path(&path) {
            self.ui.set_status(format!("Config save error: {e}"));
        }
    }
}

/// Startup theme resolution: explicit override, then the saved config key,
/// then the OS appearance hint, then dark. Unknown ids at any tier fall
/// through to the next.
pub fn resolve_startup_theme(
    theme_override: Option<&str>,
    saved: Option<&str>,
    hint: Option<Appearance>,
) -> String {
    for candidate in [theme_override, saved] {
        if let Some(id) = candidate {
            if let Some(spec) = find_builtin_theme(id) {
                return spec.id;
            }
        }
    }
    hint.map(Appearance::theme_id)
        .unwrap_or("dark")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_saved_theme() {
        let theme = resolve_startup_theme(Some("light"), Some("dark"), None);
        assert_eq!(theme, "light");
    }

    #[test]
    fn saved_theme_beats_os_hint() {
        let theme = resolve_startup_theme(None, Some("light"), Some(Appearance::Dark));
        assert_eq!(theme, "light");
    }

    #[test]
    fn unknown_ids_fall_through_to_the_hint() {
        let theme = resolve_startup_theme(Some("dracula"), Some("paper"), Some(Appearance::Light));
        assert_eq!(theme, "light");
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(resolve_startup_theme(None, None, None), "dark");
    }

    #[test]
    fn toggle_updates_ui_without_config_path() {
        let (responder, _rx) = ResponderService::new();
        let mut app = App::new(Config::default(), None, responder, None, Some("dark"));
        app.toggle_theme();
        assert_eq!(app.ui.theme_id, "light");
        app.toggle_theme();
        assert_eq!(app.ui.theme_id, "dark");
    }

    #[test]
    fn toggle_persists_when_config_path_attached() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let (responder, _rx) = ResponderService::new();
        let mut app = App::new(
            Config::default(),
            Some(path.clone()),
            responder,
            None,
            Some("dark"),
        );

        app.toggle_theme();
        let saved = Config::load_from_path(&path).expect("load");
        assert_eq!(saved.theme.as_deref(), Some("light"));

        app.toggle_theme();
        let saved = Config::load_from_path(&path).expect("load");
        assert_eq!(saved.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_theme_id_is_rejected() {
        let (responder, _rx) = ResponderService::new();
        let mut app = App::new(Config::default(), None, responder, None, Some("dark"));
        assert!(app.apply_theme_by_id("dracula").is_err());
        assert_eq!(app.ui.theme_id, "dark");
    }
}
