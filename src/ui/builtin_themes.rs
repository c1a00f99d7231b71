use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub title: Option<String>,
    pub tab_active: Option<String>,
    pub tab_inactive: Option<String>,
    pub heading: Option<String>,
    pub accent: Option<String>,
    pub muted: Option<String>,
    pub user_prefix: Option<String>,
    pub user_text: Option<String>,
    pub assistant_text: Option<String>,
    pub notice_text: Option<String>,
    pub error_text: Option<String>,
    pub thinking_indicator: Option<String>,
    pub input_border: Option<String>,
    pub input_title: Option<String>,
    pub input_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

pub fn load_builtin_themes() -> Vec<ThemeSpec> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");
    let config: BuiltinThemesConfig =
        toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_themes.toml");
    config.themes
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_display_themes_ship_builtin() {
        let ids: Vec<String> = load_builtin_themes().iter().map(|t| t.id.clone()).collect();
        assert!(ids.contains(&"dark".to_string()));
        assert!(ids.contains(&"light".to_string()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let theme = find_builtin_theme("LiGhT").expect("should find 'light'");
        assert_eq!(theme.id, "light");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert!(find_builtin_theme("dracula").is_none());
    }
}
