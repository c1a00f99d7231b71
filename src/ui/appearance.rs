/// Preferred appearance used to choose a default theme when none is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn theme_id(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Best-effort OS appearance hint; `None` when the platform gives no answer.
pub fn detect_preferred_appearance() -> Option<Appearance> {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        // The global AppleInterfaceStyle key only exists while dark mode is
        // on; a missing key reads as light.
        let output = Command::new("/usr/bin/defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .ok()?;
        if !output.status.success() {
            return Some(Appearance::Light);
        }
        let style = String::from_utf8_lossy(&output.stdout);
        Some(if style.to_ascii_lowercase().contains("dark") {
            Appearance::Dark
        } else {
            Appearance::Light
        })
    }

    #[cfg(target_os = "windows")]
    {
        // AppsUseLightTheme: 1 = light, 0 = dark.
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;
        let personalize = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
            .ok()?;
        let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
        Some(if value == 0 {
            Appearance::Dark
        } else {
            Appearance::Light
        })
    }

    #[cfg(target_os = "linux")]
    {
        use std::process::Command;
        // GNOME 42+ exposes color-scheme as 'prefer-dark' or 'default'.
        let output = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let scheme = String::from_utf8_lossy(&output.stdout).to_ascii_lowercase();
        if scheme.contains("prefer-dark") {
            Some(Appearance::Dark)
        } else if scheme.contains("default") || scheme.contains("prefer-light") {
            Some(Appearance::Light)
        } else {
            None
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_maps_to_builtin_theme_ids() {
        assert_eq!(Appearance::Light.theme_id(), "light");
        assert_eq!(Appearance::Dark.theme_id(), "dark");
    }
}
