use crate::core::config::Config;
use crate::ui::builtin_themes::load_builtin_themes;

pub fn list_themes() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let current_id = config.theme.as_deref().unwrap_or("dark");
    let current_display = config.theme.as_deref().unwrap_or("(default: dark)");

    println!("Available themes:\n");
    for theme in load_builtin_themes() {
        let mark = if theme.id.eq_ignore_ascii_case(current_id) {
            "*"
        } else {
            " "
        };
        println!("  {} {} - {}", mark, theme.id, theme.display_name);
    }
    println!("\nCurrent: {current_display}");
    Ok(())
}
