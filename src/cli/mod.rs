//! Command-line interface parsing and dispatch.

pub mod theme_list;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::core::config::{path_display, Config};
use crate::ui::builtin_themes::find_builtin_theme;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "softsell")]
#[command(about = "A terminal front end for the SoftSell license resale service")]
#[command(
    long_about = "SoftSell is a full-screen terminal front end for the SoftSell license \
resale service. It renders the marketing screens, a quote-request form, and \
SoftBot, a scripted concierge that answers questions about valuations, the \
selling process, security, and payment.\n\n\
Controls:\n\
  1-5               Switch between screens\n\
  c                 Open the SoftBot chat panel\n\
  t                 Toggle the light/dark theme (saved to config)\n\
  Enter             Send the typed message\n\
  Alt+Enter         Insert a newline in the composer\n\
  Esc               Leave the chat panel or the quote form\n\
  q / Ctrl+C        Quit\n\n\
Commands:\n\
  /help             Show extended help inside the chat\n\
  /theme [id]       Toggle or set the theme\n\
  /log [filename]   Enable or pause transcript logging\n\
  /dump [filename]  Export the conversation"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable transcript logging to the specified file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,

    /// Theme for this session only (startup is not persisted; toggles are)
    #[arg(short = 't', long, global = true, value_name = "THEME")]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive interface (default)
    Chat,
    /// List the built-in themes
    Themes,
    /// Set configuration values
    Set {
        /// Configuration key to set (currently: theme)
        key: String,
        /// Value to set for the key
        value: String,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(args.theme, args.log).await,
        Commands::Themes => theme_list::list_themes(),
        Commands::Set { key, value } => set_config_value(&key, &value),
        Commands::Unset { key } => unset_config_value(&key),
    }
}

fn set_config_value(key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    match key {
        "theme" => {
            let Some(spec) = find_builtin_theme(value) else {
                eprintln!("❌ Unknown theme: {value} (try `softsell themes`)");
                std::process::exit(1);
            };
            let mut config = Config::load()?;
            config.theme = Some(spec.id.clone());
            config.save()?;
            println!("✅ Set theme to: {}", spec.id);
            println!("   Config: {}", path_display(Config::config_path()));
            Ok(())
        }
        _ => {
            eprintln!("❌ Unknown config key: {key} (supported: theme)");
            std::process::exit(1);
        }
    }
}

fn unset_config_value(key: &str) -> Result<(), Box<dyn Error>> {
    match key {
        "theme" => {
            let mut config = Config::load()?;
            config.theme = None;
            config.save()?;
            println!("✅ Unset theme (the OS appearance hint applies again)");
            Ok(())
        }
        _ => {
            eprintln!("❌ Unknown config key: {key} (supported: theme)");
            std::process::exit(1);
        }
    }
}
