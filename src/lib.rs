//! SoftSell is a terminal-first front end for a software-license resale
//! service: browsable marketing screens plus SoftBot, a scripted concierge
//! chat.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns runtime state: the response selector and its delayed
//!   delivery service, the transcript model, site content, the quote form,
//!   and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`commands`] implements slash-command parsing and execution inside the
//!   chat panel.
//! - [`utils`] carries input sanitizing, transcript logging, and wrap math.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`]
//! for interactive sessions.

pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
