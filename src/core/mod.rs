pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod message;
pub mod responder;
