//! rae-chat - a minimal two-party chat client
//!
//! Every line the user sends is echoed into the conversation log and
//! forwarded to a remote suggestion endpoint; the plain-text reply (or a
//! fixed fallback message) is appended as the bot's answer.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::services::{ChatWidget, FALLBACK_REPLY};
pub use infrastructure::config::Config;
