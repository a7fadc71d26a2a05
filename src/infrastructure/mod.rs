//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Suggest: HTTP client for the suggestion endpoint
//! - Adapters: Display surfaces (console, in-memory)

pub mod config;
pub mod suggest;
pub mod adapters;
