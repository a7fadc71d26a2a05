//! Application layer - Use cases and chat orchestration
//! 
//! This layer contains:
//! - Services: the chat widget
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
