//! Domain layer - Core chat objects with no external dependencies
//! 
//! This layer contains:
//! - Entities: Message, ConversationLog, InputField
//! - Traits: Abstractions for infrastructure (ChatSurface, Suggester)

pub mod entities;
pub mod traits;
