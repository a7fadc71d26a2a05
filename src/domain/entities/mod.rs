//! Domain entities - Core chat objects with no external dependencies

pub mod message;
pub mod log;
pub mod input;

pub use message::{Message, Sender};
pub use log::ConversationLog;
pub use input::InputField;
