//! Display surfaces for the chat log

pub mod console;
pub mod memory;

pub use console::{ConsoleAdapter, ConsoleSurface};
pub use memory::MemorySurface;
