//! In-memory surface for tests

use std::sync::RwLock;

use crate::domain::entities::{ConversationLog, Message};
use crate::domain::traits::ChatSurface;

/// Surface that only records the log
#[derive(Debug, Default)]
pub struct MemorySurface {
    log: RwLock<ConversationLog>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the log in display order
    pub fn messages(&self) -> Vec<Message> {
        self.read(|log| log.iter().cloned().collect())
    }

    pub fn last(&self) -> Option<Message> {
        self.read(|log| log.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.read(|log| log.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|log| log.is_empty())
    }

    fn read<T>(&self, f: impl FnOnce(&ConversationLog) -> T) -> T {
        // A poisoned lock still holds a consistent append-only log
        let log = self.log.read().unwrap_or_else(|e| e.into_inner());
        f(&log)
    }
}

impl ChatSurface for MemorySurface {
    fn display(&self, message: Message) {
        let mut log = self.log.write().unwrap_or_else(|e| e.into_inner());
        log.push(message);
    }
}
