use crate::domain::entities::Message;

/// Display surface - owns the conversation log and renders it.
///
/// `display` is synchronous: once it returns the message is part of the
/// log and the newest entry is in view.
pub trait ChatSurface: Send + Sync {
    /// Append a message to the log and render it
    fn display(&self, message: Message);
}
