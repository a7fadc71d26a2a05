use async_trait::async_trait;
use crate::application::errors::ChatError;

/// Suggester trait - abstraction for the remote text-suggestion service
#[async_trait]
pub trait Suggester: Send + Sync {
    /// Get the service name (used in logs)
    fn name(&self) -> &str;

    /// Send one piece of user text and return the raw reply body
    async fn suggest(&self, text: &str) -> Result<String, ChatError>;
}
