use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::domain::entities::{InputField, Message};
use crate::domain::traits::{ChatSurface, Suggester};
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::suggest::HttpSuggester;

/// Bot message shown whenever a reply cannot be obtained
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Binds the send action to a local echo plus one remote suggestion request.
///
/// Each accepted submission spawns an independent task. Tasks are neither
/// queued nor cancelled, so replies may land out of submission order.
pub struct ChatWidget<S: ChatSurface> {
    suggester: Arc<dyn Suggester>,
    surface: Arc<S>,
}

impl<S: ChatSurface + 'static> ChatWidget<S> {
    /// Build a widget talking to the configured suggestion server
    pub fn new(config: &ServerConfig, surface: S) -> Self {
        Self::with_suggester(Arc::new(HttpSuggester::new(config.base_url())), surface)
    }

    pub fn with_suggester(suggester: Arc<dyn Suggester>, surface: S) -> Self {
        Self {
            suggester,
            surface: Arc::new(surface),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Echo `input` locally and start fetching the reply.
    ///
    /// Blank input is ignored and returns `None`. The returned handle may be
    /// awaited or dropped; dropping it does not cancel the request.
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, input: &str) -> Option<JoinHandle<()>> {
        if input.trim().is_empty() {
            tracing::debug!("Ignoring blank input");
            return None;
        }

        self.surface.display(Message::user(input));

        let suggester = Arc::clone(&self.suggester);
        let surface = Arc::clone(&self.surface);
        let input = input.to_string();
        Some(tokio::spawn(async move {
            Self::fetch_reply(suggester.as_ref(), surface.as_ref(), &input).await;
        }))
    }

    /// The send action: submit the field's value and clear it if accepted
    pub fn send(&self, field: &mut InputField) -> Option<JoinHandle<()>> {
        if field.is_blank() {
            tracing::debug!("Send pressed with an empty field");
            return None;
        }
        let handle = self.submit(field.value())?;
        field.clear();
        Some(handle)
    }

    /// Ask the suggester for a reply and display exactly one bot message
    pub async fn fetch_reply(suggester: &dyn Suggester, surface: &S, input: &str) {
        tracing::debug!("Requesting suggestion from {}", suggester.name());

        let reply = match suggester.suggest(input).await {
            Ok(body) => Message::bot(body.trim()),
            Err(e) => {
                tracing::error!("Error: {}", e);
                Message::bot(FALLBACK_REPLY)
            }
        };

        surface.display(reply);
    }
}
