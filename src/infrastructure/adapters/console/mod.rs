//! Console adapter - the terminal plays the role of the chat page

use std::io::Write;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::application::errors::ChatError;
use crate::application::services::ChatWidget;
use crate::domain::entities::{ConversationLog, InputField, Message, Sender};
use crate::domain::traits::ChatSurface;
use crate::infrastructure::config::ConsoleConfig;

/// Typing this ends the session
pub const QUIT_COMMAND: &str = "/quit";

/// Erase the current terminal line and return the cursor to its start
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Prints each message to stdout as it is appended
pub struct ConsoleSurface {
    user_label: String,
    bot_label: String,
    prompt: Option<String>,
    log: Mutex<ConversationLog>,
}

impl ConsoleSurface {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            user_label: config.user_label.clone(),
            bot_label: config.bot_label.clone(),
            prompt: None,
            log: Mutex::new(ConversationLog::new()),
        }
    }

    /// Redraw `prompt` after each bot reply, for interactive sessions where
    /// replies land while the prompt is waiting for input
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Render a message as one console line. An empty label falls back to
    /// the sender name.
    pub fn format(&self, message: &Message) -> String {
        let sender = message.sender();
        let label = match sender {
            Sender::User => self.user_label.as_str(),
            Sender::Bot => self.bot_label.as_str(),
        };
        let label = if label.is_empty() { sender.as_str() } else { label };
        format!("[{}] {}", label, message.text())
    }

    /// Everything written to stdout for one message
    pub fn render(&self, message: &Message) -> String {
        let line = self.format(message);
        match &self.prompt {
            // User echoes follow the line the user just entered; replies
            // arrive asynchronously and would otherwise share the prompt line
            Some(prompt) if !message.is_from_user() => {
                format!("{}{}\n{}", CLEAR_LINE, line, prompt)
            }
            _ => format!("{}\n", line),
        }
    }
}

impl ChatSurface for ConsoleSurface {
    fn display(&self, message: Message) {
        let output = self.render(&message);
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        log.push(message);
        // Printing under the lock keeps screen order equal to log order
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(output.as_bytes());
        let _ = stdout.flush();
    }
}

/// Reads lines from stdin and feeds them to the widget's send action
pub struct ConsoleAdapter {
    prompt: String,
}

impl ConsoleAdapter {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
        }
    }

    fn show_prompt(&self) {
        print!("{}", self.prompt);
        let _ = std::io::stdout().flush();
    }

    /// Run until EOF or `/quit`, then wait for replies still in flight
    pub async fn run<S: ChatSurface + 'static>(&self, widget: &ChatWidget<S>) -> Result<(), ChatError> {
        tracing::info!("Starting console chat (type {} to exit)", QUIT_COMMAND);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut field = InputField::new();
        let mut pending: Vec<JoinHandle<()>> = Vec::new();

        loop {
            self.show_prompt();
            let Some(line) = lines.next_line().await? else {
                break;
            };

            if line.trim() == QUIT_COMMAND {
                break;
            }

            field.set(line);
            if let Some(handle) = widget.send(&mut field) {
                pending.push(handle);
            }
            pending.retain(|h| !h.is_finished());
        }

        if !pending.is_empty() {
            tracing::info!("Waiting for {} pending replies", pending.len());
        }
        for handle in pending {
            if let Err(e) = handle.await {
                tracing::warn!("Reply task failed: {}", e);
            }
        }

        Ok(())
    }
}
