use async_trait::async_trait;
use thiserror::Error;

use super::ChatMessage;

#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP 4xx. Callers treat this as a credential problem.
    #[error("backend rejected the request with status {0}")]
    Client(u16),
    /// Transport failures and any other HTTP failure.
    #[error("backend service failure: {0}")]
    Service(String),
    /// A success response whose payload matches none of the known shapes.
    #[error("backend response payload could not be parsed")]
    Parse,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendState {
    pub init_required: bool,
    pub chat_history: Vec<ChatMessage>,
}

pub type BackendBox = Box<dyn ChatBackend + Send + Sync>;

/// The remote chat service. Every call is attempted exactly once and any
/// failure comes back classified; nothing here retries or panics.
#[async_trait]
pub trait ChatBackend {
    /// Registers the OpenAI API key with the service for this session.
    async fn initialize(&self, key: &str) -> Result<(), BackendError>;

    /// Sends one user message and returns the assistant's reply text.
    async fn ask(&self, message: &str) -> Result<String, BackendError>;

    /// Clears the server-side conversation context.
    async fn reset(&self) -> Result<(), BackendError>;

    /// Returns whether initialization is required, plus any stored history.
    async fn fetch_state(&self) -> Result<BackendState, BackendError>;

    /// Returns the stored conversation history on its own.
    async fn fetch_history(&self) -> Result<Vec<ChatMessage>, BackendError>;
}
