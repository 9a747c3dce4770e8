#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use super::SessionStore;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendError;
use crate::domain::models::ChatMessage;
use crate::domain::models::Command;
use crate::domain::models::Role;
use crate::infrastructure::storage::StorageBox;

pub const STORAGE_KEY_OPENAPI: &str = "openapi_key";
pub const STORAGE_KEY_HISTORY_CACHED: &str = "chat_history_cached";

pub fn help_text(init_required: bool) -> String {
    if init_required {
        return "To initialize the chatbot, please type init and press enter. To clear the chat context, type clear or reset and press enter.".to_string();
    }

    return "Chat with the bot by typing a message and pressing enter. Type clear or reset to clear the chat context.".to_string();
}

/// Executes classified commands against the chat service. No operation
/// here returns an error to the caller: every failure path resolves to an
/// appended assistant message and a log line.
pub struct ActionProvider {
    backend: BackendBox,
    storage: StorageBox,
}

impl ActionProvider {
    pub fn new(backend: BackendBox, storage: StorageBox) -> ActionProvider {
        return ActionProvider { backend, storage };
    }

    fn push_assistant(&self, store: &mut SessionStore, text: &str) {
        let id = store.next_message_id();
        store.append_message(ChatMessage::new(id, Role::Assistant, text));
    }

    /// Routes raw input and runs the matching operation. While a key prompt
    /// is outstanding, free text is the key submission.
    pub async fn dispatch(&self, store: &mut SessionStore, input: &str) {
        if store.state().initializing {
            let key = input.trim().to_string();
            self.submit_key(store, &key).await;
            return;
        }

        match Command::route(input) {
            Command::Init => self.init(store),
            Command::Reset => self.reset(store).await,
            Command::Help => self.help(store),
            Command::Chat(text) => {
                if store.state().initialization_required {
                    self.push_assistant(
                        store,
                        "To initialize the chatbot, please type init and press enter.",
                    );
                    return;
                }
                self.chat(store, &text).await;
            }
        }
    }

    pub fn init(&self, store: &mut SessionStore) {
        if !store.state().initialization_required {
            self.push_assistant(store, "Bot already initialized");
            return;
        }

        store.set_key(None);
        store.set_initializing();
        self.push_assistant(store, "Please type your OpenAI API key and press enter.");
    }

    /// The key itself is never echoed back in any message.
    pub async fn submit_key(&self, store: &mut SessionStore, key: &str) {
        if key.is_empty() {
            self.push_assistant(store, "Please enter a valid OpenAI API key.");
            return;
        }

        if let Err(err) = self.storage.set(STORAGE_KEY_OPENAPI, key) {
            tracing::warn!(error = ?err, "failed to persist api key");
        }
        store.set_key(Some(key.to_string()));

        match self.backend.initialize(key).await {
            Ok(()) => {
                store.mark_initialized();
                self.push_assistant(store, "Chatbot initialized successfully.");
            }
            Err(err) => {
                tracing::error!(error = ?err, "chatbot initialization failed");
                self.push_assistant(
                    store,
                    "Failed to initialize chatbot. Please reverify the OpenAI API key.",
                );
            }
        }
    }

    pub async fn chat(&self, store: &mut SessionStore, text: &str) {
        match self.backend.ask(text).await {
            Ok(answer) => {
                self.push_assistant(store, &answer);
            }
            Err(BackendError::Client(status)) => {
                tracing::error!(status = status, "chat request rejected");
                self.push_assistant(
                    store,
                    "Failed to get response from chatbot. Please reverify the OpenAI API key.",
                );
            }
            Err(BackendError::Parse) => {
                tracing::error!("chat response matched none of the known payload shapes");
                self.push_assistant(
                    store,
                    "I received your message but couldn't process the response format. Please try again.",
                );
            }
            Err(err) => {
                tracing::error!(error = ?err, "chat request failed");
                self.push_assistant(store, "Failed to get response from chatbot service.");
            }
        }
    }

    /// The local clear is unconditional and happens before the network
    /// call; a failed remote reset leaves the local state cleared.
    pub async fn reset(&self, store: &mut SessionStore) {
        if let Err(err) = self.storage.remove(STORAGE_KEY_HISTORY_CACHED) {
            tracing::warn!(error = ?err, "failed to drop cached history flag");
        }
        store.clear_messages();

        match self.backend.reset().await {
            Ok(()) => {
                store.mark_initialized();
                self.push_assistant(store, "Chat context has been cleared.");
            }
            Err(err) => {
                tracing::error!(error = ?err, "context reset failed");
                self.push_assistant(store, "Failed to clear chat context.");
            }
        }
    }

    pub fn help(&self, store: &mut SessionStore) {
        let text = help_text(store.state().initialization_required);
        self.push_assistant(store, &text);
    }

    /// Seeds the session from the server on mount. A fetch failure is only
    /// logged; the local state stays authoritative.
    pub async fn bootstrap(&self, store: &mut SessionStore) {
        match self.backend.fetch_state().await {
            Ok(backend_state) => {
                store.set_initialization_required(backend_state.init_required);

                if !backend_state.chat_history.is_empty() {
                    store.append_history(backend_state.chat_history);
                    if let Err(err) = self.storage.set(STORAGE_KEY_HISTORY_CACHED, "true") {
                        tracing::warn!(error = ?err, "failed to record cached history flag");
                    }
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to fetch chat state");
            }
        }
    }
}
