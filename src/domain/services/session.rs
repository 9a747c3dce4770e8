#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::domain::models::ChatMessage;

/// Everything a conversation surface needs between mount and unmount.
/// Owned exclusively by `SessionStore`; no message is mutated after
/// creation, corrections arrive as new messages.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub openapi_key: Option<String>,
    pub initializing: bool,
    pub initialization_required: bool,
    pub access_token: String,
    pub is_logged_in: bool,
    pub role: String,
    pub messages: Vec<ChatMessage>,
}

pub struct SessionStore {
    state: SessionState,
    next_id: u64,
}

impl SessionStore {
    pub fn new(seed: SessionState) -> SessionStore {
        let next_id = seed
            .messages
            .iter()
            .map(|message| {
                return message.id + 1;
            })
            .max()
            .unwrap_or(1);

        return SessionStore {
            state: seed,
            next_id,
        };
    }

    pub fn state(&self) -> &SessionState {
        return &self.state;
    }

    /// Applies a whole-state replacement. Callers never observe a
    /// partially updated state.
    pub fn update<F>(&mut self, updater: F)
    where
        F: FnOnce(SessionState) -> SessionState,
    {
        let state = std::mem::take(&mut self.state);
        self.state = updater(state);
    }

    /// Ids increase monotonically within a session. Bulk-appended server
    /// history advances the counter past the largest server id so later
    /// local ids stay unique.
    pub fn next_message_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        return id;
    }

    pub fn append_message(&mut self, message: ChatMessage) {
        self.update(|mut state| {
            state.messages.push(message);
            return state;
        });
    }

    pub fn append_history(&mut self, history: Vec<ChatMessage>) {
        for message in &history {
            if message.id >= self.next_id {
                self.next_id = message.id + 1;
            }
        }

        self.update(|mut state| {
            state.messages.extend(history);
            return state;
        });
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.update(|mut state| {
            state.openapi_key = key;
            return state;
        });
    }

    pub fn set_initializing(&mut self) {
        self.update(|mut state| {
            state.initializing = true;
            return state;
        });
    }

    pub fn mark_initialized(&mut self) {
        self.update(|mut state| {
            state.initializing = false;
            state.initialization_required = false;
            return state;
        });
    }

    pub fn set_initialization_required(&mut self, required: bool) {
        self.update(|mut state| {
            state.initialization_required = required;
            return state;
        });
    }

    pub fn clear_messages(&mut self) {
        self.update(|mut state| {
            state.messages = vec![];
            return state;
        });
    }
}
