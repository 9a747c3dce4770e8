#[cfg(test)]
#[path = "genai_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendError;
use crate::domain::models::BackendState;
use crate::domain::models::ChatBackend;
use crate::domain::models::ChatMessage;

fn convert_err(err: reqwest::Error) -> BackendError {
    if let Some(status) = err.status() {
        if status.is_client_error() {
            return BackendError::Client(status.as_u16());
        }
    }

    return BackendError::Service(err.to_string());
}

fn classify_status(res: &reqwest::Response) -> Result<(), BackendError> {
    let status = res.status();
    if status.is_client_error() {
        return Err(BackendError::Client(status.as_u16()));
    }
    if !status.is_success() {
        return Err(BackendError::Service(format!(
            "backend returned status {}",
            status.as_u16()
        )));
    }

    return Ok(());
}

/// The service has shipped several response shapes for the same endpoint.
/// Probe the known field names in order, then fall back to a bare string
/// body; anything else is a parse failure rather than a guess.
fn parse_answer(payload: &Value) -> Result<String, BackendError> {
    for field in ["response", "answer", "reply", "message"] {
        if let Some(text) = payload.get(field).and_then(|value| return value.as_str()) {
            return Ok(text.to_string());
        }
    }

    if let Some(text) = payload.as_str() {
        return Ok(text.to_string());
    }

    return Err(BackendError::Parse);
}

fn parse_state(payload: &Value) -> Result<BackendState, BackendError> {
    let init_required = match payload.get("init_required") {
        Some(value) => value.as_bool().ok_or(BackendError::Parse)?,
        // Older service revisions report the inverse, sometimes as a string.
        None => match payload.get("initialized") {
            Some(Value::Bool(initialized)) => !*initialized,
            Some(Value::String(initialized)) => initialized.as_str() != "true",
            _ => return Err(BackendError::Parse),
        },
    };

    let chat_history = match payload.get("chat_history") {
        Some(value) if !value.is_null() => {
            serde_json::from_value::<Vec<ChatMessage>>(value.clone())
                .map_err(|_| return BackendError::Parse)?
        }
        _ => vec![],
    };

    return Ok(BackendState {
        init_required,
        chat_history,
    });
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InitRequest {
    openai_api_key: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AskRequest {
    message: String,
}

pub struct GenAi {
    url: String,
    token: String,
}

impl Default for GenAi {
    fn default() -> GenAi {
        return GenAi {
            url: Config::get(ConfigKey::ChatbotUrl),
            token: Config::get(ConfigKey::AccessToken),
        };
    }
}

impl GenAi {
    pub fn new(url: &str, token: &str) -> GenAi {
        return GenAi {
            url: url.to_string(),
            token: token.to_string(),
        };
    }

    fn bearer(&self) -> String {
        return format!("Bearer {}", self.token);
    }
}

#[async_trait]
impl ChatBackend for GenAi {
    async fn initialize(&self, key: &str) -> Result<(), BackendError> {
        let req = InitRequest {
            openai_api_key: key.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/genai/init", url = self.url))
            .header("Authorization", self.bearer())
            .json(&req)
            .send()
            .await
            .map_err(convert_err)?;

        classify_status(&res)?;
        return Ok(());
    }

    async fn ask(&self, message: &str) -> Result<String, BackendError> {
        let req = AskRequest {
            message: message.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/genai/ask", url = self.url))
            .header("Authorization", self.bearer())
            .json(&req)
            .send()
            .await
            .map_err(convert_err)?;

        classify_status(&res)?;

        let payload = res
            .json::<Value>()
            .await
            .map_err(|_| return BackendError::Parse)?;
        tracing::debug!(body = ?payload, "ask response");

        return parse_answer(&payload);
    }

    async fn reset(&self) -> Result<(), BackendError> {
        let res = reqwest::Client::new()
            .post(format!("{url}/genai/reset", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(convert_err)?;

        classify_status(&res)?;
        return Ok(());
    }

    async fn fetch_state(&self) -> Result<BackendState, BackendError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/genai/state", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(convert_err)?;

        classify_status(&res)?;

        let payload = res
            .json::<Value>()
            .await
            .map_err(|_| return BackendError::Parse)?;
        tracing::debug!(body = ?payload, "state response");

        return parse_state(&payload);
    }

    async fn fetch_history(&self) -> Result<Vec<ChatMessage>, BackendError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/genai/history", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(convert_err)?;

        classify_status(&res)?;

        let payload = res
            .json::<Value>()
            .await
            .map_err(|_| return BackendError::Parse)?;

        let history = payload.get("chat_history").ok_or(BackendError::Parse)?;
        return serde_json::from_value::<Vec<ChatMessage>>(history.clone())
            .map_err(|_| return BackendError::Parse);
    }
}
