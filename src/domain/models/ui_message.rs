use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UIMessageType {
    Bot,
    User,
}

/// The presentation-side message. Always derived from a `ChatMessage`,
/// never authored directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UIMessage {
    pub id: u64,
    pub message: String,
    #[serde(rename = "type")]
    pub mtype: UIMessageType,
    // Progressive-reveal flags consumed by the chat widget. Both set means
    // the message is final rather than a streaming placeholder.
    pub loading: bool,
    #[serde(rename = "terminateLoading")]
    pub terminate_loading: bool,
}
