use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the detected category is kept in the conversation state.
pub const CATEGORY_STATE_KEY: &str = "category";

/// What the agent says back, plus the conversation state to carry forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub reply: String,
    #[serde(default)]
    pub patch: Map<String, Value>,
}
