use serde_json::{Map, Value};

use crate::agent::agent_model::{AgentReply, CATEGORY_STATE_KEY};
use crate::categories::Category;

/// Find the first known category mentioned anywhere in `message`.
///
/// Categories are tried in [`Category::ALL`] order and matched as
/// case-insensitive substrings, so "a bed and a chair" yields `Chair`.
pub fn detect_category(message: &str) -> Option<Category> {
    let message = message.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|c| message.contains(c.as_str()))
}

/// Answer one chat turn.
///
/// On detection the returned patch is `state` with the category set;
/// otherwise `state` comes back untouched with a prompt listing the choices.
pub fn interpret(message: &str, state: &Map<String, Value>) -> AgentReply {
    let mut patch = state.clone();
    match detect_category(message) {
        Some(category) => {
            patch.insert(
                CATEGORY_STATE_KEY.to_string(),
                Value::String(category.as_str().to_string()),
            );
            AgentReply {
                reply: format!(
                    "Got it, you're selling a **{}**. I'll generate the form now.",
                    category
                ),
                patch,
            }
        }
        None => AgentReply {
            reply: format!(
                "What type of furniture are you selling? ({})",
                Category::display_list()
            ),
            patch,
        },
    }
}
