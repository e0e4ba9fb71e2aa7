//! Agent module - chat message interpretation for the intake flow.

mod agent_model;
mod agent_service;

pub use agent_model::{AgentReply, CATEGORY_STATE_KEY};
pub use agent_service::{detect_category, interpret};
