//! Multi-turn supportive chat.

use serde::{Deserialize, Serialize};

use crate::client::GenAiClient;
use crate::error::AiError;

/// Only the tail of the conversation is sent upstream.
const HISTORY_WINDOW: usize = 6;

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    fn tag(&self) -> &'static str {
        match self {
            ChatRole::User => "USER",
            ChatRole::Assistant => "ASSISTANT",
        }
    }
}

pub fn system_prompt(context: &serde_json::Value) -> String {
    format!(
        "You are AyurSutra's Ayurveda assistant. Be concise, practical, and \
         supportive. Avoid medical claims. Use simple Markdown. Keep answers \
         under 200 words. Context: {context}"
    )
}

/// Send the conversation tail and return the assistant's reply. Errors are
/// the caller's cue to serve [`crate::fallback::chat_reply`] instead.
pub async fn chat_reply(
    client: &GenAiClient,
    messages: &[ChatMessage],
    context: &serde_json::Value,
) -> Result<String, AiError> {
    let mut parts = Vec::with_capacity(HISTORY_WINDOW + 1);
    parts.push(system_prompt(context));

    let tail_start = messages.len().saturating_sub(HISTORY_WINDOW);
    for message in &messages[tail_start..] {
        parts.push(format!("{}: {}", message.role.tag(), message.content));
    }

    client.generate(&parts).await
}

/// The last user-authored message, used to pick a topical fallback reply.
pub fn last_user_content(messages: &[ChatMessage]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.as_str())
        .unwrap_or("")
}
