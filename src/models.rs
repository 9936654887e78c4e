use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a message, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Heading used for the message in an exported transcript.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Justice AI",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    #[serde(default)]
    pub is_error: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            is_error: false,
            created_at: Utc::now(),
        }
    }

    pub fn error(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(id, Sender::Bot, text)
        }
    }
}

/// A canned question offered before the first exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_PROMPTS: &[QuickPrompt] = &[
    QuickPrompt {
        title: "File an FIR",
        subtitle: "Steps to register a police complaint",
        prompt: "What is the procedure to file an FIR in India?",
    },
    QuickPrompt {
        title: "Cyber Fraud",
        subtitle: "Reporting online scams & hacks",
        prompt: "I was scammed online. How do I report cyber fraud in India?",
    },
    QuickPrompt {
        title: "Tenant Rights",
        subtitle: "Eviction rules & rent disputes",
        prompt: "What are my rights as a tenant if my landlord tries to evict me?",
    },
    QuickPrompt {
        title: "RTI Application",
        subtitle: "How to request government info",
        prompt: "How do I file a Right to Information (RTI) application?",
    },
];

/// Request body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::Bot.label(), "Justice AI");
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::User.to_string(), "user");
    }

    #[test]
    fn test_error_message_is_bot() {
        let msg = Message::error(MessageId(4), "failed");
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.is_error);
        assert!(!Message::new(MessageId(5), Sender::Bot, "ok").is_error);
    }

    #[test]
    fn test_message_serializes_lowercase_sender() {
        let msg = Message::new(MessageId(1), Sender::User, "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        assert_eq!(json["id"], 1);
        assert_eq!(json["is_error"], false);
    }

    #[test]
    fn test_chat_request_shape() {
        let body = serde_json::to_string(&ChatRequest { message: "hi".into() }).unwrap();
        assert_eq!(body, r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_quick_prompts_are_distinct() {
        assert_eq!(QUICK_PROMPTS.len(), 4);
        for (i, a) in QUICK_PROMPTS.iter().enumerate() {
            assert!(!a.prompt.trim().is_empty());
            for b in &QUICK_PROMPTS[i + 1..] {
                assert_ne!(a.prompt, b.prompt);
            }
        }
    }
}
