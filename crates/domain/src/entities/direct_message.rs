//! Outgoing chat messages

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// A labelled value rendered inside a structured message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageField {
    /// Field label (may be empty)
    pub title: String,
    /// Field content
    pub value: String,
    /// Whether the field may be rendered side by side with its neighbour
    pub short: bool,
}

impl MessageField {
    /// Create a short (half-width) field
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    /// Create a long (full-width) field
    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

/// A message the bot sends privately to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    /// The bot account sending the message
    pub sender: UserId,
    /// Plain message text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Title of the structured attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered attachment fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MessageField>,
}

impl DirectMessage {
    /// Create a plain-text message
    pub fn text(sender: UserId, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            title: None,
            fields: Vec::new(),
        }
    }

    /// Create a structured message with a title and fields
    pub fn structured(sender: UserId, title: impl Into<String>, fields: Vec<MessageField>) -> Self {
        Self {
            sender,
            text: String::new(),
            title: Some(title.into()),
            fields,
        }
    }

    /// Whether the message carries an attachment
    pub const fn is_structured(&self) -> bool {
        self.title.is_some()
    }
}

/// A post created by the message sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Platform identifier of the created post
    pub id: String,
    /// Channel the post was created in
    pub channel_id: String,
}
