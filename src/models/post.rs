//! Post model for the home feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Closed set of post kinds shown in the feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostType {
    Daily,
    Bhajan,
    Event,
    Teaching,
    Announcement,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Daily => "Daily",
            PostType::Bhajan => "Bhajan",
            PostType::Event => "Event",
            PostType::Teaching => "Teaching",
            PostType::Announcement => "Announcement",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Daily" => Some(PostType::Daily),
            "Bhajan" => Some(PostType::Bhajan),
            "Event" => Some(PostType::Event),
            "Teaching" => Some(PostType::Teaching),
            "Announcement" => Some(PostType::Announcement),
            _ => None,
        }
    }
}

/// Kind of a post attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Pdf,
    Audio,
    Video,
}

/// A downloadable attachment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
    pub title: String,
}

/// A feed post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    /// Read state resets every load; it is never persisted.
    #[serde(default)]
    pub is_read: bool,
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }
}
