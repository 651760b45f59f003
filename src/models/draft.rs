//! Admin draft shapes.
//!
//! Drafts are the input side of the admin flow: they carry the author-supplied
//! fields and are materialized into full entities with generated ids and
//! timestamps. Publishing a materialized entity still goes through
//! whole-collection replacement on the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Attachment, Event, Post, PostType, Saying};

/// Author input for a new feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl PostDraft {
    /// Turn the draft into a publishable post, stamped at `now`.
    pub fn materialize(self, now: DateTime<Utc>) -> Post {
        Post {
            id: uuid::Uuid::new_v4().to_string(),
            post_type: self.post_type,
            title: self.title,
            body: self.body,
            image_url: self.image_url,
            video_url: None,
            attachments: self.attachments,
            tags: self.tags,
            category: self.category,
            timestamp: now,
            is_read: false,
        }
    }
}

/// Author input for a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_physical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livestream_url: Option<String>,
}

impl EventDraft {
    pub fn materialize(self) -> Event {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            is_online: self.is_online,
            is_physical: self.is_physical,
            registration_url: self.registration_url,
            livestream_url: self.livestream_url,
            organizer: None,
            image_url: None,
            tags: Vec::new(),
        }
    }
}

/// Author input for a new saying of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SayingDraft {
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub date: DateTime<Utc>,
}

impl SayingDraft {
    pub fn materialize(self) -> Saying {
        Saying {
            id: uuid::Uuid::new_v4().to_string(),
            quote: self.quote,
            source: self.source,
            date: self.date,
            image_url: None,
        }
    }
}
