//! Photo model for the gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A photo in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
    /// Free-form category, e.g. "Spiritual", "Events", "Ashrams"
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// e.g. "Vrindavan", "Kashi", "Darshan", "Samadhi"
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Photo {
    fn id(&self) -> &str {
        &self.id
    }
}
