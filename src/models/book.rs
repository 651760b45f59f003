//! Book model for the library.

use serde::{Deserialize, Serialize};

use super::Record;

/// A book in the library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub language: String,
    /// Free-form category, e.g. "Biography", "Teachings"
    pub category: String,
    pub description: String,
    pub cover_image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    /// Download state is never toggled by the working code path.
    #[serde(default)]
    pub is_downloaded: bool,
}

impl Record for Book {
    fn id(&self) -> &str {
        &self.id
    }
}
