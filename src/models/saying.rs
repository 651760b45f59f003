//! Saying-of-the-day model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The daily quote shown at the top of the home feed.
///
/// This is a singleton pointer, not a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Saying {
    pub id: String,
    pub quote: String,
    /// Book or talk the quote is taken from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
