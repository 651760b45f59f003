//! Catalog model: the full content bundle a source provides.

use serde::{Deserialize, Serialize};

use super::{Ashram, Book, Event, Institution, Photo, Post, Saying};

/// Everything a content source delivers in one load: the six entity
/// collections plus the saying-of-the-day singleton.
///
/// A future remote backend satisfies the same shape as the static fixture,
/// which is the one seam worth preserving.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub ashrams: Vec<Ashram>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub institutions: Vec<Institution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saying_of_the_day: Option<Saying>,
}
