//! Content source module.
//!
//! A [`ContentSource`] produces the raw content payload; the decode layer in
//! this module turns it into a typed [`Catalog`] plus a [`LoadReport`]. The
//! embedded fixture is one source; a real backend would be another
//! implementation of the same trait.

mod fixture;

pub use fixture::FixtureSource;

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ContentError;
use crate::models::{Catalog, Record, Saying};

/// Provider of the full content payload (six collections + the saying).
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Human-readable source name for logs.
    fn describe(&self) -> &str;

    /// Produce the raw payload. Fails with `SourceUnavailable` when no
    /// payload can be produced at all.
    async fn fetch(&self) -> Result<Value, ContentError>;
}

/// Decode counters for one payload section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionStats {
    pub loaded: usize,
    /// Records that failed to deserialize against the entity schema.
    pub dropped: usize,
    /// Records sharing an id with an earlier record in the same section.
    pub duplicates: usize,
}

/// Per-section outcome of decoding one payload.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub ashrams: SectionStats,
    pub books: SectionStats,
    pub photos: SectionStats,
    pub events: SectionStats,
    pub posts: SectionStats,
    pub institutions: SectionStats,
    pub saying_present: bool,
}

impl LoadReport {
    fn sections(&self) -> [(&'static str, SectionStats); 6] {
        [
            ("ashrams", self.ashrams),
            ("books", self.books),
            ("photos", self.photos),
            ("events", self.events),
            ("posts", self.posts),
            ("institutions", self.institutions),
        ]
    }

    pub fn total_loaded(&self) -> usize {
        self.sections().iter().map(|(_, s)| s.loaded).sum()
    }

    pub fn total_dropped(&self) -> usize {
        self.sections().iter().map(|(_, s)| s.dropped).sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.sections().iter().map(|(_, s)| s.duplicates).sum()
    }
}

/// Decode a raw payload into a typed catalog.
///
/// Records that fail to deserialize are dropped and counted, never fatal to
/// the load. A section that is present but not an array fails the whole load.
pub fn decode_catalog(payload: &Value) -> Result<(Catalog, LoadReport), ContentError> {
    let mut report = LoadReport::default();

    let (ashrams, stats) = decode_section(payload, "ashrams")?;
    report.ashrams = stats;
    let (books, stats) = decode_section(payload, "books")?;
    report.books = stats;
    let (photos, stats) = decode_section(payload, "photos")?;
    report.photos = stats;
    let (events, stats) = decode_section(payload, "events")?;
    report.events = stats;
    let (posts, stats) = decode_section(payload, "posts")?;
    report.posts = stats;
    let (institutions, stats) = decode_section(payload, "institutions")?;
    report.institutions = stats;

    let saying_of_the_day = decode_saying(payload);
    report.saying_present = saying_of_the_day.is_some();

    Ok((
        Catalog {
            ashrams,
            books,
            photos,
            events,
            posts,
            institutions,
            saying_of_the_day,
        },
        report,
    ))
}

fn decode_section<T>(payload: &Value, name: &'static str) -> Result<(Vec<T>, SectionStats), ContentError>
where
    T: DeserializeOwned + Record,
{
    let Some(section) = payload.get(name) else {
        tracing::warn!(section = name, "Section missing from payload; treating as empty");
        return Ok((Vec::new(), SectionStats::default()));
    };

    let Some(items) = section.as_array() else {
        return Err(ContentError::MalformedPayload(format!(
            "Section '{}' is not an array",
            name
        )));
    };

    let mut records = Vec::with_capacity(items.len());
    let mut stats = SectionStats::default();
    let mut seen_ids = HashSet::new();

    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => {
                if !seen_ids.insert(record.id().to_string()) {
                    stats.duplicates += 1;
                    tracing::warn!(
                        section = name,
                        id = record.id(),
                        "Dropping record with duplicate id"
                    );
                    continue;
                }
                records.push(record);
                stats.loaded += 1;
            }
            Err(err) => {
                stats.dropped += 1;
                tracing::warn!(section = name, error = %err, "Dropping malformed record");
            }
        }
    }

    Ok((records, stats))
}

fn decode_saying(payload: &Value) -> Option<Saying> {
    let value = payload.get("sayingOfTheDay")?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(saying) => Some(saying),
        Err(err) => {
            tracing::warn!(error = %err, "Dropping malformed saying of the day");
            None
        }
    }
}
