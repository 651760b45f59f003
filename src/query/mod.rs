//! Read-time filter predicates consumed by the UI.
//!
//! Filters are computed on every read and never cached; they borrow from the
//! store and preserve source order unless a sort is explicitly requested.

use chrono::{DateTime, Utc};

use crate::models::{Ashram, Book, Event, Photo, Post};

/// Case-insensitive substring search over ashram name, city, state, and
/// country; a record matches if any field contains the query.
///
/// An empty or whitespace-only query returns the unfiltered collection.
pub fn search_ashrams<'a>(ashrams: &'a [Ashram], query: &str) -> Vec<&'a Ashram> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return ashrams.iter().collect();
    }

    ashrams
        .iter()
        .filter(|ashram| {
            ashram.name.to_lowercase().contains(&query)
                || ashram.location.city.to_lowercase().contains(&query)
                || ashram.location.state.to_lowercase().contains(&query)
                || ashram.location.country.to_lowercase().contains(&query)
        })
        .collect()
}

/// Category selection with the "All" sentinel meaning no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a UI label; the literal "All" maps to no filter.
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => category == selected,
        }
    }
}

/// Filter books by exact category equality, order preserved.
pub fn books_in_category<'a>(books: &'a [Book], filter: &CategoryFilter) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|book| filter.matches(&book.category))
        .collect()
}

/// Filter photos by exact category equality, order preserved.
pub fn photos_in_category<'a>(photos: &'a [Photo], filter: &CategoryFilter) -> Vec<&'a Photo> {
    photos
        .iter()
        .filter(|photo| filter.matches(&photo.category))
        .collect()
}

/// Temporal window for the events screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventWindow {
    Upcoming,
    Past,
    All,
}

impl EventWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventWindow::Upcoming => "upcoming",
            EventWindow::Past => "past",
            EventWindow::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(EventWindow::Upcoming),
            "past" => Some(EventWindow::Past),
            "all" => Some(EventWindow::All),
            _ => None,
        }
    }
}

/// Filter events against `now` by their start date. The upcoming boundary is
/// inclusive: an event starting exactly at `now` is upcoming.
pub fn events_in_window<'a>(
    events: &'a [Event],
    window: EventWindow,
    now: DateTime<Utc>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| match window {
            EventWindow::All => true,
            EventWindow::Upcoming => event.start_date >= now,
            EventWindow::Past => event.start_date < now,
        })
        .collect()
}

/// Sort applied before feed truncation.
///
/// `SourceOrder` is the historical behavior: whatever order the source
/// returned, which is not a recency ranking. `NewestFirst` sorts by timestamp
/// descending. The choice is a configuration knob, not hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSort {
    SourceOrder,
    NewestFirst,
}

impl FeedSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedSort::SourceOrder => "source-order",
            FeedSort::NewestFirst => "newest-first",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "source-order" => Some(FeedSort::SourceOrder),
            "newest-first" => Some(FeedSort::NewestFirst),
            _ => None,
        }
    }
}

/// The first `limit` posts for the home feed, under the requested sort.
pub fn recent_posts(posts: &[Post], limit: usize, sort: FeedSort) -> Vec<&Post> {
    let mut selected: Vec<&Post> = posts.iter().collect();
    if sort == FeedSort::NewestFirst {
        // Stable sort keeps source order among equal timestamps.
        selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
    selected.truncate(limit);
    selected
}
