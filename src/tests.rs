//! Integration tests for the content store.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::errors::ContentError;
use crate::models::{Book, Event, Post, PostDraft, PostType, Saying};
use crate::query::{
    books_in_category, events_in_window, recent_posts, search_ashrams, CategoryFilter,
    EventWindow, FeedSort,
};
use crate::source::{ContentSource, FixtureSource};
use crate::store::{Collection, CollectionUpdate, ContentStore, LoadingFlag};

/// Source serving a caller-supplied payload.
struct PayloadSource(Value);

impl ContentSource for PayloadSource {
    fn describe(&self) -> &str {
        "test payload"
    }

    async fn fetch(&self) -> Result<Value, ContentError> {
        Ok(self.0.clone())
    }
}

/// Source that always fails, standing in for an unreachable backend.
struct FailingSource;

impl ContentSource for FailingSource {
    fn describe(&self) -> &str {
        "failing source"
    }

    async fn fetch(&self) -> Result<Value, ContentError> {
        Err(ContentError::SourceUnavailable(
            "connection refused".to_string(),
        ))
    }
}

fn book_json(id: &str, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Test Author",
        "language": "English",
        "category": category,
        "description": "",
        "coverImageUrl": ""
    })
}

fn test_book(id: &str, category: &str) -> Book {
    serde_json::from_value(book_json(id, "Test Book", category)).unwrap()
}

fn test_event(id: &str, start: &str) -> Event {
    serde_json::from_value(json!({
        "id": id,
        "title": "Test Event",
        "description": "",
        "location": "Kankhal",
        "startDate": start,
        "endDate": start,
        "isPhysical": true
    }))
    .unwrap()
}

fn test_post(id: &str, timestamp: &str) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "type": "Daily",
        "title": "Test Post",
        "body": "",
        "category": "Daily",
        "timestamp": timestamp
    }))
    .unwrap()
}

#[tokio::test]
async fn test_fixture_loads_all_collections() {
    let mut store = ContentStore::new();
    let report = store.initialize(&FixtureSource::new()).await.unwrap();

    for collection in Collection::ALL {
        assert!(
            !store.is_empty(collection),
            "collection {} is empty",
            collection.as_str()
        );
    }
    assert!(store.current_saying().is_some());
    assert_eq!(report.total_dropped(), 0);
    assert_eq!(report.total_duplicates(), 0);
    assert!(report.saying_present);
    assert!(!store.is_stale());
}

#[tokio::test]
async fn test_replace_preserves_items_and_order() {
    let mut store = ContentStore::new();
    let books = vec![
        test_book("b3", "Teachings"),
        test_book("b1", "Biography"),
        test_book("b2", "Teachings"),
    ];

    store.replace(CollectionUpdate::Books(books.clone()));

    assert_eq!(store.books(), books.as_slice());
    assert_eq!(store.len(Collection::Books), 3);
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let first = json!({
        "books": [book_json("b1", "One", "Teachings"), book_json("b2", "Two", "Biography")]
    });
    let second = json!({
        "books": [book_json("b9", "Nine", "Teachings")]
    });

    let mut store = ContentStore::new();
    store.initialize(&PayloadSource(first)).await.unwrap();
    assert_eq!(store.len(Collection::Books), 2);

    // Second call fully replaces prior contents, no merge
    store.initialize(&PayloadSource(second)).await.unwrap();
    assert_eq!(store.len(Collection::Books), 1);
    assert_eq!(store.books()[0].id, "b9");
    // Sections absent from the new payload are emptied too
    assert!(store.is_empty(Collection::Ashrams));
}

#[tokio::test]
async fn test_ashram_search_is_case_insensitive() {
    let mut store = ContentStore::new();
    store.initialize(&FixtureSource::new()).await.unwrap();

    let upper = search_ashrams(store.ashrams(), "KANKHAL");
    let lower = search_ashrams(store.ashrams(), "kankhal");

    assert!(!upper.is_empty());
    let upper_ids: Vec<&str> = upper.iter().map(|a| a.id.as_str()).collect();
    let lower_ids: Vec<&str> = lower.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(upper_ids, lower_ids);
}

#[tokio::test]
async fn test_ashram_search_blank_query_returns_everything() {
    let mut store = ContentStore::new();
    store.initialize(&FixtureSource::new()).await.unwrap();

    for query in ["", "   ", "\t\n"] {
        let results = search_ashrams(store.ashrams(), query);
        assert_eq!(results.len(), store.ashrams().len());
        // Borrowed straight from the collection, same order
        assert!(std::ptr::eq(results[0], &store.ashrams()[0]));
    }
}

#[test]
fn test_event_window_upcoming_and_past() {
    let now: DateTime<Utc> = "2025-06-01T00:00:00Z".parse().unwrap();
    let events = vec![
        test_event("spring", "2025-04-30T00:00:00Z"),
        test_event("summer", "2025-08-27T00:00:00Z"),
    ];

    let upcoming = events_in_window(&events, EventWindow::Upcoming, now);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, "summer");

    let past = events_in_window(&events, EventWindow::Past, now);
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].id, "spring");

    let all = events_in_window(&events, EventWindow::All, now);
    assert_eq!(all.len(), 2);
}

#[test]
fn test_event_window_boundary_is_inclusive_for_upcoming() {
    let now: DateTime<Utc> = "2025-06-01T00:00:00Z".parse().unwrap();
    let events = vec![test_event("exact", "2025-06-01T00:00:00Z")];

    assert_eq!(events_in_window(&events, EventWindow::Upcoming, now).len(), 1);
    assert!(events_in_window(&events, EventWindow::Past, now).is_empty());
}

#[test]
fn test_book_category_filter() {
    let books = vec![
        test_book("b1", "Teachings"),
        test_book("b2", "Biography"),
        test_book("b3", "Philosophy"),
        test_book("b4", "Biography"),
        test_book("b5", "Teachings"),
        test_book("b6", "Daily Reflections"),
    ];

    let biography = books_in_category(&books, &CategoryFilter::from_label("Biography"));
    let ids: Vec<&str> = biography.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "b4"]);

    let all = books_in_category(&books, &CategoryFilter::from_label("All"));
    assert_eq!(all.len(), 6);
}

#[test]
fn test_feed_truncation_source_order() {
    let posts: Vec<Post> = (0..10)
        .map(|i| test_post(&format!("p{}", i), "2025-03-01T00:00:00Z"))
        .collect();

    let feed = recent_posts(&posts, 7, FeedSort::SourceOrder);
    assert_eq!(feed.len(), 7);
    for (i, post) in feed.iter().enumerate() {
        assert_eq!(post.id, format!("p{}", i));
    }

    let short: Vec<Post> = posts.iter().take(3).cloned().collect();
    assert_eq!(recent_posts(&short, 7, FeedSort::SourceOrder).len(), 3);
}

#[tokio::test]
async fn test_malformed_records_are_dropped_with_count() {
    // Second book is missing required fields; third is fine
    let payload = json!({
        "books": [
            book_json("b1", "Good", "Teachings"),
            { "id": "b2", "title": "No author" },
            book_json("b3", "Also good", "Biography")
        ]
    });

    let mut store = ContentStore::new();
    let report = store.initialize(&PayloadSource(payload)).await.unwrap();

    assert_eq!(report.books.loaded, 2);
    assert_eq!(report.books.dropped, 1);
    let ids: Vec<&str> = store.books().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
}

#[tokio::test]
async fn test_duplicate_ids_are_dropped_with_count() {
    let payload = json!({
        "books": [
            book_json("b1", "First", "Teachings"),
            book_json("b1", "Impostor", "Teachings"),
            book_json("b2", "Second", "Teachings")
        ]
    });

    let mut store = ContentStore::new();
    let report = store.initialize(&PayloadSource(payload)).await.unwrap();

    assert_eq!(report.books.loaded, 2);
    assert_eq!(report.books.duplicates, 1);
    // The first occurrence wins
    assert_eq!(store.books()[0].title, "First");
}

#[tokio::test]
async fn test_non_array_section_fails_the_load() {
    let payload = json!({ "books": "not-an-array" });

    let mut store = ContentStore::new();
    let err = store
        .initialize(&PayloadSource(payload))
        .await
        .unwrap_err();

    assert!(matches!(err, ContentError::MalformedPayload(_)));
    assert_eq!(err.error_code(), "MALFORMED_PAYLOAD");
}

#[tokio::test]
async fn test_failed_refresh_keeps_last_known_good() {
    let mut store = ContentStore::new();
    store.initialize(&FixtureSource::new()).await.unwrap();
    let books_before = store.books().to_vec();

    let err = store.refresh(&FailingSource).await.unwrap_err();
    assert!(matches!(err, ContentError::SourceUnavailable(_)));

    // Prior contents retained, stale indicator set
    assert_eq!(store.books(), books_before.as_slice());
    assert!(store.is_stale());

    // A successful load clears staleness
    store.refresh(&FixtureSource::new()).await.unwrap();
    assert!(!store.is_stale());
}

#[tokio::test]
async fn test_loading_flags_are_independent() {
    let mut store = ContentStore::new();

    assert!(!store.is_loading(LoadingFlag::Books));
    assert!(!store.is_loading(LoadingFlag::Posts));

    store.set_loading(LoadingFlag::Books, true);
    assert!(store.is_loading(LoadingFlag::Books));
    assert!(!store.is_loading(LoadingFlag::Posts));

    store.set_loading(LoadingFlag::Posts, true);
    store.set_loading(LoadingFlag::Books, false);
    assert!(!store.is_loading(LoadingFlag::Books));
    assert!(store.is_loading(LoadingFlag::Posts));
}

#[tokio::test]
async fn test_saying_singleton_set_and_clear() {
    let mut store = ContentStore::new();
    assert!(store.current_saying().is_none());

    let saying: Saying = serde_json::from_value(json!({
        "id": "s1",
        "quote": "Patience opens the path.",
        "date": "2025-03-08T00:00:00Z"
    }))
    .unwrap();

    store.set_current_saying(Some(saying.clone()));
    assert_eq!(store.current_saying(), Some(&saying));

    store.set_current_saying(None);
    assert!(store.current_saying().is_none());
}

#[test]
fn test_post_draft_materializes_with_fresh_identity() {
    let now = Utc::now();
    let draft = PostDraft {
        title: "New Announcement".to_string(),
        body: "Bhandara on Sunday.".to_string(),
        post_type: PostType::Announcement,
        category: "Announcement".to_string(),
        image_url: None,
        tags: vec!["bhandara".to_string()],
        attachments: Vec::new(),
    };

    let post = draft.clone().materialize(now);
    assert!(!post.id.is_empty());
    assert_eq!(post.timestamp, now);
    assert!(!post.is_read);
    assert_eq!(post.post_type, PostType::Announcement);

    let other = draft.materialize(now);
    assert_ne!(post.id, other.id);
}

#[test]
fn test_post_type_wire_name() {
    let post = test_post("p1", "2025-03-01T00:00:00Z");
    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["type"], "Daily");
    assert_eq!(value["isRead"], false);
}
