//! Content store module.
//!
//! The store is the single process-wide holder of the six entity collections,
//! the saying-of-the-day singleton, and two independent loading flags. It is
//! owned by the composition root and shared read-only with every screen;
//! mutation is a whole-value swap, so no locking is involved.

use crate::errors::ContentError;
use crate::models::{Ashram, Book, Catalog, Event, Institution, Photo, Post, Saying};
use crate::source::{decode_catalog, ContentSource, LoadReport};

/// Closed set of collection kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Ashrams,
    Books,
    Photos,
    Events,
    Posts,
    Institutions,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Ashrams,
        Collection::Books,
        Collection::Photos,
        Collection::Events,
        Collection::Posts,
        Collection::Institutions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Ashrams => "ashrams",
            Collection::Books => "books",
            Collection::Photos => "photos",
            Collection::Events => "events",
            Collection::Posts => "posts",
            Collection::Institutions => "institutions",
        }
    }
}

/// A whole-collection replacement, bound at compile time to its entity type.
///
/// There is no partial-update or upsert operation; this is the only way a
/// collection changes outside of a full load.
#[derive(Debug, Clone)]
pub enum CollectionUpdate {
    Ashrams(Vec<Ashram>),
    Books(Vec<Book>),
    Photos(Vec<Photo>),
    Events(Vec<Event>),
    Posts(Vec<Post>),
    Institutions(Vec<Institution>),
}

impl CollectionUpdate {
    pub fn kind(&self) -> Collection {
        match self {
            CollectionUpdate::Ashrams(_) => Collection::Ashrams,
            CollectionUpdate::Books(_) => Collection::Books,
            CollectionUpdate::Photos(_) => Collection::Photos,
            CollectionUpdate::Events(_) => Collection::Events,
            CollectionUpdate::Posts(_) => Collection::Posts,
            CollectionUpdate::Institutions(_) => Collection::Institutions,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionUpdate::Ashrams(items) => items.len(),
            CollectionUpdate::Books(items) => items.len(),
            CollectionUpdate::Photos(items) => items.len(),
            CollectionUpdate::Events(items) => items.len(),
            CollectionUpdate::Posts(items) => items.len(),
            CollectionUpdate::Institutions(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The two independent loading indicators the UI reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingFlag {
    Books,
    Posts,
}

/// In-memory holder of all app content.
#[derive(Debug, Default)]
pub struct ContentStore {
    ashrams: Vec<Ashram>,
    books: Vec<Book>,
    photos: Vec<Photo>,
    events: Vec<Event>,
    posts: Vec<Post>,
    institutions: Vec<Institution>,
    current_saying: Option<Saying>,
    loading_books: bool,
    loading_posts: bool,
    stale: bool,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate every collection and the saying from the source.
    ///
    /// Idempotent: a second call fully replaces prior contents, no merge
    /// semantics. Returns the decode report.
    pub async fn initialize(
        &mut self,
        source: &impl ContentSource,
    ) -> Result<LoadReport, ContentError> {
        self.load_from(source).await
    }

    /// Reload from the source, keeping the last known good contents when the
    /// load fails. A failed refresh marks the store stale; the next
    /// successful load clears the flag.
    pub async fn refresh(
        &mut self,
        source: &impl ContentSource,
    ) -> Result<LoadReport, ContentError> {
        match self.load_from(source).await {
            Ok(report) => Ok(report),
            Err(err) => {
                self.stale = true;
                tracing::warn!(
                    source = source.describe(),
                    error = %err,
                    "Refresh failed; serving last known good content"
                );
                Err(err)
            }
        }
    }

    async fn load_from(&mut self, source: &impl ContentSource) -> Result<LoadReport, ContentError> {
        tracing::info!(source = source.describe(), "Loading content");
        let payload = source.fetch().await?;
        let (catalog, report) = decode_catalog(&payload)?;

        self.apply(catalog);
        self.stale = false;

        tracing::info!(
            loaded = report.total_loaded(),
            dropped = report.total_dropped(),
            duplicates = report.total_duplicates(),
            saying = report.saying_present,
            "Content loaded"
        );
        Ok(report)
    }

    fn apply(&mut self, catalog: Catalog) {
        self.ashrams = catalog.ashrams;
        self.books = catalog.books;
        self.photos = catalog.photos;
        self.events = catalog.events;
        self.posts = catalog.posts;
        self.institutions = catalog.institutions;
        self.current_saying = catalog.saying_of_the_day;
    }

    /// Atomically swap one collection for a new ordered sequence.
    pub fn replace(&mut self, update: CollectionUpdate) {
        tracing::debug!(
            collection = update.kind().as_str(),
            items = update.len(),
            "Replacing collection"
        );
        match update {
            CollectionUpdate::Ashrams(items) => self.ashrams = items,
            CollectionUpdate::Books(items) => self.books = items,
            CollectionUpdate::Photos(items) => self.photos = items,
            CollectionUpdate::Events(items) => self.events = items,
            CollectionUpdate::Posts(items) => self.posts = items,
            CollectionUpdate::Institutions(items) => self.institutions = items,
        }
    }

    pub fn ashrams(&self) -> &[Ashram] {
        &self.ashrams
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn current_saying(&self) -> Option<&Saying> {
        self.current_saying.as_ref()
    }

    pub fn set_current_saying(&mut self, saying: Option<Saying>) {
        self.current_saying = saying;
    }

    /// Set one of the two independent loading booleans. No overall loading
    /// state is derived from them.
    pub fn set_loading(&mut self, flag: LoadingFlag, value: bool) {
        match flag {
            LoadingFlag::Books => self.loading_books = value,
            LoadingFlag::Posts => self.loading_posts = value,
        }
    }

    pub fn is_loading(&self, flag: LoadingFlag) -> bool {
        match flag {
            LoadingFlag::Books => self.loading_books,
            LoadingFlag::Posts => self.loading_posts,
        }
    }

    /// True after a failed refresh, until a load succeeds again. The UI shows
    /// this as a stale-data indicator.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Ashrams => self.ashrams.len(),
            Collection::Books => self.books.len(),
            Collection::Photos => self.photos.len(),
            Collection::Events => self.events.len(),
            Collection::Posts => self.posts.len(),
            Collection::Institutions => self.institutions.len(),
        }
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    /// Per-collection sizes, for startup logging.
    pub fn counts(&self) -> [(Collection, usize); 6] {
        Collection::ALL.map(|c| (c, self.len(c)))
    }
}
