//! Data models for the Sri Maa content store.
//!
//! These models match the app's content schema; all records are flat serde
//! structs with camelCase wire names.

mod ashram;
mod book;
mod catalog;
mod draft;
mod event;
mod institution;
mod photo;
mod post;
mod saying;

pub use ashram::*;
pub use book::*;
pub use catalog::*;
pub use draft::*;
pub use event::*;
pub use institution::*;
pub use photo::*;
pub use post::*;
pub use saying::*;

/// Implemented by every collection entity; ids are unique within a collection.
pub trait Record {
    fn id(&self) -> &str;
}
