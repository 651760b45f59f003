//! Embedded static fixture source.
//!
//! Stands in for a real backend until one exists; delivers the same payload
//! shape a remote fetch would.

use serde_json::Value;

use super::ContentSource;
use crate::errors::ContentError;

const FIXTURE: &str = include_str!("fixture.json");

/// Content source backed by the JSON fixture compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for FixtureSource {
    fn describe(&self) -> &str {
        "embedded fixture"
    }

    async fn fetch(&self) -> Result<Value, ContentError> {
        Ok(serde_json::from_str(FIXTURE)?)
    }
}
