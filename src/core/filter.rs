//! Catalog filter pipeline
//!
//! Filtering runs in two stages over an ordered slice of artworks:
//!
//! 1. **Match stage**: either relevance mode (keep the ids returned by the
//!    semantic search backend) or text mode (case-insensitive substring
//!    match on title, tags and medium). Relevance mode wins when both are
//!    present; the query text is then ignored.
//! 2. **Category stage**: exact, case-sensitive category equality unless the
//!    selector is [`CategoryFilter::All`].
//!
//! Both stages preserve input order and never fail.

use crate::core::artwork::Artwork;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Category selector for the gallery
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn admits(&self, artwork: &Artwork) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => artwork.category == *name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter the catalog for display
///
/// `relevance`, when present, replaces text matching entirely. An empty
/// relevance set therefore yields an empty result whatever the query says.
pub fn filter_artworks<'a>(
    items: &'a [Artwork],
    query: &str,
    category: &CategoryFilter,
    relevance: Option<&[String]>,
) -> Vec<&'a Artwork> {
    let needle = query.to_lowercase();

    items
        .iter()
        .filter(|artwork| match relevance {
            Some(ids) => ids.iter().any(|id| *id == artwork.id),
            None if needle.is_empty() => true,
            None => artwork.matches_text(&needle),
        })
        .filter(|artwork| category.admits(artwork))
        .collect()
}

/// Which match stage is in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// No query: every artwork passes the match stage
    Unfiltered,
    /// Substring matching on the query text
    Text,
    /// Ids resolved by the semantic search backend
    Relevance,
}

/// Gallery filter state owned by a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    /// Ids resolved by the last semantic search, `None` when inactive
    pub relevance: Option<Vec<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text
    ///
    /// An empty query always deactivates relevance mode. A non-empty edit
    /// keeps any resolved relevance set until the next search or reset.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clear_relevance_if_query_empty();
    }

    /// Select a category (or [`CategoryFilter::All`])
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
    }

    /// Enter relevance mode with ids from the semantic search backend
    ///
    /// Ignored when the query is blank, since relevance mode only exists
    /// for a non-empty query.
    pub fn set_relevance(&mut self, ids: Vec<String>) {
        if self.query.trim().is_empty() {
            self.relevance = None;
        } else {
            self.relevance = Some(ids);
        }
    }

    /// Leave relevance mode without touching the query
    pub fn clear_relevance(&mut self) {
        self.relevance = None;
    }

    /// Back to the initial state: no query, no relevance set, all categories
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> MatchMode {
        if self.relevance.is_some() {
            MatchMode::Relevance
        } else if self.query.is_empty() {
            MatchMode::Unfiltered
        } else {
            MatchMode::Text
        }
    }

    /// Run the pipeline with this state
    pub fn apply<'a>(&self, items: &'a [Artwork]) -> Vec<&'a Artwork> {
        filter_artworks(
            items,
            &self.query,
            &self.category,
            self.relevance.as_deref(),
        )
    }

    fn clear_relevance_if_query_empty(&mut self) {
        if self.query.is_empty() {
            self.relevance = None;
        }
    }
}
