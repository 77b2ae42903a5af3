//! Artwork and review records for the catalog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtworkStatus {
    Available,
    Sold,
    Reserved,
}

impl ArtworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "AVAILABLE",
            ArtworkStatus::Sold => "SOLD",
            ArtworkStatus::Reserved => "RESERVED",
        }
    }
}

/// A single piece listed for sale
///
/// Artworks are immutable once seeded. Identifiers are opaque strings and
/// unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub medium: String,
    pub dimensions: String,
    pub tags: Vec<String>,
    pub status: ArtworkStatus,
}

impl Artwork {
    /// Whether the piece can currently be purchased
    pub fn is_available(&self) -> bool {
        self.status == ArtworkStatus::Available
    }

    /// Case-insensitive substring match against title, tags and medium
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
            || self.medium.to_lowercase().contains(needle)
    }
}

/// Compact view of an artwork sent to the semantic search backend
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub tags: &'a [String],
    pub category: &'a str,
}

impl<'a> From<&'a Artwork> for ArtworkSummary<'a> {
    fn from(artwork: &'a Artwork) -> Self {
        Self {
            id: &artwork.id,
            title: &artwork.title,
            tags: &artwork.tags,
            category: &artwork.category,
        }
    }
}

/// A buyer's review of an artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub artwork_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork() -> Artwork {
        Artwork {
            id: "1".to_string(),
            title: "Neon Horizon".to_string(),
            artist_id: "a1".to_string(),
            artist_name: "Elena Vance".to_string(),
            description: String::new(),
            price: 450.0,
            image_url: String::new(),
            category: "Digital Art".to_string(),
            medium: "Digital".to_string(),
            dimensions: "4000x3000px".to_string(),
            tags: vec!["Neon".to_string(), "City".to_string()],
            status: ArtworkStatus::Available,
        }
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&ArtworkStatus::Reserved).unwrap();
        assert_eq!(json, "\"RESERVED\"");

        let parsed: ArtworkStatus = serde_json::from_str("\"SOLD\"").unwrap();
        assert_eq!(parsed, ArtworkStatus::Sold);
        assert_eq!(parsed.as_str(), "SOLD");
    }

    #[test]
    fn test_matches_text_on_each_field() {
        let art = artwork();
        assert!(art.matches_text("horizon"));
        assert!(art.matches_text("city"));
        assert!(art.matches_text("digi"));
        assert!(!art.matches_text("mountain"));
    }

    #[test]
    fn test_is_available() {
        let mut art = artwork();
        assert!(art.is_available());
        art.status = ArtworkStatus::Sold;
        assert!(!art.is_available());
    }
}
