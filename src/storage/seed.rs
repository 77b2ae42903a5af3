//! Built-in catalog data the storefront starts with

use crate::core::artwork::{Artwork, ArtworkStatus, Review};
use crate::core::commission::{Commission, CommissionStatus};
use crate::core::user::{User, UserRole};
use chrono::NaiveDate;

/// Category labels offered by the gallery filter, in display order
pub const CATEGORIES: [&str; 6] = [
    "Oil Painting",
    "Digital Art",
    "Sculpture",
    "Photography",
    "Watercolor",
    "Sketch",
];

/// Medium labels offered by the portfolio form
pub const MEDIUMS: [&str; 6] = ["Canvas", "Digital", "Bronze", "Paper", "Wood", "Metal"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub fn artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            id: "1".to_string(),
            title: "Neon Horizon".to_string(),
            artist_id: "a1".to_string(),
            artist_name: "Elena Vance".to_string(),
            description: "A vibrant exploration of urban decay meets cyberpunk aesthetics. \
                The piece uses high-contrast light to emphasize the isolation of modern city life."
                .to_string(),
            price: 450.0,
            image_url: "https://images.unsplash.com/photo-1549490349-8643362247b5?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Digital Art".to_string(),
            medium: "Digital".to_string(),
            dimensions: "4000x3000px".to_string(),
            tags: tags(&["Neon", "City", "Modern"]),
            status: ArtworkStatus::Available,
        },
        Artwork {
            id: "2".to_string(),
            title: "Silent Peaks".to_string(),
            artist_id: "a2".to_string(),
            artist_name: "Marcus Thorne".to_string(),
            description: "Breathtaking mountain vistas captured during the golden hour in the Swiss Alps."
                .to_string(),
            price: 1200.0,
            image_url: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Photography".to_string(),
            medium: "Paper".to_string(),
            dimensions: "24x36 inches".to_string(),
            tags: tags(&["Nature", "Landscape", "Mountains"]),
            status: ArtworkStatus::Available,
        },
        Artwork {
            id: "3".to_string(),
            title: "Fractured Reality".to_string(),
            artist_id: "a1".to_string(),
            artist_name: "Elena Vance".to_string(),
            description: "A study in perspective and shattered glass textures using traditional oil techniques."
                .to_string(),
            price: 320.0,
            image_url: "https://images.unsplash.com/photo-1541701494587-cb58502866ab?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Oil Painting".to_string(),
            medium: "Canvas".to_string(),
            dimensions: "18x24 inches".to_string(),
            tags: tags(&["Abstract", "Blue", "Geometric"]),
            status: ArtworkStatus::Available,
        },
        Artwork {
            id: "4".to_string(),
            title: "Ephemeral Echo".to_string(),
            artist_id: "a3".to_string(),
            artist_name: "Sarah Jenkins".to_string(),
            description: "Soft watercolor strokes depicting the transition of seasons in a rural garden."
                .to_string(),
            price: 250.0,
            image_url: "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Watercolor".to_string(),
            medium: "Paper".to_string(),
            dimensions: "12x12 inches".to_string(),
            tags: tags(&["Nature", "Soft", "Floral"]),
            status: ArtworkStatus::Sold,
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "b1".to_string(),
            name: "John Collector".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Buyer,
            avatar: "https://i.pravatar.cc/150?u=b1".to_string(),
            bio: None,
            is_verified: false,
        },
        User {
            id: "a1".to_string(),
            name: "Elena Vance".to_string(),
            email: "elena@art.com".to_string(),
            role: UserRole::Artist,
            avatar: "https://i.pravatar.cc/150?u=a1".to_string(),
            bio: Some("Digital nomad exploring the intersection of light and technology.".to_string()),
            is_verified: true,
        },
        User {
            id: "admin1".to_string(),
            name: "System Admin".to_string(),
            email: "admin@palette.com".to_string(),
            role: UserRole::Admin,
            avatar: "https://i.pravatar.cc/150?u=admin".to_string(),
            bio: None,
            is_verified: false,
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![Review {
        id: "r1".to_string(),
        artwork_id: "4".to_string(),
        user_id: "b1".to_string(),
        user_name: "John Collector".to_string(),
        rating: 5,
        comment: "The colors are even more vibrant in person. Truly a masterpiece!".to_string(),
        date: date(2023, 10, 15),
    }]
}

pub fn commissions() -> Vec<Commission> {
    vec![Commission {
        id: "c1".to_string(),
        buyer_id: "b1".to_string(),
        buyer_name: "John Collector".to_string(),
        artist_id: "a1".to_string(),
        title: "Family Portrait in Sage".to_string(),
        requirements: "A classic 18x24 portrait of 4 people in a minimalist outdoor setting."
            .to_string(),
        budget: 1500.0,
        deadline: date(2024, 5, 20),
        status: CommissionStatus::Pending,
        created_at: date(2024, 2, 10),
    }]
}
