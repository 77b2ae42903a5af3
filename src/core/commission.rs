//! Commission requests and sales

use crate::core::artwork::{Artwork, ArtworkStatus};
use crate::core::error::CommissionError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a commission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionStatus {
    Pending,
    Accepted,
    Rejected,
    InProgress,
    Completed,
}

impl CommissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "PENDING",
            CommissionStatus::Accepted => "ACCEPTED",
            CommissionStatus::Rejected => "REJECTED",
            CommissionStatus::InProgress => "IN_PROGRESS",
            CommissionStatus::Completed => "COMPLETED",
        }
    }
}

/// A buyer's request for a custom piece from an artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub id: String,
    pub buyer_id: String,
    pub buyer_name: String,
    pub artist_id: String,
    pub title: String,
    pub requirements: String,
    pub budget: f64,
    pub deadline: NaiveDate,
    pub status: CommissionStatus,
    pub created_at: NaiveDate,
}

impl Commission {
    /// Move the commission to `next`
    ///
    /// Only pending commissions can be answered, and the only answers are
    /// accept or decline.
    pub fn transition(&mut self, next: CommissionStatus) -> Result<(), CommissionError> {
        match (self.status, next) {
            (CommissionStatus::Pending, CommissionStatus::Accepted)
            | (CommissionStatus::Pending, CommissionStatus::Rejected) => {
                self.status = next;
                Ok(())
            }
            (from, to) => Err(CommissionError::InvalidTransition {
                id: self.id.clone(),
                from,
                to,
            }),
        }
    }

    pub fn accept(&mut self) -> Result<(), CommissionError> {
        self.transition(CommissionStatus::Accepted)
    }

    pub fn decline(&mut self) -> Result<(), CommissionError> {
        self.transition(CommissionStatus::Rejected)
    }
}

/// Fulfilment state of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
}

/// A row of the dashboard's recent sales table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub artwork_id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub status: OrderStatus,
}

impl Sale {
    /// Sales for every sold artwork; the catalog only tracks delivered ones
    pub fn from_sold(artworks: &[Artwork]) -> Vec<Sale> {
        artworks
            .iter()
            .filter(|artwork| artwork.status == ArtworkStatus::Sold)
            .map(|artwork| Sale {
                artwork_id: artwork.id.clone(),
                title: artwork.title.clone(),
                image_url: artwork.image_url.clone(),
                price: artwork.price,
                status: OrderStatus::Delivered,
            })
            .collect()
    }
}
