//! Marketplace users and roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the person driving a session
///
/// The role decides which dashboard tabs are offered and which identity is
/// shown. It has no influence on catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Artist,
    #[default]
    Buyer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Artist => "ARTIST",
            UserRole::Buyer => "BUYER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Name displayed on the dashboard for this role
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Artist => "Elena Vance",
            UserRole::Buyer => "John Collector",
            UserRole::Admin => "System Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ARTIST" => Ok(UserRole::Artist),
            "BUYER" => Ok(UserRole::Buyer),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// A registered marketplace user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}
