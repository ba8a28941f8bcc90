use crate::errors::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaoCategory {
    Defi,
    Nft,
    Gaming,
    Social,
    Governance,
    Other,
}

impl DaoCategory {
    pub const ALL: [DaoCategory; 6] = [
        DaoCategory::Defi,
        DaoCategory::Nft,
        DaoCategory::Gaming,
        DaoCategory::Social,
        DaoCategory::Governance,
        DaoCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DaoCategory::Defi => "defi",
            DaoCategory::Nft => "nft",
            DaoCategory::Gaming => "gaming",
            DaoCategory::Social => "social",
            DaoCategory::Governance => "governance",
            DaoCategory::Other => "other",
        }
    }
}

impl FromStr for DaoCategory {
    type Err = CatalogError;

    /// Exact, case-sensitive match against the stored label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaoCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for DaoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Listing status of a DAO. Independent of the state of its proposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaoStatus {
    Active,
    New,
    Trending,
}

impl DaoStatus {
    pub const ALL: [DaoStatus; 3] = [DaoStatus::Active, DaoStatus::New, DaoStatus::Trending];

    pub fn as_str(&self) -> &'static str {
        match self {
            DaoStatus::Active => "active",
            DaoStatus::New => "new",
            DaoStatus::Trending => "trending",
        }
    }
}

impl FromStr for DaoStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for DaoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dao {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub category: DaoCategory,
    pub members: u64,
    // Denormalised counters, not derived from the proposal records.
    pub proposals: u64,
    pub active_proposals: u64,
    pub status: DaoStatus,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
