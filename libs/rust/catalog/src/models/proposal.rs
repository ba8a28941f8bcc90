use crate::errors::CatalogError;
use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Governor proposal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 8] = [
        ProposalStatus::Pending,
        ProposalStatus::Active,
        ProposalStatus::Canceled,
        ProposalStatus::Defeated,
        ProposalStatus::Succeeded,
        ProposalStatus::Queued,
        ProposalStatus::Expired,
        ProposalStatus::Executed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Active => "active",
            ProposalStatus::Canceled => "canceled",
            ProposalStatus::Defeated => "defeated",
            ProposalStatus::Succeeded => "succeeded",
            ProposalStatus::Queued => "queued",
            ProposalStatus::Expired => "expired",
            ProposalStatus::Executed => "executed",
        }
    }

    /// Pending or active, i.e. still open for (future) voting.
    pub fn is_open(&self) -> bool {
        matches!(self, ProposalStatus::Pending | ProposalStatus::Active)
    }
}

impl FromStr for ProposalStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProposalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    /// Lookup-only reference to the owning DAO.
    pub dao_id: String,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub start_block: u64,
    pub end_block: u64,
    pub for_votes: u128,
    pub against_votes: u128,
    pub abstain_votes: u128,
    pub proposer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proposal {
    pub fn proposer_address(&self) -> Result<Address, CatalogError> {
        self.proposer
            .parse::<Address>()
            .map_err(|e| CatalogError::InvalidAddress {
                value: self.proposer.clone(),
                reason: e.to_string(),
            })
    }

    pub fn total_votes(&self) -> u128 {
        self.for_votes
            .saturating_add(self.against_votes)
            .saturating_add(self.abstain_votes)
    }

    /// Share of for-votes among decisive (for + against) votes.
    pub fn support_share(&self) -> Option<f64> {
        let decisive = self.for_votes.saturating_add(self.against_votes);
        if decisive == 0 {
            return None;
        }
        Some(self.for_votes as f64 / decisive as f64)
    }
}
