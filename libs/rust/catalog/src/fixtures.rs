//! Demo corpus served when no catalog snapshot is configured.
//!
//! Entries 7 to 12 repeat earlier organisations under new ids; they are kept
//! because the listing views were built against exactly this data.

use crate::models::{Dao, DaoCategory, DaoStatus, Proposal, ProposalStatus};
use chrono::{DateTime, Utc};

struct DaoSeed {
    name: &'static str,
    description: &'static str,
    slug: &'static str,
    category: DaoCategory,
    members: u64,
    proposals: u64,
    active_proposals: u64,
    status: DaoStatus,
    tags: [&'static str; 3],
    website: &'static str,
    created_at: &'static str,
    updated_at: &'static str,
}

const NEXA_FINANCE: DaoSeed = DaoSeed {
    name: "Nexa Finance",
    description: "Decentralized lending and borrowing protocol with isolated markets and risk management.",
    slug: "nexafinance",
    category: DaoCategory::Defi,
    members: 12450,
    proposals: 86,
    active_proposals: 3,
    status: DaoStatus::Trending,
    tags: ["lending", "borrowing", "yield"],
    website: "https://nexafinance.xyz",
    created_at: "2023-05-15T10:00:00Z",
    updated_at: "2025-10-20T14:30:00Z",
};

const PIXEL_PUNKS: DaoSeed = DaoSeed {
    name: "PixelPunks",
    description: "Community-owned NFT project pushing the boundaries of digital art and ownership.",
    slug: "pixelpunks",
    category: DaoCategory::Nft,
    members: 8765,
    proposals: 42,
    active_proposals: 1,
    status: DaoStatus::Active,
    tags: ["art", "collectibles", "pfp"],
    website: "https://pixelpunks.io",
    created_at: "2024-01-10T09:15:00Z",
    updated_at: "2025-10-19T16:45:00Z",
};

const META_LANDS: DaoSeed = DaoSeed {
    name: "MetaLands",
    description: "Play-to-earn metaverse where players own and monetize virtual real estate.",
    slug: "metalands",
    category: DaoCategory::Gaming,
    members: 23456,
    proposals: 127,
    active_proposals: 5,
    status: DaoStatus::Trending,
    tags: ["gaming", "metaverse", "virtual-world"],
    website: "https://metalands.game",
    created_at: "2023-08-22T14:20:00Z",
    updated_at: "2025-10-21T08:10:00Z",
};

const SOCIAL_CHAIN: DaoSeed = DaoSeed {
    name: "SocialChain",
    description: "Decentralized social network where users control their data and earn from content creation.",
    slug: "socialchain",
    category: DaoCategory::Social,
    members: 5432,
    proposals: 28,
    active_proposals: 2,
    status: DaoStatus::New,
    tags: ["social", "content", "creator-economy"],
    website: "https://socialchain.xyz",
    created_at: "2025-09-05T11:30:00Z",
    updated_at: "2025-10-20T18:20:00Z",
};

const GOVERNANCE_HUB: DaoSeed = DaoSeed {
    name: "GovernanceHub",
    description: "Protocol for creating and managing DAOs with customizable governance parameters.",
    slug: "govhub",
    category: DaoCategory::Governance,
    members: 8765,
    proposals: 63,
    active_proposals: 4,
    status: DaoStatus::Active,
    tags: ["governance", "infrastructure", "tooling"],
    website: "https://govhub.org",
    created_at: "2023-11-18T16:45:00Z",
    updated_at: "2025-10-19T10:15:00Z",
};

const DEFI_ALLIANCE: DaoSeed = DaoSeed {
    name: "DeFi Alliance",
    description: "Coalition of DeFi protocols working together to improve interoperability and security.",
    slug: "defialliance",
    category: DaoCategory::Defi,
    members: 3456,
    proposals: 19,
    active_proposals: 2,
    status: DaoStatus::Active,
    tags: ["defi", "alliance", "interoperability"],
    website: "https://defialliance.xyz",
    created_at: "2024-02-10T13:20:00Z",
    updated_at: "2025-10-20T09:30:00Z",
};

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn dao(id: &str, seed: &DaoSeed) -> Dao {
    Dao {
        id: id.to_string(),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        logo: format!("/logos/{}.png", seed.name.to_lowercase().replace(' ', "-")),
        category: seed.category,
        members: seed.members,
        proposals: seed.proposals,
        active_proposals: seed.active_proposals,
        status: seed.status,
        tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
        website: Some(seed.website.to_string()),
        twitter: Some(seed.slug.to_string()),
        discord: Some(seed.slug.to_string()),
        created_at: timestamp(seed.created_at),
        updated_at: timestamp(seed.updated_at),
    }
}

pub fn sample_daos() -> Vec<Dao> {
    [
        &NEXA_FINANCE,
        &PIXEL_PUNKS,
        &META_LANDS,
        &SOCIAL_CHAIN,
        &GOVERNANCE_HUB,
        &DEFI_ALLIANCE,
        &META_LANDS,
        &NEXA_FINANCE,
        &PIXEL_PUNKS,
        &META_LANDS,
        &SOCIAL_CHAIN,
        &GOVERNANCE_HUB,
    ]
    .into_iter()
    .enumerate()
    .map(|(index, seed)| dao(&(index + 1).to_string(), seed))
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn proposal(
    id: &str,
    dao_id: &str,
    title: &str,
    description: &str,
    status: ProposalStatus,
    blocks: (u64, u64),
    votes: (u128, u128, u128),
    proposer: &str,
    created_at: &str,
    updated_at: &str,
) -> Proposal {
    Proposal {
        id: id.to_string(),
        dao_id: dao_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        start_block: blocks.0,
        end_block: blocks.1,
        for_votes: votes.0,
        against_votes: votes.1,
        abstain_votes: votes.2,
        proposer: proposer.to_string(),
        created_at: timestamp(created_at),
        updated_at: timestamp(updated_at),
    }
}

pub fn sample_proposals() -> Vec<Proposal> {
    vec![
        proposal(
            "p1",
            "1",
            "Increase DAI borrowing limit to 200M",
            "This proposal aims to increase the DAI borrowing limit from 150M to 200M to meet growing demand in the protocol.",
            ProposalStatus::Active,
            (15_678_900, 15_700_500),
            (12_500_000, 2_500_000, 500_000),
            "0x742d35Ce663eC3060270B8aE0b43Fb3Fb3b3b3b3",
            "2025-10-15T08:30:00Z",
            "2025-10-20T14:30:00Z",
        ),
        proposal(
            "p2",
            "2",
            "PixelPunks V2 Artwork Update",
            "Proposal to update the PixelPunks artwork to V2 with enhanced resolution and new traits.",
            ProposalStatus::Pending,
            (15_700_000, 15_721_600),
            (0, 0, 0),
            "0x1234567890abcdef1234567890abcdef12345678",
            "2025-10-20T10:15:00Z",
            "2025-10-20T10:15:00Z",
        ),
        proposal(
            "p3",
            "3",
            "Land Sale Event: Metaverse Expansion",
            "Proposal to conduct a land sale event for the upcoming Metaverse expansion pack.",
            ProposalStatus::Succeeded,
            (15_500_000, 15_521_600),
            (9_800_000, 200_000, 0),
            "0xabcdef1234567890abcdef1234567890abcdef12",
            "2025-09-28T14:20:00Z",
            "2025-10-21T08:10:00Z",
        ),
        proposal(
            "p4",
            "4",
            "Content Monetization Update",
            "Update the content monetization model to include tipping and subscription features.",
            ProposalStatus::Active,
            (15_680_000, 15_701_600),
            (3_200_000, 1_500_000, 300_000),
            "0x34567890abcdef1234567890abcdef1234567890",
            "2025-10-10T16:45:00Z",
            "2025-10-20T18:20:00Z",
        ),
        proposal(
            "p5",
            "5",
            "Governance Module V2",
            "Upgrade to Governance Module V2 with gas optimizations and new features.",
            ProposalStatus::Executed,
            (15_550_000, 15_571_600),
            (15_000_000, 500_000, 0),
            "0x567890abcdef1234567890abcdef1234567890ab",
            "2025-09-15T11:20:00Z",
            "2025-10-19T10:15:00Z",
        ),
        proposal(
            "p6",
            "6",
            "Security Standardization Initiative",
            "Proposal to establish security best practices across all alliance members.",
            ProposalStatus::Defeated,
            (15_600_000, 15_621_600),
            (4_500_000, 5_000_000, 1_000_000),
            "0x7890abcdef1234567890abcdef1234567890abcd",
            "2025-10-05T09:30:00Z",
            "2025-10-20T09:30:00Z",
        ),
        proposal(
            "p7",
            "7",
            "Security Standardization Initiative",
            "Proposal to establish security best practices across all alliance members.",
            ProposalStatus::Defeated,
            (15_600_000, 15_621_600),
            (4_500_000, 5_000_000, 1_000_000),
            "0x7890abcdef1234567890abcdef1234567890abcd",
            "2025-10-05T09:30:00Z",
            "2025-10-20T09:30:00Z",
        ),
    ]
}
