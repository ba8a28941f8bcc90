use crate::{
    errors::CatalogError,
    filter::{ALL_CATEGORIES, FilterSpec, filter_daos, matches_search},
    fixtures::{sample_daos, sample_proposals},
    models::{Dao, Proposal},
    options::FilteredDaos,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};
use tracing::{info, instrument, warn};

/// Read contract of a DAO record source. `Catalog` serves it from memory; a
/// network-backed repository can stand in for it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_daos(&self) -> Result<Vec<Dao>, CatalogError>;

    async fn fetch_proposals(&self, dao_id: &str) -> Result<Vec<Proposal>, CatalogError>;
}

/// On-disk shape of a catalog snapshot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSnapshot {
    pub daos: Vec<Dao>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalCounts {
    pub total: u64,
    pub open: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterDrift {
    pub dao_id: String,
    pub stored: ProposalCounts,
    pub derived: ProposalCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub duplicate_dao_ids: Vec<String>,
    /// Proposal ids whose `daoId` names no DAO record.
    pub dangling_proposals: Vec<String>,
    /// Proposal ids with a malformed proposer address.
    pub invalid_proposers: Vec<String>,
    pub counter_drift: Vec<CounterDrift>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_dao_ids.is_empty()
            && self.dangling_proposals.is_empty()
            && self.invalid_proposers.is_empty()
            && self.counter_drift.is_empty()
    }
}

/// Immutable, in-memory DAO and proposal records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    daos: Vec<Dao>,
    proposals: Vec<Proposal>,
}

impl Catalog {
    pub fn new(daos: Vec<Dao>, proposals: Vec<Proposal>) -> Self {
        Self { daos, proposals }
    }

    pub fn sample() -> Self {
        Self::new(sample_daos(), sample_proposals())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: CatalogSnapshot =
            serde_json::from_str(&contents).map_err(|source| CatalogError::SnapshotParse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            daos = snapshot.daos.len(),
            proposals = snapshot.proposals.len(),
            "Loaded catalog snapshot"
        );

        Ok(Self::new(snapshot.daos, snapshot.proposals))
    }

    pub fn daos(&self) -> &[Dao] {
        &self.daos
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn dao_by_id(&self, id: &str) -> Option<&Dao> {
        self.daos.iter().find(|dao| dao.id == id)
    }

    /// `"all"` returns every record; unknown labels return none.
    pub fn daos_by_category(&self, category: &str) -> Vec<Dao> {
        if category == ALL_CATEGORIES {
            return self.daos.clone();
        }
        self.filter_daos(&FilterSpec::new().with_category(category))
    }

    /// Search clause only. A blank query returns every record.
    pub fn search_daos(&self, query: &str) -> Vec<Dao> {
        let spec = FilterSpec::new().with_search(query);
        match spec.normalized_query() {
            Some(query) => self
                .daos
                .iter()
                .filter(|dao| matches_search(dao, &query))
                .cloned()
                .collect(),
            None => self.daos.clone(),
        }
    }

    pub fn filter_daos(&self, spec: &FilterSpec) -> Vec<Dao> {
        filter_daos(&self.daos, spec)
    }

    pub fn filtered(&self, spec: &FilterSpec) -> FilteredDaos {
        let daos = self.filter_daos(spec);
        FilteredDaos {
            matched: daos.len(),
            total: self.daos.len(),
            daos,
        }
    }

    pub fn proposal_by_id(&self, id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|proposal| proposal.id == id)
    }

    pub fn proposals_by_dao(&self, dao_id: &str) -> Vec<Proposal> {
        self.proposals
            .iter()
            .filter(|proposal| proposal.dao_id == dao_id)
            .cloned()
            .collect()
    }

    /// Pending and active proposals, optionally scoped to one DAO. An empty id
    /// is unscoped.
    pub fn active_proposals(&self, dao_id: Option<&str>) -> Vec<Proposal> {
        let dao_id = dao_id.filter(|id| !id.is_empty());
        self.proposals
            .iter()
            .filter(|proposal| dao_id.is_none_or(|id| proposal.dao_id == id))
            .filter(|proposal| proposal.status.is_open())
            .cloned()
            .collect()
    }

    /// Counts derived from the proposal records, as opposed to the counters
    /// stored on the DAO record.
    pub fn proposal_counts(&self, dao_id: &str) -> ProposalCounts {
        self.proposals
            .iter()
            .filter(|proposal| proposal.dao_id == dao_id)
            .fold(ProposalCounts { total: 0, open: 0 }, |mut counts, proposal| {
                counts.total += 1;
                if proposal.status.is_open() {
                    counts.open += 1;
                }
                counts
            })
    }

    pub fn counter_drift(&self) -> Vec<CounterDrift> {
        self.daos
            .iter()
            .filter_map(|dao| {
                let stored = ProposalCounts {
                    total: dao.proposals,
                    open: dao.active_proposals,
                };
                let derived = self.proposal_counts(&dao.id);
                (stored != derived).then(|| CounterDrift {
                    dao_id: dao.id.clone(),
                    stored,
                    derived,
                })
            })
            .collect()
    }

    pub fn audit(&self) -> AuditReport {
        let mut seen = HashSet::new();
        let mut duplicate_dao_ids = Vec::new();
        for dao in &self.daos {
            if !seen.insert(dao.id.as_str()) && !duplicate_dao_ids.contains(&dao.id) {
                duplicate_dao_ids.push(dao.id.clone());
            }
        }

        let dangling_proposals = self
            .proposals
            .iter()
            .filter(|proposal| !seen.contains(proposal.dao_id.as_str()))
            .map(|proposal| proposal.id.clone())
            .collect();

        let invalid_proposers = self
            .proposals
            .iter()
            .filter(|proposal| proposal.proposer_address().is_err())
            .map(|proposal| proposal.id.clone())
            .collect();

        AuditReport {
            duplicate_dao_ids,
            dangling_proposals,
            invalid_proposers,
            counter_drift: self.counter_drift(),
        }
    }

    /// Runs `audit` and logs every finding. Findings are never fatal.
    #[instrument(skip_all)]
    pub fn log_audit(&self) -> AuditReport {
        let report = self.audit();

        for id in &report.duplicate_dao_ids {
            warn!(dao_id = %id, "Duplicate DAO id in catalog");
        }
        for id in &report.dangling_proposals {
            warn!(proposal_id = %id, "Proposal references an unknown DAO");
        }
        for id in &report.invalid_proposers {
            warn!(proposal_id = %id, "Proposal has a malformed proposer address");
        }
        for drift in &report.counter_drift {
            warn!(
                dao_id = %drift.dao_id,
                stored_total = drift.stored.total,
                stored_open = drift.stored.open,
                derived_total = drift.derived.total,
                derived_open = drift.derived.open,
                "Stored proposal counters differ from proposal records"
            );
        }

        info!(
            daos = self.daos.len(),
            proposals = self.proposals.len(),
            clean = report.is_clean(),
            "Catalog audit finished"
        );

        report
    }
}

#[async_trait]
impl CatalogSource for Catalog {
    async fn fetch_daos(&self) -> Result<Vec<Dao>, CatalogError> {
        Ok(self.daos.clone())
    }

    async fn fetch_proposals(&self, dao_id: &str) -> Result<Vec<Proposal>, CatalogError> {
        Ok(self.proposals_by_dao(dao_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaoCategory, ProposalStatus};
    use std::io::Write;

    fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<&str> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_dao_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.dao_by_id("6").unwrap().name, "DeFi Alliance");
        assert!(catalog.dao_by_id("404").is_none());
    }

    #[test]
    fn test_daos_by_category() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.daos_by_category("all").len(), 12);
        let defi = catalog.daos_by_category("defi");
        assert_eq!(ids(&defi, |d| d.id.as_str()), vec!["1", "6", "8"]);
        assert!(defi.iter().all(|d| d.category == DaoCategory::Defi));
        assert!(catalog.daos_by_category("unknown").is_empty());
    }

    #[test]
    fn test_search_daos() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.search_daos("  ").len(), 12);
        let social = catalog.search_daos("Creator");
        assert_eq!(ids(&social, |d| d.id.as_str()), vec!["4", "11"]);
    }

    #[test]
    fn test_filtered_reports_totals() {
        let catalog = Catalog::sample();
        let result = catalog.filtered(&FilterSpec::new().with_category("gaming"));
        assert_eq!(result.matched, 3);
        assert_eq!(result.total, 12);
        assert_eq!(result.daos.len(), 3);
    }

    #[test]
    fn test_active_proposals() {
        let catalog = Catalog::sample();
        let all = catalog.active_proposals(None);
        assert_eq!(ids(&all, |p| p.id.as_str()), vec!["p1", "p2", "p4"]);
        assert!(all.iter().all(|p| p.status.is_open()));

        let scoped = catalog.active_proposals(Some("2"));
        assert_eq!(ids(&scoped, |p| p.id.as_str()), vec!["p2"]);
        assert_eq!(scoped[0].status, ProposalStatus::Pending);

        assert!(catalog.active_proposals(Some("3")).is_empty());
        assert!(catalog.active_proposals(Some("404")).is_empty());
    }

    #[test]
    fn test_active_proposals_empty_dao_id_is_unscoped() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.active_proposals(Some("")), catalog.active_proposals(None));
        assert_eq!(catalog.active_proposals(Some("")).len(), 3);
    }

    #[test]
    fn test_proposal_lookups() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.proposal_by_id("p5").unwrap().dao_id, "5");
        assert!(catalog.proposal_by_id("p99").is_none());
        assert_eq!(catalog.proposals_by_dao("7").len(), 1);
        assert!(catalog.proposals_by_dao("12").is_empty());
    }

    #[test]
    fn test_proposal_counts_are_derived() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.proposal_counts("1"),
            ProposalCounts { total: 1, open: 1 }
        );
        assert_eq!(
            catalog.proposal_counts("3"),
            ProposalCounts { total: 1, open: 0 }
        );
        assert_eq!(
            catalog.proposal_counts("12"),
            ProposalCounts { total: 0, open: 0 }
        );
    }

    #[test]
    fn test_sample_counters_drift() {
        let catalog = Catalog::sample();
        let drift = catalog.counter_drift();
        assert_eq!(drift.len(), 12);
        assert_eq!(drift[0].dao_id, "1");
        assert_eq!(drift[0].stored, ProposalCounts { total: 86, open: 3 });
        assert_eq!(drift[0].derived, ProposalCounts { total: 1, open: 1 });
    }

    #[test]
    fn test_consistent_counters_do_not_drift() {
        let mut daos = sample_daos();
        daos.truncate(1);
        daos[0].proposals = 1;
        daos[0].active_proposals = 1;
        let proposals = sample_proposals().into_iter().take(1).collect();

        let catalog = Catalog::new(daos, proposals);
        assert!(catalog.counter_drift().is_empty());
        assert!(catalog.audit().is_clean());
    }

    #[test]
    fn test_audit_reports_integrity_problems() {
        let mut daos = sample_daos();
        daos[1].id = "1".to_string();
        let mut proposals = sample_proposals();
        proposals[2].dao_id = "999".to_string();
        proposals[3].proposer = "not-an-address".to_string();

        let report = Catalog::new(daos, proposals).audit();
        assert_eq!(report.duplicate_dao_ids, vec!["1".to_string()]);
        // p2 pointed at the DAO whose id was overwritten.
        assert_eq!(
            report.dangling_proposals,
            vec!["p2".to_string(), "p3".to_string()]
        );
        assert_eq!(report.invalid_proposers, vec!["p4".to_string()]);
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn test_catalog_source_contract() {
        let catalog = Catalog::sample();
        let source: &dyn CatalogSource = &catalog;
        assert_eq!(source.fetch_daos().await.unwrap().len(), 12);
        let proposals = source.fetch_proposals("4").await.unwrap();
        assert_eq!(ids(&proposals, |p| p.id.as_str()), vec!["p4"]);
        assert!(source.fetch_proposals("404").await.unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let snapshot = CatalogSnapshot {
            daos: sample_daos(),
            proposals: sample_proposals(),
        };
        let path = std::env::temp_dir().join(format!(
            "nexa-catalog-snapshot-{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string_pretty(&snapshot).unwrap().as_bytes())
            .unwrap();

        let catalog = Catalog::from_snapshot_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.daos(), snapshot.daos.as_slice());
        assert_eq!(catalog.proposals(), snapshot.proposals.as_slice());
    }

    #[test]
    fn test_snapshot_errors() {
        let missing = Catalog::from_snapshot_file("/nonexistent/catalog.json");
        assert!(matches!(missing, Err(CatalogError::SnapshotRead { .. })));

        let path = std::env::temp_dir().join(format!(
            "nexa-catalog-broken-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let broken = Catalog::from_snapshot_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(broken, Err(CatalogError::SnapshotParse { .. })));
    }
}
