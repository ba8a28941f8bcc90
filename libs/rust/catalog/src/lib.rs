pub mod debounce;
pub mod errors;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod models;
pub mod options;
pub mod store;

pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, Debouncer, FilterSession, debounce};
pub use errors::CatalogError;
pub use filter::{FilterSpec, Selection, filter_daos};
pub use models::{Dao, DaoCategory, DaoStatus, Proposal, ProposalStatus};
pub use options::{FilterOption, FilteredDaos, category_options, status_options};
pub use store::{AuditReport, Catalog, CatalogSource, ProposalCounts};
