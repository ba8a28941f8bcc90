pub mod dao;
pub mod proposal;

pub use dao::{Dao, DaoCategory, DaoStatus};
pub use proposal::{Proposal, ProposalStatus};
