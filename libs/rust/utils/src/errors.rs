//env
pub const CONFIG_ALREADY_INITIALIZED: &str = "Explorer config already initialized";
pub const CONFIG_NOT_INITIALIZED: &str = "Explorer config not initialized";

//catalog
pub const CATALOG_LOAD_FAILED: &str = "Failed to load catalog";
pub const DAO_NOT_FOUND_ERROR: &str = "DAO not found";
pub const PROPOSAL_NOT_FOUND_ERROR: &str = "Proposal not found";

//server
pub const BAD_QUERY_ERROR: &str = "Invalid query string";
pub const SERVER_BIND_FAILED: &str = "Failed to bind explorer listener";
pub const SERVER_FAILED: &str = "Explorer server error";
