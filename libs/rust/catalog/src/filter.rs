use crate::models::{Dao, DaoCategory, DaoStatus};
use std::str::FromStr;

/// Category label meaning "no category clause".
pub const ALL_CATEGORIES: &str = "all";

/// A user-supplied filter label. Labels that name no known variant are kept so
/// the clause stays active and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: FromStr> Selection<T> {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<T>() {
            Ok(value) => Selection::Known(value),
            Err(_) => Selection::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Known(known) => known == value,
            Selection::Unrecognized(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// `None` is the "all" sentinel.
    pub category: Option<Selection<DaoCategory>>,
    /// Empty matches any status.
    pub status: Vec<Selection<DaoStatus>>,
    pub search_query: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, raw: &str) -> Self {
        self.category = if raw.is_empty() || raw == ALL_CATEGORIES {
            None
        } else {
            Some(Selection::parse(raw))
        };
        self
    }

    pub fn with_status<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.status = labels
            .into_iter()
            .map(|label| Selection::parse(label.as_ref()))
            .collect();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_query = text.into();
        self
    }

    /// Builds a spec from loose query-string values. Missing values become
    /// no-op clauses and the status list is comma separated.
    pub fn from_params(category: Option<&str>, status: Option<&str>, search: Option<&str>) -> Self {
        let labels = status
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty());

        Self::new()
            .with_category(category.unwrap_or(ALL_CATEGORIES))
            .with_status(labels)
            .with_search(search.unwrap_or_default())
    }

    /// Trimmed, lowercased search text, or `None` when the search clause is inactive.
    pub fn normalized_query(&self) -> Option<String> {
        let query = self.search_query.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }

    pub fn is_identity(&self) -> bool {
        self.category.is_none() && self.status.is_empty() && self.normalized_query().is_none()
    }

    pub fn matches(&self, dao: &Dao) -> bool {
        self.matches_with_query(dao, self.normalized_query().as_deref())
    }

    fn matches_with_query(&self, dao: &Dao, query: Option<&str>) -> bool {
        if let Some(category) = &self.category {
            if !category.admits(&dao.category) {
                return false;
            }
        }

        if !self.status.is_empty() && !self.status.iter().any(|s| s.admits(&dao.status)) {
            return false;
        }

        match query {
            Some(query) => matches_search(dao, query),
            None => true,
        }
    }
}

/// `query` must already be trimmed and lowercased.
pub fn matches_search(dao: &Dao, query: &str) -> bool {
    dao.name.to_lowercase().contains(query)
        || dao.description.to_lowercase().contains(query)
        || dao.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

/// Stable filter: returns the matching records in their original order.
pub fn filter_daos(daos: &[Dao], spec: &FilterSpec) -> Vec<Dao> {
    let query = spec.normalized_query();
    daos.iter()
        .filter(|dao| spec.matches_with_query(dao, query.as_deref()))
        .cloned()
        .collect()
}
