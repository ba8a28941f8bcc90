use crate::models::Dao;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub count: usize,
}

/// Result of a filter run together with the size of the full corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredDaos {
    pub daos: Vec<Dao>,
    pub matched: usize,
    pub total: usize,
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Counts labels in first-appearance order.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for label in labels {
        match options.iter_mut().find(|option| option.id == label) {
            Some(option) => option.count += 1,
            None => options.push(FilterOption {
                id: label.to_string(),
                label: capitalize(label),
                count: 1,
            }),
        }
    }
    options
}

pub fn category_options(daos: &[Dao]) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        id: crate::filter::ALL_CATEGORIES.to_string(),
        label: "All DAOs".to_string(),
        count: daos.len(),
    }];
    options.extend(tally(daos.iter().map(|dao| dao.category.as_str())));
    options
}

pub fn status_options(daos: &[Dao]) -> Vec<FilterOption> {
    tally(daos.iter().map(|dao| dao.status.as_str()))
}
