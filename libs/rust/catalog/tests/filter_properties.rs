use chrono::{DateTime, Utc};
use nexa_catalog::{Dao, DaoCategory, DaoStatus, FilterSpec, filter_daos};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_category() -> impl Strategy<Value = DaoCategory> {
    prop::sample::select(DaoCategory::ALL.to_vec())
}

fn arb_status() -> impl Strategy<Value = DaoStatus> {
    prop::sample::select(DaoStatus::ALL.to_vec())
}

fn arb_dao() -> impl Strategy<Value = (String, String, DaoCategory, DaoStatus, Vec<String>)> {
    (
        "[A-Za-z ]{0,16}",
        "[A-Za-z ,.-]{0,40}",
        arb_category(),
        arb_status(),
        prop::collection::vec("[a-z-]{1,10}", 0..4),
    )
}

fn arb_daos() -> impl Strategy<Value = Vec<Dao>> {
    prop::collection::vec(arb_dao(), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, description, category, status, tags))| Dao {
                id: index.to_string(),
                name,
                description,
                logo: String::new(),
                category,
                members: 0,
                proposals: 0,
                active_proposals: 0,
                status,
                tags,
                website: None,
                twitter: None,
                discord: None,
                created_at: DateTime::<Utc>::default(),
                updated_at: DateTime::<Utc>::default(),
            })
            .collect()
    })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::option::of(arb_category()),
        prop::collection::vec(arb_status(), 0..3),
        "[A-Za-z ]{0,4}",
    )
        .prop_map(|(category, statuses, search)| {
            let spec = FilterSpec::new()
                .with_status(statuses.iter().map(|s| s.as_str()))
                .with_search(search);
            match category {
                Some(category) => spec.with_category(category.as_str()),
                None => spec,
            }
        })
}

fn is_subsequence(needle: &[Dao], haystack: &[Dao]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|item| rest.any(|candidate| candidate == item))
}

proptest! {
    #[test]
    fn identity_spec_returns_everything(daos in arb_daos()) {
        let spec = FilterSpec::new().with_category("all").with_search("   ");
        prop_assert_eq!(filter_daos(&daos, &spec), daos);
    }

    #[test]
    fn result_is_order_preserving_subsequence(daos in arb_daos(), spec in arb_spec()) {
        let result = filter_daos(&daos, &spec);
        prop_assert!(is_subsequence(&result, &daos));
        prop_assert!(result.iter().all(|dao| spec.matches(dao)));
        let rejected = daos.iter().filter(|dao| !spec.matches(dao)).count();
        prop_assert_eq!(result.len() + rejected, daos.len());
    }

    #[test]
    fn filtering_is_idempotent(daos in arb_daos(), spec in arb_spec()) {
        let once = filter_daos(&daos, &spec);
        let twice = filter_daos(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn categories_partition_the_corpus(daos in arb_daos()) {
        let mut seen = HashSet::new();
        let mut reconstructed = 0;
        for category in DaoCategory::ALL {
            let result = filter_daos(&daos, &FilterSpec::new().with_category(category.as_str()));
            prop_assert!(result.iter().all(|dao| dao.category == category));
            for dao in &result {
                prop_assert!(seen.insert(dao.id.clone()), "duplicate {}", dao.id);
            }
            reconstructed += result.len();
        }
        prop_assert_eq!(reconstructed, daos.len());
    }

    #[test]
    fn search_ignores_case(daos in arb_daos(), query in "[A-Za-z]{1,4}") {
        let lower = filter_daos(&daos, &FilterSpec::new().with_search(query.to_lowercase()));
        let upper = filter_daos(&daos, &FilterSpec::new().with_search(query.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn search_ignores_surrounding_whitespace(
        daos in arb_daos(),
        query in "[a-z]{1,4}",
        left in " {0,3}",
        right in "[ \t]{0,3}",
    ) {
        let trimmed = filter_daos(&daos, &FilterSpec::new().with_search(query.clone()));
        let padded = filter_daos(&daos, &FilterSpec::new().with_search(format!("{left}{query}{right}")));
        prop_assert_eq!(trimmed, padded);
    }

    #[test]
    fn unmatched_search_is_empty(daos in arb_daos()) {
        // Generated text never contains digits.
        let result = filter_daos(&daos, &FilterSpec::new().with_search("0123"));
        prop_assert!(result.is_empty());
    }
}
