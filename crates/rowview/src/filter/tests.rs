use crate::{
    error::PipelineError,
    filter::{Criteria, DEFAULT_MATCHER_NAME, MatcherRegistry, RowMatcher, SubstringMatcher},
    test_fixtures::Profile,
    value::Value,
};
use std::{collections::BTreeMap, sync::Arc};

// ---- helpers -----------------------------------------------------------

fn flat(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(path, value)| ((*path).to_string(), value.clone()))
        .collect()
}

fn people() -> Vec<Profile> {
    vec![
        Profile::new("ada", 36),
        Profile::new("grace", 85),
        Profile::new("adrian", 40),
    ]
}

#[test]
fn flat_paths_reconstitute_nested_shape() {
    let criteria = Criteria::from_flat(&flat(&[("user.name", Value::from("a"))]));

    let mut name = BTreeMap::new();
    name.insert("name".to_string(), Criteria::Value(Value::from("a")));
    let mut user = BTreeMap::new();
    user.insert("user".to_string(), Criteria::Node(name));
    assert_eq!(criteria, Criteria::Node(user));
}

#[test]
fn scalar_on_intermediate_segment_is_replaced_not_an_error() {
    let criteria = Criteria::from_flat(&flat(&[
        ("user", Value::from("x")),
        ("user.name", Value::from("a")),
    ]));

    let user = criteria.child("user").unwrap();
    assert_eq!(user.child("name"), Some(&Criteria::Value(Value::from("a"))));
}

#[test]
fn substring_match_is_case_insensitive() {
    let criteria = Criteria::from_flat(&flat(&[("user.name", Value::from("AD"))]));
    let matched = SubstringMatcher.matches(&people(), &criteria, None);
    let names: Vec<&str> = matched.iter().map(|p| p.user.name.as_str()).collect();
    assert_eq!(names, vec!["ada", "adrian"]);
}

#[test]
fn non_text_criteria_match_by_equality() {
    let criteria = Criteria::from_flat(&flat(&[("age", Value::from(85_i64))]));
    let matched = SubstringMatcher.matches(&people(), &criteria, None);
    assert_eq!(matched, vec![Profile::new("grace", 85)]);
}

#[test]
fn missing_field_never_matches() {
    let criteria = Criteria::from_flat(&flat(&[("nickname", Value::from("a"))]));
    assert!(SubstringMatcher.matches(&people(), &criteria, None).is_empty());
}

#[test]
fn multiple_leaves_and_together() {
    let criteria = Criteria::from_flat(&flat(&[
        ("user.name", Value::from("a")),
        ("age", Value::from(36_i64)),
    ]));
    let matched = SubstringMatcher.matches(&people(), &criteria, None);
    assert_eq!(matched, vec![Profile::new("ada", 36)]);
}

#[test]
fn injected_comparator_replaces_leaf_rules() {
    let criteria = Criteria::from_flat(&flat(&[("user.name", Value::from("ada"))]));
    // Exact, case-sensitive equality instead of substring containment.
    let exact = |actual: &Value, expected: &Value| actual == expected;
    let matched = SubstringMatcher.matches(&people(), &criteria, Some(&exact));
    let names: Vec<&str> = matched.iter().map(|p| p.user.name.as_str()).collect();
    assert_eq!(names, vec!["ada"]);
}

#[test]
fn empty_criteria_match_everything() {
    let criteria = Criteria::from_flat(&flat(&[]));
    assert!(criteria.is_empty());
    let matched = SubstringMatcher.matches(&people(), &criteria, None);
    assert_eq!(matched.len(), 3);
}

#[test]
fn registry_seeds_default_matcher() {
    let registry: MatcherRegistry<Profile> = MatcherRegistry::default();
    assert!(registry.resolve(DEFAULT_MATCHER_NAME).is_ok());
}

#[test]
fn unknown_matcher_is_a_configuration_error() {
    let registry: MatcherRegistry<Profile> = MatcherRegistry::default();
    assert_eq!(
        registry.resolve("fuzzy").err(),
        Some(PipelineError::UnknownMatcher {
            name: "fuzzy".to_string()
        })
    );
}

#[test]
fn registered_matcher_resolves_by_name() {
    struct TakeFirst;
    impl RowMatcher<Profile> for TakeFirst {
        fn matches(
            &self,
            rows: &[Profile],
            _criteria: &Criteria,
            _eq: Option<&crate::filter::ValueEq>,
        ) -> Vec<Profile> {
            rows.first().cloned().into_iter().collect()
        }
    }

    let mut registry: MatcherRegistry<Profile> = MatcherRegistry::default();
    registry.register("first", Arc::new(TakeFirst));
    let matcher = registry.resolve("first").unwrap();
    let criteria = Criteria::from_flat(&flat(&[]));
    assert_eq!(
        matcher.matches(&people(), &criteria, None),
        vec![Profile::new("ada", 36)]
    );
}
