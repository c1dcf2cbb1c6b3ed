use crate::{
    error::PipelineError,
    filter::Criteria,
    row::{Field, Row},
    value::Value,
};
use std::{collections::BTreeMap, sync::Arc};

/// Name the default matcher registers under.
pub const DEFAULT_MATCHER_NAME: &str = "substring";

/// Injected per-leaf equality test replacing the default match rules.
pub type ValueEq = dyn Fn(&Value, &Value) -> bool + Send + Sync;

///
/// RowMatcher
///
/// Matching capability the filter stage depends on. The pipeline hands the
/// full input sequence, the nested criteria, and an optional injected
/// comparator to whichever implementation configuration selected.
///

pub trait RowMatcher<T> {
    fn matches(&self, rows: &[T], criteria: &Criteria, eq: Option<&ValueEq>) -> Vec<T>;
}

/// Shared handle to a registered or injected matcher.
pub type SharedMatcher<T> = Arc<dyn RowMatcher<T> + Send + Sync>;

///
/// SubstringMatcher
///
/// Generic criteria matcher: every criteria leaf must match the row value
/// at the same path. Text matches by case-insensitive substring, other
/// scalars by canonical equality; a missing field never matches. Node
/// children AND together.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SubstringMatcher;

impl<T: Row + Clone> RowMatcher<T> for SubstringMatcher {
    fn matches(&self, rows: &[T], criteria: &Criteria, eq: Option<&ValueEq>) -> Vec<T> {
        rows.iter()
            .filter(|row| matches_criteria(*row, criteria, eq))
            .cloned()
            .collect()
    }
}

fn matches_criteria(row: &dyn Row, criteria: &Criteria, eq: Option<&ValueEq>) -> bool {
    match criteria {
        Criteria::Node(children) => children
            .iter()
            .all(|(name, child)| matches_child(row, name, child, eq)),
        Criteria::Value(expected) => {
            let actual = row.value_repr().or_else(|| row.text_repr().map(Value::Text));
            match actual {
                Some(actual) => leaf_matches(&actual, expected, eq),
                None => false,
            }
        }
    }
}

fn matches_child(row: &dyn Row, name: &str, child: &Criteria, eq: Option<&ValueEq>) -> bool {
    match (row.field(name), child) {
        (Field::Row(next), Criteria::Node(_)) => matches_criteria(next, child, eq),
        (Field::Value(actual), Criteria::Value(expected)) => leaf_matches(&actual, expected, eq),
        (Field::Row(next), Criteria::Value(expected)) => {
            // A compound against a scalar leaf only matches through its
            // primitive or textual representation.
            let actual = next
                .value_repr()
                .or_else(|| next.text_repr().map(Value::Text));
            match actual {
                Some(actual) => leaf_matches(&actual, expected, eq),
                None => false,
            }
        }
        (Field::Value(_), Criteria::Node(_)) | (Field::Missing, _) => false,
    }
}

fn leaf_matches(actual: &Value, expected: &Value, eq: Option<&ValueEq>) -> bool {
    if let Some(eq) = eq {
        return eq(actual, expected);
    }

    match actual.text_contains_ci(expected) {
        Some(hit) => hit,
        None => actual.canonical_eq(expected),
    }
}

///
/// MatcherRegistry
///
/// Named matcher services. The default construction seeds the generic
/// substring matcher under [`DEFAULT_MATCHER_NAME`]; resolving a name that
/// was never registered is a configuration error, never masked.
///

pub struct MatcherRegistry<T> {
    matchers: BTreeMap<String, SharedMatcher<T>>,
}

impl<T> MatcherRegistry<T> {
    /// Build an empty registry with no matchers at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            matchers: BTreeMap::new(),
        }
    }

    /// Register a matcher under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, matcher: SharedMatcher<T>) {
        self.matchers.insert(name.into(), matcher);
    }

    /// Resolve a matcher by name.
    pub fn resolve(&self, name: &str) -> Result<SharedMatcher<T>, PipelineError> {
        self.matchers
            .get(name)
            .cloned()
            .ok_or_else(|| PipelineError::unknown_matcher(name))
    }
}

impl<T: Row + Clone + 'static> Default for MatcherRegistry<T> {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_MATCHER_NAME, Arc::new(SubstringMatcher));
        registry
    }
}
