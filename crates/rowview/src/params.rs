use crate::{
    filter::{Criteria, SharedMatcher, ValueEq},
    order::{OrderSpec, SortOptions},
    page::PageWindow,
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// DataOptions
///
/// Per-call stage switches; every stage defaults to enabled.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DataOptions {
    pub apply_filter: bool,
    pub apply_sort: bool,
    pub apply_paging: bool,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            apply_filter: true,
            apply_sort: true,
            apply_paging: true,
        }
    }
}

///
/// FilterOptions
///
/// Matcher selection and leaf-comparison overrides. An explicit `matcher`
/// wins over name lookup; `matcher_name` falls back to the default matcher
/// name when absent.
///

#[derive(Clone)]
pub struct FilterOptions<T> {
    pub matcher: Option<SharedMatcher<T>>,
    pub matcher_name: Option<String>,
    pub comparator: Option<Arc<ValueEq>>,
}

impl<T> Default for FilterOptions<T> {
    fn default() -> Self {
        Self {
            matcher: None,
            matcher_name: None,
            comparator: None,
        }
    }
}

impl<T> fmt::Debug for FilterOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOptions")
            .field("matcher", &self.matcher.as_ref().map(|_| ".."))
            .field("matcher_name", &self.matcher_name)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .finish()
    }
}

///
/// QueryParams
///
/// Declarative view parameters: flat filter criteria, the ordered sort
/// specification, the page window, and per-call options.
///

#[derive(Clone, Debug)]
pub struct QueryParams<T> {
    pub filter: BTreeMap<String, Value>,
    pub order: OrderSpec<T>,
    pub sort_options: SortOptions,
    pub page: PageWindow,
    pub data_options: DataOptions,
    pub filter_options: FilterOptions<T>,
}

impl<T> QueryParams<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// BUILDERS
    ///

    /// Add one flat dotted-path filter entry.
    #[must_use]
    pub fn filter(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(path.into(), value.into());
        self
    }

    #[must_use]
    pub fn order(mut self, order: impl Into<OrderSpec<T>>) -> Self {
        self.order = order.into();
        self
    }

    #[must_use]
    pub fn page(mut self, number: usize, size: usize) -> Self {
        self.page = PageWindow::new(number, size);
        self
    }

    #[must_use]
    pub fn data_options(mut self, options: DataOptions) -> Self {
        self.data_options = options;
        self
    }

    ///
    /// FILTER STATE
    ///

    /// Whether any usable criteria entry is present.
    #[must_use]
    pub fn has_active_filter(&self) -> bool {
        self.filter.values().any(|value| !value.is_undefined())
    }

    /// Nested criteria tree over the active flat entries.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria::from_flat(
            self.filter
                .iter()
                .filter(|(_, value)| !value.is_undefined()),
        )
    }
}

impl<T> Default for QueryParams<T> {
    fn default() -> Self {
        Self {
            filter: BTreeMap::new(),
            order: OrderSpec::new(),
            sort_options: SortOptions::default(),
            page: PageWindow::default(),
            data_options: DataOptions::default(),
            filter_options: FilterOptions::default(),
        }
    }
}

///
/// TESTS
///
