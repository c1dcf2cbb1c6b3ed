mod program;


use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};

// re-exports
pub use program::OrderProgram;

///
/// OrderDirection
/// Ordering direction for one sort entry (applied after filtering).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Apply this direction to one comparison outcome.
    #[must_use]
    pub(crate) const fn apply(self, cmp: Ordering) -> Ordering {
        match self {
            Self::Asc => cmp,
            Self::Desc => cmp.reverse(),
        }
    }
}

/// Accessor entries read one comparable value straight off a row,
/// bypassing dotted-path resolution. Always ascending.
pub type OrderAccessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

///
/// OrderExpr
///
/// One uncompiled sort entry: either a signed dotted-path key
/// (`[+|-]path`, default ascending, empty path = identity) or an accessor
/// function.
///

#[derive(Clone)]
pub enum OrderExpr<T> {
    Key(String),
    Accessor(OrderAccessor<T>),
}

impl<T> fmt::Debug for OrderExpr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

impl<T> From<&str> for OrderExpr<T> {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl<T> From<String> for OrderExpr<T> {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

///
/// OrderSpec
///
/// Ordered list of sort entries; insertion order defines
/// primary → secondary tie-break precedence.
///

#[derive(Clone, Debug, Deref, IntoIterator)]
pub struct OrderSpec<T> {
    #[into_iterator(owned, ref)]
    exprs: Vec<OrderExpr<T>>,
}

impl<T> OrderSpec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { exprs: Vec::new() }
    }

    /// Append one entry, keeping insertion order significant.
    pub fn push(&mut self, expr: impl Into<OrderExpr<T>>) {
        self.exprs.push(expr.into());
    }

    /// Fluent variant of [`push`](Self::push).
    #[must_use]
    pub fn then(mut self, expr: impl Into<OrderExpr<T>>) -> Self {
        self.push(expr);
        self
    }
}

impl<T> Default for OrderSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A single bare entry normalizes to a one-element list.
impl<T> From<OrderExpr<T>> for OrderSpec<T> {
    fn from(expr: OrderExpr<T>) -> Self {
        Self { exprs: vec![expr] }
    }
}

impl<T> From<&str> for OrderSpec<T> {
    fn from(key: &str) -> Self {
        OrderExpr::from(key).into()
    }
}

impl<T> From<String> for OrderSpec<T> {
    fn from(key: String) -> Self {
        OrderExpr::from(key).into()
    }
}

impl<T> From<Vec<&str>> for OrderSpec<T> {
    fn from(keys: Vec<&str>) -> Self {
        Self {
            exprs: keys.into_iter().map(OrderExpr::from).collect(),
        }
    }
}

impl<T> FromIterator<OrderExpr<T>> for OrderSpec<T> {
    fn from_iter<I: IntoIterator<Item = OrderExpr<T>>>(iter: I) -> Self {
        Self {
            exprs: iter.into_iter().collect(),
        }
    }
}

///
/// OrderKey
///
/// One comparison key for one row: the extracted value plus the row's
/// original position.
///

#[derive(Clone, Debug, PartialEq)]
pub struct OrderKey {
    pub value: Value,
    pub index: usize,
}

impl OrderKey {
    #[must_use]
    pub(crate) const fn new(value: Value, index: usize) -> Self {
        Self { value, index }
    }
}

/// Injected comparator applied to every key comparison, tie-breakers
/// included.
pub type KeyComparator = Arc<dyn Fn(&OrderKey, &OrderKey) -> Ordering + Send + Sync>;

///
/// SortOptions
///
/// Per-call sort switches: a global reverse flag and an optional injected
/// key comparator. Reversal flips every comparison outcome, tie-breaks
/// included, which preserves relative order semantics under reversal.
///

#[derive(Clone, Default)]
pub struct SortOptions {
    pub reverse: bool,
    pub comparator: Option<KeyComparator>,
}

impl fmt::Debug for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("reverse", &self.reverse)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .finish()
    }
}
