use crate::{
    order::{KeyComparator, OrderDirection, OrderExpr, OrderKey, OrderSpec, SortOptions},
    row::{Row, normalize_scalar, resolve_path},
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

///
/// OrderProgram
///
/// Compiled multi-key sort. Entry expressions are parsed once (sign
/// stripped, paths pre-split); application extracts one key vector per row
/// plus a positional tie-breaker, then sorts.
///
/// Stability is guaranteed by the tie-breaker, not by the underlying sort
/// algorithm: rows whose full key vectors tie keep their pre-sort relative
/// order.
///

pub struct OrderProgram<T> {
    entries: Vec<OrderEntry<T>>,
    reverse: bool,
    comparator: Option<KeyComparator>,
}

struct OrderEntry<T> {
    access: CompiledAccess<T>,
    direction: OrderDirection,
}

enum CompiledAccess<T> {
    Identity,
    Path(Vec<String>),
    Accessor(super::OrderAccessor<T>),
}

// One row joined with its comparison keys; lives only for one sort call.
struct KeyedRow<T> {
    row: T,
    keys: Vec<OrderKey>,
    tie: OrderKey,
}

impl<T: Row> OrderProgram<T> {
    /// Compile a sort specification into an executable program.
    ///
    /// An empty specification normalizes to a single ascending identity
    /// entry.
    #[must_use]
    pub fn compile(spec: &OrderSpec<T>, options: &SortOptions) -> Self {
        let mut entries: Vec<OrderEntry<T>> = spec.iter().map(OrderEntry::parse).collect();
        if entries.is_empty() {
            entries.push(OrderEntry {
                access: CompiledAccess::Identity,
                direction: OrderDirection::Asc,
            });
        }

        Self {
            entries,
            reverse: options.reverse,
            comparator: options.comparator.clone(),
        }
    }

    /// Sort rows under this program and return them in final order.
    #[must_use]
    pub fn apply(&self, rows: Vec<T>) -> Vec<T> {
        let mut keyed: Vec<KeyedRow<T>> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| self.key_row(row, index))
            .collect();

        // Tie-breakers are always decisive, so an unstable sort is safe.
        keyed.sort_unstable_by(|left, right| self.compare_rows(left, right));

        keyed.into_iter().map(|keyed| keyed.row).collect()
    }

    #[expect(clippy::cast_precision_loss)]
    fn key_row(&self, row: T, index: usize) -> KeyedRow<T> {
        let keys = self
            .entries
            .iter()
            .map(|entry| OrderKey::new(entry.access.extract(&row, index), index))
            .collect();

        KeyedRow {
            row,
            keys,
            tie: OrderKey::new(Value::Number(index as f64), index),
        }
    }

    fn compare_rows(&self, left: &KeyedRow<T>, right: &KeyedRow<T>) -> Ordering {
        for (entry, (left_key, right_key)) in self
            .entries
            .iter()
            .zip(left.keys.iter().zip(right.keys.iter()))
        {
            let cmp = self.compare_keys(left_key, right_key);
            if cmp != Ordering::Equal {
                return self.apply_reverse(entry.direction.apply(cmp));
            }
        }

        // Per-entry directions do not touch the tie-break; only the global
        // reverse flag does.
        self.apply_reverse(self.compare_keys(&left.tie, &right.tie))
    }

    fn compare_keys(&self, left: &OrderKey, right: &OrderKey) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator(left, right),
            None => canonical_cmp(&left.value, &right.value),
        }
    }

    const fn apply_reverse(&self, cmp: Ordering) -> Ordering {
        if self.reverse { cmp.reverse() } else { cmp }
    }
}

impl<T> OrderEntry<T> {
    // Strip the leading sign and pre-split the dotted path.
    fn parse(expr: &OrderExpr<T>) -> Self {
        match expr {
            OrderExpr::Accessor(accessor) => Self {
                access: CompiledAccess::Accessor(accessor.clone()),
                direction: OrderDirection::Asc,
            },
            OrderExpr::Key(key) => {
                let (direction, path) = match key.strip_prefix('-') {
                    Some(rest) => (OrderDirection::Desc, rest),
                    None => (
                        OrderDirection::Asc,
                        key.strip_prefix('+').unwrap_or(key.as_str()),
                    ),
                };

                let access = if path.is_empty() {
                    CompiledAccess::Identity
                } else {
                    CompiledAccess::Path(path.split('.').map(ToString::to_string).collect())
                };

                Self { access, direction }
            }
        }
    }
}

impl<T: Row> CompiledAccess<T> {
    fn extract(&self, row: &T, index: usize) -> Value {
        match self {
            Self::Identity => resolve_path(row, &[], index),
            Self::Path(segments) => resolve_path(row, segments, index),
            Self::Accessor(accessor) => normalize_scalar(accessor(row), index),
        }
    }
}
