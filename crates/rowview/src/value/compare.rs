use crate::value::Value;
use std::cmp::Ordering;

/// Total comparator over extracted values.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Text compares case-insensitively; compounds compare by the positional
/// index they carry, never by content. Mixed-variant comparisons are
/// rank-only and deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Object(a), Value::Object(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => Value::fold_ci(a).cmp(&Value::fold_ci(b)),
        _ => Ordering::Equal,
    }
}
