use crate::value::{Value, tag};

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering: boolean, number, object,
/// string (lexical order of the tag labels), then null, then undefined
/// sorting last.
///
#[must_use]
pub(crate) const fn canonical_rank(value: &Value) -> u8 {
    // Tags are 1-based; rank is 0-based.
    tag::canonical_tag(value).to_u8() - 1
}
