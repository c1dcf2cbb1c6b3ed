mod compare;
mod rank;
mod tag;


use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering};

// re-exports
pub use compare::canonical_cmp;
pub use tag::ValueTag;

///
/// Value
///
/// Tagged comparable value extracted from a row field.
///
/// `Object` stands in for any compound with no primitive representation;
/// it carries the positional index of the row it was extracted from, so two
/// compounds order by original position rather than by content.
/// `Undefined` marks an absent field and sorts after everything else.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    Object(usize),
    Null,
    Undefined,
}

impl Value {
    ///
    /// TYPES
    ///

    /// Returns true for the primitive variants (everything except `Object`).
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the value marks an absent field.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Stable variant tag used by ordering and diagnostics surfaces.
    #[must_use]
    pub const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// Stable rank used by all cross-variant ordering surfaces.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        rank::canonical_rank(self)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    ///
    /// TEXT COMPARISON
    ///

    pub(crate) fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }
        // Unicode fallback; full casefold is out of scope for now.
        Cow::Owned(s.to_lowercase())
    }

    /// Case-insensitive substring check for text values.
    #[must_use]
    pub fn text_contains_ci(&self, needle: &Self) -> Option<bool> {
        let (a, b) = (self.as_text()?, needle.as_text()?);
        Some(Self::fold_ci(a).contains(Self::fold_ci(b).as_ref()))
    }

    ///
    /// EQUALITY
    ///

    /// Equality under the canonical total order (case-insensitive for text).
    #[must_use]
    pub fn canonical_eq(&self, other: &Self) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    f32    => Number,
    f64    => Number,
    i8     => Number,
    i16    => Number,
    i32    => Number,
    u8     => Number,
    u16    => Number,
    u32    => Number,
    &str   => Text,
    String => Text,
}

impl From<i64> for Value {
    #[expect(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u64> for Value {
    #[expect(clippy::cast_precision_loss)]
    fn from(v: u64) -> Self {
        Self::Number(v as f64)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
