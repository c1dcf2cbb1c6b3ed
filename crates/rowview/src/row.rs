use crate::value::Value;

///
/// Field
///
/// Result of reading one named field from a row: a scalar leaf, a nested
/// compound that can be descended into, or nothing at all.
///

pub enum Field<'a> {
    Value(Value),
    Row(&'a dyn Row),
    Missing,
}

///
/// Row
///
/// Field-access capability implemented by anything the pipeline can filter
/// or sort. The pipeline never assumes structure beyond this trait.
///
/// `value_repr` and `text_repr` mirror a compound's custom primitive and
/// textual representations; the defaults mean "no representation distinct
/// from the universal default", which leaves the compound ordered by its
/// original position.
///

pub trait Row {
    fn field(&self, name: &str) -> Field<'_>;

    fn value_repr(&self) -> Option<Value> {
        None
    }

    fn text_repr(&self) -> Option<String> {
        None
    }
}

impl<T: Row + ?Sized> Row for &T {
    fn field(&self, name: &str) -> Field<'_> {
        (**self).field(name)
    }

    fn value_repr(&self) -> Option<Value> {
        (**self).value_repr()
    }

    fn text_repr(&self) -> Option<String> {
        (**self).text_repr()
    }
}

// Scalar sequences sort by identity: every Value is its own row.
impl Row for Value {
    fn field(&self, _name: &str) -> Field<'_> {
        Field::Missing
    }

    fn value_repr(&self) -> Option<Value> {
        match self {
            Self::Object(_) => None,
            other => Some(other.clone()),
        }
    }
}

/// Extract one comparable value from a row by dotted-path segments.
///
/// Empty segments mean identity. Walking through a missing or scalar
/// intermediate yields `Undefined`; a compound leaf is unwrapped through its
/// representations before falling back to position-ordered `Object`.
pub(crate) fn resolve_path(row: &dyn Row, segments: &[String], index: usize) -> Value {
    let Some((last, front)) = segments.split_last() else {
        return normalize_compound(row, index);
    };

    let mut current = row;
    for segment in front {
        match current.field(segment) {
            Field::Row(next) => current = next,
            Field::Value(_) | Field::Missing => return Value::Undefined,
        }
    }

    match current.field(last) {
        Field::Value(value) => normalize_scalar(value, index),
        Field::Row(leaf) => normalize_compound(leaf, index),
        Field::Missing => Value::Undefined,
    }
}

/// Re-key any compound stand-in onto the extracting row's position.
pub(crate) fn normalize_scalar(value: Value, index: usize) -> Value {
    match value {
        Value::Object(_) => Value::Object(index),
        other => other,
    }
}

// Unwrap a compound leaf: primitive representation first, then a custom
// textual representation, else position-ordered Object.
fn normalize_compound(row: &dyn Row, index: usize) -> Value {
    if let Some(value) = row.value_repr()
        && value.is_primitive()
    {
        return value;
    }

    if let Some(text) = row.text_repr() {
        return Value::Text(text);
    }

    Value::Object(index)
}

///
/// TESTS
///
