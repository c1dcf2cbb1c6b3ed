use crate::value::Value;

///
/// ValueTag
///
/// Stable value-variant tag used by ordering and diagnostics surfaces.
///
/// IMPORTANT:
/// Declaration order doubles as cross-variant sort precedence: the four
/// known tags in lexical order of their labels, then `null`, then
/// `undefined` last. Changing it changes observable sort output.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Bool = 1,
    Number = 2,
    Object = 3,
    Text = 4,
    Null = 5,
    Undefined = 6,
}

impl ValueTag {
    /// Stable byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Object => "object",
            Self::Text => "string",
            Self::Null => "null",
            Self::Undefined => "undefined",
        }
    }
}

/// Stable variant tag for one value.
#[must_use]
pub(crate) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::Number(_) => ValueTag::Number,
        Value::Object(_) => ValueTag::Object,
        Value::Text(_) => ValueTag::Text,
        Value::Null => ValueTag::Null,
        Value::Undefined => ValueTag::Undefined,
    }
}
