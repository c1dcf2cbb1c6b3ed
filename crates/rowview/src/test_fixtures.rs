use crate::{
    row::{Field, Row},
    value::Value,
};

///
/// User
///
/// Nested compound fixture with a single text field and no custom
/// representation, so it orders by position when used as a sort leaf.
///

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Row for User {
    fn field(&self, name: &str) -> Field<'_> {
        match name {
            "name" => Field::Value(Value::Text(self.name.clone())),
            _ => Field::Missing,
        }
    }
}

///
/// Profile
///
/// Row fixture with one nested compound field and one scalar field.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub user: User,
    pub age: i64,
}

impl Profile {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            user: User::new(name),
            age,
        }
    }
}

impl Row for Profile {
    fn field(&self, name: &str) -> Field<'_> {
        match name {
            "user" => Field::Row(&self.user),
            "age" => Field::Value(Value::from(self.age)),
            _ => Field::Missing,
        }
    }
}

///
/// Pair
///
/// Flat two-field numeric fixture for multi-key ordering tests.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pair {
    pub a: i64,
    pub b: i64,
}

impl Pair {
    pub const fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }
}

impl Row for Pair {
    fn field(&self, name: &str) -> Field<'_> {
        match name {
            "a" => Field::Value(Value::from(self.a)),
            "b" => Field::Value(Value::from(self.b)),
            _ => Field::Missing,
        }
    }
}

///
/// ReleaseTag
///
/// Compound fixture exposing a primitive representation, exercising the
/// unwrap path during extraction.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReleaseTag {
    pub build: u32,
}

impl ReleaseTag {
    pub const fn numbered(build: u32) -> Self {
        Self { build }
    }
}

impl Row for ReleaseTag {
    fn field(&self, _name: &str) -> Field<'_> {
        Field::Missing
    }

    fn value_repr(&self) -> Option<Value> {
        Some(Value::from(self.build))
    }
}
