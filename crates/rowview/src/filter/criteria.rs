use crate::value::Value;
use std::collections::BTreeMap;

///
/// Criteria
///
/// Nested filter criteria reconstituted from flat dotted-path entries, so a
/// matcher expecting nested shape works against flat user-entered criteria.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Criteria {
    Value(Value),
    Node(BTreeMap<String, Criteria>),
}

impl Criteria {
    /// Build a nested criteria tree from flat dotted paths.
    ///
    /// Intermediate nodes are auto-created; a scalar already sitting on an
    /// intermediate segment is replaced by a node rather than erroring.
    #[must_use]
    pub fn from_flat<'a, I>(flat: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut root = BTreeMap::new();
        for (path, value) in flat {
            insert_path(&mut root, path, value);
        }

        Self::Node(root)
    }

    /// Look up one direct child of a node.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Node(children) => children.get(name),
            Self::Value(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Node(children) => children.is_empty(),
            Self::Value(_) => false,
        }
    }
}

fn insert_path(node: &mut BTreeMap<String, Criteria>, path: &str, value: &Value) {
    match path.split_once('.') {
        None => {
            node.insert(path.to_string(), Criteria::Value(value.clone()));
        }
        Some((head, rest)) => {
            let child = node
                .entry(head.to_string())
                .or_insert_with(|| Criteria::Node(BTreeMap::new()));
            if let Criteria::Value(_) = child {
                *child = Criteria::Node(BTreeMap::new());
            }
            if let Criteria::Node(children) = child {
                insert_path(children, rest, value);
            }
        }
    }
}
