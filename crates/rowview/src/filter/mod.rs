mod criteria;
mod matcher;

#[cfg(test)]
mod tests;

// re-exports
pub use criteria::Criteria;
pub use matcher::{
    DEFAULT_MATCHER_NAME, MatcherRegistry, RowMatcher, SharedMatcher, SubstringMatcher, ValueEq,
};
