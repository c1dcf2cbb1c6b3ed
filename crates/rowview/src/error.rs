use thiserror::Error as ThisError;

///
/// PipelineError
///
/// Configuration errors surfaced synchronously by the pipeline.
///
/// Normal data conditions never error: empty input, an empty sort
/// specification, pages beyond the end of the data, and malformed filter
/// paths all produce empty or pass-through results instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PipelineError {
    /// A matcher was requested by name but never registered.
    /// Surfaced at resolution time, before any row is touched.
    #[error("unknown matcher: {name}")]
    UnknownMatcher { name: String },
}

impl PipelineError {
    /// Construct an unknown-matcher resolution error.
    pub(crate) fn unknown_matcher(name: impl Into<String>) -> Self {
        Self::UnknownMatcher { name: name.into() }
    }
}
