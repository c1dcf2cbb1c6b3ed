//! In-memory filter → sort → page pipeline for grid-style data views.
//!
//! The pipeline turns an ordered sequence of rows into a filtered, sorted,
//! and paged view driven by declarative parameters: flat dotted-path filter
//! criteria, a signed multi-key sort specification, and a 1-based page
//! window. Ordering is deterministic across heterogeneous field types and
//! stability is enforced explicitly through positional tie-breakers.
#![warn(unreachable_pub)]

pub mod error;
pub mod filter;
pub mod obs;
pub mod order;
pub mod page;
pub mod params;
pub mod pipeline;
pub mod row;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, matchers, registries, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        order::{OrderDirection, OrderSpec},
        page::PageWindow,
        params::QueryParams,
        pipeline::DataPipeline,
        row::{Field, Row},
        value::Value,
    };
}
