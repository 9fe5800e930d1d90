//! Query engine for neodb
//!
//! # Execution flow
//!
//! 1. Walk approaches in canonical (input) order
//! 2. Keep an approach only if every filter matches (AND; no filters = all)
//! 3. Stop pulling as soon as the consumer's `limit` is reached
//!
//! Evaluation is lazy end to end: nothing past the last yielded result is
//! ever evaluated.

mod executor;
mod limit;

pub use executor::QueryIter;
pub use limit::limit;
