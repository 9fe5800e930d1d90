//! Linking database for neodb
//!
//! Built once from two flat collections, then read-only:
//!
//! 1. Index every NEO by designation (and by name when it has one)
//! 2. Resolve each approach's designation against the index
//! 3. Link both directions: approach -> NEO handle, NEO -> approach handles
//!
//! Construction is linear in the combined input size. Lookups by
//! designation or name are O(1) expected.
//!
//! # Degraded input
//!
//! - Duplicate designation: the most recently seen NEO wins the index slot.
//!   The displaced NEO also leaves the name index unless another NEO has
//!   taken its name since, so every NEO found by name is also found by
//!   its designation.
//! - Designations are join keys and are matched exactly, without trimming
//! - Join miss: the approach keeps an unresolved NEO link

mod database;
mod index;
mod view;

pub use database::NeoDatabase;
pub use index::{IndexOutcome, NeoIndex};
pub use view::ApproachView;
