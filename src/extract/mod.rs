//! Extraction of NEO and close approach data from disk
//!
//! - `load_neos`: NEO catalog CSV (`pdes`, `name`, `pha`, `diameter`, ...)
//! - `load_approaches`: NASA close approach JSON (`fields` + `data` rows)
//!
//! Optional NEO fields never fail to load; they normalize to defaults.
//! Required approach fields (time, distance, velocity) must parse.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, load_approaches_from_reader, ApproachRecord};
pub use errors::{ExtractError, ExtractResult};
pub use neos::{load_neos, load_neos_from_reader};
