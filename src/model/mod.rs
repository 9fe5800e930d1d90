//! Entity model for neodb
//!
//! Two record types make up the model:
//! - `NearEarthObject`: catalog entry keyed by its primary designation
//! - `CloseApproach`: one recorded pass of an NEO near Earth
//!
//! The two reference each other through arena handles (`NeoId`,
//! `ApproachId`) owned by the database. Links are empty at construction
//! and are filled in exactly once, by `NeoDatabase::new`.

mod approach;
mod neo;
mod time;

pub use approach::{ApproachId, CloseApproach};
pub use neo::{NearEarthObject, NeoId, NeoRecord};
pub use time::{cd_to_datetime, datetime_to_str, CAD_TIME_FORMAT, OUTPUT_TIME_FORMAT};
