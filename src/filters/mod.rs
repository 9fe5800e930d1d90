//! Attribute filters over close approaches
//!
//! Each filter compares one attribute of a linked close approach against a
//! reference value using `==`, `>=` or `<=`:
//!
//! | Filter            | Key                              |
//! |-------------------|----------------------------------|
//! | `DateFilter`      | calendar date of the approach    |
//! | `DistanceFilter`  | nominal distance (au)            |
//! | `VelocityFilter`  | relative velocity (km/s)         |
//! | `DiameterFilter`  | linked NEO's diameter (km)       |
//! | `HazardousFilter` | linked NEO's hazardous flag      |
//!
//! NEO-keyed filters evaluate to false for an approach with no linked NEO.
//! Comparisons against an unknown (NaN) diameter are always false.
//!
//! `create_filters` turns user `Criteria` into the filters a query needs.

mod attribute;
mod errors;
mod factory;
mod ops;

pub use attribute::{
    ApproachFilter, AttributeFilter, DateFilter, DiameterFilter, DistanceFilter, Filter,
    HazardousFilter, VelocityFilter,
};
pub use errors::{FilterError, FilterErrorCode, FilterResult, Severity};
pub use factory::{create_filters, Criteria};
pub use ops::ComparisonOp;
