//! The attribute filter family

use std::fmt;

use chrono::NaiveDate;

use crate::database::ApproachView;

use super::errors::{FilterError, FilterResult};
use super::ops::ComparisonOp;

/// A binary comparison between one attribute of a close approach and a
/// stored reference value.
///
/// Implementors supply the operator, the reference value and `get`, the
/// key extraction. The default `get` fails with `UnsupportedCriterion`:
/// a filter that reaches it is missing its attribute, which is a
/// programming error rather than a data error.
pub trait AttributeFilter {
    /// Type of the compared attribute
    type Value: PartialOrd + fmt::Display;

    fn op(&self) -> ComparisonOp;

    fn value(&self) -> &Self::Value;

    /// Name used in error messages and `Display`
    fn name(&self) -> &'static str {
        "AttributeFilter"
    }

    /// Extracts the comparison key from an approach.
    ///
    /// `Ok(None)` means the key lives on the NEO and the approach has none.
    fn get(&self, _approach: &ApproachView<'_>) -> FilterResult<Option<Self::Value>> {
        Err(FilterError::unsupported_criterion(self.name()))
    }

    /// Evaluates `key <op> value`. A missing key is a non-match.
    fn evaluate(&self, approach: &ApproachView<'_>) -> FilterResult<bool> {
        Ok(match self.get(approach)? {
            Some(key) => self.op().apply(&key, self.value()),
            None => false,
        })
    }
}

/// A predicate a query can apply to each approach
pub trait ApproachFilter {
    fn matches(&self, approach: &ApproachView<'_>) -> FilterResult<bool>;
}

impl<T: AttributeFilter> ApproachFilter for T {
    fn matches(&self, approach: &ApproachView<'_>) -> FilterResult<bool> {
        self.evaluate(approach)
    }
}

macro_rules! attribute_filter {
    (
        $(#[$meta:meta])*
        $filter:ident, $value:ty, |$approach:ident| $key:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $filter {
            op: ComparisonOp,
            value: $value,
        }

        impl $filter {
            pub fn new(op: ComparisonOp, value: $value) -> Self {
                Self { op, value }
            }
        }

        impl AttributeFilter for $filter {
            type Value = $value;

            fn op(&self) -> ComparisonOp {
                self.op
            }

            fn value(&self) -> &$value {
                &self.value
            }

            fn name(&self) -> &'static str {
                stringify!($filter)
            }

            fn get(&self, $approach: &ApproachView<'_>) -> FilterResult<Option<$value>> {
                Ok($key)
            }
        }

        impl fmt::Display for $filter {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(op={}, value={})", self.name(), self.op, self.value)
            }
        }
    };
}

attribute_filter!(
    /// Compares the calendar date of the approach; time of day is ignored
    DateFilter,
    NaiveDate,
    |approach| Some(approach.time().date())
);

attribute_filter!(
    /// Compares the nominal approach distance (au)
    DistanceFilter,
    f64,
    |approach| Some(approach.distance())
);

attribute_filter!(
    /// Compares the relative approach velocity (km/s)
    VelocityFilter,
    f64,
    |approach| Some(approach.velocity())
);

attribute_filter!(
    /// Compares the linked NEO's diameter (km)
    DiameterFilter,
    f64,
    |approach| approach.neo().map(|neo| neo.diameter())
);

attribute_filter!(
    /// Compares the linked NEO's potentially-hazardous flag
    HazardousFilter,
    bool,
    |approach| approach.neo().map(|neo| neo.hazardous())
);

/// Any of the built-in attribute filters
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Date(DateFilter),
    Distance(DistanceFilter),
    Velocity(VelocityFilter),
    Diameter(DiameterFilter),
    Hazardous(HazardousFilter),
}

impl ApproachFilter for Filter {
    fn matches(&self, approach: &ApproachView<'_>) -> FilterResult<bool> {
        match self {
            Filter::Date(f) => f.evaluate(approach),
            Filter::Distance(f) => f.evaluate(approach),
            Filter::Velocity(f) => f.evaluate(approach),
            Filter::Diameter(f) => f.evaluate(approach),
            Filter::Hazardous(f) => f.evaluate(approach),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Date(inner) => fmt::Display::fmt(inner, f),
            Filter::Distance(inner) => fmt::Display::fmt(inner, f),
            Filter::Velocity(inner) => fmt::Display::fmt(inner, f),
            Filter::Diameter(inner) => fmt::Display::fmt(inner, f),
            Filter::Hazardous(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl From<DateFilter> for Filter {
    fn from(f: DateFilter) -> Self {
        Filter::Date(f)
    }
}

impl From<DistanceFilter> for Filter {
    fn from(f: DistanceFilter) -> Self {
        Filter::Distance(f)
    }
}

impl From<VelocityFilter> for Filter {
    fn from(f: VelocityFilter) -> Self {
        Filter::Velocity(f)
    }
}

impl From<DiameterFilter> for Filter {
    fn from(f: DiameterFilter) -> Self {
        Filter::Diameter(f)
    }
}

impl From<HazardousFilter> for Filter {
    fn from(f: HazardousFilter) -> Self {
        Filter::Hazardous(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::NeoDatabase;
    use crate::model::{cd_to_datetime, ApproachId, CloseApproach, NearEarthObject};

    fn db() -> NeoDatabase {
        NeoDatabase::new(
            vec![
                NearEarthObject::new("433")
                    .with_name("Eros")
                    .with_diameter(16.84),
                NearEarthObject::new("2020 AB"),
            ],
            vec![
                CloseApproach::new("433", cd_to_datetime("2020-Jan-01 23:59").unwrap(), 0.15, 5.2),
                CloseApproach::new("2020 AB", cd_to_datetime("2020-Jan-02 00:00").unwrap(), 0.02, 12.0),
                CloseApproach::new("999", cd_to_datetime("2020-Jan-03 00:00").unwrap(), 0.3, 1.0),
            ],
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Relies entirely on the default key extraction
    struct MagnitudeFilter {
        value: f64,
    }

    impl AttributeFilter for MagnitudeFilter {
        type Value = f64;

        fn op(&self) -> ComparisonOp {
            ComparisonOp::Ge
        }

        fn value(&self) -> &f64 {
            &self.value
        }
    }

    #[test]
    fn test_date_filter_ignores_time_of_day() {
        let db = db();
        let view = db.approach(ApproachId(0)).unwrap();

        assert!(DateFilter::new(ComparisonOp::Eq, date(2020, 1, 1)).evaluate(&view).unwrap());
        assert!(!DateFilter::new(ComparisonOp::Ge, date(2020, 1, 2)).evaluate(&view).unwrap());
        assert!(DateFilter::new(ComparisonOp::Le, date(2020, 1, 1)).evaluate(&view).unwrap());
    }

    #[test]
    fn test_scalar_filters() {
        let db = db();
        let view = db.approach(ApproachId(1)).unwrap();

        assert!(DistanceFilter::new(ComparisonOp::Le, 0.05).evaluate(&view).unwrap());
        assert!(!DistanceFilter::new(ComparisonOp::Ge, 0.05).evaluate(&view).unwrap());
        assert!(VelocityFilter::new(ComparisonOp::Ge, 12.0).evaluate(&view).unwrap());
        assert!(!VelocityFilter::new(ComparisonOp::Le, 11.9).evaluate(&view).unwrap());
    }

    #[test]
    fn test_diameter_filter_excludes_unknown_diameter() {
        let db = db();
        let unknown = db.approach(ApproachId(1)).unwrap();
        let known = db.approach(ApproachId(0)).unwrap();

        let min = DiameterFilter::new(ComparisonOp::Ge, 1.0);
        let max = DiameterFilter::new(ComparisonOp::Le, 100.0);

        assert!(!min.evaluate(&unknown).unwrap());
        assert!(!max.evaluate(&unknown).unwrap());
        assert!(min.evaluate(&known).unwrap());
        assert!(max.evaluate(&known).unwrap());
    }

    #[test]
    fn test_neo_filters_false_for_unresolved_approach() {
        let db = db();
        let orphan = db.approach(ApproachId(2)).unwrap();

        assert!(!HazardousFilter::new(ComparisonOp::Eq, false).evaluate(&orphan).unwrap());
        assert!(!DiameterFilter::new(ComparisonOp::Le, 1e9).evaluate(&orphan).unwrap());
        assert!(DistanceFilter::new(ComparisonOp::Ge, 0.0).evaluate(&orphan).unwrap());
    }

    #[test]
    fn test_default_get_is_unsupported() {
        let db = db();
        let view = db.approach(ApproachId(0)).unwrap();

        let err = MagnitudeFilter { value: 1.0 }.evaluate(&view).unwrap_err();
        assert_eq!(err.criterion(), "AttributeFilter");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_filter_enum_dispatch() {
        let db = db();
        let view = db.approach(ApproachId(0)).unwrap();

        let filter: Filter = HazardousFilter::new(ComparisonOp::Eq, false).into();
        assert!(filter.matches(&view).unwrap());
    }

    #[test]
    fn test_display() {
        let filter: Filter = DateFilter::new(ComparisonOp::Ge, date(2020, 1, 1)).into();
        assert_eq!(filter.to_string(), "DateFilter(op=ge, value=2020-01-01)");

        let filter = DistanceFilter::new(ComparisonOp::Le, 0.5);
        assert_eq!(filter.to_string(), "DistanceFilter(op=le, value=0.5)");
    }
}
