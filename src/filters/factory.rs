//! Translates user criteria into attribute filters

use chrono::NaiveDate;

use super::attribute::{
    DateFilter, DiameterFilter, DistanceFilter, Filter, HazardousFilter, VelocityFilter,
};
use super::ops::ComparisonOp;

/// Optional query criteria. Every field left as `None` is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches approaches on exactly this date
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Matches approaches on or after this date
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Matches approaches on or before this date
    pub fn until_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_distance(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.distance_min = min;
        self.distance_max = max;
        self
    }

    pub fn with_velocity(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.velocity_min = min;
        self.velocity_max = max;
        self
    }

    pub fn with_diameter(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.diameter_min = min;
        self.diameter_max = max;
        self
    }

    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Creates one filter per criterion that is present.
///
/// Criteria are not cross-checked: an exact date together with a date
/// range yields all three filters, and an unsatisfiable combination
/// simply matches nothing.
pub fn create_filters(criteria: &Criteria) -> Vec<Filter> {
    let mut filters = Vec::new();

    let dates = [
        (ComparisonOp::Eq, criteria.date),
        (ComparisonOp::Ge, criteria.start_date),
        (ComparisonOp::Le, criteria.end_date),
    ];
    for (op, date) in dates {
        if let Some(date) = date {
            filters.push(DateFilter::new(op, date).into());
        }
    }

    let ranges = [
        (ComparisonOp::Ge, criteria.distance_min, criteria.velocity_min, criteria.diameter_min),
        (ComparisonOp::Le, criteria.distance_max, criteria.velocity_max, criteria.diameter_max),
    ];
    for (op, distance, velocity, diameter) in ranges {
        if let Some(distance) = distance {
            filters.push(DistanceFilter::new(op, distance).into());
        }
        if let Some(velocity) = velocity {
            filters.push(VelocityFilter::new(op, velocity).into());
        }
        if let Some(diameter) = diameter {
            filters.push(DiameterFilter::new(op, diameter).into());
        }
    }

    if let Some(hazardous) = criteria.hazardous {
        filters.push(HazardousFilter::new(ComparisonOp::Eq, hazardous).into());
    }

    filters
}
