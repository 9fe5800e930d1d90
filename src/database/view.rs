//! Linked view of a close approach

use std::fmt;
use std::ops::Deref;

use crate::model::{ApproachId, CloseApproach, NearEarthObject};

/// A close approach together with its resolved NEO.
///
/// Views borrow from the database and are cheap to copy. `neo()` is
/// `None` only for approaches whose designation matched no NEO.
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    id: ApproachId,
    approach: &'a CloseApproach,
    neo: Option<&'a NearEarthObject>,
}

impl<'a> ApproachView<'a> {
    pub(crate) fn new(
        id: ApproachId,
        approach: &'a CloseApproach,
        neo: Option<&'a NearEarthObject>,
    ) -> Self {
        Self { id, approach, neo }
    }

    pub fn id(&self) -> ApproachId {
        self.id
    }

    pub fn approach(&self) -> &'a CloseApproach {
        self.approach
    }

    /// The linked NEO, if the join succeeded
    pub fn neo(&self) -> Option<&'a NearEarthObject> {
        self.neo
    }

    /// Designation the approach was recorded under
    pub fn designation(&self) -> &'a str {
        self.approach.designation()
    }
}

impl Deref for ApproachView<'_> {
    type Target = CloseApproach;

    fn deref(&self) -> &Self::Target {
        self.approach
    }
}

impl fmt::Display for ApproachView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fullname = match self.neo {
            Some(neo) => neo.fullname(),
            None => self.designation().to_string(),
        };
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            fullname,
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}
