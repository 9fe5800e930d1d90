//! Lazy conjunctive filtering over the database

use std::iter::FusedIterator;

use crate::database::{ApproachView, NeoDatabase};
use crate::filters::{ApproachFilter, FilterResult};
use crate::model::ApproachId;
use crate::observability::{log_event_with_fields, Event};

/// Iterator returned by `NeoDatabase::query`.
///
/// Yields each approach that satisfies every filter, in canonical order.
/// If a filter cannot be evaluated the error is yielded once and the
/// iterator then ends.
pub struct QueryIter<'a, F> {
    db: &'a NeoDatabase,
    filters: &'a [F],
    next: usize,
    failed: bool,
}

impl<'a, F: ApproachFilter> QueryIter<'a, F> {
    pub(crate) fn new(db: &'a NeoDatabase, filters: &'a [F]) -> Self {
        Self {
            db,
            filters,
            next: 0,
            failed: false,
        }
    }

    fn matches_all(&self, view: &ApproachView<'_>) -> FilterResult<bool> {
        for filter in self.filters {
            if !filter.matches(view)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'a, F: ApproachFilter> Iterator for QueryIter<'a, F> {
    type Item = FilterResult<ApproachView<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(view) = self.db.approach(ApproachId(self.next)) {
            self.next += 1;

            match self.matches_all(&view) {
                Ok(true) => return Some(Ok(view)),
                Ok(false) => continue,
                Err(e) => {
                    self.failed = true;
                    log_event_with_fields(
                        Event::QueryRejected,
                        &[("criterion", e.criterion()), ("code", e.code().code())],
                    );
                    return Some(Err(e));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.db.len_approaches().saturating_sub(self.next);
        (0, Some(remaining))
    }
}

impl<'a, F: ApproachFilter> FusedIterator for QueryIter<'a, F> {}
