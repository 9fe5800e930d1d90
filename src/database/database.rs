//! NeoDatabase: owns both entity arenas and the lookup indexes

use crate::filters::ApproachFilter;
use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::query::QueryIter;

use super::index::NeoIndex;
use super::view::ApproachView;

/// In-memory database of NEOs and their close approaches.
///
/// The entity graph is immutable once `new` returns. Every accessor takes
/// `&self`, so a built database can be shared freely between readers.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    index: NeoIndex,
    unresolved: usize,
}

impl NeoDatabase {
    /// Builds the database, indexing NEOs and linking every approach.
    ///
    /// Approaches keep their input order; that order is the canonical
    /// iteration order for queries. Links already present on the inputs
    /// are discarded and rebuilt.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let neo_count = neos.len().to_string();
        let approach_count = approaches.len().to_string();
        let scope = ObservationScope::with_fields(
            "DATABASE_BUILD",
            &[("neos", &neo_count), ("approaches", &approach_count)],
        );

        let mut index = NeoIndex::with_capacity(neos.len());
        for position in 0..neos.len() {
            neos[position].clear_approaches();
            let neo = &neos[position];
            let outcome = index.insert(NeoId(position), neo);

            if let Some(displaced) = outcome.replaced_designation {
                log_event_with_fields(
                    Event::DuplicateDesignation,
                    &[("designation", neo.designation())],
                );
                if let Some(name) = neos[displaced.0].name() {
                    index.remove_name(name, displaced);
                }
            }
            if let (Some(_), Some(name)) = (outcome.replaced_name, neo.name()) {
                log_event_with_fields(Event::DuplicateName, &[("name", name)]);
            }
        }

        let mut unresolved = 0;
        for (position, approach) in approaches.iter_mut().enumerate() {
            let neo_id = index.lookup_designation(approach.designation());
            approach.link(neo_id);

            match neo_id {
                Some(id) => neos[id.0].push_approach(ApproachId(position)),
                None => unresolved += 1,
            }
        }

        if unresolved > 0 {
            log_event_with_fields(Event::JoinMiss, &[("count", &unresolved.to_string())]);
        }

        scope.complete_with_fields(&[("unresolved", &unresolved.to_string())]);

        Self {
            neos,
            approaches,
            index,
            unresolved,
        }
    }

    /// Looks up an NEO by its primary designation (exact match)
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.index
            .lookup_designation(designation)
            .map(|id| &self.neos[id.0])
    }

    /// Looks up an NEO by its IAU name (exact match)
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.index.lookup_name(name).map(|id| &self.neos[id.0])
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn approach(&self, id: ApproachId) -> Option<ApproachView<'_>> {
        self.approaches.get(id.0).map(|approach| self.view(id, approach))
    }

    /// All NEOs in input order, duplicates included
    pub fn neos(&self) -> impl Iterator<Item = &NearEarthObject> + '_ {
        self.neos.iter()
    }

    /// All approaches in canonical order
    pub fn approaches(&self) -> impl Iterator<Item = ApproachView<'_>> + '_ {
        self.approaches
            .iter()
            .enumerate()
            .map(move |(position, approach)| self.view(ApproachId(position), approach))
    }

    /// Approaches linked to the given NEO, in canonical order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        neo.approaches().iter().filter_map(move |id| self.approach(*id))
    }

    /// Lazily yields every approach that satisfies all `filters`.
    ///
    /// An empty filter slice yields every approach. Nothing is evaluated
    /// until the iterator is advanced.
    pub fn query<'a, F: ApproachFilter>(&'a self, filters: &'a [F]) -> QueryIter<'a, F> {
        QueryIter::new(self, filters)
    }

    pub fn len_neos(&self) -> usize {
        self.neos.len()
    }

    pub fn len_approaches(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches whose designation matched no NEO
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }

    fn view<'a>(&'a self, id: ApproachId, approach: &'a CloseApproach) -> ApproachView<'a> {
        let neo = approach.neo().and_then(|neo_id| self.neos.get(neo_id.0));
        ApproachView::new(id, approach, neo)
    }
}
