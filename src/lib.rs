//! neodb - Near-Earth object close approach explorer
//!
//! Links a catalog of near-Earth objects with their recorded close
//! approaches to Earth, and answers queries over the linked data by
//! composable attribute filters.
//!
//! ```ignore
//! use neodb::database::NeoDatabase;
//! use neodb::extract::{load_approaches, load_neos};
//! use neodb::filters::{create_filters, Criteria};
//! use neodb::query::limit;
//!
//! let db = NeoDatabase::new(load_neos("data/neos.csv")?, load_approaches("data/cad.json")?);
//! let filters = create_filters(&Criteria::new().with_hazardous(true));
//! for approach in limit(db.query(&filters), Some(10)) {
//!     println!("{}", approach?);
//! }
//! ```

pub mod cli;
pub mod database;
pub mod extract;
pub mod filters;
pub mod model;
pub mod observability;
pub mod query;
pub mod write;
