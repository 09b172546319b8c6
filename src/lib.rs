//! Voyagr: trip planning from the command line.
//!
//! A step-by-step planning wizard over a growing itinerary, a heuristic
//! reader for free-text flight requests, and a travel calendar whose
//! repeating events expand into dated occurrences.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod events;
pub mod model;
pub mod query;
pub mod recurrence;
pub mod storage;
pub mod wizard;
