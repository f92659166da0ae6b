//! Adoption aggregation — per-repository, then per-corpus statistics.

mod aggregator;

pub use aggregator::{Aggregator, RepositoryProfile};
