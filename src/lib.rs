//! Lazy predicate-filtered views over graphs.

pub mod data;
pub mod filtered;
pub mod front_end;
pub mod graph;
pub mod predicate;
pub mod property_map;
pub mod types;
