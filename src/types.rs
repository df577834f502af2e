//! Scalar types of the data graph.

/// The external vertex id type.
pub type VId = i64;

/// The vertex label type.
pub type VLabel = i64;

/// The edge label type.
pub type ELabel = i64;

/// The edge capacity type.
pub type Capacity = i64;
