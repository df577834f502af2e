//! The data graph: vertex and edge records loaded from SQLite, plus the
//! glue that lets compiled filter expressions act as view predicates.

pub use create::{data_graph_from_iter, data_graph_from_sqlite};
pub use filter::{EdgeFilter, VertexFilter};
pub use info::ViewInfo;
pub use view::GraphView;

use crate::{
    graph::{AdjacencyList, EdgeListGraph, PropertyGraph, VertexListGraph},
    types::{Capacity, ELabel, VId, VLabel},
};
use derive_more::{Display, From};

mod create;
mod display;
mod filter;
mod info;
mod view;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} ({})", vid, vlabel)]
pub struct VertexData {
    pub vid: VId,
    pub vlabel: VLabel,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} [{}]", elabel, capacity)]
pub struct EdgeData {
    pub elabel: ELabel,
    pub capacity: Capacity,
}

pub type DataGraph = AdjacencyList<VertexData, EdgeData>;

/// A graph, or a view of one, carrying data graph records.
pub trait DataView:
    VertexListGraph + EdgeListGraph + PropertyGraph<VertexProperty = VertexData, EdgeProperty = EdgeData>
{
}

impl<G> DataView for G where
    G: VertexListGraph
        + EdgeListGraph
        + PropertyGraph<VertexProperty = VertexData, EdgeProperty = EdgeData>
{
}

#[derive(Debug, Display, From)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Sqlite(rusqlite::Error),
    #[from(ignore)]
    #[display(fmt = "duplicate vertex {}", _0)]
    DuplicateVertex(VId),
    #[from(ignore)]
    #[display(fmt = "edge ({}, {}) names unknown vertex {}", _0, _1, _2)]
    UnknownVertex(VId, VId, VId),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
