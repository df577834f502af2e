//! Graph capability traits.
//!
//! A graph is anything that can hand out vertex and edge descriptors and
//! answer structural queries about them. The traits are split the same way
//! algorithms consume them, so a type only has to provide what it can
//! answer cheaply. `FilteredGraph` both consumes and implements them, which
//! is what lets views nest.

pub use adjacency_list::{AdjacencyList, EdgeId, VertexId};
pub use iter::{AdjacentVertices, EdgeRange};

use crate::property_map::{EdgePropertyMap, VertexPropertyMap};
use std::{fmt::Debug, hash::Hash};

pub mod adjacency_list;

mod iter;

/// Descriptor types and endpoint lookup.
pub trait GraphBase {
    /// A cheap, stable handle identifying a vertex.
    type Vertex: Copy + Eq + Hash + Debug;

    /// A cheap, stable handle identifying an edge.
    type Edge: Copy + Eq + Hash + Debug;

    fn is_directed(&self) -> bool;

    fn allows_parallel_edges(&self) -> bool {
        true
    }

    fn source(&self, e: Self::Edge) -> Self::Vertex;

    fn target(&self, e: Self::Edge) -> Self::Vertex;
}

pub trait VertexListGraph: GraphBase {
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_>;

    fn num_vertices(&self) -> usize;
}

pub trait EdgeListGraph: GraphBase {
    type Edges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_>;

    fn num_edges(&self) -> usize;
}

pub trait IncidenceGraph: GraphBase {
    type OutEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// The edges leaving `v`, each oriented so that `source(e) == v`.
    fn out_edges(&self, v: Self::Vertex) -> Self::OutEdges<'_>;

    fn out_degree(&self, v: Self::Vertex) -> usize {
        self.out_edges(v).count()
    }

    fn adjacent_vertices(&self, v: Self::Vertex) -> AdjacentVertices<'_, Self> {
        AdjacentVertices::new(self, self.out_edges(v))
    }

    /// Looks up an edge from `u` to `v`.
    fn edge(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Edge> {
        self.out_edges(u).find(|&e| self.target(e) == v)
    }

    /// All parallel edges from `u` to `v`.
    fn edge_range(&self, u: Self::Vertex, v: Self::Vertex) -> EdgeRange<'_, Self> {
        EdgeRange::new(self, self.out_edges(u), v)
    }
}

pub trait BidirectionalGraph: IncidenceGraph {
    type InEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// The edges entering `v`, each oriented so that `target(e) == v`.
    fn in_edges(&self, v: Self::Vertex) -> Self::InEdges<'_>;

    fn in_degree(&self, v: Self::Vertex) -> usize {
        self.in_edges(v).count()
    }
}

/// Bundled properties stored alongside every vertex and edge.
pub trait PropertyGraph: GraphBase {
    type VertexProperty;

    type EdgeProperty;

    fn vertex_property(&self, v: Self::Vertex) -> &Self::VertexProperty;

    fn edge_property(&self, e: Self::Edge) -> &Self::EdgeProperty;

    /// A read-only property map over edges projecting one field of the
    /// bundled edge property.
    fn edge_map<F, T>(&self, f: F) -> EdgePropertyMap<'_, Self, F, T>
    where
        F: Fn(&Self::EdgeProperty) -> T,
    {
        EdgePropertyMap::new(self, f)
    }

    /// A read-only property map over vertices projecting one field of the
    /// bundled vertex property.
    fn vertex_map<F, T>(&self, f: F) -> VertexPropertyMap<'_, Self, F, T>
    where
        F: Fn(&Self::VertexProperty) -> T,
    {
        VertexPropertyMap::new(self, f)
    }
}

pub trait PropertyGraphMut: PropertyGraph {
    fn vertex_property_mut(&mut self, v: Self::Vertex) -> &mut Self::VertexProperty;

    fn edge_property_mut(&mut self, e: Self::Edge) -> &mut Self::EdgeProperty;

    /// Replaces the property of `v`, returning the old one.
    fn put_vertex_property(
        &mut self,
        v: Self::Vertex,
        value: Self::VertexProperty,
    ) -> Self::VertexProperty {
        std::mem::replace(self.vertex_property_mut(v), value)
    }

    /// Replaces the property of `e`, returning the old one.
    fn put_edge_property(
        &mut self,
        e: Self::Edge,
        value: Self::EdgeProperty,
    ) -> Self::EdgeProperty {
        std::mem::replace(self.edge_property_mut(e), value)
    }
}

macro_rules! impl_graph_for_ref {
    ($($r:tt)*) => {
        impl<G: GraphBase + ?Sized> GraphBase for $($r)* G {
            type Vertex = G::Vertex;
            type Edge = G::Edge;

            fn is_directed(&self) -> bool {
                (**self).is_directed()
            }

            fn allows_parallel_edges(&self) -> bool {
                (**self).allows_parallel_edges()
            }

            fn source(&self, e: Self::Edge) -> Self::Vertex {
                (**self).source(e)
            }

            fn target(&self, e: Self::Edge) -> Self::Vertex {
                (**self).target(e)
            }
        }

        impl<G: VertexListGraph + ?Sized> VertexListGraph for $($r)* G {
            type Vertices<'a> = G::Vertices<'a> where Self: 'a;

            fn vertices(&self) -> Self::Vertices<'_> {
                (**self).vertices()
            }

            fn num_vertices(&self) -> usize {
                (**self).num_vertices()
            }
        }

        impl<G: EdgeListGraph + ?Sized> EdgeListGraph for $($r)* G {
            type Edges<'a> = G::Edges<'a> where Self: 'a;

            fn edges(&self) -> Self::Edges<'_> {
                (**self).edges()
            }

            fn num_edges(&self) -> usize {
                (**self).num_edges()
            }
        }

        impl<G: IncidenceGraph + ?Sized> IncidenceGraph for $($r)* G {
            type OutEdges<'a> = G::OutEdges<'a> where Self: 'a;

            fn out_edges(&self, v: Self::Vertex) -> Self::OutEdges<'_> {
                (**self).out_edges(v)
            }

            fn out_degree(&self, v: Self::Vertex) -> usize {
                (**self).out_degree(v)
            }

            fn edge(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Edge> {
                (**self).edge(u, v)
            }
        }

        impl<G: BidirectionalGraph + ?Sized> BidirectionalGraph for $($r)* G {
            type InEdges<'a> = G::InEdges<'a> where Self: 'a;

            fn in_edges(&self, v: Self::Vertex) -> Self::InEdges<'_> {
                (**self).in_edges(v)
            }

            fn in_degree(&self, v: Self::Vertex) -> usize {
                (**self).in_degree(v)
            }
        }

        impl<G: PropertyGraph + ?Sized> PropertyGraph for $($r)* G {
            type VertexProperty = G::VertexProperty;
            type EdgeProperty = G::EdgeProperty;

            fn vertex_property(&self, v: Self::Vertex) -> &Self::VertexProperty {
                (**self).vertex_property(v)
            }

            fn edge_property(&self, e: Self::Edge) -> &Self::EdgeProperty {
                (**self).edge_property(e)
            }
        }
    };
}

impl_graph_for_ref!(&);
impl_graph_for_ref!(&mut);

impl<G: PropertyGraphMut + ?Sized> PropertyGraphMut for &mut G {
    fn vertex_property_mut(&mut self, v: Self::Vertex) -> &mut Self::VertexProperty {
        (**self).vertex_property_mut(v)
    }

    fn edge_property_mut(&mut self, e: Self::Edge) -> &mut Self::EdgeProperty {
        (**self).edge_property_mut(e)
    }
}
