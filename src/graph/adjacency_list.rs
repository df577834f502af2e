use super::{
    BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, PropertyGraph,
    PropertyGraphMut, VertexListGraph,
};
use derive_more::{Display, From, Into};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    iter::Enumerate,
    ops::Range,
    slice,
};

/// A vertex descriptor: the position of the vertex in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", _0)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An edge descriptor.
///
/// The descriptor remembers the orientation it was handed out with, so an
/// undirected edge reached from either endpoint reports that endpoint as its
/// source. Two descriptors of the same edge compare equal regardless of
/// orientation.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{}->{}", source, target)]
pub struct EdgeId {
    index: usize,
    source: VertexId,
    target: VertexId,
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.index
    }

    fn reversed(self) -> Self {
        Self {
            index: self.index,
            source: self.target,
            target: self.source,
        }
    }
}

impl PartialEq for EdgeId {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for EdgeId {}

impl Hash for EdgeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for EdgeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

struct VertexNode<V> {
    property: V,
    out_edges: Vec<usize>,
    in_edges: Vec<usize>,
}

struct EdgeNode<E> {
    source: VertexId,
    target: VertexId,
    property: E,
}

impl<E> EdgeNode<E> {
    fn id(&self, index: usize) -> EdgeId {
        EdgeId {
            index,
            source: self.source,
            target: self.target,
        }
    }
}

/// An adjacency-list graph with bundled vertex and edge properties.
///
/// Directed graphs keep separate out- and in-edge lists per vertex. In an
/// undirected graph every edge is listed once at each endpoint (once for a
/// self loop) and that single list serves both directions. Parallel edges
/// are always allowed.
pub struct AdjacencyList<V = (), E = ()> {
    directed: bool,
    vertices: Vec<VertexNode<V>>,
    edges: Vec<EdgeNode<E>>,
}

impl<V, E> AdjacencyList<V, E> {
    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: vec![],
            edges: vec![],
        }
    }

    pub fn add_vertex(&mut self, property: V) -> VertexId {
        self.vertices.push(VertexNode {
            property,
            out_edges: vec![],
            in_edges: vec![],
        });
        VertexId(self.vertices.len() - 1)
    }

    /// Add an edge from `u` to `v`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not belong to this graph.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, property: E) -> EdgeId {
        assert!(
            u.0 < self.vertices.len() && v.0 < self.vertices.len(),
            "edge ({}, {}) names a vertex outside this graph",
            u,
            v
        );
        let index = self.edges.len();
        self.edges.push(EdgeNode {
            source: u,
            target: v,
            property,
        });
        if self.directed {
            self.vertices[u.0].out_edges.push(index);
            self.vertices[v.0].in_edges.push(index);
        } else {
            self.vertices[u.0].out_edges.push(index);
            if u != v {
                self.vertices[v.0].out_edges.push(index);
            }
        }
        self.edges[index].id(index)
    }

    fn vertex_node(&self, v: VertexId) -> &VertexNode<V> {
        debug_assert!(
            v.0 < self.vertices.len(),
            "vertex {} does not belong to this graph",
            v
        );
        &self.vertices[v.0]
    }

    fn edge_node(&self, e: EdgeId) -> &EdgeNode<E> {
        debug_assert!(
            self.owns(e),
            "edge {} (#{}) does not belong to this graph",
            e,
            e.index
        );
        &self.edges[e.index]
    }

    fn owns(&self, e: EdgeId) -> bool {
        self.edges.get(e.index).map_or(false, |node| {
            (node.source, node.target) == (e.source, e.target)
                || (!self.directed && (node.source, node.target) == (e.target, e.source))
        })
    }

    fn incidence(&self, v: VertexId, outgoing: bool) -> Incidence<'_, E> {
        let node = self.vertex_node(v);
        let list = if outgoing || !self.directed {
            &node.out_edges
        } else {
            &node.in_edges
        };
        Incidence {
            edges: &self.edges,
            iter: list.iter(),
            anchor: v,
            outgoing,
        }
    }
}

impl<V, E> Default for AdjacencyList<V, E> {
    fn default() -> Self {
        Self::directed()
    }
}

/// Iterates over every vertex in insertion order.
#[derive(Clone)]
pub struct Vertices {
    range: Range<usize>,
}

impl Iterator for Vertices {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Vertices {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId)
    }
}

impl ExactSizeIterator for Vertices {}

/// Iterates over every edge in insertion order, in its stored orientation.
pub struct Edges<'a, E> {
    iter: Enumerate<slice::Iter<'a, EdgeNode<E>>>,
}

impl<'a, E> Clone for Edges<'a, E> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, E> Iterator for Edges<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(index, node)| node.id(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for Edges<'a, E> {}

/// Iterates over the edges incident to one vertex, oriented away from it
/// (`outgoing`) or towards it.
pub struct Incidence<'a, E> {
    edges: &'a [EdgeNode<E>],
    iter: slice::Iter<'a, usize>,
    anchor: VertexId,
    outgoing: bool,
}

impl<'a, E> Clone for Incidence<'a, E> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges,
            iter: self.iter.clone(),
            anchor: self.anchor,
            outgoing: self.outgoing,
        }
    }
}

impl<'a, E> Iterator for Incidence<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|&index| {
            let e = self.edges[index].id(index);
            let anchored = if self.outgoing { e.source } else { e.target };
            if anchored == self.anchor {
                e
            } else {
                e.reversed()
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for Incidence<'a, E> {}

impl<V, E> GraphBase for AdjacencyList<V, E> {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn source(&self, e: EdgeId) -> VertexId {
        e.source
    }

    fn target(&self, e: EdgeId) -> VertexId {
        e.target
    }
}

impl<V, E> VertexListGraph for AdjacencyList<V, E> {
    type Vertices<'a> = Vertices where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        Vertices {
            range: 0..self.vertices.len(),
        }
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E> EdgeListGraph for AdjacencyList<V, E> {
    type Edges<'a> = Edges<'a, E> where Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        Edges {
            iter: self.edges.iter().enumerate(),
        }
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<V, E> IncidenceGraph for AdjacencyList<V, E> {
    type OutEdges<'a> = Incidence<'a, E> where Self: 'a;

    fn out_edges(&self, v: VertexId) -> Self::OutEdges<'_> {
        self.incidence(v, true)
    }

    fn out_degree(&self, v: VertexId) -> usize {
        self.vertex_node(v).out_edges.len()
    }
}

impl<V, E> BidirectionalGraph for AdjacencyList<V, E> {
    type InEdges<'a> = Incidence<'a, E> where Self: 'a;

    fn in_edges(&self, v: VertexId) -> Self::InEdges<'_> {
        self.incidence(v, false)
    }

    fn in_degree(&self, v: VertexId) -> usize {
        let node = self.vertex_node(v);
        if self.directed {
            node.in_edges.len()
        } else {
            node.out_edges.len()
        }
    }
}

impl<V, E> PropertyGraph for AdjacencyList<V, E> {
    type VertexProperty = V;
    type EdgeProperty = E;

    fn vertex_property(&self, v: VertexId) -> &V {
        &self.vertex_node(v).property
    }

    fn edge_property(&self, e: EdgeId) -> &E {
        &self.edge_node(e).property
    }
}

impl<V, E> PropertyGraphMut for AdjacencyList<V, E> {
    fn vertex_property_mut(&mut self, v: VertexId) -> &mut V {
        debug_assert!(
            v.0 < self.vertices.len(),
            "vertex {} does not belong to this graph",
            v
        );
        &mut self.vertices[v.0].property
    }

    fn edge_property_mut(&mut self, e: EdgeId) -> &mut E {
        debug_assert!(
            self.owns(e),
            "edge {} (#{}) does not belong to this graph",
            e,
            e.index
        );
        &mut self.edges[e.index].property
    }
}
