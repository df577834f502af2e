//! Predicate-filtered views of a graph.
//!
//! A [`FilteredGraph`] wraps a graph handle together with an edge predicate
//! and a vertex predicate, and answers every structural query by asking the
//! wrapped graph and dropping what the predicates reject. Nothing is copied
//! or cached: each traversal re-derives its result lazily, so two
//! traversals of the same view never interfere and a view is as cheap to
//! build as the predicates it holds.
//!
//! Visibility rules:
//!
//! * a vertex is visible iff the vertex predicate accepts it, whether or not
//!   any of its edges are visible;
//! * [`EdgeListGraph::edges`] keeps an edge iff the edge predicate accepts it
//!   and both endpoints are visible;
//! * [`IncidenceGraph::out_edges`] checks the edge predicate and the target,
//!   [`BidirectionalGraph::in_edges`] the edge predicate and the source. The
//!   anchor vertex itself is never re-checked;
//! * [`IncidenceGraph::edge`] checks the edge predicate only.
//!
//! # Counts are not filtered
//!
//! [`VertexListGraph::num_vertices`] and [`EdgeListGraph::num_edges`] return
//! the totals of the *wrapped* graph, so
//! `view.vertices().count() == view.num_vertices()` does not hold once the
//! vertex predicate rejects anything. Descriptor indices of the wrapped
//! graph still span `0..num_vertices()`, and external storage sized from the
//! count (see [`IndexPropertyMap`](crate::property_map::IndexPropertyMap))
//! keeps working for every vertex the view yields. Count the iterator when
//! the visible total is what you need.

pub use iter::{EdgePred, FilterIter, InEdgePred, OutEdgePred, VertexPred};

use crate::{
    graph::{
        BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, PropertyGraph,
        PropertyGraphMut, VertexListGraph,
    },
    predicate::{InSubset, KeepAll, NotInSubset, Predicate},
};

mod iter;

/// A lazily filtered view of `G`.
///
/// `G` is normally a reference: `&Graph` for a read-only view, `&mut Graph`
/// for a view that writes properties through to the graph. The wrapped
/// handle and both predicates are fixed at construction.
#[derive(Clone, Copy)]
pub struct FilteredGraph<G, EP, VP = KeepAll> {
    graph: G,
    edge_pred: EP,
    vertex_pred: VP,
}

/// The subgraph induced by a vertex set.
pub type VertexSubsetFilter<'s, G, S> = FilteredGraph<G, KeepAll, InSubset<'s, S>>;

/// The subgraph induced by the complement of a vertex set.
pub type VertexSubsetComplementFilter<'s, G, S> =
    FilteredGraph<G, KeepAll, NotInSubset<'s, S>>;

impl<G, EP> FilteredGraph<G, EP> {
    /// Create a view filtering edges only; every vertex stays visible.
    pub fn new(graph: G, edge_pred: EP) -> Self {
        Self::with_vertex_filter(graph, edge_pred, KeepAll)
    }
}

impl<G, EP, VP> FilteredGraph<G, EP, VP> {
    pub fn with_vertex_filter(graph: G, edge_pred: EP, vertex_pred: VP) -> Self {
        Self {
            graph,
            edge_pred,
            vertex_pred,
        }
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn edge_predicate(&self) -> &EP {
        &self.edge_pred
    }

    pub fn vertex_predicate(&self) -> &VP {
        &self.vertex_pred
    }

    /// Drops the predicates and gives the wrapped handle back.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

/// A view of the subgraph induced by the vertices in `set`.
pub fn vertex_subset_filter<G, S: ?Sized>(graph: G, set: &S) -> VertexSubsetFilter<'_, G, S> {
    FilteredGraph::with_vertex_filter(graph, KeepAll, InSubset::new(set))
}

/// A view of the subgraph induced by the vertices not in `set`.
pub fn vertex_subset_complement_filter<G, S: ?Sized>(
    graph: G,
    set: &S,
) -> VertexSubsetComplementFilter<'_, G, S> {
    FilteredGraph::with_vertex_filter(graph, KeepAll, NotInSubset::new(set))
}

impl<G, EP, VP> GraphBase for FilteredGraph<G, EP, VP>
where
    G: GraphBase,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allows_parallel_edges(&self) -> bool {
        self.graph.allows_parallel_edges()
    }

    fn source(&self, e: Self::Edge) -> Self::Vertex {
        self.graph.source(e)
    }

    fn target(&self, e: Self::Edge) -> Self::Vertex {
        self.graph.target(e)
    }
}

impl<G, EP, VP> VertexListGraph for FilteredGraph<G, EP, VP>
where
    G: VertexListGraph,
    VP: Predicate<G::Vertex>,
{
    type Vertices<'a> = FilterIter<G::Vertices<'a>, VertexPred<'a, VP>> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        FilterIter::new(self.graph.vertices(), VertexPred::new(&self.vertex_pred))
    }

    /// The unfiltered total of the wrapped graph.
    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }
}

impl<G, EP, VP> EdgeListGraph for FilteredGraph<G, EP, VP>
where
    G: EdgeListGraph,
    EP: Predicate<G::Edge>,
    VP: Predicate<G::Vertex>,
{
    type Edges<'a> = FilterIter<G::Edges<'a>, EdgePred<'a, G, EP, VP>> where Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        FilterIter::new(
            self.graph.edges(),
            EdgePred::new(&self.graph, &self.edge_pred, &self.vertex_pred),
        )
    }

    /// The unfiltered total of the wrapped graph.
    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }
}

impl<G, EP, VP> IncidenceGraph for FilteredGraph<G, EP, VP>
where
    G: IncidenceGraph,
    EP: Predicate<G::Edge>,
    VP: Predicate<G::Vertex>,
{
    type OutEdges<'a> = FilterIter<G::OutEdges<'a>, OutEdgePred<'a, G, EP, VP>>
    where
        Self: 'a;

    fn out_edges(&self, v: Self::Vertex) -> Self::OutEdges<'_> {
        FilterIter::new(
            self.graph.out_edges(v),
            OutEdgePred::new(&self.graph, &self.edge_pred, &self.vertex_pred),
        )
    }

    fn edge(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Edge> {
        self.graph.edge(u, v).filter(|e| self.edge_pred.test(e))
    }
}

impl<G, EP, VP> BidirectionalGraph for FilteredGraph<G, EP, VP>
where
    G: BidirectionalGraph,
    EP: Predicate<G::Edge>,
    VP: Predicate<G::Vertex>,
{
    type InEdges<'a> = FilterIter<G::InEdges<'a>, InEdgePred<'a, G, EP, VP>>
    where
        Self: 'a;

    fn in_edges(&self, v: Self::Vertex) -> Self::InEdges<'_> {
        FilterIter::new(
            self.graph.in_edges(v),
            InEdgePred::new(&self.graph, &self.edge_pred, &self.vertex_pred),
        )
    }
}

impl<G, EP, VP> PropertyGraph for FilteredGraph<G, EP, VP>
where
    G: PropertyGraph,
{
    type VertexProperty = G::VertexProperty;
    type EdgeProperty = G::EdgeProperty;

    fn vertex_property(&self, v: Self::Vertex) -> &Self::VertexProperty {
        self.graph.vertex_property(v)
    }

    fn edge_property(&self, e: Self::Edge) -> &Self::EdgeProperty {
        self.graph.edge_property(e)
    }
}

impl<G, EP, VP> PropertyGraphMut for FilteredGraph<G, EP, VP>
where
    G: PropertyGraphMut,
{
    fn vertex_property_mut(&mut self, v: Self::Vertex) -> &mut Self::VertexProperty {
        self.graph.vertex_property_mut(v)
    }

    fn edge_property_mut(&mut self, e: Self::Edge) -> &mut Self::EdgeProperty {
        self.graph.edge_property_mut(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, EdgeId, VertexId};
    use std::collections::HashSet;

    fn diamond() -> (AdjacencyList<(), u32>, Vec<VertexId>) {
        let mut g = AdjacencyList::directed();
        let vs: Vec<_> = (0..4).map(|_| g.add_vertex(())).collect();
        g.add_edge(vs[0], vs[1], 1);
        g.add_edge(vs[0], vs[2], 2);
        g.add_edge(vs[1], vs[3], 3);
        g.add_edge(vs[2], vs[3], 4);
        (g, vs)
    }

    fn weights<G>(g: &G, edges: impl Iterator<Item = EdgeId>) -> Vec<u32>
    where
        G: PropertyGraph<Edge = EdgeId, EdgeProperty = u32>,
    {
        edges.map(|e| *g.edge_property(e)).collect()
    }

    #[test]
    fn test_out_edges_check_target_only() {
        let (g, vs) = diamond();
        let hidden = vec![vs[0], vs[2]];
        let view = FilteredGraph::with_vertex_filter(&g, KeepAll, NotInSubset::new(&hidden));
        assert_eq!(weights(&view, view.out_edges(vs[0])), vec![1]);
        assert_eq!(view.out_degree(vs[0]), 1);
        assert_eq!(weights(&view, view.in_edges(vs[3])), vec![3]);
        assert_eq!(view.in_degree(vs[1]), 0);
        assert_eq!(weights(&view, view.edges()), vec![3]);
    }

    #[test]
    fn test_edge_skips_vertex_predicate() {
        let (g, vs) = diamond();
        let hidden = vec![vs[1]];
        let even = |e: &EdgeId| g.edge_property(*e) % 2 == 0;
        let view = FilteredGraph::with_vertex_filter(&g, even, NotInSubset::new(&hidden));
        assert!(view.edge(vs[0], vs[1]).is_none());
        assert!(view.edge(vs[0], vs[2]).is_some());
        assert!(view.edge(vs[1], vs[3]).is_none());
        let hidden = vec![vs[3]];
        let view = vertex_subset_complement_filter(&g, &hidden);
        assert!(view.edge(vs[2], vs[3]).is_some());
        assert_eq!(view.edge_range(vs[2], vs[3]).count(), 0);
    }

    #[test]
    fn test_nested_views() {
        let (g, vs) = diamond();
        let odd = |e: &EdgeId| g.edge_property(*e) % 2 == 1;
        let outer: HashSet<_> = vs[..3].iter().copied().collect();
        let view = vertex_subset_filter(FilteredGraph::new(&g, odd), &outer);
        assert_eq!(weights(&view, view.edges()), vec![1]);
        assert_eq!(
            view.adjacent_vertices(vs[0]).collect::<Vec<_>>(),
            vec![vs[1]]
        );
        assert_eq!(view.num_edges(), 4);
        assert_eq!(view.vertices().count(), 3);
        assert_eq!(view.num_vertices(), 4);
    }

    #[test]
    fn test_restartable() {
        let (g, vs) = diamond();
        let view = FilteredGraph::new(&g, |e: &EdgeId| e.index() != 0);
        let mut first = view.out_edges(vs[0]);
        let second: Vec<_> = view.out_edges(vs[0]).collect();
        assert_eq!(first.next(), second.first().copied());
        assert_eq!(first.next(), None);
        assert_eq!(view.vertices().rev().next(), Some(vs[3]));
    }

    #[test]
    fn test_write_through() {
        let (mut g, vs) = diamond();
        let e = g.edge(vs[1], vs[3]).unwrap();
        {
            let mut view = FilteredGraph::new(&mut g, |e: &EdgeId| e.index() < 3);
            assert_eq!(view.put_edge_property(e, 30), 3);
        }
        assert_eq!(*g.edge_property(e), 30);
    }
}
