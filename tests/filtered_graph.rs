use fgraph::{
    filtered::{vertex_subset_complement_filter, vertex_subset_filter, FilteredGraph},
    graph::{
        AdjacencyList, BidirectionalGraph, EdgeId, EdgeListGraph, GraphBase, IncidenceGraph,
        PropertyGraph, PropertyGraphMut, VertexId, VertexListGraph,
    },
    predicate::{IsResidualEdge, KeepAll},
    property_map::{IndexPropertyMap, ReadPropertyMap, WritePropertyMap},
};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Vertices carry their external id; edges carry a capacity.
type Graph = AdjacencyList<u32, i64>;

fn triangle() -> (Graph, Vec<VertexId>) {
    let mut g = Graph::directed();
    let vs: Vec<_> = (1..=3).map(|id| g.add_vertex(id)).collect();
    g.add_edge(vs[0], vs[1], 5);
    g.add_edge(vs[1], vs[2], 0);
    g.add_edge(vs[0], vs[2], 1);
    (g, vs)
}

fn ids<G>(g: &G) -> Vec<u32>
where
    G: VertexListGraph + PropertyGraph<VertexProperty = u32>,
{
    g.vertices().map(|v| *g.vertex_property(v)).collect()
}

fn pairs<G>(g: &G, edges: impl Iterator<Item = G::Edge>) -> Vec<(u32, u32)>
where
    G: PropertyGraph<VertexProperty = u32>,
{
    edges
        .map(|e| (*g.vertex_property(g.source(e)), *g.vertex_property(g.target(e))))
        .collect()
}

#[test]
fn test_induced_subgraph() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[0], vs[2]].into_iter().collect();
    let view = vertex_subset_filter(&g, &s);
    assert_eq!(ids(&view), vec![1, 3]);
    assert_eq!(pairs(&view, view.edges()), vec![(1, 3)]);
    assert_eq!(pairs(&view, view.out_edges(vs[0])), vec![(1, 3)]);
    assert_eq!(
        view.adjacent_vertices(vs[0]).collect::<Vec<_>>(),
        vec![vs[2]]
    );
}

#[test]
fn test_complement_subgraph() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[0], vs[2]].into_iter().collect();
    let view = vertex_subset_complement_filter(&g, &s);
    assert_eq!(ids(&view), vec![2]);
    assert_eq!(view.edges().count(), 0);
    assert_eq!(view.out_degree(vs[1]), 0);
    assert_eq!(view.in_degree(vs[1]), 0);
}

#[test]
fn test_residual_edges() {
    let (g, _) = triangle();
    let mut rcap: HashMap<EdgeId, i64> = HashMap::new();
    let (e12, e23) = g.edges().take(2).collect_tuple().unwrap();
    rcap.put(e12, 5);
    rcap.put(e23, 0);
    let view = FilteredGraph::new(&g, IsResidualEdge::new(&rcap));
    assert_eq!(pairs(&view, view.edges()), vec![(1, 2)]);
    assert_eq!(ids(&view), vec![1, 2, 3]);

    let bundled = FilteredGraph::new(&g, IsResidualEdge::new(g.edge_map(|c: &i64| *c)));
    assert_eq!(pairs(&bundled, bundled.edges()), vec![(1, 2), (1, 3)]);
}

#[test]
fn test_counts_are_unfiltered() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[1]].into_iter().collect();
    let view = vertex_subset_filter(&g, &s);
    assert_eq!(view.num_vertices(), 3);
    assert_eq!(view.num_edges(), 3);
    assert_eq!(view.vertices().count(), 1);
    assert_eq!(view.edges().count(), 0);
    assert_ne!(view.vertices().count(), view.num_vertices());
}

#[test]
fn test_index_map_sized_by_num_vertices() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[2]].into_iter().collect();
    let view = vertex_subset_filter(&g, &s);
    let mut discovered = IndexPropertyMap::new(view.num_vertices(), false);
    for v in view.vertices() {
        discovered.put(v, true);
    }
    assert_eq!(discovered.as_slice(), &[false, false, true]);
    assert!(discovered.get(vs[2]));
}

#[test]
fn test_keep_all_is_identity() {
    let (g, vs) = triangle();
    let view = FilteredGraph::new(&g, KeepAll);
    assert_eq!(ids(&view), ids(&g));
    assert_eq!(view.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    for &v in &vs {
        assert_eq!(
            view.out_edges(v).collect::<Vec<_>>(),
            g.out_edges(v).collect::<Vec<_>>()
        );
        assert_eq!(
            view.in_edges(v).collect::<Vec<_>>(),
            g.in_edges(v).collect::<Vec<_>>()
        );
    }
    assert_eq!(view.is_directed(), g.is_directed());
}

#[test]
fn test_degree_is_count() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[1]].into_iter().collect();
    let view = vertex_subset_complement_filter(&g, &s);
    for &v in &vs {
        assert_eq!(view.out_degree(v), view.out_edges(v).count());
        assert_eq!(view.in_degree(v), view.in_edges(v).count());
    }
    assert_eq!(view.out_degree(vs[0]), 1);
}

#[test]
fn test_write_through() {
    let (mut g, vs) = triangle();
    let e = g.edge(vs[0], vs[1]).unwrap();
    {
        let mut view = FilteredGraph::new(&mut g, |e: &EdgeId| e.index() == 0);
        assert_eq!(view.put_edge_property(e, 7), 5);
        assert_eq!(*view.edge_property(e), 7);
        *view.vertex_property_mut(vs[2]) = 30;
    }
    assert_eq!(*g.edge_property(e), 7);
    assert_eq!(*g.vertex_property(vs[2]), 30);
}

#[test]
fn test_undirected_view() {
    let mut g: AdjacencyList<u32, i64> = AdjacencyList::undirected();
    let vs: Vec<_> = (1..=3).map(|id| g.add_vertex(id)).collect();
    g.add_edge(vs[0], vs[1], 1);
    g.add_edge(vs[1], vs[2], 1);
    let s: HashSet<_> = vec![vs[0], vs[1]].into_iter().collect();
    let view = vertex_subset_filter(&g, &s);
    assert!(!view.is_directed());
    assert_eq!(pairs(&view, view.out_edges(vs[1])), vec![(2, 1)]);
    assert_eq!(pairs(&view, view.edges()), vec![(1, 2)]);
}

#[test]
fn test_nested_views() {
    let (g, vs) = triangle();
    let s: HashSet<_> = vec![vs[0], vs[2]].into_iter().collect();
    let outer = FilteredGraph::new(
        vertex_subset_complement_filter(&g, &s),
        |e: &EdgeId| e.index() != 1,
    );
    assert_eq!(ids(&outer), vec![2]);
    assert_eq!(outer.edges().count(), 0);
    assert_eq!(outer.num_edges(), 3);
}
