use super::{EdgeData, VertexData};
use crate::{
    front_end::{types::Constraint, Context},
    graph::PropertyGraph,
    predicate::Predicate,
};

/// A compiled vertex expression, read against the records of `graph`.
pub struct VertexFilter<'g, G: ?Sized> {
    graph: &'g G,
    constraint: Constraint,
}

impl<'g, G: ?Sized> Clone for VertexFilter<'g, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            constraint: self.constraint.clone(),
        }
    }
}

impl<'g, G: ?Sized> std::fmt::Debug for VertexFilter<'g, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("VertexFilter").field(self.constraint.expr()).finish()
    }
}

impl<'g, G: ?Sized> VertexFilter<'g, G> {
    /// # Panics
    ///
    /// Panics if `constraint` was not compiled for [`Context::Vertex`].
    pub fn new(graph: &'g G, constraint: Constraint) -> Self {
        assert_eq!(
            constraint.context(),
            Context::Vertex,
            "edge expression used as a vertex filter"
        );
        Self { graph, constraint }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

impl<'g, G> Predicate<G::Vertex> for VertexFilter<'g, G>
where
    G: PropertyGraph<VertexProperty = VertexData> + ?Sized,
{
    fn test(&self, v: &G::Vertex) -> bool {
        let data = self.graph.vertex_property(*v);
        self.constraint.test(&[data.vid, data.vlabel])
    }
}

/// A compiled edge expression, read against the records of `graph`.
///
/// `src` and `dst` are the vertex ids of the edge's endpoints as the graph
/// reports them, so an undirected edge is seen from the side it is reached
/// from.
pub struct EdgeFilter<'g, G: ?Sized> {
    graph: &'g G,
    constraint: Constraint,
}

impl<'g, G: ?Sized> Clone for EdgeFilter<'g, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            constraint: self.constraint.clone(),
        }
    }
}

impl<'g, G: ?Sized> std::fmt::Debug for EdgeFilter<'g, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EdgeFilter").field(self.constraint.expr()).finish()
    }
}

impl<'g, G: ?Sized> EdgeFilter<'g, G> {
    /// # Panics
    ///
    /// Panics if `constraint` was not compiled for [`Context::Edge`].
    pub fn new(graph: &'g G, constraint: Constraint) -> Self {
        assert_eq!(
            constraint.context(),
            Context::Edge,
            "vertex expression used as an edge filter"
        );
        Self { graph, constraint }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

impl<'g, G> Predicate<G::Edge> for EdgeFilter<'g, G>
where
    G: PropertyGraph<VertexProperty = VertexData, EdgeProperty = EdgeData> + ?Sized,
{
    fn test(&self, e: &G::Edge) -> bool {
        let g = self.graph;
        let EdgeData { elabel, capacity } = *g.edge_property(*e);
        self.constraint.test(&[
            g.vertex_property(g.source(*e)).vid,
            g.vertex_property(g.target(*e)).vid,
            elabel,
            capacity,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{data_graph_from_iter, DataGraph},
        front_end::compile,
        graph::{EdgeListGraph, VertexListGraph},
    };

    fn graph() -> DataGraph {
        data_graph_from_iter(
            true,
            vec![(1, 10), (2, 20), (3, 20)],
            vec![(1, 2, 12, 5), (2, 3, 23, 0), (3, 1, 31, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_vertex_filter() {
        let g = graph();
        let filter = VertexFilter::new(&g, compile("vlabel == 20", Context::Vertex).unwrap());
        let vids: Vec<_> = g
            .vertices()
            .filter(|v| filter.test(v))
            .map(|v| g.vertex_property(v).vid)
            .collect();
        assert_eq!(vids, vec![2, 3]);
    }

    #[test]
    fn test_edge_filter() {
        let g = graph();
        let filter = EdgeFilter::new(
            &g,
            compile("capacity > 0 && src < dst", Context::Edge).unwrap(),
        );
        let elabels: Vec<_> = g
            .edges()
            .filter(|e| filter.test(e))
            .map(|e| g.edge_property(e).elabel)
            .collect();
        assert_eq!(elabels, vec![12]);
    }

    #[test]
    #[should_panic(expected = "vertex expression used as an edge filter")]
    fn test_context_mismatch() {
        let g = graph();
        EdgeFilter::new(&g, compile("vid == 1", Context::Vertex).unwrap());
    }
}
