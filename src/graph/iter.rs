use super::IncidenceGraph;

/// The targets of a vertex's out-edges.
pub struct AdjacentVertices<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    graph: &'a G,
    out_edges: G::OutEdges<'a>,
}

impl<'a, G> AdjacentVertices<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    pub(crate) fn new(graph: &'a G, out_edges: G::OutEdges<'a>) -> Self {
        Self { graph, out_edges }
    }
}

impl<'a, G> Clone for AdjacentVertices<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
    G::OutEdges<'a>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            out_edges: self.out_edges.clone(),
        }
    }
}

impl<'a, G> Iterator for AdjacentVertices<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.out_edges.next().map(|e| graph.target(e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.out_edges.size_hint()
    }
}

/// The out-edges of `u` ending at a fixed target.
pub struct EdgeRange<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    graph: &'a G,
    out_edges: G::OutEdges<'a>,
    target: G::Vertex,
}

impl<'a, G> EdgeRange<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    pub(crate) fn new(graph: &'a G, out_edges: G::OutEdges<'a>, target: G::Vertex) -> Self {
        Self {
            graph,
            out_edges,
            target,
        }
    }
}

impl<'a, G> Iterator for EdgeRange<'a, G>
where
    G: IncidenceGraph + ?Sized + 'a,
{
    type Item = G::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let (graph, target) = (self.graph, self.target);
        self.out_edges.find(|&e| graph.target(e) == target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.out_edges.size_hint().1)
    }
}
