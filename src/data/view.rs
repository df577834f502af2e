use super::DataView;
use crate::{
    graph::GraphBase,
    types::{Capacity, ELabel, VId, VLabel},
};

/// The visible part of a data graph, copied out as plain records.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GraphView {
    pub(super) vertices: Vec<(VId, VLabel)>,
    pub(super) edges: Vec<(VId, VId, ELabel, Capacity)>,
}

impl GraphView {
    pub fn new(vertices: Vec<(VId, VLabel)>, edges: Vec<(VId, VId, ELabel, Capacity)>) -> Self {
        Self { vertices, edges }
    }

    /// Collects what `graph` yields, in traversal order.
    pub fn of<G: DataView + ?Sized>(graph: &G) -> Self {
        let vid = |v: <G as GraphBase>::Vertex| graph.vertex_property(v).vid;
        Self {
            vertices: graph
                .vertices()
                .map(|v| {
                    let data = graph.vertex_property(v);
                    (data.vid, data.vlabel)
                })
                .collect(),
            edges: graph
                .edges()
                .map(|e| {
                    let data = graph.edge_property(e);
                    (
                        vid(graph.source(e)),
                        vid(graph.target(e)),
                        data.elabel,
                        data.capacity,
                    )
                })
                .collect(),
        }
    }

    pub fn vertices(&self) -> &[(VId, VLabel)] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(VId, VId, ELabel, Capacity)] {
        &self.edges
    }
}
