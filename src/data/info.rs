use super::DataView;
use derive_more::Display;

/// Sizes of a view: what it shows next to what the underlying graph holds.
///
/// The totals come from `num_vertices`/`num_edges`, which views pass through
/// unfiltered; the visible counts come from walking the view.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
#[display(
    fmt = "{}/{} vertices, {}/{} edges",
    visible_vertices,
    num_vertices,
    visible_edges,
    num_edges
)]
pub struct ViewInfo {
    num_vertices: usize,
    num_edges: usize,
    visible_vertices: usize,
    visible_edges: usize,
}

impl ViewInfo {
    pub fn new(
        num_vertices: usize,
        num_edges: usize,
        visible_vertices: usize,
        visible_edges: usize,
    ) -> Self {
        Self {
            num_vertices,
            num_edges,
            visible_vertices,
            visible_edges,
        }
    }

    pub fn of<G: DataView + ?Sized>(graph: &G) -> Self {
        Self::new(
            graph.num_vertices(),
            graph.num_edges(),
            graph.vertices().count(),
            graph.edges().count(),
        )
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn visible_vertices(&self) -> usize {
        self.visible_vertices
    }

    pub fn visible_edges(&self) -> usize {
        self.visible_edges
    }
}
