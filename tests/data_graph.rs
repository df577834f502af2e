use fgraph::{
    data::{data_graph_from_sqlite, DataGraph, EdgeData, EdgeFilter, GraphView, VertexFilter, ViewInfo},
    filtered::{vertex_subset_filter, FilteredGraph},
    front_end::{compile, Context},
    graph::{PropertyGraph, VertexListGraph},
    predicate::IsResidualEdge,
};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use tempfile::NamedTempFile;

fn create_sqlite(path: &std::path::Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute("CREATE TABLE vertices (vid INT, vlabel INT)", [])
        .unwrap();
    conn.execute(
        "CREATE TABLE edges (src INT, dst INT, elabel INT, capacity INT)",
        [],
    )
    .unwrap();
    for &(vid, vlabel) in &[(1, 10), (2, 20), (3, 30)] {
        conn.execute("INSERT INTO vertices VALUES (?1, ?2)", params![vid, vlabel])
            .unwrap();
    }
    for &(src, dst, elabel, capacity) in &[(1, 2, 12, 5), (2, 3, 23, 0), (1, 3, 13, 1)] {
        conn.execute(
            "INSERT INTO edges VALUES (?1, ?2, ?3, ?4)",
            params![src, dst, elabel, capacity],
        )
        .unwrap();
    }
}

fn load(directed: bool) -> DataGraph {
    let file = NamedTempFile::new().unwrap();
    create_sqlite(file.path());
    data_graph_from_sqlite(&Connection::open(file.path()).unwrap(), directed).unwrap()
}

#[test]
fn test_show() {
    let g = load(true);
    let view = FilteredGraph::with_vertex_filter(
        &g,
        EdgeFilter::new(&g, compile("elabel % 2 == 1", Context::Edge).unwrap()),
        VertexFilter::new(&g, compile("vlabel >= 20 || vid == 1", Context::Vertex).unwrap()),
    );
    assert_eq!(
        GraphView::of(&view),
        GraphView::new(
            vec![(1, 10), (2, 20), (3, 30)],
            vec![(2, 3, 23, 0), (1, 3, 13, 1)]
        )
    );
    assert_eq!(ViewInfo::of(&view), ViewInfo::new(3, 3, 3, 2));
}

#[test]
fn test_subset() {
    let g = load(true);
    let s: HashSet<_> = g
        .vertices()
        .filter(|&v| g.vertex_property(v).vid != 2)
        .collect();
    let view = vertex_subset_filter(&g, &s);
    assert_eq!(
        GraphView::of(&view),
        GraphView::new(vec![(1, 10), (3, 30)], vec![(1, 3, 13, 1)])
    );
    let info = ViewInfo::of(&view);
    assert_eq!(info.to_string(), "2/3 vertices, 1/3 edges");
}

#[test]
fn test_residual() {
    let g = load(false);
    let view = FilteredGraph::new(&g, IsResidualEdge::new(g.edge_map(|e: &EdgeData| e.capacity)));
    assert_eq!(
        GraphView::of(&view).edges(),
        &[(1, 2, 12, 5), (1, 3, 13, 1)]
    );
}
