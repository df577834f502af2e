use super::{DataGraph, EdgeData, Error, Result, VertexData};
use crate::{
    graph::{EdgeListGraph, VertexListGraph},
    types::{Capacity, ELabel, VId, VLabel},
};
use log::{debug, info};
use std::collections::{hash_map::Entry, HashMap};

/// Builds a data graph from vertex records `(vid, vlabel)` and edge records
/// `(src, dst, elabel, capacity)`.
///
/// Vertices and edges keep the order of their records.
pub fn data_graph_from_iter<V, E>(directed: bool, vertices: V, edges: E) -> Result<DataGraph>
where
    V: IntoIterator<Item = (VId, VLabel)>,
    E: IntoIterator<Item = (VId, VId, ELabel, Capacity)>,
{
    let mut graph = DataGraph::new(directed);
    let mut index = HashMap::new();
    info!("adding vertices...");
    for (vid, vlabel) in vertices {
        match index.entry(vid) {
            Entry::Occupied(_) => return Err(Error::DuplicateVertex(vid)),
            Entry::Vacant(entry) => {
                entry.insert(graph.add_vertex(VertexData { vid, vlabel }));
            }
        }
    }
    info!("adding edges...");
    for (src, dst, elabel, capacity) in edges {
        let lookup = |vid| {
            index
                .get(&vid)
                .copied()
                .ok_or(Error::UnknownVertex(src, dst, vid))
        };
        let (u, v) = (lookup(src)?, lookup(dst)?);
        graph.add_edge(u, v, EdgeData { elabel, capacity });
    }
    info!(
        "loaded {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Reads the data graph stored in the SQLite database `conn`.
///
/// The database must have the following schema:
///
/// ```sql
/// CREATE TABLE vertices (vid INT, vlabel INT);
/// CREATE TABLE edges (src INT, dst INT, elabel INT, capacity INT);
/// ```
pub fn data_graph_from_sqlite(conn: &rusqlite::Connection, directed: bool) -> Result<DataGraph> {
    let mut vertices_stmt = conn.prepare("SELECT vid, vlabel FROM vertices ORDER BY rowid")?;
    let vertices: Vec<(VId, VLabel)> = vertices_stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<_>>()?;
    debug!("read {} vertex records", vertices.len());
    let mut edges_stmt =
        conn.prepare("SELECT src, dst, elabel, capacity FROM edges ORDER BY rowid")?;
    let edges: Vec<(VId, VId, ELabel, Capacity)> = edges_stmt
        .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<rusqlite::Result<_>>()?;
    debug!("read {} edge records", edges.len());
    data_graph_from_iter(directed, vertices, edges)
}
