//! External key-to-value storage for vertices and edges.

use crate::graph::{EdgeId, PropertyGraph, VertexId};
use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

pub trait ReadPropertyMap<K> {
    type Value;

    fn get(&self, key: K) -> Self::Value;
}

pub trait WritePropertyMap<K>: ReadPropertyMap<K> {
    fn put(&mut self, key: K, value: Self::Value);
}

impl<K, M: ReadPropertyMap<K> + ?Sized> ReadPropertyMap<K> for &M {
    type Value = M::Value;

    fn get(&self, key: K) -> Self::Value {
        (**self).get(key)
    }
}

impl<K, M: ReadPropertyMap<K> + ?Sized> ReadPropertyMap<K> for &mut M {
    type Value = M::Value;

    fn get(&self, key: K) -> Self::Value {
        (**self).get(key)
    }
}

impl<K, M: WritePropertyMap<K> + ?Sized> WritePropertyMap<K> for &mut M {
    fn put(&mut self, key: K, value: Self::Value) {
        (**self).put(key, value)
    }
}

/// Missing keys read as `V::default()`.
impl<K, V, S> ReadPropertyMap<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone + Default,
    S: BuildHasher,
{
    type Value = V;

    fn get(&self, key: K) -> V {
        HashMap::get(self, &key).cloned().unwrap_or_default()
    }
}

impl<K, V, S> WritePropertyMap<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone + Default,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Missing keys read as `V::default()`.
impl<K: Ord, V: Clone + Default> ReadPropertyMap<K> for BTreeMap<K, V> {
    type Value = V;

    fn get(&self, key: K) -> V {
        BTreeMap::get(self, &key).cloned().unwrap_or_default()
    }
}

impl<K: Ord, V: Clone + Default> WritePropertyMap<K> for BTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// A descriptor with a dense index in `0..num_vertices()` (or
/// `0..num_edges()`) of the graph that issued it.
pub trait IndexedDescriptor: Copy {
    fn index(self) -> usize;
}

impl IndexedDescriptor for VertexId {
    fn index(self) -> usize {
        VertexId::index(self)
    }
}

impl IndexedDescriptor for EdgeId {
    fn index(self) -> usize {
        EdgeId::index(self)
    }
}

/// Vector-backed storage keyed by descriptor index.
///
/// Sized once from an unfiltered count, it stays valid for every descriptor
/// a filtered view of that graph can yield.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexPropertyMap<K, V> {
    values: Vec<V>,
    _key: PhantomData<fn(K)>,
}

impl<K, V: Clone> IndexPropertyMap<K, V> {
    pub fn new(len: usize, value: V) -> Self {
        Self {
            values: vec![value; len],
            _key: PhantomData,
        }
    }
}

impl<K, V> IndexPropertyMap<K, V> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }
}

impl<K: IndexedDescriptor, V: Clone> ReadPropertyMap<K> for IndexPropertyMap<K, V> {
    type Value = V;

    fn get(&self, key: K) -> V {
        self.values[key.index()].clone()
    }
}

impl<K: IndexedDescriptor, V: Clone> WritePropertyMap<K> for IndexPropertyMap<K, V> {
    fn put(&mut self, key: K, value: V) {
        self.values[key.index()] = value;
    }
}

/// One field of a graph's bundled edge property, seen as a property map.
pub struct EdgePropertyMap<'g, G: ?Sized, F, T> {
    graph: &'g G,
    f: F,
    _value: PhantomData<fn() -> T>,
}

impl<'g, G: ?Sized, F, T> EdgePropertyMap<'g, G, F, T> {
    pub fn new(graph: &'g G, f: F) -> Self {
        Self {
            graph,
            f,
            _value: PhantomData,
        }
    }
}

impl<'g, G: ?Sized, F: Clone, T> Clone for EdgePropertyMap<'g, G, F, T> {
    fn clone(&self) -> Self {
        Self::new(self.graph, self.f.clone())
    }
}

impl<'g, G, F, T> ReadPropertyMap<G::Edge> for EdgePropertyMap<'g, G, F, T>
where
    G: PropertyGraph + ?Sized,
    F: Fn(&G::EdgeProperty) -> T,
{
    type Value = T;

    fn get(&self, e: G::Edge) -> T {
        (self.f)(self.graph.edge_property(e))
    }
}

/// One field of a graph's bundled vertex property, seen as a property map.
pub struct VertexPropertyMap<'g, G: ?Sized, F, T> {
    graph: &'g G,
    f: F,
    _value: PhantomData<fn() -> T>,
}

impl<'g, G: ?Sized, F, T> VertexPropertyMap<'g, G, F, T> {
    pub fn new(graph: &'g G, f: F) -> Self {
        Self {
            graph,
            f,
            _value: PhantomData,
        }
    }
}

impl<'g, G: ?Sized, F: Clone, T> Clone for VertexPropertyMap<'g, G, F, T> {
    fn clone(&self) -> Self {
        Self::new(self.graph, self.f.clone())
    }
}

impl<'g, G, F, T> ReadPropertyMap<G::Vertex> for VertexPropertyMap<'g, G, F, T>
where
    G: PropertyGraph + ?Sized,
    F: Fn(&G::VertexProperty) -> T,
{
    type Value = T;

    fn get(&self, v: G::Vertex) -> T {
        (self.f)(self.graph.vertex_property(v))
    }
}
