//! Predicates used to filter vertices and edges.
//!
//! Predicates are small values, evaluated an unspecified number of times
//! (including on elements a traversal never yields), so they must be pure.
//! Any `Fn(&T) -> bool` closure is a predicate.

use crate::property_map::ReadPropertyMap;
use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

pub trait Predicate<T> {
    fn test(&self, x: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, x: &T) -> bool {
        self(x)
    }
}

/// Accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepAll;

impl<T> Predicate<T> for KeepAll {
    #[inline]
    fn test(&self, _: &T) -> bool {
        true
    }
}

/// A collection that can answer membership queries.
pub trait Set<T> {
    fn set_contains(&self, x: &T) -> bool;
}

impl<T: Eq + Hash, S: BuildHasher> Set<T> for HashSet<T, S> {
    fn set_contains(&self, x: &T) -> bool {
        self.contains(x)
    }
}

impl<T: Ord> Set<T> for BTreeSet<T> {
    fn set_contains(&self, x: &T) -> bool {
        self.contains(x)
    }
}

impl<T: PartialEq> Set<T> for [T] {
    fn set_contains(&self, x: &T) -> bool {
        self.contains(x)
    }
}

impl<T: PartialEq> Set<T> for Vec<T> {
    fn set_contains(&self, x: &T) -> bool {
        self.as_slice().contains(x)
    }
}

/// Accepts the members of a borrowed set.
#[derive(Debug)]
pub struct InSubset<'s, S: ?Sized> {
    set: &'s S,
}

impl<'s, S: ?Sized> InSubset<'s, S> {
    pub fn new(set: &'s S) -> Self {
        Self { set }
    }
}

impl<'s, S: ?Sized> Clone for InSubset<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: ?Sized> Copy for InSubset<'s, S> {}

impl<'s, T, S: Set<T> + ?Sized> Predicate<T> for InSubset<'s, S> {
    fn test(&self, x: &T) -> bool {
        self.set.set_contains(x)
    }
}

/// Accepts everything outside a borrowed set.
#[derive(Debug)]
pub struct NotInSubset<'s, S: ?Sized> {
    set: &'s S,
}

impl<'s, S: ?Sized> NotInSubset<'s, S> {
    pub fn new(set: &'s S) -> Self {
        Self { set }
    }
}

impl<'s, S: ?Sized> Clone for NotInSubset<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: ?Sized> Copy for NotInSubset<'s, S> {}

impl<'s, T, S: Set<T> + ?Sized> Predicate<T> for NotInSubset<'s, S> {
    fn test(&self, x: &T) -> bool {
        !self.set.set_contains(x)
    }
}

/// Accepts an edge iff its residual capacity is strictly positive.
///
/// The capacity comes from an external property map; "positive" means
/// greater than the value type's default, i.e. zero for numbers.
#[derive(Debug, Clone, Copy)]
pub struct IsResidualEdge<M> {
    rcap: M,
}

impl<M> IsResidualEdge<M> {
    pub fn new(rcap: M) -> Self {
        Self { rcap }
    }
}

impl<E, M> Predicate<E> for IsResidualEdge<M>
where
    E: Copy,
    M: ReadPropertyMap<E>,
    M::Value: PartialOrd + Default,
{
    fn test(&self, e: &E) -> bool {
        M::Value::default() < self.rcap.get(*e)
    }
}
