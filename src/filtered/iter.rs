use crate::{graph::GraphBase, predicate::Predicate};

/// Skips the items of `iter` rejected by `pred`.
///
/// Each advance pulls from the wrapped iterator until an accepted item
/// turns up, so the filter never buffers anything.
#[derive(Clone)]
pub struct FilterIter<I, P> {
    iter: I,
    pred: P,
}

impl<I, P> FilterIter<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self { iter, pred }
    }
}

impl<I, P> Iterator for FilterIter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pred = &self.pred;
        self.iter.find(|x| pred.test(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> DoubleEndedIterator for FilterIter<I, P>
where
    I: DoubleEndedIterator,
    P: Predicate<I::Item>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let pred = &self.pred;
        self.iter.rfind(|x| pred.test(x))
    }
}

/// The vertex predicate of a view, borrowed for one traversal.
pub struct VertexPred<'a, VP> {
    vertex_pred: &'a VP,
}

impl<'a, VP> VertexPred<'a, VP> {
    pub(crate) fn new(vertex_pred: &'a VP) -> Self {
        Self { vertex_pred }
    }
}

impl<'a, VP> Clone for VertexPred<'a, VP> {
    fn clone(&self) -> Self {
        Self::new(self.vertex_pred)
    }
}

impl<'a, V, VP: Predicate<V>> Predicate<V> for VertexPred<'a, VP> {
    #[inline]
    fn test(&self, v: &V) -> bool {
        self.vertex_pred.test(v)
    }
}

macro_rules! edge_pred {
    ($(#[$doc:meta])* $name:ident, |$g:ident, $vp:ident, $e:ident| $check:expr) => {
        $(#[$doc])*
        pub struct $name<'a, G: ?Sized, EP, VP> {
            graph: &'a G,
            edge_pred: &'a EP,
            vertex_pred: &'a VP,
        }

        impl<'a, G: ?Sized, EP, VP> $name<'a, G, EP, VP> {
            pub(crate) fn new(graph: &'a G, edge_pred: &'a EP, vertex_pred: &'a VP) -> Self {
                Self {
                    graph,
                    edge_pred,
                    vertex_pred,
                }
            }
        }

        impl<'a, G: ?Sized, EP, VP> Clone for $name<'a, G, EP, VP> {
            fn clone(&self) -> Self {
                Self::new(self.graph, self.edge_pred, self.vertex_pred)
            }
        }

        impl<'a, G, EP, VP> Predicate<G::Edge> for $name<'a, G, EP, VP>
        where
            G: GraphBase + ?Sized,
            EP: Predicate<G::Edge>,
            VP: Predicate<G::Vertex>,
        {
            #[inline]
            fn test(&self, e: &G::Edge) -> bool {
                let ($g, $vp, $e) = (self.graph, self.vertex_pred, *e);
                self.edge_pred.test(e) && $check
            }
        }
    };
}

edge_pred!(
    /// Out-edges: the far endpoint must be visible.
    OutEdgePred,
    |g, vp, e| vp.test(&g.target(e))
);

edge_pred!(
    /// In-edges: the far endpoint must be visible.
    InEdgePred,
    |g, vp, e| vp.test(&g.source(e))
);

edge_pred!(
    /// Edge enumeration: both endpoints must be visible.
    EdgePred,
    |g, vp, e| vp.test(&g.source(e)) && vp.test(&g.target(e))
);
