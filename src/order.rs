use std::cmp::Ordering;

/// Key ordering injected into a [`TreeMap`] at construction time.
///
/// The comparator must impose a strict total order on the key type:
/// antisymmetric, transitive, and consistent across calls. The tree does
/// not verify this precondition; a comparator that violates it silently
/// breaks the search-tree ordering invariant. Debug builds assert after
/// every mutation that the in-order key sequence is strictly ascending,
/// and [`TreeMap::validate`] performs the same check on demand.
///
/// Injecting the ordering (rather than bounding the map on `Ord` alone)
/// lets the same key type be indexed under several orderings.
///
/// [`TreeMap`]: crate::TreeMap
/// [`TreeMap::validate`]: crate::TreeMap::validate
pub trait Comparator<K> {
    /// Compare `a` with `b`, returning `Less` when `a` sorts before `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation. The default comparator
/// for [`TreeMap`](crate::TreeMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<K> Comparator<K> for NaturalOrder
where
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation, so the
/// map's minimum is the largest key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Descending;

impl<K> Comparator<K> for Descending
where
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}
