use thiserror::Error;

/// TreeMapError enumerates over all possible errors that this crate
/// shall return.
///
/// The first two variants are ordinary outcomes of map operations. The
/// remaining variants are only produced by [`TreeMap::validate`] when a
/// structural rule of the left-leaning red-black tree has been broken,
/// which on a correct build indicates a comparator that does not impose
/// a strict total order.
///
/// [`TreeMap::validate`]: crate::TreeMap::validate
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TreeMapError {
    /// Returned by `put` when the key is already present.
    #[error("map already contains the key")]
    AlreadyContains,
    /// The requested key or value is absent, or the map is empty for an
    /// extremum operation.
    #[error("map does not contain the requested entry")]
    DoesNotContain,
    /// Fatal case, two consecutive red links on a root-to-leaf path.
    #[error("consecutive red links on a root-to-leaf path")]
    ConsecutiveReds,
    /// Fatal case, a red link leaning to the right.
    #[error("right-leaning red link")]
    RightLeaningRed,
    /// Fatal case, the root link is red at quiescence.
    #[error("root link is red at quiescence")]
    RedRoot,
    /// Fatal case, black-link counts differ between subtrees. The String
    /// component of this variant can be used for debugging.
    #[error("unbalanced black links, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, entries are not in sort order under the comparator.
    #[error("entries out of sort order, {0}")]
    SortError(String),
    /// Fatal case, the reachable node count disagrees with the tracked
    /// entry count.
    #[error("{found} reachable entries do not match tracked count {tracked}")]
    SizeMismatch { tracked: usize, found: usize },
}
