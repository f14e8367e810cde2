use std::{
    cmp::Ordering,
    mem,
    ops::{Deref, DerefMut},
};

use crate::depth::Depth;
use crate::error::TreeMapError;
use crate::order::{Comparator, NaturalOrder};

/// TreeMap is an ordered key/value map backed by a
/// [left-leaning-red-black][llrb] tree.
///
/// Lookups, insertions and removals are logarithmic, and so are the
/// order-derived operations: [`first`], [`last`], [`ceiling`], [`floor`],
/// [`higher`], [`lower`], [`poll_first`] and [`poll_last`]. After every
/// mutation the tree is a valid LLRB: every root-to-leaf path crosses the
/// same number of black links, no red link leans right, and no two red
/// links are consecutive.
///
/// The key ordering is injected as a [`Comparator`]; [`TreeMap::new`]
/// picks [`NaturalOrder`], which delegates to `Ord`. Keys are unique
/// under the comparator: [`put`] refuses a key that is already present
/// and [`replace`] swaps the value of one that is.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
/// [`first`]: TreeMap::first
/// [`last`]: TreeMap::last
/// [`ceiling`]: TreeMap::ceiling
/// [`floor`]: TreeMap::floor
/// [`higher`]: TreeMap::higher
/// [`lower`]: TreeMap::lower
/// [`poll_first`]: TreeMap::poll_first
/// [`poll_last`]: TreeMap::poll_last
/// [`put`]: TreeMap::put
/// [`replace`]: TreeMap::replace
#[derive(Clone)]
pub struct TreeMap<K, V, C = NaturalOrder>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    root: Option<Box<Node<K, V>>>,
    n_count: usize, // number of entries in the tree.
    cmp: C,
}

/// Different ways to construct a new TreeMap instance.
impl<K, V> TreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create an empty instance ordered by the key type's `Ord`.
    pub fn new() -> TreeMap<K, V> {
        TreeMap {
            root: None,
            n_count: 0,
            cmp: NaturalOrder,
        }
    }
}

impl<K, V> Default for TreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn default() -> Self {
        TreeMap::new()
    }
}

/// Maintenance API.
impl<K, V, C> TreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    /// Create an empty instance ordered by `cmp`. The comparator must
    /// impose a strict total order on the key type; refer to
    /// [`Comparator`] for the contract.
    pub fn with_comparator(cmp: C) -> TreeMap<K, V, C> {
        TreeMap {
            root: None,
            n_count: 0,
            cmp,
        }
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Drop every entry, restoring the map to its freshly-created state.
    pub fn clear(&mut self) {
        self.root = None;
        self.n_count = 0;
    }

    /// Return quickly with basic statistics, only entries() method is
    /// valid with this statistics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }
}

type Insert<K, V> = (Box<Node<K, V>>, Option<TreeMapError>);

type Detach<K, V> = (Option<Box<Node<K, V>>>, Option<(K, V)>);

/// Write operations on a TreeMap instance.
impl<K, V, C> TreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    /// Create a new `{key, value}` entry in the map. If the key is
    /// already present return [`TreeMapError::AlreadyContains`] and
    /// leave the tree untouched.
    pub fn put(&mut self, key: K, value: V) -> Result<(), TreeMapError> {
        let (mut root, error) = Self::insert(&self.cmp, self.root.take(), key, value);
        root.set_black();
        self.root = Some(root);
        match error {
            Some(err) => Err(err),
            None => {
                self.n_count += 1;
                #[cfg(debug_assertions)]
                self.debug_check_order();
                Ok(())
            }
        }
    }

    /// Swap the value stored under `key` for `value`, returning the
    /// displaced value. Neither the tree shape nor the entry count
    /// changes. Returns [`TreeMapError::DoesNotContain`] if the key is
    /// absent.
    pub fn replace(&mut self, key: &K, value: V) -> Result<V, TreeMapError> {
        let mut node = self.root.as_deref_mut();
        while let Some(nref) = node {
            match self.cmp.compare(&nref.key, key) {
                Ordering::Less => node = nref.right.as_deref_mut(),
                Ordering::Greater => node = nref.left.as_deref_mut(),
                Ordering::Equal => return Ok(nref.replace_value(value)),
            }
        }
        Err(TreeMapError::DoesNotContain)
    }

    /// Remove `key` from the map and return the detached `(key, value)`
    /// pair. The pair is moved out, not cloned, so any nested resources
    /// it owns now belong to the caller; dropping the pair releases
    /// them. Returns [`TreeMapError::DoesNotContain`] if the key is
    /// absent.
    pub fn remove(&mut self, key: &K) -> Result<(K, V), TreeMapError> {
        let mut root = match self.root.take() {
            None => return Err(TreeMapError::DoesNotContain),
            Some(root) => root,
        };
        // Seed the descent with a red link at the top, so that the
        // current node or one of its children is red all the way down.
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, removed) = Self::do_remove(&self.cmp, Some(root), key);
        self.set_root(root);
        match removed {
            Some(pair) => {
                self.n_count -= 1;
                #[cfg(debug_assertions)]
                self.debug_check_order();
                Ok(pair)
            }
            None => Err(TreeMapError::DoesNotContain),
        }
    }

    /// Remove the smallest entry and return it, as [`remove`] would.
    /// Returns [`TreeMapError::DoesNotContain`] on an empty map.
    ///
    /// [`remove`]: TreeMap::remove
    pub fn poll_first(&mut self) -> Result<(K, V), TreeMapError> {
        let mut root = match self.root.take() {
            None => return Err(TreeMapError::DoesNotContain),
            Some(root) => root,
        };
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, removed) = Self::remove_min(Some(root));
        self.set_root(root);
        match removed {
            Some(pair) => {
                self.n_count -= 1;
                #[cfg(debug_assertions)]
                self.debug_check_order();
                Ok(pair)
            }
            None => Err(TreeMapError::DoesNotContain),
        }
    }

    /// Remove the largest entry and return it, as [`remove`] would.
    /// Returns [`TreeMapError::DoesNotContain`] on an empty map.
    ///
    /// [`remove`]: TreeMap::remove
    pub fn poll_last(&mut self) -> Result<(K, V), TreeMapError> {
        let mut root = match self.root.take() {
            None => return Err(TreeMapError::DoesNotContain),
            Some(root) => root,
        };
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (root, removed) = Self::remove_max(Some(root));
        self.set_root(root);
        match removed {
            Some(pair) => {
                self.n_count -= 1;
                #[cfg(debug_assertions)]
                self.debug_check_order();
                Ok(pair)
            }
            None => Err(TreeMapError::DoesNotContain),
        }
    }

    /// Validate the LLRB tree with the following rules:
    ///
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * No red link may lean to the right.
    /// * The root link is black.
    /// * Number of blacks should be the same under left child and right
    ///   child.
    /// * Keys are in sort order under the comparator.
    /// * The reachable node count matches [`len`](TreeMap::len).
    ///
    /// Additionally return full statistics on the tree. Refer to
    /// [`Stats`] for more information.
    pub fn validate(&self) -> Result<Stats, TreeMapError> {
        let root = self.root.as_deref();
        if is_red(root) {
            return Err(TreeMapError::RedRoot);
        }
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());
        let mut reachable = 0;
        let blacks = Self::validate_tree(&self.cmp, root, false, 0, 0, &mut reachable, &mut stats)?;
        if reachable != self.n_count {
            return Err(TreeMapError::SizeMismatch {
                tracked: self.n_count,
                found: reachable,
            });
        }
        stats.set_blacks(blacks);
        Ok(stats)
    }

    fn set_root(&mut self, root: Option<Box<Node<K, V>>>) {
        self.root = match root {
            Some(mut root) => {
                root.set_black();
                Some(root)
            }
            None => None,
        };
    }
}

/// Read operations on a TreeMap instance.
impl<K, V, C> TreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    /// Get a copy of the value stored under `key`, or
    /// [`TreeMapError::DoesNotContain`].
    pub fn get(&self, key: &K) -> Result<V, TreeMapError> {
        self.find_node(key)
            .map(|nref| nref.value.clone())
            .ok_or(TreeMapError::DoesNotContain)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Copy of the smallest entry, or [`TreeMapError::DoesNotContain`]
    /// on an empty map.
    pub fn first(&self) -> Result<(K, V), TreeMapError> {
        let mut node = match self.root.as_deref() {
            None => return Err(TreeMapError::DoesNotContain),
            Some(node) => node,
        };
        while let Some(left) = node.left_deref() {
            node = left;
        }
        Ok(node.to_pair())
    }

    /// Copy of the largest entry, or [`TreeMapError::DoesNotContain`]
    /// on an empty map.
    pub fn last(&self) -> Result<(K, V), TreeMapError> {
        let mut node = match self.root.as_deref() {
            None => return Err(TreeMapError::DoesNotContain),
            Some(node) => node,
        };
        while let Some(right) = node.right_deref() {
            node = right;
        }
        Ok(node.to_pair())
    }

    /// Copy of the entry with the smallest key greater than or equal to
    /// `key`, or [`TreeMapError::DoesNotContain`] if every key is
    /// smaller.
    pub fn ceiling(&self, key: &K) -> Result<(K, V), TreeMapError> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(nref) = node {
            node = match self.cmp.compare(&nref.key, key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => {
                    candidate = Some(nref);
                    nref.left_deref()
                }
                Ordering::Equal => return Ok(nref.to_pair()),
            };
        }
        candidate
            .map(Node::to_pair)
            .ok_or(TreeMapError::DoesNotContain)
    }

    /// Copy of the entry with the largest key less than or equal to
    /// `key`, or [`TreeMapError::DoesNotContain`] if every key is
    /// greater.
    pub fn floor(&self, key: &K) -> Result<(K, V), TreeMapError> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(nref) = node {
            node = match self.cmp.compare(&nref.key, key) {
                Ordering::Less => {
                    candidate = Some(nref);
                    nref.right_deref()
                }
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Ok(nref.to_pair()),
            };
        }
        candidate
            .map(Node::to_pair)
            .ok_or(TreeMapError::DoesNotContain)
    }

    /// Copy of the entry with the smallest key strictly greater than
    /// `key`. Unlike [`ceiling`](TreeMap::ceiling), an exact match does
    /// not qualify.
    pub fn higher(&self, key: &K) -> Result<(K, V), TreeMapError> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(nref) = node {
            node = match self.cmp.compare(&nref.key, key) {
                Ordering::Less | Ordering::Equal => nref.right_deref(),
                Ordering::Greater => {
                    candidate = Some(nref);
                    nref.left_deref()
                }
            };
        }
        candidate
            .map(Node::to_pair)
            .ok_or(TreeMapError::DoesNotContain)
    }

    /// Copy of the entry with the largest key strictly less than `key`.
    /// Unlike [`floor`](TreeMap::floor), an exact match does not
    /// qualify.
    pub fn lower(&self, key: &K) -> Result<(K, V), TreeMapError> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(nref) = node {
            node = match self.cmp.compare(&nref.key, key) {
                Ordering::Less => {
                    candidate = Some(nref);
                    nref.right_deref()
                }
                Ordering::Greater | Ordering::Equal => nref.left_deref(),
            };
        }
        candidate
            .map(Node::to_pair)
            .ok_or(TreeMapError::DoesNotContain)
    }

    fn find_node(&self, key: &K) -> Option<&Node<K, V>> {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = match self.cmp.compare(&nref.key, key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(nref),
            };
        }
        None
    }
}

/// Value-directed operations. The value type needs an equivalence
/// relation for these.
impl<K, V, C> TreeMap<K, V, C>
where
    K: Clone,
    V: Clone + PartialEq,
    C: Comparator<K>,
{
    /// Get a copy of the key of the first entry, in key order, whose
    /// value equals `value`, or [`TreeMapError::DoesNotContain`]. The
    /// scan is linear. A match at the root is reported like any other
    /// match.
    pub fn key_of(&self, value: &V) -> Result<K, TreeMapError> {
        Self::find_by_value(self.root.as_deref(), value)
            .map(|nref| nref.key.clone())
            .ok_or(TreeMapError::DoesNotContain)
    }

    /// Check whether any entry holds a value equal to `value`. Linear.
    pub fn contains_value(&self, value: &V) -> bool {
        Self::find_by_value(self.root.as_deref(), value).is_some()
    }

    // in-order walk: left subtree, self, right subtree.
    fn find_by_value<'a>(node: Option<&'a Node<K, V>>, value: &V) -> Option<&'a Node<K, V>> {
        let nref = node?;
        if let Some(found) = Self::find_by_value(nref.left_deref(), value) {
            return Some(found);
        }
        if nref.value == *value {
            return Some(nref);
        }
        Self::find_by_value(nref.right_deref(), value)
    }
}

impl<K, V, C> TreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    fn insert(cmp: &C, node: Option<Box<Node<K, V>>>, key: K, value: V) -> Insert<K, V> {
        let mut node = match node {
            None => return (Node::new(key, value), None),
            Some(node) => node,
        };

        match cmp.compare(&node.key, &key) {
            Ordering::Greater => {
                let (left, e) = Self::insert(cmp, node.left.take(), key, value);
                node.left = Some(left);
                (Self::fixup(node), e)
            }
            Ordering::Less => {
                let (right, e) = Self::insert(cmp, node.right.take(), key, value);
                node.right = Some(right);
                (Self::fixup(node), e)
            }
            // The duplicate insert must leave the subtree exactly as it
            // was, so no rebalancing on the way out.
            Ordering::Equal => (node, Some(TreeMapError::AlreadyContains)),
        }
    }

    fn do_remove(cmp: &C, node: Option<Box<Node<K, V>>>, key: &K) -> Detach<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };

        if cmp.compare(&node.key, key) == Ordering::Greater {
            if node.left.is_none() {
                return (Some(node), None);
            }
            let left = node.left_deref();
            if !is_red(left) && !is_red(left.unwrap().left_deref()) {
                node = Self::move_red_left(node);
            }
            let (left, removed) = Self::do_remove(cmp, node.left.take(), key);
            node.left = left;
            (Some(Self::fixup(node)), removed)
        } else {
            if is_red(node.left_deref()) {
                node = Self::rotate_right(node);
            }

            if cmp.compare(&node.key, key) == Ordering::Equal && node.right.is_none() {
                // a red leaf at this point in the descent.
                debug_assert!(node.left.is_none());
                let Node { key, value, .. } = *node;
                return (None, Some((key, value)));
            }

            let ok = node.right.is_some() && !is_red(node.right_deref());
            if ok && !is_red(node.right.as_ref().unwrap().left_deref()) {
                node = Self::move_red_right(node);
            }

            if cmp.compare(&node.key, key) == Ordering::Equal {
                // splice out by successor: the minimum of the right
                // subtree moves into this node, the original pair moves
                // out to the caller.
                let (right, successor) = Self::remove_min(node.right.take());
                node.right = right;
                let (succ_key, succ_value) = match successor {
                    Some(pair) => pair,
                    None => panic!("do_remove(): fatal logic, call the programmer"),
                };
                let old_key = mem::replace(&mut node.key, succ_key);
                let old_value = mem::replace(&mut node.value, succ_value);
                (Some(Self::fixup(node)), Some((old_key, old_value)))
            } else {
                let (right, removed) = Self::do_remove(cmp, node.right.take(), key);
                node.right = right;
                (Some(Self::fixup(node)), removed)
            }
        }
    }

    fn remove_min(node: Option<Box<Node<K, V>>>) -> Detach<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            debug_assert!(node.right.is_none());
            let Node { key, value, .. } = *node;
            return (None, Some((key, value)));
        }
        let left = node.left_deref();
        if !is_red(left) && !is_red(left.unwrap().left_deref()) {
            node = Self::move_red_left(node);
        }
        let (left, removed) = Self::remove_min(node.left.take());
        node.left = left;
        (Some(Self::fixup(node)), removed)
    }

    fn remove_max(node: Option<Box<Node<K, V>>>) -> Detach<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        // never look right past a red left link.
        if is_red(node.left_deref()) {
            node = Self::rotate_right(node);
        }
        if node.right.is_none() {
            debug_assert!(node.left.is_none());
            let Node { key, value, .. } = *node;
            return (None, Some((key, value)));
        }
        let right = node.right_deref();
        if !is_red(right) && !is_red(right.unwrap().left_deref()) {
            node = Self::move_red_right(node);
        }
        let (right, removed) = Self::remove_max(node.right.take());
        node.right = right;
        (Some(Self::fixup(node)), removed)
    }

    fn validate_tree(
        cmp: &C,
        node: Option<&Node<K, V>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        reachable: &mut usize,
        stats: &mut Stats,
    ) -> Result<usize, TreeMapError> {
        let node = match node {
            None => {
                stats.sample_depth(depth);
                return Ok(nb);
            }
            Some(node) => node,
        };

        *reachable += 1;
        let red = is_red(Some(node));
        if fromred && red {
            return Err(TreeMapError::ConsecutiveReds);
        }
        if is_red(node.right_deref()) {
            return Err(TreeMapError::RightLeaningRed);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left_deref(), node.right_deref());
        let lblacks = Self::validate_tree(cmp, left, red, nb, depth + 1, reachable, stats)?;
        let rblacks = Self::validate_tree(cmp, right, red, nb, depth + 1, reachable, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(TreeMapError::UnbalancedBlacks(err));
        }
        if let Some(left) = left {
            if cmp.compare(&left.key, &node.key) != Ordering::Less {
                return Err(TreeMapError::SortError("left key not less".to_string()));
            }
        }
        if let Some(right) = right {
            if cmp.compare(&right.key, &node.key) != Ordering::Greater {
                return Err(TreeMapError::SortError("right key not greater".to_string()));
            }
        }
        Ok(lblacks)
    }

    //--------- rotation routines for 2-3 algorithm ----------------

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_black(node.right_deref()) {
            panic!("rotate_left(): rotating a black link? call the programmer");
        }
        let mut x = node.right.take().unwrap();
        node.right = x.left.take();
        x.black = node.black;
        node.set_red();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_black(node.left_deref()) {
            panic!("rotate_right(): rotating a black link? call the programmer");
        }
        let mut x = node.left.take().unwrap();
        node.left = x.right.take();
        x.black = node.black;
        node.set_red();
        x.right = Some(node);
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //     /      \              /      \
    //   left    right         left    right
    //
    // The toggle covers both directions: pushing a split 4-node upward
    // on the insert path and borrowing from the parent on the delete
    // path.
    fn flip(node: &mut Node<K, V>) {
        node.left.as_mut().unwrap().toggle_link();
        node.right.as_mut().unwrap().toggle_link();
        node.toggle_link();
    }

    // Restore the LLRB shape while unwinding an insert or a remove:
    // lean a red right link to the left, rotate a red-red left chain,
    // split a 4-node.
    fn fixup(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node = if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            Self::rotate_left(node)
        } else {
            node
        };
        node = {
            let left = node.left_deref();
            if is_red(left) && is_red(left.unwrap().left_deref()) {
                Self::rotate_right(node)
            } else {
                node
            }
        };
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Self::flip(node.deref_mut());
        }
        node
    }

    // Precondition: node is red, neither node.left nor node.left.left
    // is red. Afterwards either node.left or node.left.left is red.
    fn move_red_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Self::flip(node.deref_mut());
        if is_red(node.right.as_ref().unwrap().left_deref()) {
            node.right = Some(Self::rotate_right(node.right.take().unwrap()));
            node = Self::rotate_left(node);
            Self::flip(node.deref_mut());
        }
        node
    }

    // Precondition: node is red, neither node.right nor node.right.left
    // is red. Afterwards either node.right or node.right.right is red.
    fn move_red_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Self::flip(node.deref_mut());
        if is_red(node.left.as_ref().unwrap().left_deref()) {
            node = Self::rotate_right(node);
            Self::flip(node.deref_mut());
        }
        node
    }

    #[cfg(debug_assertions)]
    fn debug_check_order(&self) {
        let mut prev = None;
        Self::check_order(&self.cmp, self.root.as_deref(), &mut prev);
    }

    // comparator contract check, debug builds only: in-order keys must
    // be strictly ascending after every mutation.
    #[cfg(debug_assertions)]
    fn check_order<'a>(cmp: &C, node: Option<&'a Node<K, V>>, prev: &mut Option<&'a K>) {
        if let Some(node) = node {
            Self::check_order(cmp, node.left_deref(), prev);
            if let Some(prev_key) = *prev {
                debug_assert!(
                    cmp.compare(prev_key, &node.key) == Ordering::Less,
                    "in-order keys not strictly ascending; comparator is not a total order"
                );
            }
            *prev = Some(&node.key);
            Self::check_order(cmp, node.right_deref(), prev);
        }
    }

    #[cfg(test)]
    fn in_order(&self) -> Vec<(K, V)> {
        fn walk<K, V>(node: Option<&Node<K, V>>, out: &mut Vec<(K, V)>)
        where
            K: Clone,
            V: Clone,
        {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push((node.key.clone(), node.value.clone()));
                walk(node.right.as_deref(), out);
            }
        }

        let mut out = Vec::with_capacity(self.n_count);
        walk(self.root.as_deref(), &mut out);
        out
    }
}

fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool
where
    K: Clone,
    V: Clone,
{
    node.map_or(false, |node| !node.is_black())
}

fn is_black<K, V>(node: Option<&Node<K, V>>) -> bool
where
    K: Clone,
    V: Clone,
{
    node.map_or(true, |node| node.is_black())
}

/// Node corresponds to a single entry in a TreeMap instance.
#[derive(Clone)]
struct Node<K, V>
where
    K: Clone,
    V: Clone,
{
    key: K,
    value: V,
    black: bool,                    // store: black or red incoming link
    left: Option<Box<Node<K, V>>>,  // store: left child
    right: Option<Box<Node<K, V>>>, // store: right child
}

// Primary operations on a single node.
impl<K, V> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    // CREATE operation; new nodes join the tree on a red link.
    fn new(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            black: false,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    fn to_pair(&self) -> (K, V) {
        (self.key.clone(), self.value.clone())
    }

    #[inline]
    fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.black
    }
}

/// Statistics on a [`TreeMap`] tree. Serves two purposes:
///
/// * To get partial but quick statistics via [`TreeMap::stats`].
/// * To get full statistics via [`TreeMap::validate`].
#[derive(Default)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    fn sample_depth(&mut self, depth: usize) {
        if let Some(depths) = self.depths.as_mut() {
            depths.sample(depth);
        }
    }

    /// Return number of entries in the [`TreeMap`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including overhead for `TreeMap<K, V>`.
    /// Although the node overhead is constant, the node size varies
    /// based on key and value types. EG:
    ///
    /// ```
    /// use llrb_treemap::TreeMap;
    /// let map: TreeMap<u64, i128> = TreeMap::new();
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// // overhead is 24 bytes
    /// assert_eq!(map.stats().node_size(), 48);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child. Available from [`TreeMap::validate`].
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics. Available from
    /// [`TreeMap::validate`] on a non-empty tree.
    pub fn depths(&self) -> Option<Depth> {
        match self.depths.as_ref() {
            Some(depths) if self.entries > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "treemap_test.rs"]
mod treemap_test;
