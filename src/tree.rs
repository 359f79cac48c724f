//! The tree container and its operations.
//!
//! [`BinaryTree`] stores unique records and keeps them ordered. All public
//! operations dispatch to private recursive traversals over the node graph;
//! there is no other machinery.
//!
//! # Examples
//!
//! ```
//! use bintree::{slots, BinaryTree};
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.retrieve(&1), None);
//!
//! assert!(tree.insert(1).is_ok());
//! assert_eq!(tree.retrieve(&1), Some(&1));
//!
//! // Inserting an equal record hands it back instead.
//! assert_eq!(tree.insert(1), Err(1));
//!
//! // Draining into a slot array empties the tree...
//! let mut slots = slots::vacant();
//! tree.to_sorted_array(&mut slots);
//! assert!(tree.is_empty());
//!
//! // ...and rebuilding from it consumes the slots again.
//! tree.from_sorted_array(&mut slots);
//! assert_eq!(tree.retrieve(&1), Some(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::slots::{self, SlotArray};

/// A child link. `None` is the explicit "no subtree here" marker; a `Some`
/// link exclusively owns the subtree below it.
type Link<R> = Option<Box<Node<R>>>;

/// A Binary Search Tree storing unique records.
///
/// Records are kept in BST order: for every node, everything in its left
/// subtree is less than its record and everything in its right subtree is
/// greater. Equal records are rejected on insertion, so the ordering is
/// strict and duplicate-free.
///
/// The tree does not balance itself. The only rebalancing mechanism is an
/// explicit round-trip through a sorted slot array with
/// [`to_sorted_array`](BinaryTree::to_sorted_array) and
/// [`from_sorted_array`](BinaryTree::from_sorted_array).
#[derive(Debug)]
pub struct BinaryTree<R> {
    root: Link<R>,
}

#[derive(Clone, Debug)]
struct Node<R> {
    record: R,
    left: Link<R>,
    right: Link<R>,
}

impl<R> Default for BinaryTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: every record in the source is duplicated and the node shape is
/// replicated exactly, including subtree placement.
impl<R> Clone for BinaryTree<R>
where
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Tear down the old content first, then copy.
        self.make_empty();
        self.root = source.root.clone();
    }
}

/// Structural equality: identical shape and equal records at every
/// corresponding node. Ordering plays no part, so two trees holding the same
/// records in different shapes compare unequal.
impl<R> PartialEq for BinaryTree<R>
where
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        links_eq(&self.root, &other.root)
    }
}

impl<R> Eq for BinaryTree<R> where R: Eq {}

fn links_eq<R>(a: &Link<R>, b: &Link<R>) -> bool
where
    R: PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.record == b.record && links_eq(&a.left, &b.left) && links_eq(&a.right, &b.right)
        }
        _ => false,
    }
}

impl<R> BinaryTree<R> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns true iff the tree holds no records. O(1).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Tears the whole tree down, releasing every node and record. Children
    /// are released before their parents. Calling this on an empty tree is a
    /// no-op; dropping the tree does the same thing implicitly.
    pub fn make_empty(&mut self) {
        self.root = None;
    }

    /// Inserts a record, taking ownership of it.
    ///
    /// The record descends from the root: left of nodes holding greater
    /// records, right of nodes holding lesser ones, until it reaches an
    /// absent link and becomes a new leaf there. If an equal record is
    /// already stored, the tree is left unchanged and the rejected record is
    /// handed back to the caller as `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.insert("dog"), Ok(()));
    /// assert_eq!(tree.insert("cat"), Ok(()));
    ///
    /// // An equal record is rejected and handed back.
    /// assert_eq!(tree.insert("dog"), Err("dog"));
    /// ```
    pub fn insert(&mut self, record: R) -> Result<(), R>
    where
        R: Ord,
    {
        Self::insert_at(&mut self.root, record)
    }

    /// Looks up the stored record equal to `target` and borrows it, letting
    /// the caller inspect it without copying. Descends in O(height) using
    /// the BST ordering. Returns `None` when no equal record is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = [2, 1, 3].iter().copied().collect();
    /// assert_eq!(tree.retrieve(&3), Some(&3));
    /// assert_eq!(tree.retrieve(&42), None);
    /// ```
    pub fn retrieve(&self, target: &R) -> Option<&R>
    where
        R: Ord,
    {
        Self::locate(&self.root, target).map(|node| &node.record)
    }

    /// Returns the height of the subtree rooted at the node holding
    /// `target`, or 0 if no such node exists. A leaf has height 1.
    ///
    /// The target is located by ordered descent, but the height itself is
    /// computed by structural recursion that never compares records, so it
    /// would be just as correct on a general binary tree that happened not
    /// to be in BST order. "Absent" and "height 0" are deliberately
    /// indistinguishable in the return value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = [5, 3, 8, 1].iter().copied().collect();
    /// assert_eq!(tree.height(&5), 3); // 5 → 3 → 1 is the longest path
    /// assert_eq!(tree.height(&1), 1);
    /// assert_eq!(tree.height(&42), 0);
    /// ```
    pub fn height(&self, target: &R) -> usize
    where
        R: Ord,
    {
        Self::locate(&self.root, target).map_or(0, Node::height)
    }

    /// Drains the tree into `slots` in ascending order, starting at slot 0.
    ///
    /// Each record is moved out of its node directly into a slot; the nodes
    /// are released as the traversal consumes them, so afterwards the tree
    /// is empty and the array is the sole owner of every record. Slots past
    /// the drained range are left exactly as passed in.
    ///
    /// # Panics
    ///
    /// Panics if the tree holds more than [`SLOT_COUNT`](crate::SLOT_COUNT)
    /// records. Staying within capacity is the caller's obligation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{slots, BinaryTree};
    ///
    /// let mut tree: BinaryTree<i32> = [2, 1, 3].iter().copied().collect();
    /// let mut slots = slots::vacant();
    /// tree.to_sorted_array(&mut slots);
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(slots[0], Some(1));
    /// assert_eq!(slots[1], Some(2));
    /// assert_eq!(slots[2], Some(3));
    /// assert_eq!(slots[3], None);
    /// ```
    pub fn to_sorted_array(&mut self, slots: &mut SlotArray<R>) {
        let mut next = 0;
        Self::drain_in_order(self.root.take(), slots, &mut next);
    }

    /// Replaces the tree's content with a balanced tree built from the
    /// contiguous occupied prefix of `slots`, which must be sorted ascending
    /// with no duplicates.
    ///
    /// Any existing content is torn down first. The record at the middle of
    /// the active range is moved out of its slot and inserted, then the left
    /// and right halves are rebuilt the same way. Because the midpoints of a
    /// sorted array are inserted first, the result is height-balanced and in
    /// BST order. Every consumed slot is left vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{slots, BinaryTree};
    ///
    /// let mut slots = slots::vacant();
    /// for (i, n) in (1..=5).enumerate() {
    ///     slots[i] = Some(n);
    /// }
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.from_sorted_array(&mut slots);
    ///
    /// assert!(slots.iter().all(Option::is_none));
    /// assert_eq!(tree.to_string(), "1 2 3 4 5 \n");
    /// assert_eq!(tree.height(&3), 3); // the midpoint became the root
    /// ```
    pub fn from_sorted_array(&mut self, slots: &mut SlotArray<R>)
    where
        R: Ord,
    {
        self.make_empty();
        self.build_from(slots, 0, slots::occupied_len(slots));
    }

    /// Returns an adapter that [`Display`](fmt::Display)s the tree rotated
    /// 90°: the right subtree above the node, the left subtree below, one
    /// line per node, indented 4 spaces per depth level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = [2, 1, 3].iter().copied().collect();
    /// assert_eq!(tree.sideways().to_string(), "    3\n2\n    1\n");
    /// ```
    pub fn sideways(&self) -> Sideways<'_, R> {
        Sideways { tree: self }
    }

    fn insert_at(link: &mut Link<R>, record: R) -> Result<(), R>
    where
        R: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node {
                    record,
                    left: None,
                    right: None,
                }));
                Ok(())
            }
            Some(node) => match record.cmp(&node.record) {
                Ordering::Less => Self::insert_at(&mut node.left, record),
                Ordering::Greater => Self::insert_at(&mut node.right, record),
                Ordering::Equal => Err(record),
            },
        }
    }

    fn locate<'a>(link: &'a Link<R>, target: &R) -> Option<&'a Node<R>>
    where
        R: Ord,
    {
        match link {
            None => None,
            Some(node) => match target.cmp(&node.record) {
                Ordering::Less => Self::locate(&node.left, target),
                Ordering::Equal => Some(node),
                Ordering::Greater => Self::locate(&node.right, target),
            },
        }
    }

    fn drain_in_order(link: Link<R>, slots: &mut SlotArray<R>, next: &mut usize) {
        if let Some(node) = link {
            let node = *node;
            Self::drain_in_order(node.left, slots, next);
            slots[*next] = Some(node.record);
            *next += 1;
            Self::drain_in_order(node.right, slots, next);
        }
    }

    /// Rebuilds the half-open slot range `[low, high)`, midpoint first.
    fn build_from(&mut self, slots: &mut SlotArray<R>, low: usize, high: usize)
    where
        R: Ord,
    {
        if low >= high {
            return;
        }
        let mid = low + (high - low - 1) / 2;
        if let Some(record) = slots[mid].take() {
            // Sorted distinct input never collides with what's already in.
            let _ = self.insert(record);
        }
        self.build_from(slots, low, mid);
        self.build_from(slots, mid + 1, high);
    }
}

impl<R> Node<R> {
    /// Height of the subtree rooted at this node: 1 + the taller child's
    /// height, with an absent child contributing 0. Pure structure; only
    /// ever asks whether a link is present.
    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::height);
        let right = self.right.as_deref().map_or(0, Node::height);
        1 + left.max(right)
    }
}

/// Builds a tree by inserting every record in iteration order. Records equal
/// to one already inserted are rejected and dropped.
impl<R> FromIterator<R> for BinaryTree<R>
where
    R: Ord,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tree = Self::new();
        for record in iter {
            let _ = tree.insert(record);
        }
        tree
    }
}

/// The in-order stream: every record in ascending order, each followed by a
/// single space, with a trailing line break.
impl<R> fmt::Display for BinaryTree<R>
where
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_in_order(&self.root, f)?;
        writeln!(f)
    }
}

fn write_in_order<R>(link: &Link<R>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    R: fmt::Display,
{
    if let Some(node) = link {
        write_in_order(&node.left, f)?;
        write!(f, "{} ", node.record)?;
        write_in_order(&node.right, f)?;
    }
    Ok(())
}

/// Displays a [`BinaryTree`] sideways. See [`BinaryTree::sideways`].
pub struct Sideways<'a, R> {
    tree: &'a BinaryTree<R>,
}

impl<R> fmt::Display for Sideways<'_, R>
where
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sideways(&self.tree.root, 0, f)
    }
}

fn write_sideways<R>(link: &Link<R>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    R: fmt::Display,
{
    if let Some(node) = link {
        write_sideways(&node.right, depth + 1, f)?;
        writeln!(f, "{:indent$}{}", "", node.record, indent = depth * 4)?;
        write_sideways(&node.left, depth + 1, f)?;
    }
    Ok(())
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a model set. This way we
    /// can ensure that after a random smattering of inserts, round-trips
    /// and teardowns the tree holds the same records as the model.
    fn do_ops(ops: &[Op<i8>], tree: &mut BinaryTree<i8>, model: &mut BTreeSet<i8>) {
        for op in ops {
            match *op {
                Op::Insert(x) => {
                    assert_eq!(tree.insert(x).is_ok(), model.insert(x));
                }
                Op::Retrieve(x) => {
                    assert_eq!(tree.retrieve(&x), model.get(&x));
                }
                Op::RoundTrip => {
                    // Stay inside the transfer array's capacity contract.
                    if model.len() <= slots::SLOT_COUNT {
                        let mut slots = slots::vacant();
                        tree.to_sorted_array(&mut slots);
                        tree.from_sorted_array(&mut slots);
                    }
                }
                Op::MakeEmpty => {
                    tree.make_empty();
                    model.clear();
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn matches_model_set(ops: Vec<Op<i8>>) -> bool {
            let mut tree = BinaryTree::new();
            let mut model = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut model);
            model.iter().all(|x| tree.retrieve(x) == Some(x))
        }
    }

    quickcheck::quickcheck! {
        fn in_order_stream_matches_model_order(ops: Vec<Op<i8>>) -> bool {
            let mut tree = BinaryTree::new();
            let mut model = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut model);
            let expected: String = model.iter().map(|x| format!("{} ", x)).collect();
            tree.to_string() == format!("{}\n", expected)
        }
    }
}
