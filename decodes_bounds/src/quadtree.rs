// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capacity-bounded point quadtree over [`Bounds`] quadrants.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::bounds::Bounds;
use crate::position::{Position, same_position};

/// Depth at which leaves stop subdividing.
///
/// A leaf at this depth keeps accepting points past its capacity. Without the
/// cap, a cluster of distinct points closer together than the cell size at
/// this depth would keep splitting until the float grid runs out.
pub const MAX_DEPTH: usize = 32;

/// A node is either a leaf holding points or an internal node with four quadrants.
#[derive(Clone)]
enum Node<P> {
    Leaf(Vec<P>),
    Internal(Box<[QuadTree<P>; 4]>),
}

/// A recursive 2D point index.
///
/// Each node covers a [`Bounds`] region. A leaf holds up to `capacity` distinct
/// positions; the insert that would exceed it splits the leaf into four
/// quadrants (via [`Bounds::subbounds`]) and moves its points down. Leaves
/// never collapse again and points are never removed.
///
/// Only x and y are indexed. 3D bounds are flattened on construction.
///
/// ```
/// use decodes_bounds::{Bounds, QuadTree};
///
/// let mut tree = QuadTree::new(1, Bounds::unit_square());
/// assert!(tree.append((0.25, 0.25)));
/// assert!(tree.append((0.75, 0.75)));
/// assert!(!tree.append((2.0, 2.0)));
///
/// assert!(tree.has_children());
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone)]
pub struct QuadTree<P> {
    capacity: usize,
    bounds: Bounds,
    depth: usize,
    // Distinct positions held while this node is a leaf.
    distinct: usize,
    saturated: bool,
    node: Node<P>,
}

impl<P> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("capacity", &self.capacity)
            .field("bounds", &self.bounds)
            .field("depth", &self.depth)
            .field("has_children", &self.has_children())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<P> QuadTree<P> {
    /// Maximum number of distinct positions a leaf holds before splitting.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Region covered by this node.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True once this node has split into quadrants.
    pub fn has_children(&self) -> bool {
        matches!(self.node, Node::Internal(_))
    }

    /// The four quadrants, x fastest then y, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.node {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(children),
        }
    }

    /// Points held directly by this node. Internal nodes hold none.
    pub fn leaf_pts(&self) -> &[P] {
        match &self.node {
            Node::Leaf(pts) => pts,
            Node::Internal(_) => &[],
        }
    }

    /// Total number of points in this subtree.
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Leaf(pts) => pts.len(),
            Node::Internal(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// True when the subtree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every point in this subtree, depth first in quadrant order.
    pub fn pts(&self) -> Vec<&P> {
        let mut out = Vec::new();
        self.collect_pts(&mut out);
        out
    }

    fn collect_pts<'a>(&'a self, out: &mut Vec<&'a P>) {
        match &self.node {
            Node::Leaf(pts) => out.extend(pts.iter()),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.collect_pts(out);
                }
            }
        }
    }

    /// Every leaf in this subtree, depth first in quadrant order.
    pub fn leaves(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Self>) {
        match &self.node {
            Node::Leaf(_) => out.push(self),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

impl<P: Position> QuadTree<P> {
    /// Create an empty tree over `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, bounds: Bounds) -> Self {
        assert!(capacity > 0, "quadtree capacity must be positive");
        Self::with_depth(capacity, bounds.to_2d(), 0)
    }

    fn with_depth(capacity: usize, bounds: Bounds, depth: usize) -> Self {
        Self {
            capacity,
            bounds,
            depth,
            distinct: 0,
            saturated: false,
            node: Node::Leaf(Vec::new()),
        }
    }

    /// Build a tree around `points` and append all of them.
    ///
    /// Returns `None` when `points` is empty.
    pub fn encompass<I: IntoIterator<Item = P>>(capacity: usize, points: I) -> Option<Self> {
        let points: Vec<P> = points.into_iter().collect();
        let bounds = Bounds::encompass(&points, false)?;
        let mut tree = Self::new(capacity, bounds);
        for p in points {
            tree.append(p);
        }
        Some(tree)
    }

    /// Whether `p` falls within the region covered by this subtree.
    ///
    /// Leaves test their bounds; internal nodes ask their quadrants.
    pub fn contains<Q: Position + ?Sized>(&self, p: &Q) -> bool {
        match &self.node {
            Node::Leaf(_) => self.bounds.contains(p),
            Node::Internal(children) => children.iter().any(|c| c.contains(p)),
        }
    }

    /// Insert `pt`. Returns `false` when it lies outside this node's bounds.
    ///
    /// A position already held by the target leaf never triggers a split.
    pub fn append(&mut self, pt: P) -> bool {
        if !self.contains(&pt) {
            return false;
        }
        if let Node::Leaf(pts) = &mut self.node {
            // A saturated leaf takes everything without scanning.
            if self.saturated {
                pts.push(pt);
                return true;
            }
            let repeat = pts.iter().any(|q| same_position(q, &pt));
            if repeat || self.distinct < self.capacity {
                if !repeat {
                    self.distinct += 1;
                }
                pts.push(pt);
                return true;
            }
            if self.depth >= MAX_DEPTH {
                log::warn!(
                    "quadtree leaf at depth {} is over capacity {}; not subdividing further",
                    self.depth,
                    self.capacity
                );
                self.saturated = true;
                pts.push(pt);
                return true;
            }
            self.divide();
        }
        match &mut self.node {
            Node::Internal(children) => match children.iter_mut().find(|c| c.contains(&pt)) {
                Some(child) => child.append(pt),
                None => {
                    log::error!(
                        "no quadrant of {:?} accepted a point it contains",
                        self.bounds
                    );
                    false
                }
            },
            Node::Leaf(_) => false,
        }
    }

    /// Split a leaf into four quadrants and move its points into them.
    fn divide(&mut self) {
        let Node::Leaf(pts) = &mut self.node else {
            return;
        };
        let pts = core::mem::take(pts);
        let quads = self.bounds.subbounds(2);
        let (capacity, depth) = (self.capacity, self.depth + 1);
        let children: [Self; 4] =
            core::array::from_fn(|i| Self::with_depth(capacity, quads[i], depth));
        log::debug!(
            "subdividing quadtree leaf at depth {} centered on {} ({} points)",
            self.depth,
            self.bounds.center(),
            pts.len()
        );
        self.node = Node::Internal(Box::new(children));
        if let Node::Internal(children) = &mut self.node {
            for pt in pts {
                match children.iter_mut().find(|c| c.contains(&pt)) {
                    Some(child) => {
                        child.append(pt);
                    }
                    None => log::error!("no quadrant accepted a redistributed point"),
                }
            }
        }
    }

    /// Points of this subtree lying inside `query`, boundary included.
    ///
    /// Nodes whose bounds miss `query` are skipped; leaf points are then filtered
    /// by exact containment.
    pub fn pts_in_bounds(&self, query: &Bounds) -> Vec<&P> {
        let mut out = Vec::new();
        self.collect_in_bounds(query, &mut out);
        out
    }

    fn collect_in_bounds<'a>(&'a self, query: &Bounds, out: &mut Vec<&'a P>) {
        if !self.bounds.intersects(query) {
            return;
        }
        match &self.node {
            Node::Leaf(pts) => out.extend(pts.iter().filter(|p| query.contains(*p))),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.collect_in_bounds(query, out);
                }
            }
        }
    }
}
