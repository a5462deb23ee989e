//! The boundary between the resolver and the host's UI tree.
//!
//! The resolver never owns or mutates tree structure. Everything it knows
//! about the panel comes through [`TreeAdapter`]: role membership, sibling
//! order, ancestry, and descendant queries. A host backed by a real DOM
//! implements this over selectors; [`SnapshotTree`](crate::snapshot) is an
//! in-memory implementation for tests and retained-mode hosts.

use crate::role::Role;

/// Opaque handle to a host-owned UI node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Read-only view of the host UI tree.
///
/// All methods must be cheap and side-effect-free; the resolver may call
/// them several times per key event. Implementations decide what each
/// [`Role`] means in their markup (for the reference mapping see
/// [`SnapshotTree`](crate::snapshot::SnapshotTree)).
pub trait TreeAdapter {
    /// Does `node` match `role`?
    fn matches(&self, node: NodeId, role: Role) -> bool;

    /// The next sibling of `node` in document order, regardless of role.
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// The previous sibling of `node` in document order, regardless of role.
    fn prev_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// The nearest ancestor-or-self of `node` matching `role`.
    fn closest(&self, node: NodeId, role: Role) -> Option<NodeId>;

    /// All descendants of `container` matching `role`, in document order.
    ///
    /// `container` itself is never included.
    fn matching_descendants(&self, container: NodeId, role: Role) -> Vec<NodeId>;

    /// First descendant of `container` matching `role`.
    fn first_matching(&self, container: NodeId, role: Role) -> Option<NodeId> {
        self.matching_descendants(container, role).first().copied()
    }

    /// Last descendant of `container` matching `role`.
    fn last_matching(&self, container: NodeId, role: Role) -> Option<NodeId> {
        self.matching_descendants(container, role).last().copied()
    }
}

/// Walk siblings of `start` in the given direction until one satisfies
/// `pred`. `start` itself is never a candidate.
pub(crate) fn sibling_where<T, F>(tree: &T, start: NodeId, forward: bool, pred: F) -> Option<NodeId>
where
    T: TreeAdapter + ?Sized,
    F: Fn(NodeId) -> bool,
{
    let mut node = start;
    loop {
        node = if forward {
            tree.next_sibling(node)?
        } else {
            tree.prev_sibling(node)?
        };
        if pred(node) {
            return Some(node);
        }
    }
}

/// Nearest sibling of `start` matching `role`, in the given direction.
pub(crate) fn find_sibling<T: TreeAdapter + ?Sized>(
    tree: &T,
    start: NodeId,
    role: Role,
    forward: bool,
) -> Option<NodeId> {
    sibling_where(tree, start, forward, |n| tree.matches(n, role))
}

/// First node matching `role` among `start` and all its siblings, scanning
/// from the front of the sibling list.
pub(crate) fn first_sibling<T: TreeAdapter + ?Sized>(
    tree: &T,
    start: NodeId,
    role: Role,
) -> Option<NodeId> {
    let mut front = start;
    while let Some(prev) = tree.prev_sibling(front) {
        front = prev;
    }
    if tree.matches(front, role) {
        return Some(front);
    }
    find_sibling(tree, front, role, true)
}
