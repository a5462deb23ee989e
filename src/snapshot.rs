//! In-memory reference implementation of [`TreeAdapter`].
//!
//! `SnapshotTree` is what a retained-mode host (or a test) registers its
//! panel structure into: every navigable element becomes a node carrying a
//! set of [`Markers`]. Expansion and visibility are per-node flags the
//! host flips as the panel state changes; role matching derives everything
//! else (nested groups, visible items) from structure, so the host never
//! keeps compound markers in sync by hand.
//!
//! # Example
//!
//! ```rust
//! use dashnav::{Markers, Role, SnapshotTree, TreeAdapter};
//!
//! let mut tree = SnapshotTree::new();
//! let section = tree.insert(None, Markers::SECTION);
//! let group = tree.insert(Some(section), Markers::GROUP);
//! let item = tree.insert(Some(group), Markers::ITEM);
//!
//! assert!(tree.matches(item, Role::Item));
//! assert!(tree.matches(item, Role::VisibleItem));
//! tree.set_hidden(section, true);
//! assert!(!tree.matches(section, Role::Section));
//! ```

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::adapter::{NodeId, TreeAdapter};
use crate::role::Role;

bitflags! {
    /// Navigation markers a host attaches to a node.
    ///
    /// Each flag is single-purpose; compound states (expanded parent,
    /// nested item, visible item) are derived during matching, never
    /// stored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Markers: u32 {
        /// Navigable tree row.
        const ITEM = 1 << 0;
        /// Tree row owning a collapsible child group.
        const PARENT = 1 << 1;
        /// Item container within a section, or nested child group.
        const GROUP = 1 << 2;
        /// Section title row.
        const GROUP_TITLE = 1 << 3;
        /// Separator between section runs.
        const SEPARATOR = 1 << 4;
        /// Section container.
        const SECTION = 1 << 5;
        /// Tab in a tab strip.
        const TAB = 1 << 6;
        /// Top-level log row.
        const LOG_ROW = 1 << 7;
        /// Nested object inside a log row.
        const LOG_ROW_OBJECT = 1 << 8;
        /// Log row container.
        const LOG_GROUP = 1 << 9;
        /// Toolbar container.
        const TOOLBAR = 1 << 10;
        /// Toolbar button.
        const TOOLBAR_ITEM = 1 << 11;
        /// Expand/collapse control inside a parent item.
        const EXPANDER = 1 << 12;
        /// Primary activation sub-target.
        const ACTIVATION_TARGET = 1 << 13;
        /// Boolean control flipped by Space.
        const TOGGLE = 1 << 14;

        /// State flag: node (parent item or group) is expanded.
        const EXPANDED = 1 << 15;
        /// State flag: node (section) is hidden.
        const HIDDEN = 1 << 16;
    }
}

#[derive(Debug)]
struct SnapshotNode {
    markers: Markers,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
}

/// Owned, mutable snapshot of a panel's navigable structure.
#[derive(Debug, Default)]
pub struct SnapshotTree {
    nodes: FxHashMap<NodeId, SnapshotNode>,
    roots: SmallVec<[NodeId; 4]>,
    next_id: u64,
}

impl SnapshotTree {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under `parent` (or as a root) and return its id.
    ///
    /// Children keep registration order, which is the document order every
    /// sibling and descendant query observes.
    pub fn insert(&mut self, parent: Option<NodeId>, markers: Markers) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            SnapshotNode {
                markers,
                parent,
                children: SmallVec::new(),
            },
        );
        match parent {
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(&p) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Flip a node's expanded state.
    pub fn set_expanded(&mut self, node: NodeId, expanded: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.markers.set(Markers::EXPANDED, expanded);
        }
    }

    /// Flip a node's hidden state.
    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.markers.set(Markers::HIDDEN, hidden);
        }
    }

    /// The markers currently on a node.
    pub fn markers(&self, node: NodeId) -> Markers {
        self.nodes
            .get(&node)
            .map(|n| n.markers)
            .unwrap_or(Markers::empty())
    }

    /// A node's parent, if any.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node)?.parent
    }

    fn has(&self, node: NodeId, flags: Markers) -> bool {
        self.markers(node).contains(flags)
    }

    fn parent_has(&self, node: NodeId, flags: Markers) -> bool {
        self.parent(node).is_some_and(|p| self.has(p, flags))
    }

    fn in_visible_section(&self, group: NodeId) -> bool {
        self.parent(group)
            .is_some_and(|s| self.has(s, Markers::SECTION) && !self.has(s, Markers::HIDDEN))
    }

    fn collect_descendants(&self, node: NodeId, role: Role, out: &mut Vec<NodeId>) {
        let Some(n) = self.nodes.get(&node) else {
            return;
        };
        for &child in &n.children {
            if self.matches(child, role) {
                out.push(child);
            }
            self.collect_descendants(child, role, out);
        }
    }
}

impl TreeAdapter for SnapshotTree {
    fn matches(&self, node: NodeId, role: Role) -> bool {
        let m = self.markers(node);
        match role {
            Role::Item => m.contains(Markers::ITEM),
            Role::Parent => m.contains(Markers::PARENT),
            Role::ExpandedParent => m.contains(Markers::PARENT | Markers::EXPANDED),
            Role::GroupTitle => m.contains(Markers::GROUP_TITLE),
            Role::Separator => m.contains(Markers::SEPARATOR),
            Role::Section => m.contains(Markers::SECTION) && !m.contains(Markers::HIDDEN),
            Role::Tab => m.contains(Markers::TAB),
            Role::LogRow => m.contains(Markers::LOG_ROW),
            Role::LogRowObject => m.contains(Markers::LOG_ROW_OBJECT),
            Role::LogGroup => m.contains(Markers::LOG_GROUP),
            Role::Toolbar => m.contains(Markers::TOOLBAR),
            Role::ToolbarItem => m.contains(Markers::TOOLBAR_ITEM),
            Role::Group => m.contains(Markers::GROUP),
            Role::NestedGroup => {
                m.contains(Markers::GROUP) && self.parent_has(node, Markers::GROUP)
            }
            Role::ExpandedGroup => m.contains(Markers::GROUP | Markers::EXPANDED),
            Role::NestedItem => {
                m.contains(Markers::ITEM)
                    && self.parent_has(node, Markers::GROUP | Markers::EXPANDED)
            }
            Role::VisibleItem => {
                if !m.contains(Markers::ITEM) {
                    return false;
                }
                let Some(group) = self.parent(node) else {
                    return false;
                };
                if !self.has(group, Markers::GROUP) {
                    return false;
                }
                self.has(group, Markers::EXPANDED) || self.in_visible_section(group)
            }
            Role::Expander => m.contains(Markers::EXPANDER),
            Role::ActivationTarget => m.contains(Markers::ACTIVATION_TARGET),
            Role::Toggle => m.contains(Markers::TOGGLE),
        }
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let n = self.nodes.get(&node)?;
        let siblings: &[NodeId] = match n.parent {
            Some(p) => &self.nodes.get(&p)?.children,
            None => &self.roots,
        };
        let idx = siblings.iter().position(|&s| s == node)?;
        siblings.get(idx + 1).copied()
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let n = self.nodes.get(&node)?;
        let siblings: &[NodeId] = match n.parent {
            Some(p) => &self.nodes.get(&p)?.children,
            None => &self.roots,
        };
        let idx = siblings.iter().position(|&s| s == node)?;
        idx.checked_sub(1).and_then(|i| siblings.get(i).copied())
    }

    fn closest(&self, node: NodeId, role: Role) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.matches(n, role) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    fn matching_descendants(&self, container: NodeId, role: Role) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(container, role, &mut out);
        out
    }
}
