//! Shared fixtures for the integration and property tests.

#![allow(dead_code)] // Each test binary uses a subset.

use dashnav::{FocusHost, Markers, NodeId, SnapshotTree};

/// A built tree panel plus handles to its parts, section by section.
pub struct TreePanel {
    pub tree: SnapshotTree,
    pub root: NodeId,
    pub sections: Vec<Section>,
    pub separators: Vec<NodeId>,
}

pub struct Section {
    pub section: NodeId,
    pub title: NodeId,
    pub group: NodeId,
    pub items: Vec<NodeId>,
}

/// Build a run of sections with the given item counts. With
/// `separators`, a separator is placed between every pair of sections.
pub fn tree_panel(item_counts: &[usize], separators: bool) -> TreePanel {
    let mut tree = SnapshotTree::new();
    let root = tree.insert(None, Markers::empty());
    let mut sections = Vec::new();
    let mut seps = Vec::new();

    for (i, &count) in item_counts.iter().enumerate() {
        if separators && i > 0 {
            seps.push(tree.insert(Some(root), Markers::SEPARATOR));
        }
        let section = tree.insert(Some(root), Markers::SECTION);
        let title = tree.insert(Some(section), Markers::GROUP_TITLE);
        let group = tree.insert(Some(section), Markers::GROUP);
        let items = (0..count)
            .map(|_| tree.insert(Some(group), Markers::ITEM))
            .collect();
        sections.push(Section {
            section,
            title,
            group,
            items,
        });
    }

    TreePanel {
        tree,
        root,
        sections,
        separators: seps,
    }
}

/// Build a log group with `rows` rows; row 0 carries `objects` nested
/// row objects.
pub fn log_panel(rows: usize, objects: usize) -> (SnapshotTree, Vec<NodeId>, Vec<NodeId>) {
    let mut tree = SnapshotTree::new();
    let group = tree.insert(None, Markers::LOG_GROUP);
    let row_ids: Vec<NodeId> = (0..rows)
        .map(|_| tree.insert(Some(group), Markers::LOG_ROW))
        .collect();
    let object_ids = if rows > 0 {
        (0..objects)
            .map(|_| tree.insert(Some(row_ids[0]), Markers::LOG_ROW_OBJECT))
            .collect()
    } else {
        Vec::new()
    };
    (tree, row_ids, object_ids)
}

/// What a host was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Focus(NodeId),
    Activate(NodeId),
    Toggle(NodeId),
    MarkForRefocus(NodeId),
}

/// Host that records every side-effect request.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Focus(n) => Some(*n),
            _ => None,
        })
    }
}

impl FocusHost for RecordingHost {
    fn focus(&mut self, node: NodeId) {
        self.calls.push(HostCall::Focus(node));
    }

    fn activate(&mut self, node: NodeId) {
        self.calls.push(HostCall::Activate(node));
    }

    fn toggle(&mut self, node: NodeId) {
        self.calls.push(HostCall::Toggle(node));
    }

    fn mark_for_refocus(&mut self, node: NodeId) {
        self.calls.push(HostCall::MarkForRefocus(node));
    }
}
