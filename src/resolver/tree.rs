//! Tree family: vertical and horizontal navigation over collapsible
//! sections of items.
//!
//! The structure navigated here is the classic styles-panel shape: a run of
//! sections, each holding a title and a top-level group of items; an item
//! marked as a parent is followed by a nested group that is revealed while
//! the parent is expanded; separators split runs of sections. Vertical
//! motion walks items with fallbacks to titles and separators; horizontal
//! motion drives expand/collapse and descends into or ascends out of nested
//! groups.

use crate::adapter::{find_sibling, first_sibling, sibling_where, NodeId, TreeAdapter};
use crate::key::Scope;
use crate::outcome::{Outcome, Resolution};
use crate::resolver::{activation_target, NavContext};
use crate::role::Role;

pub(crate) fn handle<T: TreeAdapter + ?Sized>(tree: &T, ctx: &NavContext) -> Resolution {
    if ctx.info.is_vertical {
        Resolution::of_opt(vertical(tree, ctx).map(Outcome::Focus))
    } else if ctx.info.is_horizontal {
        Resolution::of_opt(horizontal(tree, ctx))
    } else if ctx.info.is_enter {
        Resolution::of_opt(enter(tree, ctx.target))
    } else if ctx.info.is_space {
        Resolution::of_opt(space(tree, ctx.target))
    } else {
        Resolution::ignored()
    }
}

fn vertical<T: TreeAdapter + ?Sized>(tree: &T, ctx: &NavContext) -> Option<NodeId> {
    let target = ctx.target;
    let forward = ctx.info.is_forward;
    match ctx.info.scope {
        Scope::Item => match ctx.role {
            Role::Item | Role::Parent | Role::ExpandedParent => {
                adjacent_item(tree, target, forward)
            }
            Role::GroupTitle => adjacent_item_from_title(tree, target, forward)
                // Empty group: skip straight to the neighboring section.
                .or_else(|| adjacent_section_title(tree, target, forward, true)),
            Role::Separator => adjacent_item_from_separator(tree, target, forward),
            _ => None,
        },
        Scope::Group => adjacent_section_title(tree, target, forward, true),
        Scope::Section => adjacent_separator(tree, target, forward),
    }
}

/// Nearest navigable item before/after `start`, with title and separator
/// fallbacks once the enclosing group is exhausted.
fn adjacent_item<T: TreeAdapter + ?Sized>(
    tree: &T,
    start: NodeId,
    forward: bool,
) -> Option<NodeId> {
    // An item with no enclosing group is malformed; navigation stays inert.
    let branch = tree.closest(start, Role::Group)?;

    let mut found = if !tree.matches(branch, Role::NestedGroup) {
        // Top-level group of a section.
        let mut found = if forward && tree.matches(start, Role::ExpandedParent) {
            first_expanded_child(tree, start)
        } else {
            find_sibling(tree, start, Role::Item, forward)
        };
        // Moving backward onto an expanded parent lands on the deepest
        // visible row of its child group, not the parent itself.
        if !forward {
            if let Some(candidate) = found {
                if tree.matches(candidate, Role::ExpandedParent) {
                    found = find_sibling(tree, candidate, Role::ExpandedGroup, true)
                        .and_then(|group| tree.last_matching(group, Role::Item));
                }
            }
        }
        found
    } else {
        // Inside a nested group: exhaust siblings, then step out to the
        // branch's neighboring item. Backward, that neighbor is the parent.
        find_sibling(tree, start, Role::Item, forward)
            .or_else(|| find_sibling(tree, branch, Role::Item, forward))
    };

    if found.is_none() {
        found = if forward {
            adjacent_section_title(tree, branch, true, false)
        } else {
            current_section_title(tree, branch)
        };
    }
    if found.is_none() {
        found = adjacent_separator(tree, branch, forward);
    }
    found
}

fn is_chunk<T: TreeAdapter + ?Sized>(tree: &T, node: NodeId) -> bool {
    tree.matches(node, Role::Separator) || tree.matches(node, Role::Section)
}

/// The separator-or-section this node navigates among: a separator is its
/// own chunk, anything else belongs to its enclosing visible section.
fn closest_chunk<T: TreeAdapter + ?Sized>(tree: &T, node: NodeId) -> Option<NodeId> {
    if tree.matches(node, Role::Separator) {
        Some(node)
    } else {
        tree.closest(node, Role::Section)
    }
}

fn current_section_title<T: TreeAdapter + ?Sized>(tree: &T, node: NodeId) -> Option<NodeId> {
    let section = tree.closest(node, Role::Section)?;
    tree.first_matching(section, Role::GroupTitle)
}

/// Title of the neighboring section. With `extend_past_separator` the walk
/// skips separators; without it, hitting one means there is no adjacent
/// title (the caller falls back to separator navigation).
fn adjacent_section_title<T: TreeAdapter + ?Sized>(
    tree: &T,
    start: NodeId,
    forward: bool,
    extend_past_separator: bool,
) -> Option<NodeId> {
    let include_self = tree.matches(start, Role::Item);
    let parent = closest_chunk(tree, start)?;
    let adjacent = if !forward && include_self {
        // Backward from an item first stops at its own section's title.
        tree.first_matching(parent, Role::GroupTitle)
    } else if extend_past_separator {
        find_sibling(tree, parent, Role::Section, forward)
    } else {
        sibling_where(tree, parent, forward, |n| is_chunk(tree, n))
    };
    let adjacent = adjacent?;
    if tree.matches(adjacent, Role::Separator) {
        return None;
    }
    current_section_title(tree, adjacent)
}

fn adjacent_separator<T: TreeAdapter + ?Sized>(
    tree: &T,
    start: NodeId,
    forward: bool,
) -> Option<NodeId> {
    let parent = closest_chunk(tree, start)?;
    let found = find_sibling(tree, parent, Role::Separator, forward);
    if found.is_none() && !forward {
        // No separator above: land on the very first section's title.
        let first = first_sibling(tree, parent, Role::Section)?;
        return tree.first_matching(first, Role::GroupTitle);
    }
    found
}

fn adjacent_item_from_title<T: TreeAdapter + ?Sized>(
    tree: &T,
    title: NodeId,
    forward: bool,
) -> Option<NodeId> {
    if forward {
        let group = find_sibling(tree, title, Role::Group, true)?;
        tree.first_matching(group, Role::Item)
    } else {
        let section = tree.closest(title, Role::Section)?;
        let chunk = sibling_where(tree, section, false, |n| is_chunk(tree, n))?;
        if tree.matches(chunk, Role::Separator) {
            Some(chunk)
        } else {
            tree.last_matching(chunk, Role::VisibleItem)
        }
    }
}

fn adjacent_item_from_separator<T: TreeAdapter + ?Sized>(
    tree: &T,
    separator: NodeId,
    forward: bool,
) -> Option<NodeId> {
    let section = find_sibling(tree, separator, Role::Section, forward)?;
    if forward {
        tree.first_matching(section, Role::GroupTitle)
    } else {
        tree.last_matching(section, Role::VisibleItem)
    }
}

fn first_expanded_child<T: TreeAdapter + ?Sized>(tree: &T, parent: NodeId) -> Option<NodeId> {
    let group = find_sibling(tree, parent, Role::ExpandedGroup, true)?;
    tree.first_matching(group, Role::Item)
}

fn expanded_parent_of<T: TreeAdapter + ?Sized>(tree: &T, item: NodeId) -> Option<NodeId> {
    let group = tree.closest(item, Role::NestedGroup)?;
    find_sibling(tree, group, Role::ExpandedParent, false)
}

fn expander_of<T: TreeAdapter + ?Sized>(tree: &T, parent: NodeId) -> NodeId {
    tree.first_matching(parent, Role::Expander).unwrap_or(parent)
}

fn horizontal<T: TreeAdapter + ?Sized>(tree: &T, ctx: &NavContext) -> Option<Outcome> {
    let target = ctx.target;
    let forward = ctx.info.is_forward;
    if tree.matches(target, Role::Parent) {
        if forward {
            if !tree.matches(target, Role::ExpandedParent) {
                // Expand in place; focus stays where it is.
                return Some(Outcome::Activate {
                    target: expander_of(tree, target),
                    refocus: None,
                });
            }
            return first_expanded_child(tree, target).map(Outcome::Focus);
        }
        if tree.matches(target, Role::ExpandedParent) {
            return Some(Outcome::Activate {
                target: expander_of(tree, target),
                refocus: None,
            });
        }
        None
    } else if !forward && tree.matches(target, Role::NestedItem) {
        expanded_parent_of(tree, target).map(Outcome::Focus)
    } else {
        None
    }
}

fn enter<T: TreeAdapter + ?Sized>(tree: &T, target: NodeId) -> Option<Outcome> {
    if tree.matches(target, Role::Item) || tree.matches(target, Role::GroupTitle) {
        Some(Outcome::Activate {
            target: activation_target(tree, target),
            refocus: Some(target),
        })
    } else if tree.matches(target, Role::Separator) {
        Some(Outcome::Activate {
            target: activation_target(tree, target),
            refocus: None,
        })
    } else {
        None
    }
}

fn space<T: TreeAdapter + ?Sized>(tree: &T, target: NodeId) -> Option<Outcome> {
    let toggle = tree.first_matching(target, Role::Toggle)?;
    Some(Outcome::Toggle {
        target: toggle,
        refocus: Some(target),
    })
}
