//! Log family: row-oriented navigation with page jumps and nested row
//! objects.
//!
//! Rows are navigated by ordinal position within the enclosing log group:
//! arrows move one row, page keys move the configured page jump with
//! clamping at the ends, and Home/End jump to the first/last row. A row can
//! hold nested objects;
//! horizontal keys move between them and back out to the row.

use crate::adapter::{NodeId, TreeAdapter};
use crate::outcome::{Outcome, Resolution};
use crate::resolver::{activation_target, move_by_ordinal, NavContext};
use crate::role::Role;

pub(crate) fn handle<T: TreeAdapter + ?Sized>(
    tree: &T,
    ctx: &NavContext,
    page_jump: usize,
) -> Resolution {
    let target = ctx.target;
    let info = &ctx.info;
    let is_row = tree.matches(target, Role::LogRow);
    let is_object = tree.matches(target, Role::LogRowObject);

    let found = if (info.is_arrow && info.is_vertical) || info.is_page {
        let step = if info.is_page { page_jump } else { 1 };
        row_move(tree, target, info.is_forward, step)
    } else if is_row && info.is_edge {
        row_edge(tree, target, info.is_forward)
    } else if info.is_horizontal || (is_object && info.is_edge) {
        horizontal_move(tree, target, info.is_forward, is_object && info.is_edge)
    } else if is_object && info.is_enter {
        return Resolution::of(Outcome::Activate {
            target: activation_target(tree, target),
            refocus: None,
        });
    } else {
        None
    };
    Resolution::if_found(found.map(Outcome::Focus))
}

/// Move the enclosing row by `step` ordinal positions within its log group.
fn row_move<T: TreeAdapter + ?Sized>(
    tree: &T,
    target: NodeId,
    forward: bool,
    step: usize,
) -> Option<NodeId> {
    let row = tree.closest(target, Role::LogRow)?;
    let group = tree.closest(row, Role::LogGroup)?;
    let rows = tree.matching_descendants(group, Role::LogRow);
    move_by_ordinal(&rows, row, forward, step)
}

fn row_edge<T: TreeAdapter + ?Sized>(tree: &T, row: NodeId, forward: bool) -> Option<NodeId> {
    let group = tree.closest(row, Role::LogGroup)?;
    if forward {
        tree.last_matching(group, Role::LogRow)
    } else {
        tree.first_matching(group, Role::LogRow)
    }
}

/// Move between a row and its nested objects.
///
/// Forward on a row descends into the first object; on an object, sideways
/// motion steps by ordinal with the parent row as the backward escape hatch.
/// `to_edge` (Home/End on an object) jumps to the row or the last object.
fn horizontal_move<T: TreeAdapter + ?Sized>(
    tree: &T,
    target: NodeId,
    forward: bool,
    to_edge: bool,
) -> Option<NodeId> {
    if tree.matches(target, Role::LogRow) && forward {
        return tree.first_matching(target, Role::LogRowObject);
    }
    if tree.matches(target, Role::LogRowObject) {
        let row = tree.closest(target, Role::LogRow)?;
        let objects = tree.matching_descendants(row, Role::LogRowObject);
        let mut found = move_by_ordinal(&objects, target, forward, 1);
        if (found.is_none() || to_edge) && !forward {
            found = Some(row);
        } else if to_edge {
            found = tree.last_matching(row, Role::LogRowObject);
        }
        return found;
    }
    None
}
