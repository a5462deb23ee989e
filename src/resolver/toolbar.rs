//! Toolbar family: horizontal stepping by ordinal position.
//!
//! Toolbar items may be spread across nested containers, so movement is by
//! ordinal index among all items of the enclosing toolbar rather than by
//! direct siblinghood. Vertical keys are left to the host.

use crate::adapter::TreeAdapter;
use crate::outcome::{Outcome, Resolution};
use crate::resolver::{move_by_ordinal, NavContext};
use crate::role::Role;

pub(crate) fn handle<T: TreeAdapter + ?Sized>(tree: &T, ctx: &NavContext) -> Resolution {
    if !ctx.info.is_horizontal {
        return Resolution::ignored();
    }
    let found = tree.closest(ctx.target, Role::Toolbar).and_then(|toolbar| {
        let items = tree.matching_descendants(toolbar, Role::ToolbarItem);
        move_by_ordinal(&items, ctx.target, ctx.info.is_forward, 1)
    });
    Resolution::if_found(found.map(Outcome::Focus))
}
