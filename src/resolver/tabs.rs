//! Tabs family: a flat strip where any arrow key steps sideways.

use crate::adapter::{find_sibling, TreeAdapter};
use crate::outcome::{Outcome, Resolution};
use crate::resolver::{activation_target, NavContext};
use crate::role::Role;

pub(crate) fn handle<T: TreeAdapter + ?Sized>(tree: &T, ctx: &NavContext) -> Resolution {
    if ctx.info.is_arrow {
        // Left/Up step back, Right/Down step forward; no wraparound.
        let found = find_sibling(tree, ctx.target, Role::Tab, ctx.info.is_forward);
        Resolution::of_opt(found.map(Outcome::Focus))
    } else if ctx.info.is_enter {
        Resolution::of(Outcome::Activate {
            target: activation_target(tree, ctx.target),
            refocus: None,
        })
    } else {
        Resolution::ignored()
    }
}
