//! Directional focus resolution.
//!
//! [`Resolver`] is the sole entry point of the crate: it takes a key event
//! plus the currently focused node, classifies both, and dispatches to the
//! handler for the focused node's widget family. Handlers are pure; they
//! return a [`Resolution`] and never touch the host. Side effects are
//! applied afterwards by [`Resolver::handle_key_event`].

mod log;
mod tabs;
mod toolbar;
mod tree;

use crate::adapter::{NodeId, TreeAdapter};
use crate::config::NavConfig;
use crate::key::{KeyEvent, KeyInfo};
use crate::outcome::{FocusHost, Outcome, Resolution};
use crate::role::{classify, Family, Role};

macro_rules! trace_nav {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Ephemeral per-event record handed to the family handlers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavContext {
    /// The focused element the event arrived on.
    pub target: NodeId,
    /// Its classified role.
    pub role: Role,
    /// The classified key.
    pub info: KeyInfo,
}

/// Keyboard navigation resolver.
///
/// Stateless per call: each [`resolve`](Self::resolve) reads the live tree
/// snapshot and returns a decision without retaining anything between
/// events.
///
/// # Example
///
/// ```rust
/// use dashnav::{
///     KeyCode, KeyEvent, Markers, Outcome, Resolver, SnapshotTree,
/// };
///
/// let mut tree = SnapshotTree::new();
/// let strip = tree.insert(None, Markers::empty());
/// let first = tree.insert(Some(strip), Markers::TAB);
/// let second = tree.insert(Some(strip), Markers::TAB);
///
/// let resolver = Resolver::default();
/// let res = resolver.resolve(&tree, &KeyEvent::new(KeyCode::Right), first);
/// assert_eq!(res.outcome, Some(Outcome::Focus(second)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: NavConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    /// The injected configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Resolve one key event against the current tree snapshot.
    ///
    /// Unrecognized keys, unmarked elements, and exhausted lookups all come
    /// back as an empty resolution; nothing here is an error.
    pub fn resolve<T: TreeAdapter + ?Sized>(
        &self,
        tree: &T,
        event: &KeyEvent,
        focused: NodeId,
    ) -> Resolution {
        if !self.config.enabled || !KeyInfo::is_navigation(event) {
            return Resolution::ignored();
        }
        let Some(role) = classify(tree, focused) else {
            return Resolution::ignored();
        };
        let Some(family) = role.family() else {
            return Resolution::ignored();
        };

        let ctx = NavContext {
            target: focused,
            role,
            info: KeyInfo::from_event(event),
        };
        trace_nav!(?family, ?role, code = ?event.code, "resolving key event");

        let resolution = match family {
            Family::Tree => tree::handle(tree, &ctx),
            Family::Tabs => tabs::handle(tree, &ctx),
            Family::Log => log::handle(tree, &ctx, self.config.page_jump),
            Family::Toolbar => toolbar::handle(tree, &ctx),
        };
        trace_nav!(outcome = ?resolution.outcome, consumed = resolution.consumed, "resolved");
        resolution
    }

    /// Resolve an event and apply its outcome to the host.
    ///
    /// Side effects run strictly after resolution has returned, so a host
    /// activation callback can safely feed the next key event back in.
    /// Returns whether the event was consumed.
    pub fn handle_key_event<T, H>(
        &self,
        tree: &T,
        host: &mut H,
        event: &KeyEvent,
        focused: NodeId,
    ) -> bool
    where
        T: TreeAdapter + ?Sized,
        H: FocusHost,
    {
        let resolution = self.resolve(tree, event, focused);
        match resolution.outcome {
            Some(Outcome::Focus(node)) => host.focus(node),
            Some(Outcome::Activate { target, refocus }) => {
                if let Some(node) = refocus {
                    host.mark_for_refocus(node);
                }
                host.activate(target);
            }
            Some(Outcome::Toggle { target, refocus }) => {
                if let Some(node) = refocus {
                    host.mark_for_refocus(node);
                }
                host.toggle(target);
            }
            None => {}
        }
        resolution.consumed
    }
}

/// Move within an ordinal sequence by `step` positions.
///
/// Single steps stop dead at the edges; coarse jumps (`step > 1`) clamp to
/// the first/last position instead, so a page move near a boundary still
/// lands somewhere.
pub(crate) fn move_by_ordinal(
    nodes: &[NodeId],
    current: NodeId,
    forward: bool,
    step: usize,
) -> Option<NodeId> {
    let len = nodes.len();
    let idx = nodes.iter().position(|&n| n == current)?;
    let target = if forward {
        idx as i64 + step as i64
    } else {
        idx as i64 - step as i64
    };
    if (0..len as i64).contains(&target) {
        return nodes.get(target as usize).copied();
    }
    if step == 1 {
        return None;
    }
    let clamped = if forward { len.checked_sub(1)? } else { 0 };
    nodes.get(clamped).copied()
}

/// The node an activation should be delivered to: the element's marked
/// activation sub-target if it has one, otherwise the element itself.
pub(crate) fn activation_target<T: TreeAdapter + ?Sized>(tree: &T, node: NodeId) -> NodeId {
    tree.first_matching(node, Role::ActivationTarget)
        .unwrap_or(node)
}
