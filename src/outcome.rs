//! Resolution outcomes and the host side-effect interface.
//!
//! A key event resolves to at most one [`Outcome`]. The resolver itself
//! performs no side effects; `Resolver::handle_key_event` applies the
//! outcome to a [`FocusHost`] only after resolution has fully returned, so
//! activation callbacks can never re-enter a resolution in progress.

use crate::adapter::NodeId;

/// What a key event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Move focus to the node.
    Focus(NodeId),
    /// Trigger the node's primary action (select, navigate, expand,
    /// collapse). `refocus`, when set, names the element the host should
    /// return focus to after the activation rebuilds the panel.
    Activate {
        /// The node to activate.
        target: NodeId,
        /// Element to restore focus to afterwards.
        refocus: Option<NodeId>,
    },
    /// Flip the node's boolean control.
    Toggle {
        /// The control to flip.
        target: NodeId,
        /// Element to restore focus to afterwards.
        refocus: Option<NodeId>,
    },
}

/// The result of resolving one key event.
///
/// `consumed` tells the host whether to stop further propagation of the raw
/// event; it can be true even when no outcome was produced (a tree arrow key
/// at the tree's edge is still swallowed so the page does not scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// The navigation effect, if any.
    pub outcome: Option<Outcome>,
    /// Whether the key event should be considered handled.
    pub consumed: bool,
}

impl Resolution {
    /// No effect, event not handled.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// No effect, but the event is swallowed.
    pub fn consumed() -> Self {
        Self {
            outcome: None,
            consumed: true,
        }
    }

    /// An outcome; the event is swallowed.
    pub fn of(outcome: Outcome) -> Self {
        Self {
            outcome: Some(outcome),
            consumed: true,
        }
    }

    /// An optional outcome, consuming the event either way.
    pub(crate) fn of_opt(outcome: Option<Outcome>) -> Self {
        match outcome {
            Some(outcome) => Self::of(outcome),
            None => Self::consumed(),
        }
    }

    /// Consume the event only if an outcome was found.
    pub(crate) fn if_found(outcome: Option<Outcome>) -> Self {
        Self {
            consumed: outcome.is_some(),
            outcome,
        }
    }
}

/// Side-effect capability the surrounding UI shell implements.
///
/// The resolver requests focus moves and activations through this trait
/// instead of synthesizing input events, so hosts stay free to implement
/// activation however their widgets expect.
pub trait FocusHost {
    /// Move focus to the node.
    fn focus(&mut self, node: NodeId);

    /// Trigger the node's primary action.
    fn activate(&mut self, node: NodeId);

    /// Flip the node's boolean control. Defaults to activation.
    fn toggle(&mut self, node: NodeId) {
        self.activate(node);
    }

    /// Remember that focus should return to the node once the panel has been
    /// rebuilt by an activation. Hosts without rebuild-on-activate can keep
    /// the default no-op.
    fn mark_for_refocus(&mut self, node: NodeId) {
        let _ = node;
    }
}
