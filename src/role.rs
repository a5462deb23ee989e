//! Navigation roles and element classification.
//!
//! A role names the navigation meaning of an element, not its rendering.
//! The host tree
//! answers "does this element match role R" through
//! [`TreeAdapter::matches`](crate::adapter::TreeAdapter::matches); this module
//! defines the closed vocabulary those queries use and the classification
//! function that picks the widget family for a focused element.

use crate::adapter::{NodeId, TreeAdapter};

/// Navigation role vocabulary.
///
/// The first group of variants classifies focusable elements; the rest are
/// structural roles the resolver queries while walking the tree (groups,
/// containers, and activation sub-targets). A single element may match
/// several roles (an expanded parent item matches `Item`, `Parent`, and
/// `ExpandedParent`); [`classify`] returns the most specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // Focusable tree elements.
    /// A navigable row in a tree section.
    Item,
    /// An item that owns a collapsible child group.
    Parent,
    /// A `Parent` whose child group is currently expanded.
    ExpandedParent,
    /// The title row of a section.
    GroupTitle,
    /// A separator between runs of sections.
    Separator,
    /// A section container. Matches only while the section is visible.
    Section,

    // Focusable flat-family elements.
    /// A tab in a tab strip.
    Tab,
    /// A top-level row in a log panel.
    LogRow,
    /// A nested object inside a log row.
    LogRowObject,
    /// A button or control in a toolbar.
    ToolbarItem,

    // Structural roles (containers and sub-targets, never focused directly).
    /// A container of items within a section, or a nested child group.
    Group,
    /// A group nested under another group (the child group of a `Parent`).
    NestedGroup,
    /// A nested group that is currently expanded.
    ExpandedGroup,
    /// An `Item` sitting inside an `ExpandedGroup`.
    NestedItem,
    /// An `Item` currently revealed: child of a section's top-level group or
    /// of an expanded nested group, inside a visible section.
    VisibleItem,
    /// The row container of a log panel.
    LogGroup,
    /// The container of toolbar items.
    Toolbar,
    /// The expand/collapse control inside a `Parent` item.
    Expander,
    /// The sub-element that receives an element's primary activation.
    ActivationTarget,
    /// A boolean control inside an element, flipped by Space.
    Toggle,
}

/// Widget family a focused element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Collapsible tree of sections, titles, items, and separators.
    Tree,
    /// Flat tab strip.
    Tabs,
    /// Log rows with nested row objects.
    Log,
    /// Toolbar buttons.
    Toolbar,
}

impl Role {
    /// The widget family this role navigates in, if it is focusable.
    ///
    /// Structural roles return `None`; they are never dispatch targets.
    pub fn family(&self) -> Option<Family> {
        match self {
            Role::Item
            | Role::Parent
            | Role::ExpandedParent
            | Role::GroupTitle
            | Role::Separator
            | Role::Section => Some(Family::Tree),
            Role::Tab => Some(Family::Tabs),
            Role::LogRow | Role::LogRowObject => Some(Family::Log),
            Role::ToolbarItem => Some(Family::Toolbar),
            _ => None,
        }
    }
}

/// Classification precedence: most specific focusable role first.
///
/// Flat-family markers never overlap tree markers, so their relative order
/// only matters against each other (a row object is checked before its row).
const CLASSIFY_ORDER: &[Role] = &[
    Role::Tab,
    Role::ToolbarItem,
    Role::LogRowObject,
    Role::LogRow,
    Role::Separator,
    Role::GroupTitle,
    Role::ExpandedParent,
    Role::Parent,
    Role::Item,
    Role::Section,
];

/// Map an element to its navigation role, or `None` for unmarked elements.
///
/// Pure function of the element's markers as reported by the adapter; an
/// element with no recognized marker makes the whole key event a no-op.
pub fn classify<T: TreeAdapter + ?Sized>(tree: &T, node: NodeId) -> Option<Role> {
    CLASSIFY_ORDER
        .iter()
        .copied()
        .find(|&role| tree.matches(node, role))
}
