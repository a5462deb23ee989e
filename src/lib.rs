//! # dashnav
//!
//! Keyboard focus navigation engine for developer-tools-style panels.
//!
//! Given a key event and the currently focused element of a panel, dashnav
//! computes which element should receive focus next — or which element
//! should be activated — across four widget families:
//!
//! - **Trees**: collapsible sections of items with titles and separators
//!   (think a styles sidebar), including expand/collapse via horizontal
//!   arrows and coarse Ctrl / Ctrl+Shift jumps between sections.
//! - **Tabs**: flat strips where any arrow steps sideways.
//! - **Logs**: long row lists with page jumps, Home/End, and nested
//!   per-row objects.
//! - **Toolbars**: horizontal stepping by ordinal position.
//!
//! The engine owns nothing: the host exposes its UI tree through the
//! read-only [`TreeAdapter`] trait and receives focus/activation requests
//! through [`FocusHost`]. Resolution is pure, synchronous, and stateless
//! per call; every "not found" is simply no focus change, never an error.
//!
//! # Example
//!
//! ```rust
//! use dashnav::{
//!     KeyCode, KeyEvent, Markers, Outcome, Resolver, SnapshotTree,
//! };
//!
//! // Register a two-item tree section.
//! let mut tree = SnapshotTree::new();
//! let section = tree.insert(None, Markers::SECTION);
//! let title = tree.insert(Some(section), Markers::GROUP_TITLE);
//! let group = tree.insert(Some(section), Markers::GROUP);
//! let first = tree.insert(Some(group), Markers::ITEM);
//! let second = tree.insert(Some(group), Markers::ITEM);
//!
//! let resolver = Resolver::default();
//! let down = KeyEvent::new(KeyCode::Down);
//! assert_eq!(
//!     resolver.resolve(&tree, &down, first).outcome,
//!     Some(Outcome::Focus(second)),
//! );
//!
//! // Navigation is inert past the edges: no wraparound, no error.
//! let up = KeyEvent::new(KeyCode::Up);
//! assert_eq!(resolver.resolve(&tree, &up, title).outcome, None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod key;
pub mod outcome;
pub mod resolver;
pub mod role;
pub mod snapshot;

pub use adapter::{NodeId, TreeAdapter};
pub use config::{NavConfig, NavConfigBuilder, NavConfigError};
pub use key::{KeyCode, KeyEvent, KeyInfo, KeyModifiers, Scope};
pub use outcome::{FocusHost, Outcome, Resolution};
pub use resolver::Resolver;
pub use role::{classify, Family, Role};
pub use snapshot::{Markers, SnapshotTree};
