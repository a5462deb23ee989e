//! Key event model and per-event key classification.
//!
//! The resolver does not talk to a real input device. The host translates
//! whatever raw events it receives (browser `keydown`, crossterm, a test
//! harness) into [`KeyEvent`] values and hands them to the resolver.
//!
//! [`KeyInfo`] is the per-event classification the per-family handlers
//! dispatch on: axis (vertical/horizontal), direction (forward/backward),
//! stride (arrow/page/edge), and the modifier-derived [`Scope`].

/// A key code relevant to panel navigation.
///
/// Only the keys the resolver reacts to get their own variant; anything else
/// is `Other` and is ignored wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab (recognized but left to the host's sequential focus handling).
    Tab,
    /// Any key the resolver does not handle.
    Other,
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Control key.
    pub ctrl: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt/Option key.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    /// Control and Shift.
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        alt: false,
    };
}

/// A key event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub code: KeyCode,
    /// Modifier keys held at the time of the press.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Create a key event with the given modifiers.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

/// Navigation scope for vertical movement, derived from modifiers.
///
/// Plain arrows move item by item; Ctrl jumps between group (section) titles;
/// Ctrl+Shift jumps between section separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Move between individual items.
    #[default]
    Item,
    /// Jump between section titles.
    Group,
    /// Jump between section separators.
    Section,
}

/// Classification of a single key event.
///
/// Computed once per event and threaded through the per-family handlers so
/// no handler re-derives axis or direction from the raw code.
#[derive(Debug, Clone, Copy)]
pub struct KeyInfo {
    /// Up/Down/Left/Right.
    pub is_arrow: bool,
    /// Up/Down/PageUp/PageDown/Home/End.
    pub is_vertical: bool,
    /// Left/Right.
    pub is_horizontal: bool,
    /// Home/End.
    pub is_edge: bool,
    /// PageUp/PageDown.
    pub is_page: bool,
    /// Down/Right/PageDown/End (motion toward the end of the sequence).
    pub is_forward: bool,
    /// Enter.
    pub is_enter: bool,
    /// Space.
    pub is_space: bool,
    /// Modifier-derived vertical scope.
    pub scope: Scope,
}

impl KeyInfo {
    /// Classify a key event.
    pub fn from_event(event: &KeyEvent) -> Self {
        use KeyCode::*;

        let code = event.code;
        let scope = if event.modifiers.ctrl && event.modifiers.shift {
            Scope::Section
        } else if event.modifiers.ctrl {
            Scope::Group
        } else {
            Scope::Item
        };

        Self {
            is_arrow: matches!(code, Up | Down | Left | Right),
            is_vertical: matches!(code, Up | Down | PageUp | PageDown | Home | End),
            is_horizontal: matches!(code, Left | Right),
            is_edge: matches!(code, Home | End),
            is_page: matches!(code, PageUp | PageDown),
            is_forward: matches!(code, Down | Right | PageDown | End),
            is_enter: code == Enter,
            is_space: code == Space,
            scope,
        }
    }

    /// True if this event belongs to the navigation key set at all.
    ///
    /// Events outside the set are ignored before any tree lookup happens.
    pub fn is_navigation(event: &KeyEvent) -> bool {
        !matches!(event.code, KeyCode::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_classification() {
        let info = KeyInfo::from_event(&KeyEvent::new(KeyCode::Down));
        assert!(info.is_arrow);
        assert!(info.is_vertical);
        assert!(info.is_forward);
        assert!(!info.is_horizontal);
        assert!(!info.is_page);
        assert_eq!(info.scope, Scope::Item);
    }

    #[test]
    fn backward_keys() {
        for code in [KeyCode::Up, KeyCode::Left, KeyCode::PageUp, KeyCode::Home] {
            let info = KeyInfo::from_event(&KeyEvent::new(code));
            assert!(!info.is_forward, "{code:?} should be backward");
        }
    }

    #[test]
    fn forward_keys() {
        for code in [KeyCode::Down, KeyCode::Right, KeyCode::PageDown, KeyCode::End] {
            let info = KeyInfo::from_event(&KeyEvent::new(code));
            assert!(info.is_forward, "{code:?} should be forward");
        }
    }

    #[test]
    fn scope_from_modifiers() {
        let plain = KeyEvent::new(KeyCode::Down);
        assert_eq!(KeyInfo::from_event(&plain).scope, Scope::Item);

        let ctrl = KeyEvent::with_modifiers(KeyCode::Down, KeyModifiers::CTRL);
        assert_eq!(KeyInfo::from_event(&ctrl).scope, Scope::Group);

        let ctrl_shift = KeyEvent::with_modifiers(KeyCode::Down, KeyModifiers::CTRL_SHIFT);
        assert_eq!(KeyInfo::from_event(&ctrl_shift).scope, Scope::Section);
    }

    #[test]
    fn edge_and_page_are_vertical() {
        for code in [KeyCode::Home, KeyCode::End, KeyCode::PageUp, KeyCode::PageDown] {
            let info = KeyInfo::from_event(&KeyEvent::new(code));
            assert!(info.is_vertical);
            assert!(!info.is_arrow);
        }
    }

    #[test]
    fn other_is_not_navigation() {
        assert!(!KeyInfo::is_navigation(&KeyEvent::new(KeyCode::Other)));
        assert!(KeyInfo::is_navigation(&KeyEvent::new(KeyCode::Tab)));
    }
}
