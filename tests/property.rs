//! Property-based tests for dashnav.
//!
//! Uses proptest to exercise the resolver over randomized panel shapes and
//! key sequences.

#![allow(clippy::unwrap_used)]

mod common;

use common::{log_panel, tree_panel};
use dashnav::{
    KeyCode, KeyEvent, KeyModifiers, Markers, NodeId, Outcome, Resolver, SnapshotTree,
};
use proptest::prelude::*;

fn focus_of(
    resolver: &Resolver,
    tree: &SnapshotTree,
    code: KeyCode,
    from: NodeId,
) -> Option<NodeId> {
    match resolver.resolve(tree, &KeyEvent::new(code), from).outcome {
        Some(Outcome::Focus(node)) => Some(node),
        _ => None,
    }
}

fn arb_key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::Enter),
        Just(KeyCode::Space),
        Just(KeyCode::Tab),
    ]
}

fn arb_modifiers() -> impl Strategy<Value = KeyModifiers> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(ctrl, shift, alt)| KeyModifiers {
        ctrl,
        shift,
        alt,
    })
}

proptest! {
    /// Down then Up returns to the start for every interior item of a
    /// single group.
    #[test]
    fn item_step_is_invertible(count in 2usize..30, idx in 0usize..28) {
        prop_assume!(idx + 1 < count);
        let panel = tree_panel(&[count], false);
        let resolver = Resolver::default();
        let start = panel.sections[0].items[idx];

        let down = focus_of(&resolver, &panel.tree, KeyCode::Down, start);
        prop_assert_eq!(down, Some(panel.sections[0].items[idx + 1]));
        let back = focus_of(&resolver, &panel.tree, KeyCode::Up, down.unwrap());
        prop_assert_eq!(back, Some(start));
    }

    /// A single arrow step between log rows is always invertible.
    #[test]
    fn log_row_step_is_invertible(rows in 2usize..50, idx in 0usize..48) {
        prop_assume!(idx + 1 < rows);
        let (tree, row_ids, _) = log_panel(rows, 0);
        let resolver = Resolver::default();

        let down = focus_of(&resolver, &tree, KeyCode::Down, row_ids[idx]).unwrap();
        prop_assert_eq!(down, row_ids[idx + 1]);
        let back = focus_of(&resolver, &tree, KeyCode::Up, down).unwrap();
        prop_assert_eq!(back, row_ids[idx]);
    }

    /// Page moves always land on a row of the same group, never nothing.
    #[test]
    fn page_move_always_lands_in_bounds(rows in 1usize..60, idx in 0usize..59, forward: bool) {
        prop_assume!(idx < rows);
        let (tree, row_ids, _) = log_panel(rows, 0);
        let resolver = Resolver::default();
        let code = if forward { KeyCode::PageDown } else { KeyCode::PageUp };

        let landed = focus_of(&resolver, &tree, code, row_ids[idx]);
        prop_assert!(landed.is_some());
        prop_assert!(row_ids.contains(&landed.unwrap()));
    }

    /// Home and End land on the first and last row from anywhere.
    #[test]
    fn home_end_hit_group_edges(rows in 1usize..60, idx in 0usize..59) {
        prop_assume!(idx < rows);
        let (tree, row_ids, _) = log_panel(rows, 0);
        let resolver = Resolver::default();

        prop_assert_eq!(
            focus_of(&resolver, &tree, KeyCode::Home, row_ids[idx]),
            Some(row_ids[0])
        );
        prop_assert_eq!(
            focus_of(&resolver, &tree, KeyCode::End, row_ids[idx]),
            Some(row_ids[rows - 1])
        );
    }

    /// A toolbar never wraps around: stepping off either end finds nothing,
    /// and every interior step stays adjacent.
    #[test]
    fn toolbar_never_wraps(count in 1usize..20, idx in 0usize..19, forward: bool) {
        prop_assume!(idx < count);
        let mut tree = SnapshotTree::new();
        let bar = tree.insert(None, Markers::TOOLBAR);
        let items: Vec<NodeId> = (0..count)
            .map(|_| tree.insert(Some(bar), Markers::TOOLBAR_ITEM))
            .collect();
        let resolver = Resolver::default();
        let code = if forward { KeyCode::Right } else { KeyCode::Left };

        let landed = focus_of(&resolver, &tree, code, items[idx]);
        let at_edge = if forward { idx + 1 == count } else { idx == 0 };
        if at_edge {
            prop_assert_eq!(landed, None);
        } else {
            let expect = if forward { items[idx + 1] } else { items[idx - 1] };
            prop_assert_eq!(landed, Some(expect));
        }
    }

    /// Resolving never panics, whatever the markers, key, or modifiers.
    #[test]
    fn resolve_never_panics(
        marker_bits in any::<u32>(),
        code in arb_key_code(),
        modifiers in arb_modifiers(),
    ) {
        let mut tree = SnapshotTree::new();
        let parent = tree.insert(None, Markers::from_bits_truncate(marker_bits));
        let node = tree.insert(Some(parent), Markers::from_bits_truncate(marker_bits.rotate_left(7)));

        let resolver = Resolver::default();
        let event = KeyEvent::with_modifiers(code, modifiers);
        let _ = resolver.resolve(&tree, &event, node);
        let _ = resolver.resolve(&tree, &event, parent);
    }

    /// Any outcome produced over a random tree panel names a node that
    /// actually exists in the panel.
    #[test]
    fn outcomes_stay_inside_the_panel(
        counts in prop::collection::vec(0usize..5, 1..5),
        separators: bool,
        code in arb_key_code(),
        pick in any::<prop::sample::Index>(),
    ) {
        let panel = tree_panel(&counts, separators);
        let resolver = Resolver::default();

        let mut focusable: Vec<NodeId> = panel.separators.clone();
        for s in &panel.sections {
            focusable.push(s.title);
            focusable.extend(&s.items);
        }
        prop_assume!(!focusable.is_empty());
        let start = *pick.get(&focusable);

        let mut known = vec![panel.root];
        known.extend(&focusable);
        for s in &panel.sections {
            known.push(s.section);
            known.push(s.group);
        }

        if let Some(outcome) = resolver
            .resolve(&panel.tree, &KeyEvent::new(code), start)
            .outcome
        {
            let named = match outcome {
                Outcome::Focus(n) => n,
                Outcome::Activate { target, .. } | Outcome::Toggle { target, .. } => target,
            };
            prop_assert!(known.contains(&named));
        }
    }
}
