use proptest::prelude::*;
use ragged::{
    flatten, map_last_level, map_leaves_where, map_objects, simplify, traverse, try_map_objects,
    AsSequence, Group, LeafKind, Nested, Value, ValueKind,
};

use super::*;

// generate a bunch of nested containers and check every operation against its naive twin
proptest! {
    #[test]
    fn flatten_matches_recursive_walk(x in arb_nested(any::<i8>())) {
        prop_assert_eq!(flatten(&x), naive_flatten(&x));
        prop_assert_eq!(x.leaf_count(), naive_flatten(&x).len());
        prop_assert_eq!(x.clone().into_flat(), naive_flatten(&x).into_iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn flatten_is_idempotent(x in arb_nested(any::<i8>())) {
        let once = x.flattened();
        prop_assert_eq!(once.clone().flattened(), once);
    }

    #[test]
    fn depth_matches_recursive_walk(x in arb_nested(any::<i8>())) {
        prop_assert_eq!(x.depth(), naive_depth(&x));
    }

    #[test]
    fn simplify_matches_recursive_walk(x in arb_container(any::<i8>())) {
        let groups = simplify(&x);
        prop_assert_eq!(&groups, &naive_simplify(&x));
        for group in groups {
            prop_assert!(matches!(group, Group::Seq([Nested::Leaf(_), ..])));
        }
    }

    #[test]
    fn simplify_on_simplified_groups_is_stable(x in arb_container(any::<i8>())) {
        // regrouping groups made only of leaves gives the same groups back
        let leaf_groups: Nested<i8> = simplify(&x)
            .into_iter()
            .filter_map(|g| match g {
                Group::Seq(g) if g.iter().all(Nested::is_leaf) => Some(Nested::Seq(g.to_vec())),
                _ => None,
            })
            .collect();
        let again = simplify(&leaf_groups);
        let expected: Vec<_> = leaf_groups
            .as_seq()
            .unwrap()
            .iter()
            .filter_map(Nested::as_seq)
            .map(Group::Seq)
            .collect();
        prop_assert_eq!(again, expected);
    }

    #[test]
    fn simplify_splits_tuples_into_groups(x in arb_container(arb_value())) {
        let groups = simplify(&x);
        prop_assert_eq!(&groups, &naive_simplify(&x));
        for group in groups {
            prop_assert!(!group.is_empty());
            match group {
                Group::Seq([Nested::Leaf(first), ..]) => prop_assert!(!first.is_tuple()),
                Group::Tuple(t) => prop_assert!(matches!(t.as_sequence(), Some([Value::Int(_), ..]))),
                other => prop_assert!(false, "not a group: {:?}", other),
            }
        }
    }

    #[test]
    fn map_objects_preserves_shape(x in arb_nested(arb_value())) {
        let all = map_leaves_where(&x, |_| true, |v| v.clone());
        prop_assert_eq!(all, x.clone().map(Some));

        for kind in [ValueKind::Int, ValueKind::Str, ValueKind::Tuple] {
            let mapped = map_objects(&x, kind, |v| v.kind());
            prop_assert_eq!(&mapped, &naive_map_objects(&x, kind, &mut |v: &Value| v.kind()));
            prop_assert_eq!(mapped.depth(), x.depth());
            for (before, after) in x.leaves().zip(mapped.leaves()) {
                let expected = (before.kind() == kind).then_some(kind);
                prop_assert_eq!(*after, expected);
            }
        }
    }

    #[test]
    fn try_map_objects_agrees_when_nothing_fails(x in arb_nested(arb_value())) {
        let fallible = try_map_objects(&x, ValueKind::Int, |v| Ok::<_, ()>(v.as_int()));
        prop_assert_eq!(fallible, Ok(map_objects(&x, ValueKind::Int, |v| v.as_int())));
    }

    #[test]
    fn try_map_objects_stops_at_first_failure(x in arb_nested(arb_value())) {
        let first_int = x.leaves().find_map(Value::as_int);
        let mut calls = 0;
        let res = try_map_objects(&x, ValueKind::Int, |v| {
            calls += 1;
            Err::<(), _>(v.clone())
        });
        match first_int {
            Some(n) => {
                prop_assert_eq!(res, Err(Value::Int(n)));
                prop_assert_eq!(calls, 1);
            }
            None => prop_assert!(res.is_ok()),
        }
    }

    #[test]
    fn traverse_yields_tuples_in_order(x in arb_nested(arb_value())) {
        let expected: Vec<_> = naive_flatten(&x).into_iter().filter(|v| v.is_tuple()).collect();
        prop_assert_eq!(traverse(&x).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn last_level_sees_every_group(x in arb_container(arb_value())) {
        let mut seen = 0;
        let counts = map_last_level(&x, ValueKind::Int, |group| {
            seen += 1;
            group.len()
        });
        prop_assert_eq!(counts.leaf_count(), seen);
        prop_assert!(counts.depth() <= x.depth());
    }
}
