#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod props;

use std::fmt::Debug;

use proptest::prelude::*;
use ragged::{AsSequence, Group, LeafKind, Nested, Value};

/// plain call-stack recursion, used as the reference the stack machines are checked against
pub fn naive_flatten<T>(x: &Nested<T>) -> Vec<&T> {
    match x {
        Nested::Leaf(t) => vec![t],
        Nested::Seq(xs) => xs.iter().flat_map(naive_flatten).collect(),
    }
}

pub fn naive_depth<T>(x: &Nested<T>) -> usize {
    match x {
        Nested::Leaf(_) => 0,
        Nested::Seq(xs) => 1 + xs.iter().map(naive_depth).max().unwrap_or(0),
    }
}

pub fn naive_simplify<T: AsSequence>(x: &Nested<T>) -> Vec<Group<'_, T>> {
    fn plain<T: AsSequence>(t: &T) -> bool {
        t.as_sequence().is_none()
    }

    fn item<'a, T: AsSequence>(t: &'a T, out: &mut Vec<Group<'a, T>>) {
        match t.as_sequence() {
            Some([first, ..]) if plain(first) => out.push(Group::Tuple(t)),
            Some(items) => items.iter().for_each(|i| item(i, out)),
            None => {}
        }
    }

    fn go<'a, T: AsSequence>(xs: &'a [Nested<T>], out: &mut Vec<Group<'a, T>>) {
        for x in xs {
            match x {
                Nested::Seq(group) if matches!(group.first(), Some(Nested::Leaf(l)) if plain(l)) => {
                    out.push(Group::Seq(group))
                }
                Nested::Seq(xs) => go(xs, out),
                Nested::Leaf(t) => item(t, out),
            }
        }
    }

    let mut out = Vec::new();
    if let Nested::Seq(xs) = x {
        go(xs, &mut out);
    }
    out
}

pub fn naive_map_objects<T: LeafKind, U>(
    x: &Nested<T>,
    kind: T::Kind,
    f: &mut impl FnMut(&T) -> U,
) -> Nested<Option<U>> {
    match x {
        Nested::Leaf(t) if t.kind() == kind => Nested::Leaf(Some(f(t))),
        Nested::Leaf(_) => Nested::Leaf(None),
        Nested::Seq(xs) => Nested::Seq(xs.iter().map(|x| naive_map_objects(x, kind, f)).collect()),
    }
}

pub fn arb_nested<T: Debug + Clone + 'static>(
    leaf: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Nested<T>> {
    leaf.prop_map(Nested::Leaf).prop_recursive(
        8,   // 8 levels deep
        256, // Shoot for maximum size of 256 nodes
        6,   // We put up to 6 items per sequence
        |inner| prop::collection::vec(inner, 0..6).prop_map(Nested::Seq),
    )
}

/// a top-level sequence, the shape node sockets always hand over
pub fn arb_container<T: Debug + Clone + 'static>(
    leaf: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Nested<T>> {
    prop::collection::vec(arb_nested(leaf), 0..6).prop_map(Nested::Seq)
}

pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i8>().prop_map(|x| Value::Int(x as i64)),
        "[a-z]{0,3}".prop_map(Value::Str),
        (any::<i8>(), any::<i8>()).prop_map(|(a, b)| Value::tuple([a as i64, b as i64])),
        // a pair of coordinate tuples
        (any::<i8>(), any::<i8>()).prop_map(|(a, b)| {
            Value::Tuple(vec![Value::tuple([a as i64]), Value::tuple([b as i64])])
        }),
    ]
}
