use std::slice;

use super::{LeafKind, Nested, NestedFrame};
use crate::frame::{expand_and_collapse, try_expand_and_collapse, MappableFrame, PartiallyApplied};
use crate::recursive::Collapsible;

/// Rebuilds `nested` with the same shape, replacing each leaf matching `select` by
/// `Some(callback(leaf))` and every other leaf by `None`.
pub fn map_leaves_where<T, U>(
    nested: &Nested<T>,
    mut select: impl FnMut(&T) -> bool,
    mut callback: impl FnMut(&T) -> U,
) -> Nested<Option<U>> {
    nested.collapse_frames(|frame| match frame {
        NestedFrame::Leaf(leaf) if select(leaf) => Nested::Leaf(Some(callback(leaf))),
        NestedFrame::Leaf(_) => Nested::Leaf(None),
        NestedFrame::Seq(xs) => Nested::Seq(xs),
    })
}

/// Applies `callback` to every leaf of kind `kind`, keeping the nesting of the input.
///
/// Positions holding a leaf of another kind hold `None` in the output, including a single bare
/// leaf of the wrong kind.
///
/// ```rust
/// use ragged::{map_objects, nested, Nested, Value, ValueKind};
///
/// let x: Nested<Value> = nested!([(Value::Int(2)), [(Value::from("x"))]]);
/// let doubled = map_objects(&x, ValueKind::Int, |v| v.as_int().map(|n| n * 2));
///
/// assert_eq!(doubled, nested!([(Some(Some(4))), [None]]));
/// ```
pub fn map_objects<T: LeafKind, U>(
    nested: &Nested<T>,
    kind: T::Kind,
    callback: impl FnMut(&T) -> U,
) -> Nested<Option<U>> {
    map_leaves_where(nested, |leaf| leaf.kind() == kind, callback)
}

/// Like [`map_objects`], for callbacks that can fail.
///
/// Callbacks run in depth-first, left-to-right order; the first error stops the walk and is
/// returned unchanged.
pub fn try_map_objects<T: LeafKind, U, E>(
    nested: &Nested<T>,
    kind: T::Kind,
    mut callback: impl FnMut(&T) -> Result<U, E>,
) -> Result<Nested<Option<U>>, E> {
    nested.try_collapse_frames(|frame| match frame {
        NestedFrame::Leaf(leaf) if leaf.kind() == kind => {
            callback(leaf).map(|u| Nested::Leaf(Some(u)))
        }
        NestedFrame::Leaf(_) => Ok(Nested::Leaf(None)),
        NestedFrame::Seq(xs) => Ok(Nested::Seq(xs)),
    })
}

// a nested container viewed down to its innermost groups
enum LevelFrame<'a, T, A> {
    Group(&'a [Nested<T>]),
    Seq(Vec<A>),
}

impl<'a, T: 'a> MappableFrame for LevelFrame<'a, T, PartiallyApplied> {
    type Frame<X> = LevelFrame<'a, T, X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            LevelFrame::Group(g) => LevelFrame::Group(g),
            LevelFrame::Seq(xs) => LevelFrame::Seq(xs.into_iter().map(f).collect()),
        }
    }
}

fn expand_level<T>(seed: &Nested<T>) -> LevelFrame<'_, T, &Nested<T>> {
    match seed {
        Nested::Seq(xs) if matches!(xs.first(), Some(Nested::Leaf(_))) => LevelFrame::Group(xs),
        Nested::Seq(xs) => LevelFrame::Seq(xs.iter().collect()),
        leaf @ Nested::Leaf(_) => LevelFrame::Group(slice::from_ref(leaf)),
    }
}

fn matching<'a, T: LeafKind>(group: &'a [Nested<T>], kind: T::Kind) -> Vec<&'a T> {
    group
        .iter()
        .filter_map(Nested::as_leaf)
        .filter(|leaf| leaf.kind() == kind)
        .collect()
}

/// Replaces every innermost group of `nested` with `callback` applied to the group's leaves of
/// kind `kind`, keeping all nesting above the groups.
///
/// A group is a sequence whose first element is a leaf. Unlike [`crate::simplify`], sequence
/// leaves such as tuples are not looked into. A leaf outside any group is passed to `callback`
/// on its own.
pub fn map_last_level<T: LeafKind, U>(
    nested: &Nested<T>,
    kind: T::Kind,
    mut callback: impl FnMut(&[&T]) -> U,
) -> Nested<U> {
    expand_and_collapse::<LevelFrame<T, PartiallyApplied>, _, _>(
        nested,
        expand_level,
        |frame| match frame {
            LevelFrame::Group(group) => Nested::Leaf(callback(&matching(group, kind))),
            LevelFrame::Seq(xs) => Nested::Seq(xs),
        },
    )
}

/// Like [`map_last_level`], for callbacks that can fail. The first error is returned unchanged.
pub fn try_map_last_level<T: LeafKind, U, E>(
    nested: &Nested<T>,
    kind: T::Kind,
    mut callback: impl FnMut(&[&T]) -> Result<U, E>,
) -> Result<Nested<U>, E> {
    try_expand_and_collapse::<LevelFrame<T, PartiallyApplied>, _, _, E>(
        nested,
        |seed| Ok(expand_level(seed)),
        |frame| match frame {
            LevelFrame::Group(group) => callback(&matching(group, kind)).map(Nested::Leaf),
            LevelFrame::Seq(xs) => Ok(Nested::Seq(xs)),
        },
    )
}
