//! Nested containers ("ragged arrays") and the shape-aware operations over them.
//!
//! A [`Nested<T>`] is either a single leaf or a sequence of further nested values, with no fixed
//! depth. Node evaluation code uses it to carry socket data that may be a single vector, a list
//! of vectors, or a list of polylines, and uses the operations here to normalise that shape.
//!
//! Every operation that walks the whole structure runs on an explicit stack, so arbitrarily
//! deep input does not exhaust the call stack. Dropping, cloning and comparing values still
//! recurse; use [`check_depth`] on untrusted input.

mod map;
mod simplify;
mod traverse;

pub use map::{map_last_level, map_leaves_where, map_objects, try_map_last_level, try_map_objects};
pub use simplify::{simplify, Group};
pub use traverse::{traverse, traverse_kind, Leaves, Traverse};

use std::fmt::Debug;

use crate::config::Limits;
use crate::error::NestedError;
use crate::frame::{MappableFrame, PartiallyApplied};
use crate::recursive::{Collapsible, Expandable};

/// A recursively nested sequence with leaves of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    Seq(Vec<Nested<T>>),
    Leaf(T),
}

/// A single layer of a [`Nested`] value, with recursive positions replaced by `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestedFrame<T, A> {
    Leaf(T),
    Seq(Vec<A>),
}

impl<T> MappableFrame for NestedFrame<T, PartiallyApplied> {
    type Frame<X> = NestedFrame<T, X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            NestedFrame::Leaf(t) => NestedFrame::Leaf(t),
            NestedFrame::Seq(xs) => NestedFrame::Seq(xs.into_iter().map(f).collect()),
        }
    }
}

impl<'a, T> Collapsible for &'a Nested<T> {
    type FrameToken = NestedFrame<&'a T, PartiallyApplied>;

    #[inline(always)]
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
        match self {
            Nested::Leaf(t) => NestedFrame::Leaf(t),
            Nested::Seq(xs) => NestedFrame::Seq(xs.iter().collect()),
        }
    }
}

impl<T> Collapsible for Nested<T> {
    type FrameToken = NestedFrame<T, PartiallyApplied>;

    #[inline(always)]
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
        match self {
            Nested::Leaf(t) => NestedFrame::Leaf(t),
            Nested::Seq(xs) => NestedFrame::Seq(xs),
        }
    }
}

impl<T> Expandable for Nested<T> {
    type FrameToken = NestedFrame<T, PartiallyApplied>;

    #[inline(always)]
    fn from_frame(val: <Self::FrameToken as MappableFrame>::Frame<Self>) -> Self {
        match val {
            NestedFrame::Leaf(t) => Nested::Leaf(t),
            NestedFrame::Seq(xs) => Nested::Seq(xs),
        }
    }
}

/// Classifies leaves so operations can select the ones they act on.
pub trait LeafKind {
    type Kind: Copy + Eq + Debug;

    fn kind(&self) -> Self::Kind;

    /// Whether this leaf is a fixed-size ordered tuple, the only leaves [`traverse`] yields.
    fn is_tuple(&self) -> bool;
}

/// Leaves that are themselves ordered sequences, such as coordinate tuples.
///
/// [`simplify`] looks inside these: a sequence leaf whose first item is not itself a sequence is
/// a group of its own, any other sequence leaf is decomposed into its items. Every other
/// operation treats them as opaque leaves.
pub trait AsSequence: Sized {
    fn as_sequence(&self) -> Option<&[Self]>;
}

macro_rules! opaque_leaves {
    ($($t:ty),*) => {
        $(
            impl AsSequence for $t {
                fn as_sequence(&self) -> Option<&[Self]> {
                    None
                }
            }
        )*
    };
}

opaque_leaves!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool, char, String, &str);

impl<T> Nested<T> {
    pub fn leaf(t: T) -> Self {
        Nested::Leaf(t)
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(t) => Some(t),
            Nested::Seq(_) => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Seq(xs) => Some(xs),
            Nested::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Lazily yields every leaf in depth-first, left-to-right order.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(self)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Number of sequence levels above the deepest leaf. A leaf has depth 0, an empty sequence 1.
    pub fn depth(&self) -> usize {
        self.collapse_frames(|frame| match frame {
            NestedFrame::Leaf(_) => 0,
            NestedFrame::Seq(depths) => 1 + depths.into_iter().max().unwrap_or(0),
        })
    }

    /// Consumes the container and returns its leaves in depth-first, left-to-right order.
    pub fn into_flat(self) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Nested::Leaf(t) => out.push(t),
                Nested::Seq(xs) => stack.extend(xs.into_iter().rev()),
            }
        }
        out
    }

    /// A single flat sequence holding every leaf, so that flattening can be chained.
    pub fn flattened(self) -> Self {
        Nested::Seq(self.into_flat().into_iter().map(Nested::Leaf).collect())
    }

    /// Applies `f` to every leaf, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Nested<U> {
        self.collapse_frames(|frame| match frame {
            NestedFrame::Leaf(t) => Nested::Leaf(f(t)),
            NestedFrame::Seq(xs) => Nested::Seq(xs),
        })
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(xs: Vec<Nested<T>>) -> Self {
        Nested::Seq(xs)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().collect())
    }
}

/// Every leaf of `nested`, depth-first, left to right, with all sequence wrapping removed.
///
/// A bare leaf flattens to a one-element vector.
pub fn flatten<T>(nested: &Nested<T>) -> Vec<&T> {
    nested.leaves().collect()
}

/// Rejects containers nested deeper than `limits` allow, returning the depth otherwise.
pub fn check_depth<T>(nested: &Nested<T>, limits: &Limits) -> Result<usize, NestedError> {
    let depth = nested.depth();
    if depth > limits.max_depth {
        return Err(NestedError::TooDeep {
            depth,
            limit: limits.max_depth,
        });
    }
    Ok(depth)
}

/// Builds a [`Nested`] value from bracketed literals: `nested!([[1, 2], [3]])`.
///
/// Bracket groups become sequences, anything else becomes a leaf. Leaves must be single token
/// trees, so wrap negative numbers or longer expressions in parentheses.
#[macro_export]
macro_rules! nested {
    ([$($inner:tt),* $(,)?]) => {
        $crate::Nested::Seq(vec![$($crate::nested!($inner)),*])
    };
    ($leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
}
