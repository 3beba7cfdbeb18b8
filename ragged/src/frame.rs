/// A single 'frame' containing values that can be mapped over via `map_frame`.
///
/// # Motivation
///
/// Generally speaking, you won't use this trait yourself. It's used by the internal plumbing of
/// [`crate::Collapsible`] and [`crate::Expandable`] to walk nested containers without recursing
/// on the call stack.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type, so the convention is
/// to implement it for the frame type applied to the uninhabited [`PartiallyApplied`] marker:
///
/// ```rust
/// # use ragged::{MappableFrame, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum PairFrame<A> {
///     Pair(A, A),
///     Single(u8),
/// }
///
/// impl MappableFrame for PairFrame<PartiallyApplied> {
///     type Frame<X> = PairFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             PairFrame::Pair(a, b) => PairFrame::Pair(f(a), f(b)),
///             PairFrame::Single(x) => PairFrame::Single(x),
///         }
///     }
/// }
///
/// let frame = PairFrame::Pair(1, 2);
/// let mapped = PairFrame::<PartiallyApplied>::map_frame(frame, |n| n + 10);
///
/// assert_eq!(mapped, PairFrame::Pair(11, 12));
/// ```
///
/// `map_frame` must visit the elements of a frame in the same order every time it is called,
/// the stack machines below rely on it to match child values to their positions.
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the MappableFrame instance for `MyFrame<A>` cannot be written over the
/// partially-applied type `MyFrame`, so instead we write it over `MyFrame<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

enum State<Seed, CollapsibleInternal> {
    Expand(usize, Seed),
    Collapse(usize, CollapsibleInternal),
}

/// This function generates a stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Frame<Seed>`
/// and collapsing those values via a function `Frame<Out> -> Out`.
///
/// This function performs a depth-first traversal, expanding and collapsing each branch in turn.
/// Siblings are expanded left to right, so side effects in `collapse_frame` are observed in
/// the same order a recursive pre-order walk would produce them.
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure and is thus, technically,
/// susceptible to running out of memory if said stack expands
pub fn expand_and_collapse<F: MappableFrame, Seed, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> F::Frame<Seed>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Out,
) -> Out {
    let mut vals: Vec<Option<Out>> = vec![None];
    let mut stack = vec![State::Expand(0, seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(val_idx, seed) => {
                let node = expand_frame(seed);
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| {
                    vals.push(None);
                    let idx = vals.len() - 1;
                    seeds.push(State::Expand(idx, seed));
                    idx
                });

                stack.push(State::Collapse(val_idx, node));
                stack.extend(seeds.into_iter().rev());
            }
            State::Collapse(val_idx, node) => {
                let node = F::map_frame(node, |k| {
                    vals[k]
                        .take()
                        .expect("child frames collapse before their parent")
                });
                vals[val_idx] = Some(collapse_frame(node));
            }
        };
    }
    vals[0].take().expect("root frame always collapses")
}

/// This function generates a fallible stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Result<Frame<Seed>, E>`
/// and collapsing those values via a function `Frame<Out> -> Result<Out, E>`.
///
/// The first error returned by either function stops the traversal and is returned as-is.
pub fn try_expand_and_collapse<F: MappableFrame, Seed, Out, E>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> Result<F::Frame<Seed>, E>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E> {
    let mut vals: Vec<Option<Out>> = vec![None];
    let mut stack = vec![State::Expand(0, seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(val_idx, seed) => {
                let node = expand_frame(seed)?;
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| {
                    vals.push(None);
                    let idx = vals.len() - 1;
                    seeds.push(State::Expand(idx, seed));
                    idx
                });

                stack.push(State::Collapse(val_idx, node));
                stack.extend(seeds.into_iter().rev());
            }
            State::Collapse(val_idx, node) => {
                let node = F::map_frame(node, |k| {
                    vals[k]
                        .take()
                        .expect("child frames collapse before their parent")
                });
                vals[val_idx] = Some(collapse_frame(node)?);
            }
        };
    }
    Ok(vals[0].take().expect("root frame always collapses"))
}
