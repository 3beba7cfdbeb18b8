use crate::frame::{expand_and_collapse, try_expand_and_collapse, MappableFrame};

/// The ability to collapse some type into some output type, frame by frame.
///
/// For example, the depth of a nested container:
///
/// ```rust
/// use ragged::{nested, Collapsible, NestedFrame};
///
/// let x: ragged::Nested<u8> = nested!([[1, 2], [[3]]]);
///
/// let depth = (&x).collapse_frames(|frame| match frame {
///     NestedFrame::Leaf(_) => 0,
///     NestedFrame::Seq(depths) => 1 + depths.into_iter().max().unwrap_or(0),
/// });
///
/// assert_eq!(depth, 3);
/// ```
pub trait Collapsible
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given an instance of this type, generate a frame holding the data owned by it,
    /// with any recursive instances of 'Self' owned by this node as the frame elements
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self>;

    /// Given an instance of this type, collapse it into a single value of type 'Out' by
    /// traversing the recursive structure of 'self', generating frames, and collapsing
    /// those frames using some function from 'Frame<Out> -> Out'
    fn collapse_frames<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out {
        expand_and_collapse::<Self::FrameToken, Self, Out>(self, Self::into_frame, collapse_frame)
    }

    /// Like `collapse_frames`, but the first error returned by `collapse_frame` stops the traversal
    fn try_collapse_frames<Out, E>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Result<Out, E>,
    ) -> Result<Out, E> {
        try_expand_and_collapse::<Self::FrameToken, Self, Out, E>(
            self,
            |seed| Ok(Self::into_frame(seed)),
            collapse_frame,
        )
    }
}

/// The ability to build some type from a seed value, frame by frame.
pub trait Expandable
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given a frame holding instances of 'Self', generate an instance of 'Self'
    fn from_frame(val: <Self::FrameToken as MappableFrame>::Frame<Self>) -> Self;

    /// Given some seed, expand it into an instance of this type by repeatedly generating
    /// frames via `expand_frame`
    fn expand_frames<In>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as MappableFrame>::Frame<In>,
    ) -> Self {
        expand_and_collapse::<Self::FrameToken, In, Self>(input, expand_frame, Self::from_frame)
    }
}
