use log::trace;

use super::{AsSequence, Nested};

/// One innermost group found by [`simplify`], borrowed from the input.
#[derive(Debug, PartialEq)]
pub enum Group<'a, T> {
    /// A sequence whose first element is a plain leaf, returned as-is.
    Seq(&'a [Nested<T>]),
    /// A sequence leaf, such as a coordinate tuple, whose first item is a plain leaf.
    Tuple(&'a T),
}

impl<T> Clone for Group<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Group<'_, T> {}

impl<'a, T: AsSequence> Group<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Group::Seq(xs) => xs.len(),
            Group::Tuple(t) => t.as_sequence().map_or(0, <[T]>::len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The plain leaves directly inside the group. Nested sequences in a group's tail are skipped.
    pub fn leaves(&self) -> Vec<&'a T> {
        match *self {
            Group::Seq(xs) => xs.iter().filter_map(Nested::as_leaf).collect(),
            Group::Tuple(t) => t.as_sequence().unwrap_or_default().iter().collect(),
        }
    }
}

enum Entry<'a, T> {
    Node(&'a Nested<T>),
    Item(&'a T),
}

fn is_plain<T: AsSequence>(x: &Nested<T>) -> bool {
    matches!(x, Nested::Leaf(t) if t.as_sequence().is_none())
}

/// Flattens a nested container down to its innermost groups, keeping one level of nesting.
///
/// Vector sockets want this: concatenating the coordinates of different vectors into one big
/// list would lose the grouping, but the groups themselves may arrive wrapped at any depth.
///
/// A sequence whose first element is a plain leaf is a group and is returned as-is, by
/// reference, even if later elements are sequences. Leaves that are sequences themselves (see
/// [`AsSequence`]) follow the same rule, so a list of coordinate tuples yields one group per
/// tuple. Any other sequence is decomposed. Plain leaves that are not inside a group are
/// dropped, as are empty sequences:
///
/// ```rust
/// use ragged::{nested, simplify, Nested};
///
/// let x: Nested<u8> = nested!([[[1, 2], [3, 4]], [[5, 6]]]);
/// let groups: Vec<_> = simplify(&x).into_iter().map(|g| g.len()).collect();
/// assert_eq!(groups, vec![2, 2, 2]);
///
/// let flat: Nested<u8> = nested!([1, 2, 3]);
/// assert!(simplify(&flat).is_empty());
/// ```
pub fn simplify<T: AsSequence>(nested: &Nested<T>) -> Vec<Group<'_, T>> {
    let mut groups = Vec::new();
    let mut stack: Vec<Entry<'_, T>> = match nested {
        Nested::Seq(xs) => xs.iter().map(Entry::Node).collect(),
        Nested::Leaf(_) => Vec::new(),
    };

    // LIFO, so groups are found back to front
    while let Some(entry) = stack.pop() {
        match entry {
            Entry::Node(Nested::Seq(xs)) if xs.first().is_some_and(is_plain) => {
                groups.push(Group::Seq(xs.as_slice()))
            }
            Entry::Node(Nested::Seq(xs)) => stack.extend(xs.iter().map(Entry::Node)),
            Entry::Node(Nested::Leaf(t)) | Entry::Item(t) => match t.as_sequence() {
                Some(items) if items.first().is_some_and(|i| i.as_sequence().is_none()) => {
                    groups.push(Group::Tuple(t))
                }
                Some(items) => stack.extend(items.iter().map(Entry::Item)),
                None => trace!("simplify: dropping leaf outside of any group"),
            },
        }
    }

    groups.reverse();
    groups
}
