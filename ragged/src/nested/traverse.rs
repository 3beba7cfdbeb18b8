use std::slice;

use super::{LeafKind, Nested};

/// Lazy depth-first, left-to-right iterator over the leaves of a [`Nested`] value.
///
/// Keeps one slice iterator per open sequence instead of recursing.
pub struct Leaves<'a, T> {
    stack: Vec<slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> Leaves<'a, T> {
    pub(crate) fn new(root: &'a Nested<T>) -> Self {
        Self {
            stack: vec![slice::from_ref(root).iter()],
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Nested::Leaf(t)) => return Some(t),
                Some(Nested::Seq(xs)) => self.stack.push(xs.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterator returned by [`traverse`].
pub struct Traverse<'a, T> {
    leaves: Leaves<'a, T>,
}

impl<'a, T: LeafKind> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.leaves.find(|leaf| leaf.is_tuple())
    }
}

/// Lazily yields the tuple leaves of `nested` in depth-first, left-to-right order, skipping
/// every other kind of leaf.
///
/// Each call starts a fresh walk, the input is never modified.
pub fn traverse<T: LeafKind>(nested: &Nested<T>) -> Traverse<'_, T> {
    Traverse {
        leaves: nested.leaves(),
    }
}

/// Lazily yields the leaves of `nested` whose kind is `kind`.
pub fn traverse_kind<T: LeafKind>(
    nested: &Nested<T>,
    kind: T::Kind,
) -> impl Iterator<Item = &T> + '_ {
    nested.leaves().filter(move |leaf| leaf.kind() == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nested, Value, ValueKind};

    #[test]
    fn yields_only_tuples() {
        let x: Nested<Value> = nested!([
            (Value::tuple([1, 2])),
            [(Value::Int(3)), (Value::tuple([4, 5]))],
            (Value::from("str"))
        ]);

        let found: Vec<_> = traverse(&x).cloned().collect();
        assert_eq!(found, vec![Value::tuple([1, 2]), Value::tuple([4, 5])]);
    }

    #[test]
    fn restartable() {
        let x: Nested<Value> = nested!([[(Value::tuple([1]))], (Value::tuple([2]))]);
        assert_eq!(traverse(&x).count(), 2);
        assert_eq!(traverse(&x).count(), 2);
    }

    #[test]
    fn bare_tuple_leaf() {
        let x = Nested::leaf(Value::tuple([0, 0]));
        assert_eq!(traverse(&x).count(), 1);
    }

    #[test]
    fn by_kind() {
        let x: Nested<Value> = nested!([(Value::Int(1)), [(Value::Float(2.0)), (Value::Int(3))]]);
        let ints: Vec<_> = traverse_kind(&x, ValueKind::Int).cloned().collect();
        assert_eq!(ints, vec![Value::Int(1), Value::Int(3)]);
    }

    #[test]
    fn empty_sequences_are_skipped() {
        let x: Nested<u8> = nested!([[], [[]], 1, [[], 2]]);
        assert_eq!(x.leaves().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
