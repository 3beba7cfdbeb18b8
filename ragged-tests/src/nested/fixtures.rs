//! Behaviour pinned against literal inputs, written as JSON for readability.

use ragged::{flatten, map_objects, nested, simplify, traverse, Group, Nested, Value, ValueKind};

fn parse(json: &str) -> Nested<i64> {
    serde_json::from_str(json).unwrap()
}

fn groups(x: &Nested<i64>) -> String {
    let groups: Vec<Nested<i64>> = simplify(x)
        .into_iter()
        .map(|g| match g {
            Group::Seq(g) => Nested::Seq(g.to_vec()),
            Group::Tuple(_) => unreachable!("integers are never sequences"),
        })
        .collect();
    serde_json::to_string(&groups).unwrap()
}

#[test]
fn json_maps_to_sequences_and_leaves() {
    assert_eq!(parse("[[1,2],[3]]"), nested!([[1, 2], [3]]));
    assert_eq!(parse("5"), Nested::Leaf(5));
    assert_eq!(serde_json::to_string(&parse("[[],[[1]]]")).unwrap(), "[[],[[1]]]");
}

#[test]
fn flatten_examples() {
    let x = parse("[1,[2,[3,[4]]],[],5]");
    assert_eq!(flatten(&x), vec![&1, &2, &3, &4, &5]);
    assert_eq!(x.clone().flattened(), parse("[1,2,3,4,5]"));
    assert_eq!(x.clone().flattened().flattened(), x.flattened());
}

#[test]
fn simplify_examples() {
    assert_eq!(groups(&parse("[[1,2],[3,4]]")), "[[1,2],[3,4]]");
    assert_eq!(groups(&parse("[[[1,2],[3,4]],[[5,6]]]")), "[[1,2],[3,4],[5,6]]");
    assert_eq!(groups(&parse("[[[[1,2,3]]],[4,5]]")), "[[1,2,3],[4,5]]");
}

#[test]
fn simplify_edge_cases() {
    assert_eq!(groups(&parse("[]")), "[]");
    // an empty group carries nothing and is dropped
    assert_eq!(groups(&parse("[[]]")), "[]");
    assert_eq!(groups(&parse("[[],[1]]")), "[[1]]");
    // leaves outside any group are dropped
    assert_eq!(groups(&parse("[1,2,3]")), "[]");
    assert_eq!(groups(&parse("[1,[2,3]]")), "[[2,3]]");
    // a group is whatever starts with a leaf, its tail is not decomposed
    assert_eq!(groups(&parse("[[1,[2,3]]]")), "[[1,[2,3]]]");
}

#[test]
fn simplify_keeps_coordinate_tuples_together() {
    let points = || [Value::tuple([0, 0, 0]), Value::tuple([10, 10, 0])];
    let [a, b] = points();
    let expected = points().to_vec();
    let found = |x: &Nested<Value>| -> Vec<Value> {
        simplify(x)
            .into_iter()
            .map(|g| match g {
                Group::Tuple(t) => t.clone(),
                Group::Seq(s) => panic!("expected tuple groups, got {s:?}"),
            })
            .collect()
    };

    assert_eq!(found(&nested!([(a.clone()), (b.clone())])), expected);
    assert_eq!(found(&nested!([[(a.clone()), (b.clone())]])), expected);
    assert_eq!(found(&nested!([[[(a.clone())]], [(b.clone())]])), expected);
    assert_eq!(found(&nested!([(Value::Tuple(vec![a, b]))])), expected);
}

#[test]
fn traverse_skips_non_tuples() {
    let x: Nested<Value> = nested!([
        (Value::tuple([1, 2])),
        [(Value::Int(3)), (Value::tuple([4, 5]))],
        (Value::from("str"))
    ]);
    let tuples: Vec<_> = traverse(&x).collect();
    assert_eq!(tuples, vec![&Value::tuple([1, 2]), &Value::tuple([4, 5])]);
}

#[test]
fn map_objects_marks_other_leaves_as_missing() {
    let x: Nested<Value> = nested!([[(Value::Int(1)), (Value::from("a"))], (Value::Float(0.5))]);
    let out = map_objects(&x, ValueKind::Int, |v| v.as_int().map(|n| n + 1));
    assert_eq!(out, nested!([[(Some(Some(2))), None], None]));
}
