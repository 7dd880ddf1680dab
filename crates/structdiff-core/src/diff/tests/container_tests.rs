use super::d;
use crate::diff::render_diff_with;
use crate::render::RenderOptions;
use crate::test_helpers::{object_with_prototype, s};
use crate::value::Value;

// ── objects ──────────────────────────────────────────────────────────────────

#[test]
fn identical_objects_produce_no_output() {
    let build = || Value::object([("a", Value::from(1)), ("b", Value::object([("c", 2)]))]);
    assert_eq!(d(&build(), &build()), "");
}

#[test]
fn elides_identical_properties() {
    let e = Value::object([("a", 1), ("b", 2), ("c", 3)]);
    let a = Value::object([("a", Value::from(1)), ("b", s("X")), ("c", Value::from(3))]);
    assert_eq!(d(&e, &a), "{\n  b: \"X\"   // expected 2\n}");
}

#[test]
fn lists_missing_properties() {
    let e = Value::object([("a", 1), ("b", 2), ("c", 3)]);
    let a = Value::object([("a", 1)]);
    assert_eq!(
        d(&e, &a),
        "{\n  // missing properties:\n  b: 2\n  c: 3\n}"
    );
}

#[test]
fn lists_extra_properties() {
    let e = Value::object([("a", 1), ("b", 2)]);
    let a = Value::object([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert_eq!(d(&e, &a), "{\n  // extra properties:\n  c: 3\n  d: 4\n}");
}

#[test]
fn incorrect_then_missing_then_extra() {
    let e = Value::object([("a", 1), ("b", 2), ("c", 3)]);
    let a = Value::object([("a", 9), ("d", 4)]);
    assert_eq!(
        d(&e, &a),
        "{\n  a: 9   // expected 1\n  // missing properties:\n  b: 2\n  c: 3\n  // extra properties:\n  d: 4\n}"
    );
}

#[test]
fn incorrect_properties_follow_expected_order() {
    let e = Value::object([("a", 1), ("b", 2)]);
    let a = Value::object([("b", 3), ("a", 4)]);
    assert_eq!(
        d(&e, &a),
        "{\n  a: 4   // expected 1\n  b: 3   // expected 2\n}"
    );
}

#[test]
fn nested_difference_is_indented() {
    let e = Value::object([("a", Value::object([("b", 1)]))]);
    let a = Value::object([("a", Value::object([("b", 2)]))]);
    assert_eq!(d(&e, &a), "{\n  a: {\n    b: 2   // expected 1\n  }\n}");
}

#[test]
fn missing_container_is_rendered_in_full() {
    let e = Value::object([("a", Value::from(1)), ("b", Value::object([("c", 1)]))]);
    let a = Value::object([("a", 1)]);
    assert_eq!(
        d(&e, &a),
        "{\n  // missing properties:\n  b: {\n    c: 1\n  }\n}"
    );
}

#[test]
fn nested_missing_property() {
    let e = Value::object([("a", Value::object([("x", 1), ("y", 2)]))]);
    let a = Value::object([("a", Value::object([("x", 1)]))]);
    assert_eq!(
        d(&e, &a),
        "{\n  a: {\n    // missing properties:\n    y: 2\n  }\n}"
    );
}

#[test]
fn object_key_named_length_is_compared_and_shown() {
    let e = Value::object([("length", 1)]);
    let a = Value::object([("length", 2)]);
    assert_eq!(d(&e, &a), "{\n  length: 2   // expected 1\n}");
}

#[test]
fn empty_object_property_against_flat() {
    let e = Value::object([("a", Value::empty_object())]);
    let a = Value::object([("a", 1)]);
    assert_eq!(d(&e, &a), "{\n  a: 1   // expected {}\n}");
}

// ── prototypes ───────────────────────────────────────────────────────────────

#[test]
fn different_prototypes_are_noted() {
    let e = object_with_prototype(Value::object([("p", 1)]), []);
    let a = object_with_prototype(Value::object([("p", "X")]), []);
    assert_eq!(d(&e, &a), "{\n  // objects have different prototypes\n}");
}

#[test]
fn prototype_note_follows_property_changes() {
    let e = object_with_prototype(Value::object([("p", 1)]), [("a", Value::from(1))]);
    let a = object_with_prototype(Value::object([("p", 2)]), [("a", Value::from(2))]);
    assert_eq!(
        d(&e, &a),
        "{\n  a: 2   // expected 1\n  // objects have different prototypes\n}"
    );
}

#[test]
fn structurally_equal_prototypes_add_no_note() {
    let e = object_with_prototype(Value::object([("p", 1)]), [("a", Value::from(1))]);
    let a = object_with_prototype(Value::object([("p", 1)]), [("a", Value::from(2))]);
    assert_eq!(d(&e, &a), "{\n  a: 2   // expected 1\n}");
}

// ── arrays ───────────────────────────────────────────────────────────────────

#[test]
fn array_element_changes_and_missing_tail() {
    let e = Value::array([1, 2, 3]);
    let a = Value::array([1, 5]);
    assert_eq!(
        d(&e, &a),
        "[\n  1: 5   // expected 2\n  // missing properties:\n  2: 3\n]"
    );
}

#[test]
fn array_extra_tail() {
    assert_eq!(
        d(&Value::array([1]), &Value::array([1, 2])),
        "[\n  // extra properties:\n  1: 2\n]"
    );
}

#[test]
fn sparse_array_changed_entry() {
    let e = Value::sparse_array(0, [(3000_usize, "1")]);
    let a = Value::sparse_array(0, [(3000_usize, "2")]);
    assert_eq!(d(&e, &a), "[\n  3000: \"2\"   // expected \"1\"\n]");
}

#[test]
fn sparse_array_moved_entry() {
    let e = Value::sparse_array(0, [(3000_usize, "1")]);
    let a = Value::sparse_array(0, [(2999_usize, "1")]);
    assert_eq!(
        d(&e, &a),
        "[\n  // missing properties:\n  3000: \"1\"\n  // extra properties:\n  2999: \"1\"\n]"
    );
}

#[test]
fn length_only_difference_has_no_length_line() {
    let e = Value::array([1]);
    let a = Value::sparse_array(2, [(0_usize, 1)]);
    assert_eq!(d(&e, &a), "[\n]");
}

#[test]
fn nested_length_only_difference_is_reported() {
    let e = Value::object([("k", Value::array([1]))]);
    let a = Value::object([("k", Value::sparse_array(2, [(0_usize, 1)]))]);
    assert_eq!(d(&e, &a), "{\n  k: [\n  ]\n}");
}

#[test]
fn deep_equal_subtrees_with_equal_prototypes_produce_no_output() {
    let build = || {
        let leaf = object_with_prototype(Value::object([("p", 1)]), [("v", Value::array([1, 2]))]);
        Value::object([("a", Value::object([("b", leaf)]))])
    };
    assert_eq!(d(&build(), &build()), "");
}

// ── options ──────────────────────────────────────────────────────────────────

#[test]
fn custom_indent_width() {
    let e = Value::object([("a", Value::object([("b", 1)]))]);
    let a = Value::object([("a", Value::object([("b", 2)]))]);
    let text = render_diff_with(&e, &a, &RenderOptions { indent_width: 4 }).expect("diff");
    assert_eq!(text, "{\n    a: {\n        b: 2   // expected 1\n    }\n}");
}
