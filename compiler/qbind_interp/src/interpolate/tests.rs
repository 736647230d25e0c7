use super::*;
use crate::test_helpers::{keys, query, values};
use pretty_assertions::assert_eq;
use qbind_ir::{Binding, DictField, Location, TypedValue};
use serde_json::json;

fn shape_of(q: &QueryAst) -> InterpolatedQuery {
    match interpolate(q, None) {
        Ok(r) => r,
        Err(e) => panic!("shape pass failed: {e}"),
    }
}

fn bound(q: &QueryAst, vals: &ParamValues) -> InterpolatedQuery {
    match interpolate(q, Some(vals)) {
        Ok(r) => r,
        Err(e) => panic!("bind pass failed: {e}"),
    }
}

fn long(slot: &str, v: i64) -> Binding {
    Binding::new(slot, TypedValue::LongValue(v))
}

fn user_object(key_fields: &[(&str, bool)]) -> Selection {
    Selection::Object {
        keys: keys(key_fields),
    }
}

#[test]
fn test_scalar_array_ids_scenario() {
    let q = query(
        "select * from books where id in :ids",
        &[("ids", false, Selection::ScalarArray)],
    );
    let result = bound(&q, &values(json!({ "ids": [1, 2, 3] })));

    assert_eq!(
        result.query,
        "select * from books where id in (:param1, :param2, :param3)"
    );
    assert_eq!(
        result.bindings,
        vec![long("param1", 1), long("param2", 2), long("param3", 3)]
    );
    assert!(result.mapping.is_empty());
}

#[test]
fn test_repeated_scalar_reuses_slot() {
    let q = query(
        "select :a, :b, :a",
        &[
            ("a", false, Selection::Scalar),
            ("b", false, Selection::Scalar),
            ("a", false, Selection::Scalar),
        ],
    );
    let result = bound(&q, &values(json!({ "a": 10, "b": "x" })));

    assert_eq!(result.query, "select :param1, :param2, :param1");
    assert_eq!(
        result.bindings,
        vec![
            long("param1", 10),
            Binding::new("param2", TypedValue::StringValue("x".to_owned())),
        ]
    );
}

#[test]
fn test_shape_pass_mapping_in_first_seen_order() {
    let q = query(
        "select :b, :a where x in :xs",
        &[
            ("b", true, Selection::Scalar),
            ("a", false, Selection::Scalar),
            ("xs", false, Selection::ScalarArray),
        ],
    );
    let result = shape_of(&q);

    assert_eq!(result.query, "select :param1, :param2 where x in (:param3)");
    assert!(result.bindings.is_empty());
    assert_eq!(
        result.mapping,
        vec![
            ParameterShape::Scalar {
                name: "b".to_owned(),
                required: true,
                assigned_index: 1
            },
            ParameterShape::Scalar {
                name: "a".to_owned(),
                required: false,
                assigned_index: 2
            },
            ParameterShape::ScalarArray {
                name: "xs".to_owned(),
                required: false,
                assigned_index: vec![3]
            },
        ]
    );
}

#[test]
fn test_object_occurrences_share_dict() {
    let q = query(
        "insert into t (a, b) values :row on conflict do update set (b, c) = :row",
        &[
            ("row", false, user_object(&[("a", false), ("b", false)])),
            ("row", false, user_object(&[("b", true), ("c", false)])),
        ],
    );
    let result = shape_of(&q);

    assert_eq!(
        result.query,
        "insert into t (a, b) values (:param1, :param2) on conflict do update set (b, c) = (:param2, :param3)"
    );
    let expected: SlotDict = [
        DictField {
            name: "a".to_owned(),
            assigned_index: 1,
            required: false,
        },
        DictField {
            name: "b".to_owned(),
            assigned_index: 2,
            required: true,
        },
        DictField {
            name: "c".to_owned(),
            assigned_index: 3,
            required: false,
        },
    ]
    .into_iter()
    .collect();
    assert_eq!(
        result.mapping,
        vec![ParameterShape::Dict {
            name: "row".to_owned(),
            dict: expected
        }]
    );
}

#[test]
fn test_object_bindings_once_per_field() {
    let q = query(
        "values :row, :row",
        &[
            ("row", false, user_object(&[("a", false), ("b", false)])),
            ("row", false, user_object(&[("b", false), ("a", false)])),
        ],
    );
    let result = bound(&q, &values(json!({ "row": { "a": 1, "b": 2 } })));

    assert_eq!(result.query, "values (:param1, :param2), (:param2, :param1)");
    assert_eq!(result.bindings, vec![long("param1", 1), long("param2", 2)]);
}

#[test]
fn test_object_array_modes_differ() {
    let selection = Selection::ObjectArray {
        keys: keys(&[("name", true), ("age", false)]),
    };
    let q = query(
        "insert into users (name, age) values :users",
        &[("users", false, selection)],
    );

    let shape = shape_of(&q);
    assert_eq!(
        shape.query,
        "insert into users (name, age) values (:param1, :param2)"
    );
    assert!(matches!(
        shape.mapping.as_slice(),
        [ParameterShape::DictArray { .. }]
    ));

    let result = bound(
        &q,
        &values(json!({ "users": [{ "name": "a", "age": 1 }, { "name": "b" }] })),
    );
    assert_eq!(
        result.query,
        "insert into users (name, age) values (:param1, :param2), (:param3, :param4)"
    );
    assert_eq!(result.bindings.len(), 4);
    assert_eq!(
        result.bindings[3],
        Binding::new("param4", TypedValue::IsNull(true))
    );
}

#[test]
fn test_empty_object_array_allocates_nothing() {
    let q = query(
        "insert into users values :users returning :tag",
        &[
            (
                "users",
                false,
                Selection::ObjectArray {
                    keys: keys(&[("name", false)]),
                },
            ),
            ("tag", false, Selection::Scalar),
        ],
    );
    let result = bound(&q, &values(json!({ "users": [], "tag": "t" })));

    assert_eq!(result.query, "insert into users values () returning :param1");
    assert_eq!(
        result.bindings,
        vec![Binding::new("param1", TypedValue::StringValue("t".to_owned()))]
    );
}

#[test]
fn test_shape_and_bind_agree_for_scalar_and_object() {
    let q = query(
        "update users set (name, email) = :user where id = :id and org = :org and id2 = :id",
        &[
            ("user", false, user_object(&[("name", false), ("email", false)])),
            ("id", true, Selection::Scalar),
            ("org", false, Selection::Scalar),
            ("id", true, Selection::Scalar),
        ],
    );
    let shape = shape_of(&q);
    let result = bound(
        &q,
        &values(json!({ "user": { "name": "n", "email": "e" }, "id": 7, "org": 3 })),
    );

    assert_eq!(shape.query, result.query);
    let shape_slots: Vec<u32> = shape
        .mapping
        .iter()
        .flat_map(ParameterShape::slot_indices)
        .collect();
    let bound_slots: Vec<String> = result.bindings.iter().map(|b| b.name.clone()).collect();
    assert_eq!(shape_slots, vec![1, 2, 3, 4]);
    assert_eq!(bound_slots, vec!["param1", "param2", "param3", "param4"]);
}

#[test]
fn test_missing_required_aborts_before_rewrite() {
    let q = query("select :id", &[("id", true, Selection::Scalar)]);
    assert_eq!(
        interpolate(&q, Some(&values(json!({ "other": 1 })))),
        Err(InterpError::MissingRequiredParameter {
            name: "id".to_owned()
        })
    );
}

#[test]
fn test_conflicting_shape_is_contract_violation() {
    let q = query(
        "select :id, :id",
        &[
            ("id", false, Selection::Scalar),
            ("id", false, Selection::ScalarArray),
        ],
    );
    let err = match interpolate(&q, None) {
        Ok(r) => panic!("expected a conflict, got {r:?}"),
        Err(e) => e,
    };
    assert_eq!(
        err,
        InterpError::ConflictingShape {
            name: "id".to_owned(),
            expected: "scalar",
            found: "scalar array"
        }
    );
    assert!(err.is_contract_violation());
}

#[test]
fn test_bad_location_is_contract_violation() {
    let q = QueryAst::new(
        "select :id",
        vec![ParamOccurrence::new(
            "id",
            false,
            Selection::Scalar,
            Location::new(7, 40),
        )],
    );
    let err = match interpolate(&q, None) {
        Ok(r) => panic!("expected out of bounds, got {r:?}"),
        Err(e) => e,
    };
    assert!(err.is_contract_violation());
}

#[test]
fn test_no_params_is_identity() {
    let q = QueryAst::new("select 1", Vec::new());
    let result = shape_of(&q);
    assert_eq!(result.query, "select 1");
    assert!(result.mapping.is_empty());
    assert!(result.bindings.is_empty());
}

#[test]
fn test_custom_dialect() {
    let q = query(
        "select :a where b in :bs",
        &[
            ("a", false, Selection::Scalar),
            ("bs", false, Selection::ScalarArray),
        ],
    );
    let interpolator = Interpolator::new(Dialect::Dollar);
    let result = match interpolator.bind(&q, &values(json!({ "a": true, "bs": ["x", "y"] }))) {
        Ok(r) => r,
        Err(e) => panic!("bind failed: {e}"),
    };
    assert_eq!(result.query, "select $1 where b in ($2, $3)");
    assert_eq!(
        result.bindings[0],
        Binding::new("1", TypedValue::BooleanValue(true))
    );
    assert_eq!(interpolator.syntax(), &Dialect::Dollar);
}
