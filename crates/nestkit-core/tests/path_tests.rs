use nestkit_core::{change_deep_value, get_deep_value, get_prop, get_prop_or, has_prop, normalize_path};
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn normalize_bracket_grammar() {
    assert_eq!(normalize_path("a[0]"), "a.0");
    assert_eq!(normalize_path("a['b']"), "a.b");
    assert_eq!(normalize_path("a[\"b\"].c"), "a.b.c");
    assert_eq!(normalize_path("a[B_2][10]"), "a.B_2.10");
    assert_eq!(normalize_path("[0].name"), "0.name");
    assert_eq!(normalize_path(".a.b."), "a.b");
    // Only word characters are accepted inside brackets
    assert_eq!(normalize_path("a[b-c]"), "a[b-c]");
    assert_eq!(normalize_path("a[]"), "a[]");
}

#[test]
fn get_prop_reads_nested_arrays_and_objects() {
    let v = json!({"a": {"b": [{"c": 1}]}, "mydata": {"result": [{"name": "x"}]}});
    assert_eq!(get_prop(&v, "a.b[0].c"), Some(&json!(1)));
    assert_eq!(get_prop(&v, "a['b'][0][\"c\"]"), Some(&json!(1)));
    assert_eq!(get_prop(&v, "mydata.result[0].name"), Some(&json!("x")));
    assert_eq!(get_prop(&v, "a.b.0.c"), Some(&json!(1)));
    assert_eq!(get_prop(&v, "a.b[1].c"), None);
}

#[test]
fn get_prop_defaults() {
    let empty = json!({});
    let x = json!("x");
    assert_eq!(get_prop_or(&empty, "a.b", &x), &x);
    assert_eq!(get_prop_or(&Value::Null, "a", &x), &x);
    assert_eq!(get_prop_or(&json!(0), "a", &x), &x);
    assert_eq!(get_prop_or(&json!({"a": 1}), "", &x), &x);
    // The default is returned as-is, never traversed further
    let fallback = json!({"b": 5});
    assert_eq!(get_prop_or(&empty, "a.b", &fallback), &fallback);
    // Present falsy leaves are returned, not replaced
    let v = json!({"a": {"zero": 0, "off": false, "none": null}});
    assert_eq!(get_prop_or(&v, "a.zero", &x), &json!(0));
    assert_eq!(get_prop_or(&v, "a.off", &x), &json!(false));
    assert_eq!(get_prop_or(&v, "a.none", &x), &Value::Null);
    assert_eq!(get_prop_or(&v, "a.none.deeper", &x), &x);
}

#[test]
fn get_prop_rejects_non_canonical_indices_and_empty_segments() {
    let v = json!({"list": [10, 20], "a": {"b": 1}});
    assert_eq!(get_prop(&v, "list.01"), None);
    assert_eq!(get_prop(&v, "list.-1"), None);
    assert_eq!(get_prop(&v, "a..b"), None);
}

#[test]
fn has_prop_is_non_null() {
    let v = json!({"a": {"b": null, "c": false, "d": [0]}});
    assert!(!has_prop(&v, "a.b"));
    assert!(has_prop(&v, "a.c"));
    assert!(has_prop(&v, "a.d[0]"));
    assert!(!has_prop(&v, "a.e"));
    assert!(!has_prop(&Value::Null, "a"));
}

#[test]
fn get_deep_value_with_splitter_and_start_index() {
    let v = json!({"foo": {"bar": "baz", "list": [1, {"x": true}]}});
    assert_eq!(get_deep_value(&v, "foo/bar", "/", 0), Some(&json!("baz")));
    assert_eq!(get_deep_value(&v, "foo/list/1/x", "/", 0), Some(&json!(true)));
    // Skip a leading segment such as a route prefix
    assert_eq!(get_deep_value(&v, "root/foo/bar", "/", 1), Some(&json!("baz")));
    // Start past the end returns the object itself
    assert_eq!(get_deep_value(&v, "foo", "/", 5), Some(&v));
    assert_eq!(get_deep_value(&v, "foo/missing/x", "/", 0), None);
    assert_eq!(get_deep_value(&v, "foo.bar", "", 0), None);
}

#[test]
fn get_deep_value_stops_at_null() {
    let v = json!({"a": {"b": null}});
    assert_eq!(get_deep_value(&v, "a.b.c.d", ".", 0), Some(&Value::Null));
    assert_eq!(get_deep_value(&Value::Null, "a.b", ".", 0), Some(&Value::Null));
    assert_eq!(get_deep_value(&json!(3), "a", ".", 0), None);
}

#[test]
fn change_deep_value_overwrites_existing() {
    let mut v = json!({"a": {"b": 1}});
    assert!(change_deep_value(&mut v, Some("a.b"), ".", json!(2)));
    assert_eq!(v, json!({"a": {"b": 2}}));

    let mut v = json!({"foo": {"bar": "baz"}});
    assert!(change_deep_value(&mut v, Some("foo/bar"), "/", json!("qux")));
    assert_eq!(v, json!({"foo": {"bar": "qux"}}));
}

#[test]
fn change_deep_value_inserts_new_leaf_key() {
    let mut v = json!({"a": {}});
    assert!(change_deep_value(&mut v, Some("a.b"), ".", json!([1])));
    assert_eq!(v, json!({"a": {"b": [1]}}));
}

#[test]
fn change_deep_value_aborts_on_missing_parent() {
    let mut v = json!({});
    assert!(!change_deep_value(&mut v, Some("a.b"), ".", json!(2)));
    assert_eq!(v, json!({}));

    let mut v = json!({"a": null});
    assert!(!change_deep_value(&mut v, Some("a.b"), ".", json!(2)));
    assert_eq!(v, json!({"a": null}));

    let mut v = json!({"a": 1});
    assert!(!change_deep_value(&mut v, None, ".", json!(2)));
    assert!(!change_deep_value(&mut v, Some("a.b"), ".", json!(2)));
    assert!(!change_deep_value(&mut v, Some(""), ".", json!(2)));
    assert_eq!(v, json!({"a": 1}));
}

#[test]
fn change_deep_value_on_arrays() {
    let mut v = json!({"list": [1, 2]});
    assert!(change_deep_value(&mut v, Some("list.0"), ".", json!(9)));
    assert!(change_deep_value(&mut v, Some("list.2"), ".", json!(3)));
    assert_eq!(v, json!({"list": [9, 2, 3]}));
    assert!(!change_deep_value(&mut v, Some("list.7"), ".", json!(0)));
    assert!(!change_deep_value(&mut v, Some("list.x"), ".", json!(0)));
    assert_eq!(v, json!({"list": [9, 2, 3]}));
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_][a-z0-9_]{0,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_root() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z_][a-z0-9_]{0,4}", arb_value(), 1..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

fn present_paths(v: &Value, prefix: &str, out: &mut Vec<String>) {
    let join = |k: &str| if prefix.is_empty() { k.to_string() } else { format!("{prefix}.{k}") };
    match v {
        Value::Object(map) => {
            for (k, child) in map {
                let p = join(k);
                out.push(p.clone());
                present_paths(child, &p, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let p = join(&i.to_string());
                out.push(p.clone());
                present_paths(child, &p, out);
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn get_prop_agrees_with_get_deep_value(root in arb_root()) {
        let mut paths = Vec::new();
        present_paths(&root, "", &mut paths);
        for p in paths {
            prop_assert_eq!(get_prop(&root, &p), get_deep_value(&root, &p, ".", 0));
        }
    }
}

#[test]
fn malformed_brackets_resolve_to_not_found() {
    let v = json!({"a": {"b": 1, "c": [1, 2]}});
    let x = json!("x");
    assert_eq!(get_prop(&v, "a[b-c]"), None);
    assert_eq!(get_prop(&v, "a[]"), None);
    assert_eq!(get_prop(&v, "a.c[0"), None);
    assert_eq!(get_prop_or(&v, "a[ b ]", &x), &x);
    assert!(!has_prop(&v, "a[b-c]"));
    assert!(!has_prop(&v, "a.c[-1]"));
}

#[test]
fn stray_dots_on_both_ends_are_stripped() {
    let v = json!({"a": 1, "b": {"c": 2}});
    assert_eq!(get_prop(&v, ".a."), Some(&json!(1)));
    assert_eq!(get_prop(&v, "b.c."), Some(&json!(2)));
    assert_eq!(get_prop(&v, "..a"), None);
}
