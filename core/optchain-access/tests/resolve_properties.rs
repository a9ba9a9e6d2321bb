//! Property-based tests for path resolution.
//!
//! These verify that resolution is total:
//! - a path that exists yields the nested value whatever the default
//! - a path that does not exist yields exactly the default
//! - an absent root yields the default for every path
//! - rendering then parsing a path gives the same path

use optchain_access::{Path, Step, Value, lookup, resolve};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,2}").unwrap()
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec((name_strategy(), inner), 0..4).prop_map(Value::record),
        ]
    })
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        name_strategy().prop_map(Step::Field),
        (0usize..4).prop_map(Step::Index),
        name_strategy().prop_map(Step::Invoke),
    ]
}

fn path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(step_strategy(), 0..6).prop_map(Path::from)
}

fn any_step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<String>().prop_map(Step::Field),
        any::<usize>().prop_map(Step::Index),
        any::<String>().prop_map(Step::Invoke),
    ]
}

/// Walks `root` choosing children by `picks`, returning the path taken and
/// the value it ends on. Stops early at leaves.
fn existing_walk(root: &Value, picks: &[usize]) -> (Path, Value) {
    let mut path = Path::new();
    let mut current = root;
    for pick in picks {
        match current {
            Value::Record(fields) if !fields.is_empty() => {
                let (name, child) = fields.get_index(pick % fields.len()).unwrap();
                path.push(Step::field(name.clone()));
                current = child;
            }
            Value::List(items) if !items.is_empty() => {
                let index = pick % items.len();
                path.push(Step::index(index));
                current = &items[index];
            }
            _ => break,
        }
    }
    (path, current.clone())
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// An existing path resolves to the nested value, independent of the default.
    #[test]
    fn existing_path_ignores_default(
        root in value_strategy(),
        picks in prop::collection::vec(any::<usize>(), 0..6),
        default in leaf_strategy(),
    ) {
        let (path, expected) = existing_walk(&root, &picks);
        prop_assume!(expected.is_present());
        prop_assert_eq!(resolve(&root, &path, default), expected);
    }

    /// Whenever lookup finds nothing, resolve returns exactly the default.
    #[test]
    fn missing_path_yields_default(
        root in value_strategy(),
        path in path_strategy(),
        default in leaf_strategy(),
    ) {
        let found = lookup(&root, &path).map(|v| v.into_owned());
        let resolved = resolve(&root, &path, default.clone());
        match found {
            Some(value) => prop_assert_eq!(resolved, value),
            None => prop_assert_eq!(resolved, default),
        }
    }

    /// Nothing is ever found under an absent root.
    #[test]
    fn absent_root_yields_default(path in path_strategy(), default in leaf_strategy()) {
        prop_assert!(lookup(&Value::Absent, &path).is_none());
        prop_assert_eq!(resolve(&Value::Absent, &path, default.clone()), default);
    }

    /// Extending a path past a missing step still finds nothing.
    #[test]
    fn missing_prefix_stays_missing(
        root in value_strategy(),
        prefix in path_strategy(),
        suffix in path_strategy(),
    ) {
        prop_assume!(lookup(&root, &prefix).is_none());
        prop_assert!(lookup(&root, &prefix.join(&suffix)).is_none());
    }

    /// Rendering a path and parsing it back gives the same steps.
    #[test]
    fn display_parse_round_trip(steps in prop::collection::vec(any_step_strategy(), 0..6)) {
        let path = Path::from(steps);
        let parsed = Path::parse(&path.to_string());
        prop_assert_eq!(parsed, Ok(path));
    }
}
