//! Total path resolution.
//!
//! Resolution never fails. A missing field, an out-of-range index, a
//! non-record intermediate or a missing callable all turn into "no value",
//! which stops the walk; later steps are not evaluated and no callable past
//! that point is invoked.

use std::borrow::Cow;

use optchain_types::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{ParseError, Path, Step};

/// How a resolved value is compared against "no value" before the default
/// is substituted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Only "no value" is replaced. `0`, `false` and `""` are kept.
    #[default]
    Nullish,
    /// Mirrors `x || default`: any falsy result is replaced, including
    /// legitimate `0`, `false` and `""`. Opt in only when that is wanted.
    Falsy,
}

impl Fallback {
    /// Whether `value` is kept rather than replaced by the default.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Nullish => value.is_present(),
            Self::Falsy => value.is_truthy(),
        }
    }
}

/// Walks `path` from `root` and returns the value reached, or `None` when
/// any step finds nothing. An explicit [`Value::Absent`] at the end is also
/// `None`.
///
/// Values reached by field and index steps are borrowed from `root`;
/// anything produced by an invocation is owned.
pub fn lookup<'v>(root: &'v Value, path: &Path) -> Option<Cow<'v, Value>> {
    let mut current = Cow::Borrowed(root);
    for (depth, step) in path.steps().iter().enumerate() {
        if current.is_absent() {
            debug!("Short-circuit before step {} ({}) of `{}`", depth, step, path);
            return None;
        }
        trace!("Step {} ({}) on {}", depth, step, current.kind());
        current = match advance(current, step) {
            Some(next) => next,
            None => {
                debug!("Nothing at step {} ({}) of `{}`", depth, step, path);
                return None;
            }
        };
    }
    if current.is_absent() {
        return None;
    }
    Some(current)
}

/// Resolves `path` from `root`, returning `default` when nothing is found.
///
/// Uses [`Fallback::Nullish`]; see [`resolve_with`] for `||` semantics.
pub fn resolve(root: &Value, path: &Path, default: Value) -> Value {
    resolve_with(root, path, default, Fallback::Nullish)
}

/// Resolves `path` from `root` and substitutes `default` according to
/// `fallback`.
pub fn resolve_with(root: &Value, path: &Path, default: Value, fallback: Fallback) -> Value {
    match lookup(root, path) {
        Some(value) if fallback.accepts(&value) => value.into_owned(),
        Some(value) => {
            debug!("Discarding {} result of `{}` under {:?} fallback", value.kind(), path, fallback);
            default
        }
        None => default,
    }
}

/// For each name, resolves `field_path` from `entity[name]` and keeps the
/// results that are present, in input order.
///
/// With an absent `default`, names that are missing (or whose field is
/// missing) are dropped rather than reported as absent.
pub fn describe_all<I>(entity: &Value, names: I, field_path: &Path, default: &Value) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    describe_all_with(entity, names, field_path, default, Fallback::Nullish)
}

/// [`describe_all`] with an explicit [`Fallback`]. Under
/// [`Fallback::Falsy`] with an absent default this behaves like
/// `names.map(...).filter(Boolean)`.
pub fn describe_all_with<I>(
    entity: &Value,
    names: I,
    field_path: &Path,
    default: &Value,
    fallback: Fallback,
) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    static ABSENT: Value = Value::Absent;

    names
        .into_iter()
        .filter_map(|name| {
            let root = entity.get(name.as_ref()).unwrap_or(&ABSENT);
            let value = resolve_with(root, field_path, default.clone(), fallback);
            value.is_present().then_some(value)
        })
        .collect()
}

/// A parsed path paired with a fallback mode, reusable across roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolver {
    path: Path,
    #[serde(default)]
    fallback: Fallback,
}

impl Resolver {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            fallback: Fallback::default(),
        }
    }

    /// Parses `expr` once for repeated use.
    pub fn parse(expr: &str) -> Result<Self, ParseError> {
        Path::parse(expr).map(Self::new)
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    pub fn lookup<'v>(&self, root: &'v Value) -> Option<Cow<'v, Value>> {
        lookup(root, &self.path)
    }

    pub fn resolve(&self, root: &Value, default: Value) -> Value {
        resolve_with(root, &self.path, default, self.fallback)
    }
}

fn advance<'v>(current: Cow<'v, Value>, step: &Step) -> Option<Cow<'v, Value>> {
    match current {
        Cow::Borrowed(value) => match step {
            Step::Field(name) => value.get(name).map(Cow::Borrowed),
            Step::Index(index) => child_at(value, *index).map(Cow::Borrowed),
            Step::Invoke(name) => invoke(value, name).map(Cow::Owned),
        },
        Cow::Owned(value) => match step {
            Step::Invoke(name) => invoke(&value, name).map(Cow::Owned),
            _ => take_child(value, step).map(Cow::Owned),
        },
    }
}

fn child_at(value: &Value, index: usize) -> Option<&Value> {
    match value {
        Value::List(items) => items.get(index),
        Value::Record(fields) => fields.get(index.to_string().as_str()),
        _ => None,
    }
}

/// Moves a child out of an owned value, avoiding a clone of the subtree.
fn take_child(value: Value, step: &Step) -> Option<Value> {
    match (value, step) {
        (Value::Record(mut fields), Step::Field(name)) => fields.swap_remove(name.as_str()),
        (Value::Record(mut fields), Step::Index(index)) => {
            fields.swap_remove(index.to_string().as_str())
        }
        (Value::List(mut items), Step::Index(index)) if *index < items.len() => {
            Some(items.swap_remove(*index))
        }
        _ => None,
    }
}

fn invoke(value: &Value, name: &str) -> Option<Value> {
    match value.get(name)? {
        Value::Callable(callable) => {
            trace!("Invoking `{}`", name);
            Some(callable.call())
        }
        other => {
            debug!("Skipping call of `{}`: {} is not callable", name, other.kind());
            None
        }
    }
}
