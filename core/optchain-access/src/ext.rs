use std::borrow::Cow;

use optchain_types::Value;

use crate::{Path, lookup, resolve};

/// Path-based getters on [`Value`].
///
/// The typed getters return `None` both when nothing is found and when the
/// value found has a different type.
pub trait ValueExt {
    fn at(&self, path: &Path) -> Option<Cow<'_, Value>>;

    fn at_or(&self, path: &Path, default: Value) -> Value;

    /// Extract a string at `path`.
    fn get_str(&self, path: &Path) -> Option<String> {
        match self.at(path)? {
            Cow::Borrowed(Value::String(s)) => Some(s.clone()),
            Cow::Owned(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Extract a boolean at `path`.
    fn get_bool(&self, path: &Path) -> Option<bool> {
        self.at(path)?.as_bool()
    }

    /// Extract a number at `path` as `f64`.
    fn get_f64(&self, path: &Path) -> Option<f64> {
        self.at(path)?.as_f64()
    }

    /// Extract an integer at `path`.
    fn get_i64(&self, path: &Path) -> Option<i64> {
        self.at(path)?.as_i64()
    }
}

impl ValueExt for Value {
    fn at(&self, path: &Path) -> Option<Cow<'_, Value>> {
        lookup(self, path)
    }

    fn at_or(&self, path: &Path, default: Value) -> Value {
        resolve(self, path, default)
    }
}
