//! Zero-argument callables stored inside a value tree.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A method-like value: calling it takes no arguments and produces a [`Value`].
///
/// Clones share the same function. Two callables are equal only when they
/// share it, so `PartialEq` on [`Value`] stays meaningful for trees that
/// hold functions.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn() -> Value + Send + Sync>);

impl Callable {
    /// Wraps a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A callable that always returns a clone of `value`.
    pub fn returning(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move || value.clone())
    }

    /// Invokes the function.
    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}
