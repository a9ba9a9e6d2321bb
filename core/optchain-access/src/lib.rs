//! Safe, chained optional access over optchain values.
//!
//! This crate provides:
//! - [`Step`] and [`Path`] — what to read, as data or as an expression
//!   (`weapon.damage`, `pet?.attack?.()`, `skills["run"].description`)
//! - [`lookup`] / [`resolve`] — total resolution with a caller-supplied default
//! - [`Fallback`] — nullish substitution by default, `||`-style on request
//! - [`describe_all`] — resolve one path under many named children, dropping misses
//! - [`Resolver`] — a parsed path and fallback mode bundled for reuse
//! - [`ValueExt`] — typed getters (`get_str`, `get_bool`, ...) on [`Value`]
//!
//! Resolution never fails and never panics: any missing step yields the
//! default, and callables past a missing step are never invoked. The only
//! fallible operation is parsing an expression ([`ParseError`]).
//!
//! ```
//! use optchain_access::{resolve, Path};
//! use optchain_types::Value;
//!
//! let hero = Value::record([("weapon", Value::record([("damage", 30)]))]);
//! let damage = Path::parse("weapon?.damage").unwrap();
//! assert_eq!(resolve(&hero, &damage, Value::from(0)), Value::from(30));
//!
//! let unarmed = Value::record(Vec::<(String, Value)>::new());
//! assert_eq!(resolve(&unarmed, &damage, Value::from(0)), Value::from(0));
//! ```

mod ext;
mod parse;
mod path;
mod resolve;
mod step;

pub use ext::ValueExt;
pub use parse::ParseError;
pub use path::Path;
pub use resolve::{Fallback, Resolver, describe_all, describe_all_with, lookup, resolve, resolve_with};
pub use step::Step;

pub use optchain_types::Value;
