//! Shared logic for the optchain command-line tool.
//!
//! The binary only parses arguments and prints; everything it evaluates
//! goes through these functions so it can be tested without a process.

pub mod demo;

use std::io::Read;

use anyhow::{Context, Result};
use optchain_access::{Fallback, Path, Resolver, describe_all_with};
use optchain_types::Value;
use tracing::debug;

/// What to evaluate and how to fall back.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub resolver: Resolver,
    pub default: Value,
}

impl Query {
    /// Parses a path expression and a JSON default.
    pub fn parse(expr: &str, default_json: &str, fallback: Fallback) -> Result<Self> {
        let resolver = Resolver::parse(expr)?.with_fallback(fallback);
        let default = Value::from_json_str(default_json)
            .with_context(|| format!("Default is not valid JSON: {default_json}"))?;
        Ok(Self { resolver, default })
    }

    pub fn path(&self) -> &Path {
        self.resolver.path()
    }

    /// Resolves against `document`.
    pub fn get(&self, document: &Value) -> Value {
        let value = self.resolver.resolve(document, self.default.clone());
        debug!("`{}` resolved to {}", self.path(), value.kind());
        value
    }

    /// Resolves under each named child of `document`, dropping misses.
    pub fn describe<S: AsRef<str>>(&self, document: &Value, names: &[S]) -> Vec<Value> {
        describe_all_with(
            document,
            names,
            self.path(),
            &self.default,
            self.resolver.fallback(),
        )
    }
}

/// Reads a JSON document from `input`, or from stdin when `None`.
pub fn read_document(input: Option<&std::path::Path>) -> Result<Value> {
    let text = match input {
        Some(path) => {
            debug!("Reading document from {:?}", path);
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    Value::from_json_str(&text).context("Document is not valid JSON")
}
