//! Multi-step paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseError, Step};

/// An ordered sequence of [`Step`]s, resolved left to right.
///
/// Paths are built once and can be reused across any number of
/// resolutions. They can be assembled step by step or parsed from the
/// expression syntax described in [`Path::parse`].
///
/// # Examples
///
/// ```
/// use optchain_access::{Path, Step};
///
/// let built = Path::new().field("pet").invoke("attack");
/// let parsed: Path = "pet?.attack?.()".parse().unwrap();
/// assert_eq!(built, parsed);
/// assert_eq!(built.to_string(), "pet.attack()");
/// assert_eq!(built.steps()[1], Step::invoke("attack"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Step>);

impl Path {
    /// The empty path. Resolving it yields the root itself.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a path expression such as `skills[run].description` or
    /// `pet?.attack?.()`. See the crate docs for the full syntax.
    pub fn parse(expr: &str) -> Result<Self, ParseError> {
        crate::parse::parse(expr)
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Step::Field(name.into()));
        self
    }

    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Step::Index(index));
        self
    }

    #[must_use]
    pub fn invoke(mut self, name: impl Into<String>) -> Self {
        self.0.push(Step::Invoke(name.into()));
        self
    }

    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    /// Returns a new path with `other`'s steps appended.
    #[must_use]
    pub fn join(&self, other: &Path) -> Self {
        self.0.iter().chain(other.0.iter()).cloned().collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            step.write_fragment(f, i == 0)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expr = String::deserialize(deserializer)?;
        Self::parse(&expr).map_err(serde::de::Error::custom)
    }
}
