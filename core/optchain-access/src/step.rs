//! Single-level steps of a path.

use std::fmt;

/// One step of a [`Path`](crate::Path).
///
/// # Rules
///
/// - `Field`: looks up a name on a record.
/// - `Index`: looks up a position in a list, or the decimal key on a record.
/// - `Invoke`: looks up a callable by name on a record and calls it with no
///   arguments. Present but non-callable values count as absent. The parser
///   never produces one after an index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Example: `damage` in `weapon.damage`.
    Field(String),
    /// Example: `0` in `items[0]`.
    Index(usize),
    /// Example: `attack` in `pet.attack()`.
    Invoke(String),
}

impl Step {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    pub fn invoke(name: impl Into<String>) -> Self {
        Self::Invoke(name.into())
    }

    /// The record key this step reads, if it reads one by name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(name) | Self::Invoke(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

/// Characters that may appear in an unquoted field name.
pub(crate) fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '.' | '?' | '[' | ']' | '(' | ')' | '"' | '\'' | '\\')
}

/// Whether `name` can be written without brackets and quotes.
pub(crate) fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Writes `key` as a double-quoted bracket key, escaping `"` and `\`.
fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    f.write_str("[\"")?;
    for c in key.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"]")
}

impl Step {
    /// Writes this step as a path fragment. `leading` is true for the
    /// first step, which carries no `.` separator.
    pub(crate) fn write_fragment(&self, f: &mut fmt::Formatter<'_>, leading: bool) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Field(name) | Self::Invoke(name) => {
                if is_plain_name(name) {
                    if !leading {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                } else {
                    write_quoted(f, name)?;
                }
                if matches!(self, Self::Invoke(_)) {
                    f.write_str("()")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fragment(f, true)
    }
}
