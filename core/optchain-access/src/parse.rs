//! Path expression parser.
//!
//! # Syntax
//!
//! - Field: `.name` or `?.name` (the separator is omitted on the first step)
//! - Bracket field: `[name]`, `["any key"]`, `['any key']`
//! - Index: `[3]` (unquoted, ASCII digits only)
//! - Invoke: `()` directly after a field, e.g. `pet.attack()` or `pet?.attack?.()`.
//!   Not after an index: `moves[1]()` is rejected, `moves["1"]()` calls key `1`.
//!
//! `?.` and `.` mean the same thing, every step already short-circuits.
//! Inside quotes a backslash escapes the next character.

use crate::step::is_name_char;
use crate::{Path, Step};

/// An error produced while parsing a path expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path `{path}` at offset {offset}: {message}")]
pub struct ParseError {
    /// Byte position in `path`.
    pub offset: usize,
    /// The expression being parsed.
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Dot,
    Optional,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    steps: Vec<Step>,
}

pub(crate) fn parse(src: &str) -> Result<Path, ParseError> {
    Parser {
        src,
        pos: 0,
        steps: Vec::new(),
    }
    .run()
}

impl Parser<'_> {
    fn error(&self, offset: usize, message: impl Into<String>) -> ParseError {
        ParseError {
            offset,
            path: self.src.to_owned(),
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn run(mut self) -> Result<Path, ParseError> {
        let mut sep = self.separator()?;
        loop {
            let Some(c) = self.peek() else {
                if sep.is_some() {
                    return Err(self.error(self.pos, "expected field name after separator"));
                }
                break;
            };
            match (c, sep) {
                ('[', Some(Separator::Dot)) | ('(', Some(Separator::Dot)) => {
                    return Err(self.error(self.pos, format!("expected field name after `.`, found `{c}`")));
                }
                ('[', _) => self.bracket()?,
                ('(', _) => self.call()?,
                (c, Some(_)) if is_name_char(c) => self.name(),
                (c, None) if is_name_char(c) && self.steps.is_empty() => self.name(),
                (c, _) => {
                    return Err(self.error(self.pos, format!("unexpected character `{c}`")));
                }
            }
            sep = self.separator()?;
        }
        Ok(Path::from(self.steps))
    }

    fn separator(&mut self) -> Result<Option<Separator>, ParseError> {
        match self.peek() {
            Some('.') => {
                self.bump();
                Ok(Some(Separator::Dot))
            }
            Some('?') => {
                let start = self.pos;
                self.bump();
                if self.bump() != Some('.') {
                    return Err(self.error(start, "expected `.` after `?`"));
                }
                Ok(Some(Separator::Optional))
            }
            _ => Ok(None),
        }
    }

    fn name(&mut self) {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        self.steps.push(Step::Field(self.src[start..self.pos].to_owned()));
    }

    fn bracket(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.bump();
        let step = match self.peek() {
            Some(q @ ('"' | '\'')) => Step::Field(self.quoted(q)?),
            _ => {
                let key_start = self.pos;
                while self.peek().is_some_and(is_name_char) {
                    self.bump();
                }
                let key = &self.src[key_start..self.pos];
                if key.is_empty() && self.peek() == Some(']') {
                    return Err(self.error(start, "empty brackets"));
                }
                if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
                    let index = key
                        .parse()
                        .map_err(|_| self.error(key_start, "index out of range"))?;
                    Step::Index(index)
                } else {
                    Step::Field(key.to_owned())
                }
            }
        };
        if self.bump() != Some(']') {
            return Err(self.error(start, "unclosed `[`"));
        }
        self.steps.push(step);
        Ok(())
    }

    fn quoted(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.pos;
        self.bump();
        let mut key = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error(start, "unterminated string")),
                Some('\\') => match self.bump() {
                    Some(c) => key.push(c),
                    None => return Err(self.error(start, "unterminated string")),
                },
                Some(c) if c == quote => return Ok(key),
                Some(c) => key.push(c),
            }
        }
    }

    fn call(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.bump();
        if self.bump() != Some(')') {
            return Err(self.error(start, "expected `)`: calls take no arguments"));
        }
        let step = match self.steps.pop() {
            Some(Step::Field(name)) => Step::Invoke(name),
            Some(Step::Index(_)) => {
                return Err(self.error(start, "a call cannot follow an index, quote the key instead"));
            }
            _ => return Err(self.error(start, "a call must follow a field name")),
        };
        self.steps.push(step);
        Ok(())
    }
}
