//! # Line Parsers
//!
//! One small scanner per line shape of a topology dump:
//!
//! * [`classify`]: drops blank and comment lines.
//! * [`attributes`]: `name=hex` lines (`vendid`, `devid`, `sysimgguid`, `switchguid`, `caguid`).
//! * [`descriptor`]: the `Switch ...` / `Ca ...` summary line.
//! * [`connection`]: `[port] ...` lines.
//!
//! Scanners never mutate anything. They return a [`Scan`] describing what
//! they could read, and the [`ParseSession`](crate::session::ParseSession)
//! decides what to apply.

pub mod attributes;
pub mod classify;
pub mod connection;
pub mod descriptor;

/// Outcome of offering a line to one scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<T> {
    /// The line has this shape and every field was read.
    Matched(T),
    /// The line has this shape but some trailing fields were missing or unreadable.
    Partial(T),
    /// The line belongs to another scanner.
    NotThisShape,
}

impl<T> Scan<T> {
    /// Fields read from the line, complete or not.
    pub fn fields(self) -> Option<T> {
        match self {
            Scan::Matched(fields) | Scan::Partial(fields) => Some(fields),
            Scan::NotThisShape => None,
        }
    }

    pub(crate) fn from_fields(fields: T, complete: bool) -> Self {
        if complete {
            Scan::Matched(fields)
        } else {
            Scan::Partial(fields)
        }
    }
}

/// Reads a hexadecimal number, with or without `0x`, ignoring anything after the digits.
pub(crate) fn parse_hex(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(text.len());
    u64::from_str_radix(&text[..end], 16).ok()
}

/// Reads a decimal number, ignoring anything after the digits.
pub(crate) fn parse_dec(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Forward-only tokenizer over one line.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    pub(crate) fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consumes `word` if the line continues with it.
    pub(crate) fn keyword(&mut self, word: &str) -> bool {
        match self.rest.strip_prefix(word) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Next whitespace-delimited token.
    pub(crate) fn word(&mut self) -> Option<&'a str> {
        self.skip_ws();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// Next token read as a decimal number.
    ///
    /// The token is consumed even when it is not a number.
    pub(crate) fn number(&mut self) -> Option<u32> {
        self.word().and_then(parse_dec)
    }

    /// Text between `open` and the next `close`, which must start right here.
    pub(crate) fn delimited(&mut self, open: char, close: char) -> Option<&'a str> {
        let inner = self.rest.strip_prefix(open)?;
        let end = inner.find(close)?;
        self.rest = &inner[end + close.len_utf8()..];
        Some(&inner[..end])
    }

    /// Text of the next double-quoted string, skipping whatever precedes the opening quote.
    pub(crate) fn seek_quoted(&mut self) -> Option<&'a str> {
        let start = self.rest.find('"')?;
        let inner = &self.rest[start + 1..];
        let end = inner.find('"')?;
        self.rest = &inner[end + 1..];
        Some(&inner[..end])
    }
}
