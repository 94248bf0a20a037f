//! Line grammar for desktop-entry style files.
//!
//! The parser only checks well-formedness. It turns each physical line into
//! zero or more [`EntryEvent`]s and leaves every domain rule (which groups
//! are allowed, which keys mean what) to the consumer.

use std::str::Lines;

use crate::{Error, Result};

/// One step of a parsed entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent<'a> {
    /// A `[Group]` header opened a group.
    GroupStart(&'a str),
    /// The named group was closed by the next header or by end of input.
    GroupEnd(&'a str),
    /// A `Key=Value` line. `group` is `None` for lines before any header.
    Entry {
        group: Option<&'a str>,
        key: &'a str,
        value: &'a str,
        /// 1-based line number.
        line: usize,
    },
}

/// Streaming parser over the text of an entry file.
///
/// Yields events in file order. A header produces the `GroupEnd` of the
/// previously open group, if any, followed by its own `GroupStart`. At end
/// of input the open group receives a final `GroupEnd`.
///
/// The first malformed line is reported as an `Err` item, after which the
/// iterator yields nothing more.
///
/// # Example
///
/// ```
/// use horizon_lattice_icons::entry::{EntryEvent, EntryParser};
///
/// let mut events = EntryParser::new("[Icon Theme]\nName=Hicolor\n");
/// assert_eq!(events.next().unwrap().unwrap(), EntryEvent::GroupStart("Icon Theme"));
/// ```
#[derive(Debug)]
pub struct EntryParser<'a> {
    lines: Lines<'a>,
    line_no: usize,
    group: Option<&'a str>,
    pending: Option<EntryEvent<'a>>,
    done: bool,
}

impl<'a> EntryParser<'a> {
    /// Create a parser over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
            group: None,
            pending: None,
            done: false,
        }
    }

    /// The group currently open, if any.
    pub fn current_group(&self) -> Option<&'a str> {
        self.group
    }

    fn fail(&mut self, message: impl Into<String>) -> Option<Result<EntryEvent<'a>>> {
        self.done = true;
        Some(Err(Error::grammar(message, self.line_no)))
    }

    fn header(&mut self, line: &'a str) -> Option<Result<EntryEvent<'a>>> {
        if line.len() < 2 || !line.ends_with(']') {
            return self.fail(format!("unterminated group header '{line}'"));
        }

        let name = &line[1..line.len() - 1];
        if name
            .chars()
            .any(|c| c.is_control() || c == '[' || c == ']')
        {
            return self.fail(format!("invalid group name '{name}'"));
        }

        let start = EntryEvent::GroupStart(name);
        match self.group.replace(name) {
            Some(previous) => {
                self.pending = Some(start);
                Some(Ok(EntryEvent::GroupEnd(previous)))
            }
            None => Some(Ok(start)),
        }
    }

    fn key_value(&mut self, line: &'a str) -> Option<Result<EntryEvent<'a>>> {
        let key_end = line
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(line.len());
        let (key, rest) = line.split_at(key_end);

        let Some(value) = rest.trim_start().strip_prefix('=') else {
            return self.fail(format!("expected '=' after key '{key}'"));
        };

        Some(Ok(EntryEvent::Entry {
            group: self.group,
            key,
            value: value.trim_start(),
            line: self.line_no,
        }))
    }
}

impl<'a> Iterator for EntryParser<'a> {
    type Item = Result<EntryEvent<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(Ok(event));
        }
        if self.done {
            return None;
        }

        loop {
            let Some(raw) = self.lines.next() else {
                self.done = true;
                return self.group.take().map(|g| Ok(EntryEvent::GroupEnd(g)));
            };
            self.line_no += 1;

            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return if line.starts_with('[') {
                self.header(line)
            } else {
                self.key_value(line)
            };
        }
    }
}

impl std::iter::FusedIterator for EntryParser<'_> {}

/// Parse `text` into a complete, replayable list of events.
///
/// Fails with the first grammar error.
pub fn parse_entries(text: &str) -> Result<Vec<EntryEvent<'_>>> {
    EntryParser::new(text).collect()
}
