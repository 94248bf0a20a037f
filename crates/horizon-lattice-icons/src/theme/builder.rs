//! Folds entry events into an [`IconTheme`].

use crate::entry::{EntryEvent, EntryParser};
use crate::{Error, Result};

use super::types::{IconTheme, IconThemeSubdir, SubdirType};

/// Name of the mandatory first group.
pub const ICON_THEME_GROUP: &str = "Icon Theme";

const DEFAULT_THRESHOLD: i32 = 2;

/// A subdirectory whose group may still be open.
#[derive(Debug)]
struct SubdirDraft {
    name: String,
    size: Option<i32>,
    kind: SubdirType,
    min_size: Option<i32>,
    max_size: Option<i32>,
    threshold: i32,
    range: Option<(i32, i32)>,
}

impl SubdirDraft {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            size: None,
            kind: SubdirType::default(),
            min_size: None,
            max_size: None,
            threshold: DEFAULT_THRESHOLD,
            range: None,
        }
    }

    /// Compute the effective size range once the group closes.
    fn close(&mut self) -> Result<()> {
        let Some(size) = self.size else {
            return Err(Error::validation(format!(
                "directory '{}' has no Size",
                self.name
            )));
        };

        let range = match self.kind {
            SubdirType::Fixed => (size, size),
            SubdirType::Scalable => (self.min_size.unwrap_or(size), self.max_size.unwrap_or(size)),
            SubdirType::Threshold => (
                size.saturating_sub(self.threshold),
                size.saturating_add(self.threshold),
            ),
        };
        self.range = Some(range);
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str, line: usize) -> Result<()> {
        match key {
            "Size" => self.size = nonzero(parse_int(key, value, line)?),
            "Type" => {
                self.kind = SubdirType::from_key_value(value).ok_or_else(|| {
                    Error::grammar(format!("unknown directory Type '{value}'"), line)
                })?;
            }
            "MinSize" => self.min_size = nonzero(parse_int(key, value, line)?),
            "MaxSize" => self.max_size = nonzero(parse_int(key, value, line)?),
            "Threshold" => self.threshold = parse_int(key, value, line)?,
            // Scale, Context, Applications, ...
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<IconThemeSubdir> {
        let (Some(size), Some((min_size, max_size))) = (self.size, self.range) else {
            return Err(Error::validation(format!(
                "directory '{}' was never closed",
                self.name
            )));
        };

        Ok(IconThemeSubdir {
            name: self.name,
            size,
            kind: self.kind,
            min_size,
            max_size,
            threshold: self.threshold,
        })
    }
}

/// Parse an integer key value.
///
/// Empty values read as zero. An optional sign followed by decimal digits is
/// accepted, negative numbers included; anything after the digits is rejected.
/// Values outside the `i32` range clamp to its bounds.
fn parse_int(key: &str, value: &str, line: usize) -> Result<i32> {
    if value.is_empty() {
        return Ok(0);
    }
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::grammar(
            format!("invalid integer '{value}' for {key}"),
            line,
        ));
    }

    let clamped = match value.parse::<i64>() {
        Ok(n) => n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)),
        Err(_) if value.starts_with('-') => i64::from(i32::MIN),
        Err(_) => i64::from(i32::MAX),
    };
    Ok(i32::try_from(clamped).unwrap_or_default())
}

/// Zero means the key is unset.
fn nonzero(value: i32) -> Option<i32> {
    (value != 0).then_some(value)
}

/// Accumulates one icon theme from a stream of [`EntryEvent`]s.
///
/// Any error returned by [`apply`](Self::apply) means the theme is invalid;
/// the builder should be dropped.
///
/// # Example
///
/// ```
/// use horizon_lattice_icons::entry::EntryParser;
/// use horizon_lattice_icons::theme::ThemeBuilder;
///
/// let text = "[Icon Theme]\nName=Demo\nComment=Demo icons\nDirectories=48x48\n\n[48x48]\nSize=48\n";
/// let mut builder = ThemeBuilder::new();
/// for event in EntryParser::new(text) {
///     builder.apply(event?)?;
/// }
/// let theme = builder.finish("demo")?;
/// assert_eq!(theme.subdirs()[0].min_size(), 46);
/// # Ok::<(), horizon_lattice_icons::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    started: bool,
    name: Option<String>,
    comment: Option<String>,
    inherits: Vec<String>,
    directories: Vec<String>,
    subdirs: Vec<SubdirDraft>,
}

impl ThemeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one event.
    pub fn apply(&mut self, event: EntryEvent<'_>) -> Result<()> {
        match event {
            EntryEvent::GroupStart(group) => self.start_group(group),
            EntryEvent::GroupEnd(group) => self.end_group(group),
            EntryEvent::Entry {
                group: None, line, ..
            } => Err(Error::grammar("entry outside of any group", line)),
            EntryEvent::Entry {
                group: Some(group),
                key,
                value,
                line,
            } => self.entry(group, key, value, line),
        }
    }

    /// Produce the theme, recording `dir` as its folder name.
    pub fn finish(self, dir: impl Into<String>) -> Result<IconTheme> {
        if !self.started {
            return Err(Error::validation("file has no groups"));
        }
        let (Some(name), Some(comment)) = (self.name, self.comment) else {
            return Err(Error::validation("theme is missing Name or Comment"));
        };
        if self.directories.is_empty() {
            return Err(Error::validation("theme has no Directories"));
        }

        Ok(IconTheme {
            name,
            comment,
            inherits: self.inherits,
            directories: self.directories,
            subdirs: self
                .subdirs
                .into_iter()
                .map(SubdirDraft::finish)
                .collect::<Result<_>>()?,
            dir: dir.into(),
        })
    }

    fn start_group(&mut self, group: &str) -> Result<()> {
        if !self.started {
            if group != ICON_THEME_GROUP {
                return Err(Error::validation(format!(
                    "first group must be [{ICON_THEME_GROUP}], found [{group}]"
                )));
            }
            self.started = true;
        }

        if self.directories.iter().any(|d| d == group)
            && !self.subdirs.iter().any(|s| s.name == group)
        {
            self.subdirs.push(SubdirDraft::new(group));
        }
        Ok(())
    }

    fn end_group(&mut self, group: &str) -> Result<()> {
        if group == ICON_THEME_GROUP {
            if self.name.is_none() || self.comment.is_none() || self.directories.is_empty() {
                return Err(Error::validation(format!(
                    "[{ICON_THEME_GROUP}] requires Name, Comment and Directories"
                )));
            }
            return Ok(());
        }

        match self.subdirs.last_mut() {
            Some(subdir) if subdir.name == group => subdir.close(),
            _ => Ok(()),
        }
    }

    fn entry(&mut self, group: &str, key: &str, value: &str, line: usize) -> Result<()> {
        if group == ICON_THEME_GROUP {
            match key {
                "Name" => self.name = Some(value.to_string()),
                "Comment" => self.comment = Some(value.to_string()),
                // "Inherists" is a historical misspelling still found in the wild.
                "Inherits" | "Inherists" => self.inherits = split_list(value),
                "Directories" => self.directories = split_list(value),
                // ScaledDirectories, Hidden, Example
                _ => {}
            }
            return Ok(());
        }

        match self.subdirs.last_mut() {
            Some(subdir) if subdir.name == group => subdir.apply(key, value, line),
            _ => Ok(()),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !items.iter().any(|i| i == item) {
            items.push(item.to_string());
        }
    }
    items
}

impl IconTheme {
    /// Parse the text of an `index.theme` file.
    ///
    /// `dir` is the name of the folder the file was found in.
    pub fn parse(text: &str, dir: impl Into<String>) -> Result<Self> {
        Self::from_events(EntryParser::new(text), dir)
    }

    /// Build a theme from a sequence of parse results, stopping at the first error.
    pub fn from_events<'a, I>(events: I, dir: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = Result<EntryEvent<'a>>>,
    {
        let mut builder = ThemeBuilder::new();
        for event in events {
            builder.apply(event?)?;
        }
        builder.finish(dir)
    }
}
