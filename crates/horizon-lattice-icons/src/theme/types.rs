//! Icon theme records.

/// Size class of a theme subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubdirType {
    /// Icons are usable at exactly their nominal size.
    Fixed,
    /// Icons can be scaled anywhere between `MinSize` and `MaxSize`.
    Scalable,
    /// Icons are usable within `Threshold` pixels of their nominal size.
    #[default]
    Threshold,
}

impl SubdirType {
    /// Parse the value of a `Type` key. Matching is case-sensitive.
    pub fn from_key_value(value: &str) -> Option<Self> {
        match value {
            "Fixed" => Some(Self::Fixed),
            "Scalable" => Some(Self::Scalable),
            "Threshold" => Some(Self::Threshold),
            _ => None,
        }
    }

    /// The `Type` key value for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Scalable => "Scalable",
            Self::Threshold => "Threshold",
        }
    }
}

/// A subdirectory of an icon theme with its effective size range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconThemeSubdir {
    pub(crate) name: String,
    pub(crate) size: i32,
    pub(crate) kind: SubdirType,
    pub(crate) min_size: i32,
    pub(crate) max_size: i32,
    pub(crate) threshold: i32,
}

impl IconThemeSubdir {
    /// Directory path relative to the theme folder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nominal icon size in pixels.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Size class.
    pub fn kind(&self) -> SubdirType {
        self.kind
    }

    /// Smallest usable size, inclusive.
    pub fn min_size(&self) -> i32 {
        self.min_size
    }

    /// Largest usable size, inclusive.
    pub fn max_size(&self) -> i32 {
        self.max_size
    }

    /// Threshold tolerance as declared (default 2).
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Whether `size` lies inside the effective range.
    ///
    /// Ranges whose minimum exceeds their maximum (for example from a negative
    /// `Threshold`) contain nothing.
    pub fn contains(&self, size: i32) -> bool {
        size >= self.min_size && size <= self.max_size
    }

    /// Distance from `size` to the effective range, zero when inside it.
    pub fn size_distance(&self, size: i32) -> u32 {
        let (size, min, max) = (i64::from(size), i64::from(self.min_size), i64::from(self.max_size));
        let distance = (size - max).max(0) + (min - size).max(0);
        u32::try_from(distance).unwrap_or(u32::MAX)
    }
}

/// A parsed icon theme.
///
/// Only fully valid themes exist as values of this type: they always carry a
/// name, a comment and a non-empty directory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTheme {
    pub(crate) name: String,
    pub(crate) comment: String,
    pub(crate) inherits: Vec<String>,
    pub(crate) directories: Vec<String>,
    pub(crate) subdirs: Vec<IconThemeSubdir>,
    pub(crate) dir: String,
}

impl IconTheme {
    /// Display name, used to look the theme up.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable description.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Parent themes in fallback order.
    pub fn inherits(&self) -> &[String] {
        &self.inherits
    }

    /// Subdirectory names from the `Directories` key, in declaration order.
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// Subdirectories that have a group in the index file, in file order.
    pub fn subdirs(&self) -> &[IconThemeSubdir] {
        &self.subdirs
    }

    /// Look up a subdirectory by name.
    pub fn subdir(&self, name: &str) -> Option<&IconThemeSubdir> {
        self.subdirs.iter().find(|s| s.name == name)
    }

    /// Name of the theme folder on disk.
    pub fn dir(&self) -> &str {
        &self.dir
    }
}
