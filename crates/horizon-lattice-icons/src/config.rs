//! Search configuration: base directories, file extensions and fallbacks.

use std::env;
use std::path::PathBuf;

/// Icon file extensions in priority order.
#[cfg(feature = "extended-formats")]
pub const DEFAULT_EXTENSIONS: &[&str] = &["svg", "png", "xpm"];

/// Icon file extensions in priority order.
#[cfg(not(feature = "extended-formats"))]
pub const DEFAULT_EXTENSIONS: &[&str] = &["png"];

/// Theme searched when the requested theme has no match.
pub const DEFAULT_FALLBACK_THEME: &str = "Hicolor";

/// Size range reported for icons found outside any theme.
pub const FLAT_ICON_RANGE: (i32, i32) = (1, 512);

/// Where and how icons are searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSearchConfig {
    search_paths: Vec<PathBuf>,
    extensions: Vec<String>,
    fallback_theme: String,
    flat_range: (i32, i32),
}

impl IconSearchConfig {
    /// Create a configuration with the default base directories.
    ///
    /// Only directories that currently exist are kept.
    pub fn new() -> Self {
        Self::with_paths(
            Self::default_search_paths()
                .into_iter()
                .filter(|p| p.is_dir())
                .collect(),
        )
    }

    /// Create a configuration with explicit base directories.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let mut config = Self {
            search_paths: Vec::with_capacity(paths.len()),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            fallback_theme: DEFAULT_FALLBACK_THEME.to_string(),
            flat_range: FLAT_ICON_RANGE,
        };
        for path in paths {
            config.add_search_path(path);
        }
        config
    }

    /// Append a base directory unless it is already present.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    /// Replace the extension priority list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the theme searched after the requested one.
    pub fn with_fallback_theme(mut self, name: impl Into<String>) -> Self {
        self.fallback_theme = name.into();
        self
    }

    /// Base directories, in search order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Extensions, highest priority first.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Name of the fallback theme.
    pub fn fallback_theme(&self) -> &str {
        &self.fallback_theme
    }

    /// Range reported for icons found in plain directories.
    pub fn flat_range(&self) -> (i32, i32) {
        self.flat_range
    }

    /// The standard base directories, whether or not they exist.
    ///
    /// Order: `~/.icons`, `$XDG_DATA_HOME/icons`, `/usr/share/pixmaps`, then
    /// `icons` under each `$XDG_DATA_DIRS` entry.
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let home = non_empty_var("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir);

        // Deprecated, still widely used.
        if let Some(home) = &home {
            paths.push(home.join(".icons"));
        }

        match non_empty_var("XDG_DATA_HOME") {
            Some(data_home) => paths.push(PathBuf::from(data_home).join("icons")),
            None => {
                if let Some(home) = &home {
                    paths.push(home.join(".local/share/icons"));
                }
            }
        }

        paths.push(PathBuf::from("/usr/share/pixmaps"));

        let data_dirs =
            non_empty_var("XDG_DATA_DIRS").unwrap_or_else(|| "/usr/local/share:/usr/share".into());
        for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            paths.push(PathBuf::from(dir).join("icons"));
        }

        paths
    }
}

impl Default for IconSearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
