//! Icon lookup.
//!
//! This module provides the [`IconResolver`], which maps an icon name and a
//! pixel size to a file on disk using the themes of a [`ThemeRegistry`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_EXTENSIONS, FLAT_ICON_RANGE, IconSearchConfig};
use crate::fs::{IconFilesystem, StdFilesystem};
use crate::loader::ThemeRegistry;
use crate::theme::IconTheme;

/// A resolved icon file and the size range it is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMatch {
    /// Path to the icon file.
    pub path: PathBuf,
    /// Smallest size the icon is designed for.
    pub min_size: i32,
    /// Largest size the icon is designed for.
    pub max_size: i32,
}

/// Resolves icon names against a theme registry.
///
/// The resolver keeps no state between calls: the same arguments against the
/// same registry and filesystem always give the same answer.
///
/// # Example
///
/// ```no_run
/// use horizon_lattice_icons::{IconResolver, IconSearchConfig, ThemeRegistry};
///
/// let config = IconSearchConfig::new();
/// let registry = ThemeRegistry::load(&config);
/// let resolver = IconResolver::new(&registry, &config);
///
/// if let Some(icon) = resolver.find_icon("firefox", 48, Some("Adwaita")) {
///     println!("{} ({}..={})", icon.path.display(), icon.min_size, icon.max_size);
/// }
/// ```
#[derive(Debug)]
pub struct IconResolver<'a, F = StdFilesystem> {
    registry: &'a ThemeRegistry,
    config: &'a IconSearchConfig,
    fs: F,
}

impl<'a> IconResolver<'a> {
    /// Create a resolver over the real filesystem.
    pub fn new(registry: &'a ThemeRegistry, config: &'a IconSearchConfig) -> Self {
        Self::with_filesystem(registry, config, StdFilesystem)
    }
}

impl<'a, F: IconFilesystem> IconResolver<'a, F> {
    /// Create a resolver that checks files through `fs`.
    pub fn with_filesystem(registry: &'a ThemeRegistry, config: &'a IconSearchConfig, fs: F) -> Self {
        Self {
            registry,
            config,
            fs,
        }
    }

    /// The registry searched by this resolver.
    pub fn registry(&self) -> &ThemeRegistry {
        self.registry
    }

    /// Find an icon.
    ///
    /// Searches `theme` (when given), then the fallback theme, then every
    /// base directory as a plain directory of icons.
    pub fn find_icon(&self, name: &str, size: i32, theme: Option<&str>) -> Option<IconMatch> {
        let fallback = self.config.fallback_theme();

        theme
            .and_then(|theme| self.find_icon_with_theme(name, size, theme))
            .or_else(|| {
                if theme == Some(fallback) {
                    None
                } else {
                    self.find_icon_with_theme(name, size, fallback)
                }
            })
            .or_else(|| self.find_fallback_icon(name))
    }

    /// Find an icon in the theme named `theme_name` or the themes it inherits from.
    ///
    /// Returns `None` immediately when no theme has that name.
    pub fn find_icon_with_theme(&self, name: &str, size: i32, theme_name: &str) -> Option<IconMatch> {
        let mut visited = HashSet::new();
        self.search_theme(name, size, theme_name, &mut visited)
    }

    /// Find `name` directly inside `dir`, ignoring themes.
    ///
    /// A hit always reports the permissive flat range.
    pub fn find_icon_in_dir(&self, name: &str, dir: &Path) -> Option<IconMatch> {
        let path = self.find_file(dir, name)?;
        let (min_size, max_size) = self.config.flat_range();
        Some(IconMatch {
            path,
            min_size,
            max_size,
        })
    }

    fn find_fallback_icon(&self, name: &str) -> Option<IconMatch> {
        self.registry
            .base_dirs()
            .iter()
            .find_map(|base| self.find_icon_in_dir(name, base))
    }

    fn search_theme<'t>(
        &self,
        name: &str,
        size: i32,
        theme_name: &'t str,
        visited: &mut HashSet<&'t str>,
    ) -> Option<IconMatch>
    where
        'a: 't,
    {
        if !visited.insert(theme_name) {
            tracing::debug!(
                target: "horizon_lattice_icons::resolver",
                "Inheritance cycle through theme '{}'",
                theme_name
            );
            return None;
        }
        let theme = self.registry.get(theme_name)?;

        if let Some(found) = self
            .exact_match(theme, name, size)
            .or_else(|| self.closest_match(theme, name, size))
        {
            tracing::trace!(
                target: "horizon_lattice_icons::resolver",
                "Resolved '{}' at size {} in theme '{}': {}",
                name,
                size,
                theme_name,
                found.path.display()
            );
            return Some(found);
        }

        theme
            .inherits()
            .iter()
            .find_map(|parent| self.search_theme(name, size, parent, visited))
    }

    /// Base directories that contain the theme's folder.
    fn theme_roots<'b>(&'b self, theme: &'b IconTheme) -> impl Iterator<Item = PathBuf> {
        self.registry
            .base_dirs()
            .iter()
            .map(move |base| base.join(theme.dir()))
            .filter(move |root| self.fs.is_dir(root))
    }

    /// First subdirectory whose range contains `size`.
    ///
    /// Subdirectories are walked last-declared first, which tends to reach
    /// scalable and larger variants before small fixed ones.
    fn exact_match(&self, theme: &IconTheme, name: &str, size: i32) -> Option<IconMatch> {
        for root in self.theme_roots(theme) {
            for subdir in theme.subdirs().iter().rev().filter(|s| s.contains(size)) {
                if let Some(path) = self.find_file(&root.join(subdir.name()), name) {
                    return Some(IconMatch {
                        path,
                        min_size: subdir.min_size(),
                        max_size: subdir.max_size(),
                    });
                }
            }
        }
        None
    }

    /// Subdirectory with the smallest size distance that holds the icon.
    ///
    /// Ties keep the candidate found first.
    fn closest_match(&self, theme: &IconTheme, name: &str, size: i32) -> Option<IconMatch> {
        let mut best: Option<(u32, IconMatch)> = None;

        for root in self.theme_roots(theme) {
            for subdir in theme.subdirs().iter().rev() {
                let error = subdir.size_distance(size);
                if best.as_ref().is_some_and(|(smallest, _)| error >= *smallest) {
                    continue;
                }
                if let Some(path) = self.find_file(&root.join(subdir.name()), name) {
                    best = Some((
                        error,
                        IconMatch {
                            path,
                            min_size: subdir.min_size(),
                            max_size: subdir.max_size(),
                        },
                    ));
                }
            }
        }

        best.map(|(_, found)| found)
    }

    /// First readable `dir/name.<ext>` in extension priority order.
    fn find_file(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        self.config
            .extensions()
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|path| self.fs.is_readable(path))
    }
}

/// Find `name` directly inside `dir` with the default extensions.
///
/// Reports the range `[1, 512]` on success, since plain directories carry no
/// size information.
pub fn find_icon_in_dir(name: &str, dir: &Path) -> Option<IconMatch> {
    let path = DEFAULT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| StdFilesystem.is_readable(path))?;
    let (min_size, max_size) = FLAT_ICON_RANGE;
    Some(IconMatch {
        path,
        min_size,
        max_size,
    })
}
