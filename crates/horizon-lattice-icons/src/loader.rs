//! Theme discovery and the theme registry.
//!
//! Every folder directly below a base directory may be a theme. Its
//! `index.theme` is parsed; folders without one, or whose index is invalid,
//! contribute nothing.
//!
//! Index files are not required to be UTF-8. Invalid sequences are replaced
//! with U+FFFD before parsing, which only ever affects values.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::IconSearchConfig;
use crate::fs::{IconFilesystem, StdFilesystem};
use crate::theme::IconTheme;
use crate::{Error, Result};

/// File name of a theme's index.
pub const INDEX_FILE: &str = "index.theme";

/// Read and parse `<base>/<dir>/index.theme`.
pub fn read_theme_file(base: &Path, dir: &str, fs: &dyn IconFilesystem) -> Result<IconTheme> {
    let index_path = base.join(dir).join(INDEX_FILE);
    let bytes = fs.read(&index_path).map_err(|e| Error::io(&index_path, e))?;
    IconTheme::parse(&String::from_utf8_lossy(&bytes), dir)
}

/// Load every valid theme found directly under `base`.
pub fn load_themes_in_dir(base: &Path, fs: &dyn IconFilesystem) -> Vec<IconTheme> {
    let mut themes = Vec::new();

    for dir in fs.theme_dir_names(base) {
        match read_theme_file(base, &dir, fs) {
            Ok(theme) => themes.push(theme),
            // Not a theme folder.
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::debug!(
                    target: "horizon_lattice_icons::loader",
                    "Skipping theme '{}' in {}: {}",
                    dir,
                    base.display(),
                    e
                );
            }
        }
    }

    themes
}

/// All themes found across the configured base directories.
///
/// Built once and read-only afterwards; pass it by reference to an
/// [`IconResolver`](crate::IconResolver).
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    base_dirs: Vec<PathBuf>,
    themes: Vec<IconTheme>,
}

impl ThemeRegistry {
    /// Load themes from the base directories of `config`.
    pub fn load(config: &IconSearchConfig) -> Self {
        Self::load_with(config, &StdFilesystem)
    }

    /// Load themes through a custom filesystem.
    pub fn load_with(config: &IconSearchConfig, fs: &dyn IconFilesystem) -> Self {
        let base_dirs = config.search_paths().to_vec();
        let themes = base_dirs
            .iter()
            .flat_map(|base| load_themes_in_dir(base, fs))
            .collect();

        let registry = Self { base_dirs, themes };
        tracing::debug!(
            target: "horizon_lattice_icons::loader",
            "Loaded themes: {}",
            registry.theme_names().collect::<Vec<_>>().join(", ")
        );
        registry
    }

    /// Assemble a registry from already parsed themes.
    pub fn from_parts(base_dirs: Vec<PathBuf>, themes: Vec<IconTheme>) -> Self {
        Self { base_dirs, themes }
    }

    /// Base directories the themes were loaded from, in search order.
    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    /// Themes in load order.
    pub fn themes(&self) -> &[IconTheme] {
        &self.themes
    }

    /// First theme whose display name is exactly `name`.
    pub fn get(&self, name: &str) -> Option<&IconTheme> {
        self.themes.iter().find(|t| t.name() == name)
    }

    /// Display names of all themes, in load order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name())
    }

    /// Number of loaded themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no theme was loaded.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HICOLOR: &str = "[Icon Theme]\nName=Hicolor\nComment=Fallback icon theme\nDirectories=48x48/apps\n\n[48x48/apps]\nSize=48\nType=Threshold\n";

    fn write_theme(base: &Path, dir: &str, index: &str) {
        fs::create_dir_all(base.join(dir)).unwrap();
        fs::write(base.join(dir).join(INDEX_FILE), index).unwrap();
    }

    #[test]
    fn test_load_themes_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_theme(temp_dir.path(), "hicolor", HICOLOR);
        write_theme(temp_dir.path(), "broken", "[Icon Theme]\nName=Broken\n[Foo\n");
        fs::create_dir(temp_dir.path().join("no-index")).unwrap();
        write_theme(temp_dir.path(), ".hidden", HICOLOR);

        let themes = load_themes_in_dir(temp_dir.path(), &StdFilesystem);
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name(), "Hicolor");
        assert_eq!(themes[0].dir(), "hicolor");
    }

    #[test]
    fn test_non_utf8_index() {
        let temp_dir = TempDir::new().unwrap();
        let index = b"[Icon Theme]\nName=Latin\nComment=Th\xe8me\nDirectories=16x16\n[16x16]\nSize=16\n";
        fs::create_dir(temp_dir.path().join("latin")).unwrap();
        fs::write(temp_dir.path().join("latin").join(INDEX_FILE), index).unwrap();

        let themes = load_themes_in_dir(temp_dir.path(), &StdFilesystem);
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name(), "Latin");
        assert_eq!(themes[0].comment(), "Th\u{FFFD}me");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_index_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the index fails with an error other than NotFound.
        fs::create_dir_all(temp_dir.path().join("odd").join(INDEX_FILE)).unwrap();
        write_theme(temp_dir.path(), "hicolor", HICOLOR);

        let err = read_theme_file(temp_dir.path(), "odd", &StdFilesystem).unwrap_err();
        assert!(matches!(&err, Error::Io { source, .. } if source.kind() != ErrorKind::NotFound));

        let themes = load_themes_in_dir(temp_dir.path(), &StdFilesystem);
        assert_eq!(themes.len(), 1);
    }

    #[test]
    fn test_read_theme_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_theme_file(temp_dir.path(), "nothing", &StdFilesystem).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_registry_across_base_dirs() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_theme(first.path(), "hicolor", HICOLOR);
        write_theme(
            second.path(),
            "adwaita",
            "[Icon Theme]\nName=Adwaita\nComment=GNOME\nInherits=Hicolor\nDirectories=16x16\n[16x16]\nSize=16\n",
        );

        let config = IconSearchConfig::with_paths(vec![
            first.path().to_path_buf(),
            first.path().join("missing"),
            second.path().to_path_buf(),
        ]);
        let registry = ThemeRegistry::load(&config);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.theme_names().collect::<Vec<_>>(), ["Hicolor", "Adwaita"]);
        assert_eq!(registry.get("Adwaita").unwrap().inherits(), ["Hicolor"]);
        assert!(registry.get("adwaita").is_none());
        assert_eq!(registry.base_dirs().len(), 3);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ThemeRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get("Hicolor").is_none());
    }
}
