//! Filesystem access used by theme loading and icon lookup.

use std::fs;
use std::path::Path;

/// The filesystem operations the loader and resolver depend on.
///
/// [`StdFilesystem`] is the real implementation; hosts can provide their own
/// (for sandboxed or virtual filesystems).
pub trait IconFilesystem {
    /// Names of the folders directly below `base`, excluding hidden ones.
    ///
    /// A missing or unreadable `base` yields an empty list.
    fn theme_dir_names(&self, base: &Path) -> Vec<String>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and can be opened for reading.
    ///
    /// There is no file-type check: a readable directory that happens to carry
    /// an icon file name counts as readable too.
    fn is_readable(&self, path: &Path) -> bool;

    /// Read a whole file as raw bytes.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// [`IconFilesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl IconFilesystem for StdFilesystem {
    fn theme_dir_names(&self, base: &Path) -> Vec<String> {
        let entries = match fs::read_dir(base) {
            Ok(e) => e,
            Err(_) => return Vec::new(),
        };

        entries
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_readable(&self, path: &Path) -> bool {
        fs::File::open(path).is_ok()
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<F: IconFilesystem + ?Sized> IconFilesystem for &F {
    fn theme_dir_names(&self, base: &Path) -> Vec<String> {
        (**self).theme_dir_names(base)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_readable(&self, path: &Path) -> bool {
        (**self).is_readable(path)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_theme_dir_names_skips_hidden() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("hicolor")).unwrap();
        fs::create_dir(temp_dir.path().join(".cache")).unwrap();

        let names = StdFilesystem.theme_dir_names(temp_dir.path());
        assert_eq!(names, ["hicolor"]);
    }

    #[test]
    fn test_missing_base() {
        let temp_dir = TempDir::new().unwrap();
        let names = StdFilesystem.theme_dir_names(&temp_dir.path().join("nope"));
        assert!(names.is_empty());
    }

    #[test]
    fn test_is_readable() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("icon.png");
        fs::write(&file, b"png").unwrap();

        assert!(StdFilesystem.is_readable(&file));
        assert!(!StdFilesystem.is_readable(&temp_dir.path().join("other.png")));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_with_icon_name_is_readable() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("folder.png");
        fs::create_dir(&dir).unwrap();

        assert!(StdFilesystem.is_readable(&dir));
    }

    #[test]
    fn test_read_keeps_raw_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("index.theme");
        fs::write(&file, b"Comment=Th\xe8me\n").unwrap();

        assert_eq!(StdFilesystem.read(&file).unwrap(), b"Comment=Th\xe8me\n");
    }
}
