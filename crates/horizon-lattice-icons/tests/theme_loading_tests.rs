//! Theme discovery and index parsing tests.

use std::fs;
use std::path::Path;

use horizon_lattice_icons::{IconSearchConfig, IconTheme, SubdirType, ThemeRegistry};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn write_theme(base: &Path, dir: &str, index: &str) {
    fs::create_dir_all(base.join(dir)).unwrap();
    fs::write(base.join(dir).join("index.theme"), index).unwrap();
}

fn minimal(kind: &str) -> String {
    format!(
        "[Icon Theme]\nName=Minimal\nComment=One directory\nDirectories=icons\n\n[icons]\nSize=48\n{kind}"
    )
}

#[test]
fn test_minimal_theme_per_type() {
    let fixed = IconTheme::parse(&minimal("Type=Fixed\nMinSize=1\nMaxSize=99\n"), "m").unwrap();
    let subdir = &fixed.subdirs()[0];
    assert_eq!(subdir.kind(), SubdirType::Fixed);
    assert_eq!((subdir.min_size(), subdir.max_size()), (48, 48));

    let scalable = IconTheme::parse(&minimal("Type=Scalable\n"), "m").unwrap();
    let subdir = &scalable.subdirs()[0];
    assert_eq!((subdir.min_size(), subdir.max_size()), (48, 48));

    let threshold = IconTheme::parse(&minimal(""), "m").unwrap();
    let subdir = &threshold.subdirs()[0];
    assert_eq!(subdir.kind(), SubdirType::Threshold);
    assert_eq!((subdir.min_size(), subdir.max_size()), (46, 50));
}

#[test]
fn test_registry_skips_malformed_files() {
    init_tracing();
    let base = TempDir::new().unwrap();

    write_theme(base.path(), "good", &minimal("Type=Fixed\n"));
    write_theme(
        base.path(),
        "bad-header",
        "[Icon Theme]\nName=Bad\nComment=Bad\nDirectories=icons\n[icons\nSize=48\n",
    );
    write_theme(
        base.path(),
        "bad-line",
        "[Icon Theme]\nNameFoo\nComment=Bad\nDirectories=icons\n",
    );
    write_theme(
        base.path(),
        "bad-size",
        "[Icon Theme]\nName=Bad\nComment=Bad\nDirectories=icons\n[icons]\nSize=48px\n",
    );
    write_theme(
        base.path(),
        "no-size",
        "[Icon Theme]\nName=Bad\nComment=Bad\nDirectories=icons\n[icons]\nType=Fixed\n",
    );
    write_theme(
        base.path(),
        "wrong-first-group",
        "[icons]\nSize=48\n[Icon Theme]\nName=Bad\nComment=Bad\nDirectories=icons\n",
    );

    let config = IconSearchConfig::with_paths(vec![base.path().to_path_buf()]);
    let registry = ThemeRegistry::load(&config);

    assert_eq!(registry.theme_names().collect::<Vec<_>>(), ["Minimal"]);
    assert_eq!(registry.get("Minimal").unwrap().dir(), "good");
}

#[test]
fn test_same_theme_in_two_base_dirs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_theme(first.path(), "minimal", &minimal(""));
    write_theme(second.path(), "minimal", &minimal("Type=Fixed\n"));

    let config = IconSearchConfig::with_paths(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let registry = ThemeRegistry::load(&config);

    // Both are kept; lookups by name see the first one.
    assert_eq!(registry.len(), 2);
    let theme = registry.get("Minimal").unwrap();
    assert_eq!(theme.subdirs()[0].kind(), SubdirType::Threshold);
}

#[test]
fn test_missing_base_dir_is_ignored() {
    let base = TempDir::new().unwrap();
    let config = IconSearchConfig::with_paths(vec![base.path().join("does-not-exist")]);
    let registry = ThemeRegistry::load(&config);
    assert!(registry.is_empty());
}

#[test]
fn test_latin1_comment_still_loads() {
    init_tracing();
    let base = TempDir::new().unwrap();
    fs::create_dir(base.path().join("latin")).unwrap();
    fs::write(
        base.path().join("latin").join("index.theme"),
        b"[Icon Theme]\nName=Latin\nComment=Th\xe8me\nDirectories=icons\n\n[icons]\nSize=48\n",
    )
    .unwrap();

    let config = IconSearchConfig::with_paths(vec![base.path().to_path_buf()]);
    let registry = ThemeRegistry::load(&config);

    assert_eq!(registry.len(), 1);
    assert!(registry.get("Latin").unwrap().comment().starts_with("Th"));
}

#[test]
fn test_signed_sizes_still_load() {
    let base = TempDir::new().unwrap();
    write_theme(base.path(), "negative-size", &minimal("").replace("Size=48", "Size=-16"));
    write_theme(
        base.path(),
        "negative-min",
        &minimal("Type=Scalable\nMinSize=-1\n").replace("Name=Minimal", "Name=NegativeMin"),
    );
    write_theme(
        base.path(),
        "negative-threshold",
        &minimal("Threshold=-1\n").replace("Name=Minimal", "Name=NegativeThreshold"),
    );

    let config = IconSearchConfig::with_paths(vec![base.path().to_path_buf()]);
    let registry = ThemeRegistry::load(&config);
    assert_eq!(registry.len(), 3);

    let subdir = &registry.get("NegativeMin").unwrap().subdirs()[0];
    assert_eq!((subdir.min_size(), subdir.max_size()), (-1, 48));
}
