//! Freedesktop icon theme support for Horizon Lattice.
//!
//! This crate reads icon themes laid out according to the freedesktop icon
//! theme specification and resolves icon names to files:
//!
//! - **Entry grammar**: A strict reader for `index.theme` files
//! - **Theme records**: Subdirectories with derived size ranges
//! - **Registry**: Every valid theme found under the base directories
//! - **Resolution**: Exact size match, closest size match, inheritance, then
//!   plain directories
//!
//! Per-pixel scaling (`Scale`, `ScaledDirectories`) and the `Hidden` and
//! `Example` keys are not interpreted. Results are not cached.
//!
//! # Example
//!
//! ```no_run
//! use horizon_lattice_icons::prelude::*;
//!
//! let config = IconSearchConfig::new();
//! let registry = ThemeRegistry::load(&config);
//! let resolver = IconResolver::new(&registry, &config);
//!
//! match resolver.find_icon("network-wireless", 24, Some("Adwaita")) {
//!     Some(icon) => println!("{}", icon.path.display()),
//!     None => println!("no icon found"),
//! }
//! ```

pub mod config;
pub mod entry;
pub mod fs;
pub mod loader;
pub mod resolver;
pub mod theme;

mod error;

pub use config::IconSearchConfig;
pub use error::{Error, Result};
pub use fs::{IconFilesystem, StdFilesystem};
pub use loader::ThemeRegistry;
pub use resolver::{IconMatch, IconResolver, find_icon_in_dir};
pub use theme::{IconTheme, IconThemeSubdir, SubdirType};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::IconSearchConfig;
    pub use crate::fs::{IconFilesystem, StdFilesystem};
    pub use crate::loader::ThemeRegistry;
    pub use crate::resolver::{IconMatch, IconResolver};
    pub use crate::theme::{IconTheme, IconThemeSubdir, SubdirType};
}
