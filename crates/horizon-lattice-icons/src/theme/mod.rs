//! Icon theme records and the `index.theme` reader.
//!
//! A theme is read in two phases: [`EntryParser`](crate::entry::EntryParser)
//! checks the file grammar and emits events, and [`ThemeBuilder`] folds them
//! into an [`IconTheme`], validating required keys and deriving each
//! subdirectory's effective size range:
//!
//! | Type        | Range                                   |
//! |-------------|-----------------------------------------|
//! | `Fixed`     | `Size..=Size`                           |
//! | `Scalable`  | `MinSize..=MaxSize`, each defaulting to `Size` |
//! | `Threshold` | `Size - Threshold..=Size + Threshold`   |

mod builder;
mod types;

pub use builder::{ICON_THEME_GROUP, ThemeBuilder};
pub use types::{IconTheme, IconThemeSubdir, SubdirType};
