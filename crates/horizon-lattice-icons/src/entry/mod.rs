//! Desktop-entry file grammar.
//!
//! Icon theme `index.theme` files use the freedesktop desktop entry layout:
//! `#` comments, `[Group]` headers and `Key=Value` lines. Values are taken
//! verbatim; escape sequences such as `\s` or `\,` are not decoded.

mod parser;

pub use parser::{EntryEvent, EntryParser, parse_entries};
