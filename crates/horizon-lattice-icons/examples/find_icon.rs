//! Look up an icon from the command line.
//!
//! ```text
//! cargo run -p horizon-lattice-icons --example find_icon -- <name> [size] [theme]
//! ```

use std::process::ExitCode;

use horizon_lattice_icons::prelude::*;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(name) = args.next() else {
        eprintln!("usage: find_icon <name> [size] [theme]");
        return ExitCode::FAILURE;
    };
    let size = match args.next().map(|s| s.parse::<i32>()) {
        None => 48,
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            eprintln!("invalid size: {e}");
            return ExitCode::FAILURE;
        }
    };
    let theme = args.next();

    let config = IconSearchConfig::new();
    let registry = ThemeRegistry::load(&config);
    println!("Searching {} base directories, {} themes", config.search_paths().len(), registry.len());

    let resolver = IconResolver::new(&registry, &config);
    match resolver.find_icon(&name, size, theme.as_deref()) {
        Some(icon) => {
            println!("{} (sizes {}..={})", icon.path.display(), icon.min_size, icon.max_size);
            ExitCode::SUCCESS
        }
        None => {
            println!("no icon found for '{name}'");
            ExitCode::FAILURE
        }
    }
}
