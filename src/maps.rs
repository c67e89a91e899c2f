//! Map lessons: insert, update, delete and existence checks on a
//! name-to-prefix table.
//!
//! `HashMap` is not synchronised. These maps live and die inside one
//! function and are never handed to another thread.

use std::collections::HashMap;

pub const DEFAULT_PREFIX: &str = "Dude ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLookup {
    pub prefix: String,
    pub found: bool,
}

fn prefix_table() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Annica", "Ms "),
        ("Mitchel", "Mr "),
        ("Joline", "Mrs "),
        ("Jo", "Mr "),
    ])
}

/// Insert one by one, then look up. Unknown names give an empty prefix.
pub fn map_basic(name: &str) -> String {
    let mut prefixes: HashMap<&str, &str> = HashMap::new();
    prefixes.insert("Annica", "Ms ");
    prefixes.insert("Mitchel", "Mr ");
    prefixes.insert("Joline", "Mrs ");
    prefixes.insert("Jo", "Mr ");

    prefixes.get(name).copied().unwrap_or_default().to_string()
}

/// Insert and update share one call.
pub fn map_update(name: &str) -> String {
    let mut prefixes = prefix_table();
    prefixes.insert("Jo", "Mrs ");

    prefixes.get(name).copied().unwrap_or_default().to_string()
}

pub fn map_delete(name: &str) -> PrefixLookup {
    let mut prefixes = prefix_table();
    prefixes.remove("Jo");

    match prefixes.get(name) {
        Some(prefix) => PrefixLookup {
            prefix: prefix.to_string(),
            found: true,
        },
        None => PrefixLookup {
            prefix: DEFAULT_PREFIX.to_string(),
            found: false,
        },
    }
}
