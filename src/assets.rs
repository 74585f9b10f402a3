//! Text resources compiled into the binary.

use rust_embed::RustEmbed;

use crate::error::TableError;

/// Default message table, same format as a user-supplied lines file.
pub const POOKIE_LINES: &str = "pookie_lines.txt";

/// Descriptions shown next to history entries.
pub const HISTORY_LINES: &str = "history_lines.txt";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Read an embedded text file.
pub fn text(name: &'static str) -> Result<String, TableError> {
    let file = Assets::get(name).ok_or(TableError::MissingAsset(name))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}
