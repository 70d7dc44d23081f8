//! Storage-key derivation.
//!
//! A guild's file name embeds both its display name and its stable id:
//! `<escaped name>_-_<id>.json`. The derivation is pure and total — any
//! guild name maps to exactly one file name. Because the display name is
//! part of the key, renaming a guild moves it to a fresh (empty) file and
//! leaves the old one behind.

use std::fmt::Write as _;

use huntboard_core::guild::GuildRef;

/// Bytes left unescaped besides ASCII alphanumerics.
const KEEP: &[u8] = b"@*_+-.";

/// Percent-encodes a guild name into a single safe path component.
///
/// ASCII alphanumerics and `@*_+-.` pass through; every other byte of the
/// UTF-8 encoding becomes `%XX`. In particular spaces and path separators
/// are escaped, so the result never nests directories.
#[must_use]
pub fn escape_component(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || KEEP.contains(&byte) {
            escaped.push(char::from(byte));
        } else {
            // Infallible for String targets.
            let _ = write!(escaped, "%{byte:02X}");
        }
    }
    escaped
}

/// The file name (without directory) storing the given guild's collection.
#[must_use]
pub fn score_file_name(guild: &GuildRef) -> String {
    format!("{}_-_{}.json", escape_component(&guild.name), guild.id)
}
