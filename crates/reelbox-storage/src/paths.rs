//! Shared filename construction for stored thumbnails.
//!
//! Filename format: `{owner_id}.{ext}`. Extensions arrive in two shapes
//! depending on where they were resolved: MIME-table lookups produce a bare
//! extension (`png`), while callers carrying a ready-made suffix pass it with
//! the leading separator (`.png`). Both shapes yield the same filename.

use uuid::Uuid;

/// Build the stored filename for an owner's thumbnail.
///
/// A `.` is inserted between the owner id and the extension only when the
/// extension does not already start with one, so `png` and `.png` both
/// produce `{owner_id}.png` and no double separator can occur.
pub fn thumbnail_filename(owner_id: Uuid, ext: &str) -> String {
    if ext.starts_with('.') {
        format!("{}{}", owner_id, ext)
    } else {
        format!("{}.{}", owner_id, ext)
    }
}
