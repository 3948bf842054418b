//! Stored-filename derivation for uploaded images.
//!
//! Stored names are `{timestamp_ms}_{sanitized_original}`. The millisecond
//! prefix keeps concurrent uploads from clobbering each other without any
//! locking; two uploads of the same sanitized name within the same
//! millisecond could still collide (accepted, documented risk).

/// Fallback name when the client supplied no usable filename.
const FALLBACK_NAME: &str = "image";

/// Reduce an original filename to `[A-Za-z0-9._-]`, mapping every other
/// character to `_`. An empty input yields `"image"`.
pub fn sanitize_filename(original: &str) -> String {
    if original.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the stored filename for an upload written at `now_ms`
/// (milliseconds since the Unix epoch).
///
/// # Examples
///
/// ```
/// use schoolhub_core::naming::stored_filename;
///
/// assert_eq!(stored_filename(1700000000000, "campus photo.jpg"), "1700000000000_campus_photo.jpg");
/// assert_eq!(stored_filename(1700000000000, ""), "1700000000000_image");
/// ```
pub fn stored_filename(now_ms: i64, original: &str) -> String {
    format!("{now_ms}_{}", sanitize_filename(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize_filename("Photo_01.final-v2.png"), "Photo_01.final-v2.png");
    }

    #[test]
    fn replaces_spaces_and_separators() {
        assert_eq!(sanitize_filename("my campus photo.jpg"), "my_campus_photo.jpg");
        assert_eq!(sanitize_filename("a/b\\c.png"), "a_b_c.png");
    }

    #[test]
    fn replaces_non_ascii() {
        assert_eq!(sanitize_filename("école.png"), "_cole.png");
    }

    #[test]
    fn empty_name_falls_back() {
        assert_eq!(sanitize_filename(""), "image");
    }

    #[test]
    fn prefixes_timestamp() {
        assert_eq!(stored_filename(42, "a.png"), "42_a.png");
    }

    #[test]
    fn distinct_timestamps_never_collide() {
        assert_ne!(stored_filename(1, "a.png"), stored_filename(2, "a.png"));
    }
}
