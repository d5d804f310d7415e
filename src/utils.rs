//! Common utility functions shared across the codebase.

/// Normalizes path separators to forward slashes.
///
/// POT references must look the same regardless of the platform the
/// catalog was generated on.
///
/// # Examples
///
/// ```
/// use wp_pot::utils::normalize_path;
///
/// assert_eq!(normalize_path("test\\test.php"), "test/test.php");
/// assert_eq!(normalize_path("inc/admin/page.php"), "inc/admin/page.php");
/// ```
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Checks if a byte can appear inside a PHP identifier.
///
/// Bytes >= 0x80 are accepted so that identifiers with non-ASCII
/// characters are consumed as a whole.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Checks if a byte can start a PHP identifier.
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}
