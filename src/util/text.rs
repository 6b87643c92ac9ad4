//! Pure text helpers for slugs and duplicate-detection keys.

/// Generates a URL-safe slug from a display name.
///
/// Lowercases and trims the input, drops every character that is not a word
/// character, whitespace, or hyphen, collapses whitespace runs into single
/// hyphens, and collapses hyphen runs into one. Leading and trailing hyphens
/// are stripped. Makes no uniqueness guarantee on its own; callers must check
/// collisions separately. An input that reduces to nothing yields the empty
/// string.
///
/// # Arguments
/// - `text` - The display name to derive a slug from
///
/// # Returns
/// - `String` - Slug containing only lowercase word characters and single hyphens
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
            continue;
        }
        if !c.is_ascii_alphanumeric() && c != '_' {
            continue;
        }
        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        slug.push(c);
    }

    slug
}

/// Normalizes a display name into its duplicate-detection key.
///
/// Lowercases the input and strips every character outside `[a-z0-9]`.
/// Pure, total, and idempotent: `normalize_name(normalize_name(x)) ==
/// normalize_name(x)`.
///
/// # Arguments
/// - `name` - The display name to normalize
///
/// # Returns
/// - `String` - The canonical comparison key
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
