//! Slug derivation for movie lookup URLs.

/// Derive the URL-safe slug for a movie from its title and release year.
///
/// Lowercases the title, drops everything outside `[a-z0-9 _-]`,
/// collapses spaces into single dashes, and appends the year:
/// `"Inception"` + `2010` becomes `"inception-2010"`.
///
/// The slug is derived state. It is recomputed on every title or year
/// change and is not guaranteed unique (two movies with the same title
/// and year collide; see DESIGN.md).
pub fn slugify(title: &str, year_of_release: i32) -> String {
    let cleaned: String = title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let dashed = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    format!("{dashed}-{year_of_release}")
}
