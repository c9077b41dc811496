use regex::Regex;
use std::sync::LazyLock;

// A number, an optional decimal part, and an optional unit word right after
// it ("2 cups", "1.5kg", "3"). Stripped wholesale before comparison.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)?(\s?[a-zA-Z]+)?").expect("quantity pattern"));

/// Split a free-text ingredients string into trimmed phrases.
///
/// Commas delimit phrases; a string without commas is a single one-phrase
/// list. Phrases that trim to nothing (trailing or doubled commas) are
/// dropped as noise rather than surfacing as stray items.
pub fn split_phrases(ingredients: &str) -> impl Iterator<Item = &str> {
    ingredients.split(',').map(str::trim).filter(|p| !p.is_empty())
}

/// Normalized form of an ingredient phrase, used only for deduplication,
/// classification, and sort order, never for display.
///
/// Quantity/unit runs are stripped, the rest lowercased, and a single
/// trailing "s" removed. The singularization is naive on purpose; irregular
/// plurals pass through unchanged.
pub fn normalize_phrase(phrase: &str) -> String {
    let stripped = QUANTITY_RE.replace_all(phrase, "");
    let lowered = stripped.trim().to_lowercase();
    lowered.strip_suffix('s').unwrap_or(&lowered).to_string()
}
