use crate::model::Category;

/// Parses raw completion text into a category at the provider boundary.
/// Completion APIs pad generations with newlines, so those are stripped
/// before matching; a reply that is not exactly one of the three letters is
/// kept whole under `Unrecognized`.
pub fn classify(raw: &str) -> Category {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    match cleaned.trim() {
        "A" => Category::A,
        "B" => Category::B,
        "C" => Category::C,
        other => Category::Unrecognized(other.to_string()),
    }
}
