/// Normalizes text by collapsing every run of whitespace (newlines
/// included) into a single space and trimming the ends.
///
/// Applied identically to titles and body content. Pure and idempotent.
pub fn clean(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
