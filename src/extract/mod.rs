pub mod html;
pub mod text;


/// Result of extracting one fetched page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Normalized page title (may be empty)
    pub title: String,

    /// Normalized body text
    pub content: String,

    /// Raw href values of anchors, in page order
    pub links: Vec<String>,
}

impl ExtractedPage {
    /// Creates a new extraction result
    pub fn new(title: String, content: String, links: Vec<String>) -> Self {
        Self {
            title,
            content,
            links,
        }
    }
}

/// Extract title, content and links from a fetched HTML page.
///
/// The URL is only used for the title fallback when the page has no
/// usable `<title>` element.
pub fn extract(markup: &str, url: &str) -> ExtractedPage {
    html::parse(markup, url)
}
