use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::extract::ExtractedPage;
use crate::extract::text::clean;

/// Container elements treated as non-content noise; their subtrees
/// contribute neither text nor links
const NOISE_ELEMENTS: [&str; 5] = ["nav", "header", "footer", "script", "style"];

/// Parses an HTML page into normalized title, content and raw links
pub fn parse(markup: &str, url: &str) -> ExtractedPage {
    let doc = Html::parse_document(markup);

    let main_selector = Selector::parse("main").unwrap();
    let body_selector = Selector::parse("body").unwrap();

    // Prefer a designated main-content region, fall back to the full body
    let region = doc
        .select(&main_selector)
        .next()
        .or_else(|| doc.select(&body_selector).next());

    let mut raw_content = String::new();
    if let Some(root) = region {
        collect_text(root, &mut raw_content);
    }
    let content = clean(&raw_content);

    let title = clean(&extract_title(&doc, url));

    let mut links = Vec::new();
    collect_links(doc.root_element(), &mut links);
    ::log::debug!("Extracted {} links from {}", links.len(), url);

    ExtractedPage::new(title, content, links)
}

/// Accumulates the text of an element's subtree, skipping noise containers
fn collect_text(element: ElementRef, out: &mut String) {
    if NOISE_ELEMENTS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(t) => {
                out.push_str(t);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Accumulates href values of anchors in page order, skipping noise containers
fn collect_links(element: ElementRef, out: &mut Vec<String>) {
    let value = element.value();
    if NOISE_ELEMENTS.contains(&value.name()) {
        return;
    }
    if value.name() == "a" {
        if let Some(href) = value.attr("href") {
            out.push(href.to_string());
        }
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_links(child_element, out);
        }
    }
}

/// Page title, falling back to the last non-empty URL path segment
fn extract_title(doc: &Html, url: &str) -> String {
    let title_selector = Selector::parse("title").unwrap();
    let from_tag = doc
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    if !from_tag.trim().is_empty() {
        return from_tag;
    }

    last_path_segment(url).unwrap_or_default()
}

/// Last non-empty path segment of a URL, if any
fn last_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(|segment| segment.to_string())
}
