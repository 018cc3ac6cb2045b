//! File link extraction from HTML.
//!
//! Walks every `<a href>` in document order and keeps those whose href, as
//! written in the page, ends with the wanted extension. The match is a plain
//! case-sensitive suffix test: `report.BIN` does not match `.bin`, and neither
//! does `report.bin?v=2`.

use scraper::{Html, Selector};
use url::Url;

/// Returns absolute URLs for all anchors whose href ends with `extension`,
/// resolved against `base`. Order follows the document; duplicates are kept.
/// Without a base only hrefs that are already absolute survive.
pub fn parse_file_links(html: &str, extension: &str, base: Option<&Url>) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(h) if !h.is_empty() => h,
            _ => continue,
        };
        if !href.ends_with(extension) {
            continue;
        }
        match Url::options().base_url(base).parse(href) {
            Ok(u) => links.push(u.to_string()),
            Err(e) => tracing::debug!(href, error = %e, "skipping unresolvable href"),
        }
    }
    links
}
