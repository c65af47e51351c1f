//! Bare URL detection for slide text.

use regex::Regex;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| {
        Regex::new(
            r"(?x)
            (?:https?://)                  # scheme
            [^\s<>\[\]{}|\\^`\x00-\x1f]+
            |
            (?:www\.)                      # bare www. host
            [^\s<>\[\]{}|\\^`\x00-\x1f]+
            ",
        )
        .expect("literal URL pattern")
    })
}

/// A URL found in a line of slide text. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    pub url: String,
    pub start: usize,
    pub end: usize,
}

impl UrlMatch {
    /// Target of the link; `www.` hosts get an `https://` scheme.
    pub fn href(&self) -> String {
        if self.url.starts_with("www.") {
            format!("https://{}", self.url)
        } else {
            self.url.clone()
        }
    }
}

/// Find every bare URL in `text`, trimming trailing sentence punctuation.
pub fn detect_urls(text: &str) -> Vec<UrlMatch> {
    url_regex()
        .find_iter(text)
        .filter_map(|m| {
            let url = m
                .as_str()
                .trim_end_matches(|c| matches!(c, '.' | ',' | ')' | ';' | ':' | '!' | '?'));
            // "https://" followed only by punctuation is not a link
            if url.ends_with("://") || url == "www." {
                return None;
            }
            Some(UrlMatch {
                url: url.to_string(),
                start: m.start(),
                end: m.start() + url.len(),
            })
        })
        .collect()
}
