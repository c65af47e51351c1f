//! Share links: the slide deck travels in a single `slides` query parameter.

use crate::slide::Slide;
use crate::splitter::join_slides;

pub const SLIDES_PARAM: &str = "slides";

/// A location split into its parts. Only what share links need.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Location<'a> {
    base: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Location<'a> {
    fn parse(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (rest, None),
        };
        Self { base, query, fragment }
    }

    fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.query
            .unwrap_or("")
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
    }
}

/// Decode a query component. `+` is a space.
fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            tracing::warn!("Ignoring malformed query component: {e}");
            None
        }
    }
}

/// The slide deck as the percent-encoded value of the `slides` parameter.
pub fn encode_slides(slides: &[Slide]) -> String {
    urlencoding::encode(&join_slides(slides)).into_owned()
}

/// Build `<base>?slides=<encoded deck>`. Any query or fragment on `base` is
/// replaced.
pub fn build_share_link(base: &str, slides: &[Slide]) -> String {
    let location = Location::parse(base);
    format!("{}?{SLIDES_PARAM}={}", location.base, encode_slides(slides))
}

/// Decoded value of the first `slides` parameter in `url`, if any.
pub fn slides_param(url: &str) -> Option<String> {
    Location::parse(url)
        .pairs()
        .find(|(key, _)| decode_component(key).as_deref() == Some(SLIDES_PARAM))
        .and_then(|(_, value)| decode_component(value))
}

/// `url` without any `slides` parameter. Other parameters and the fragment
/// are kept.
pub fn strip_slides_param(url: &str) -> String {
    let location = Location::parse(url);
    let kept: Vec<String> = location
        .pairs()
        .filter(|(key, _)| decode_component(key).as_deref() != Some(SLIDES_PARAM))
        .map(|(key, value)| {
            if value.is_empty() {
                key.to_string()
            } else {
                format!("{key}={value}")
            }
        })
        .collect();

    let mut out = location.base.to_string();
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(fragment) = location.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::{split_slides, SplitOptions};

    fn slides(raw: &str) -> Vec<Slide> {
        split_slides(raw, SplitOptions::default()).unwrap()
    }

    #[test]
    fn test_build_share_link() {
        let link = build_share_link("https://text2slide.app/", &slides("Hello\n\nWorld"));
        assert_eq!(link, "https://text2slide.app/?slides=Hello%0A%0AWorld");
    }

    #[test]
    fn test_build_replaces_existing_query() {
        let link = build_share_link("https://x.dev/deck?slides=old#top", &slides("new"));
        assert_eq!(link, "https://x.dev/deck?slides=new");
    }

    #[test]
    fn test_link_round_trip() {
        let deck = slides("Hi & bye\n\n100% sure?\nyes = no\n\nhttps://example.com/a?b=c");
        let link = build_share_link("https://text2slide.app/", &deck);
        let decoded = slides_param(&link).unwrap();
        assert_eq!(slides(&decoded), deck);
    }

    #[test]
    fn test_slides_param_plus_is_space() {
        assert_eq!(slides_param("https://a/?slides=a+b").as_deref(), Some("a b"));
    }

    #[test]
    fn test_slides_param_missing() {
        assert_eq!(slides_param("https://a/"), None);
        assert_eq!(slides_param("https://a/?other=1"), None);
        assert_eq!(slides_param("https://a/#slides=1"), None);
    }

    #[test]
    fn test_slides_param_invalid_utf8_is_ignored() {
        assert_eq!(slides_param("https://a/?slides=%FF%FE"), None);
    }

    #[test]
    fn test_strip_slides_param() {
        assert_eq!(strip_slides_param("https://a/?slides=x"), "https://a/");
        assert_eq!(
            strip_slides_param("https://a/p?lang=en&slides=x&dark#s2"),
            "https://a/p?lang=en&dark#s2"
        );
        assert_eq!(strip_slides_param("https://a/"), "https://a/");
    }
}
