use crate::linkify::detect_urls;
use std::fmt;

/// A run of slide text, either plain or a detected link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Link { text: String, href: String },
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Link { text, .. } => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Fragment::Link { .. })
    }
}

/// One visual line of a slide. Lines are separated by soft breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLine {
    fragments: Vec<Fragment>,
}

impl SlideLine {
    pub fn plain(text: &str) -> Self {
        let fragments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::Text(text.to_string())]
        };
        Self { fragments }
    }

    pub fn linkified(text: &str) -> Self {
        let mut fragments = Vec::new();
        let mut cursor = 0;
        for m in detect_urls(text) {
            if m.start > cursor {
                fragments.push(Fragment::Text(text[cursor..m.start].to_string()));
            }
            fragments.push(Fragment::Link {
                href: m.href(),
                text: m.url,
            });
            cursor = m.end;
        }
        if cursor < text.len() {
            fragments.push(Fragment::Text(text[cursor..].to_string()));
        }
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn text(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }
}

/// A single slide: ordered lines produced from one paragraph of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    lines: Vec<SlideLine>,
}

impl Slide {
    pub fn new(lines: Vec<SlideLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[SlideLine] {
        &self.lines
    }

    /// Editable form of the slide: soft breaks become `\n` again.
    pub fn source(&self) -> String {
        self.lines
            .iter()
            .map(SlideLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Link targets in reading order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .flat_map(|line| line.fragments.iter())
            .filter_map(|f| match f {
                Fragment::Link { href, .. } => Some(href.as_str()),
                Fragment::Text(_) => None,
            })
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source())
    }
}

impl PartialEq<str> for Slide {
    fn eq(&self, other: &str) -> bool {
        self.source() == other
    }
}

impl PartialEq<&str> for Slide {
    fn eq(&self, other: &&str) -> bool {
        self.source() == *other
    }
}
