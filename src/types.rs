use std::fmt;
use std::ops::Range;

/// One `[text](url)` literal found in a scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence<'a> {
    /// Byte range of the whole literal in the scanned text.
    pub range: Range<usize>,
    pub literal: &'a str,
    pub text: &'a str,
    pub url: &'a str,
}

/// A footnote definition collected for one distinct URL.
#[derive(Clone, PartialEq, Eq)]
pub struct Footnote {
    /// 1-based, in order of first appearance.
    pub index: usize,
    /// The inline marker, e.g. `[^anchor1]`.
    pub tag: String,
    pub url: String,
}

impl Footnote {
    /// The tag without its `[^` and `]` wrapping, e.g. `anchor1`.
    pub fn label(&self) -> &str {
        self.tag
            .strip_prefix("[^")
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&self.tag)
    }
}

impl fmt::Debug for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Footnote({} -> {:?})", self.tag, self.url)
    }
}

impl fmt::Display for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    /// Empty when the input had no links, in which case `text` equals the input.
    pub footnotes: Vec<Footnote>,
}

impl Transformed {
    pub fn into_string(self) -> String {
        self.text
    }
}
