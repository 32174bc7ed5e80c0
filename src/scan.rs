use std::sync::LazyLock;

use regex::Regex;

use crate::types::LinkOccurrence;

// Lazy captures that stop at any line terminator (`\n`, `\r`, U+2028, U+2029), so a
// literal never spans lines.
static LINK_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\n\r\x{2028}\x{2029}]*?)\]\(([^\n\r\x{2028}\x{2029}]*?)\)")
        .expect("link literal pattern")
});

/// First `[text](url)` literal in `text`, if any.
pub fn find_link(text: &str) -> Option<LinkOccurrence<'_>> {
    links(text).next()
}

/// Successive link literals, each searched for after the end of the previous one.
pub fn links(text: &str) -> Links<'_> {
    Links { text, pos: 0 }
}

#[derive(Debug, Clone)]
pub struct Links<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = LinkOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = LINK_LITERAL.find(&self.text[self.pos..])?;
        let range = self.pos + m.start()..self.pos + m.end();
        // A literal is at least `[](` + `)`, so the cursor always moves forward.
        self.pos = range.end;
        let literal = &self.text[range.clone()];
        Some(LinkOccurrence {
            range,
            literal,
            text: extract_link_text(literal),
            url: extract_url(literal),
        })
    }
}

/// Content between the first `[` and the first `]`.
///
/// Brackets are not balanced: `[a]b](c)` yields `a`.
pub fn extract_link_text(literal: &str) -> &str {
    between(literal, '[', ']')
}

/// Content between the first `(` and the first `)`.
///
/// A `(` inside the link text counts: `[a(b](c)` yields `b](c`. When the first `)`
/// comes before the first `(`, the bounds swap: `[a)b](c)` yields `)b](`.
pub fn extract_url(literal: &str) -> &str {
    between(literal, '(', ')')
}

// Both delimiters are located independently; the slice runs between the lower and
// higher bound, whichever order they come in.
fn between(s: &str, open: char, close: char) -> &str {
    let (Some(open_at), Some(close_at)) = (s.find(open), s.find(close)) else {
        return "";
    };
    let start = open_at + open.len_utf8();
    if close_at < start {
        &s[close_at..start]
    } else {
        &s[start..close_at]
    }
}
