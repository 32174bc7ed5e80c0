use std::collections::HashMap;

use tracing::{debug, trace};

use crate::scan::links;
use crate::types::{Footnote, Transformed};

/// Rewrites `[text](url)` literals as `text [^anchorN]` and appends one footnote
/// definition per distinct URL.
///
/// Holds no per-call state, so one instance can serve any number of calls, from any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkFootnoteTransformer;

impl LinkFootnoteTransformer {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(&self, input: &str) -> String {
        self.transform_detailed(input).into_string()
    }

    /// Like [`transform`](Self::transform), also returning the footnotes in emission order.
    pub fn transform_detailed(&self, input: &str) -> Transformed {
        let mut anchors = AnchorRegistry::new();
        let mut out = String::with_capacity(input.len());
        let mut cursor = 0usize;
        let mut link_count = 0usize;

        for link in links(input) {
            out.push_str(&input[cursor..link.range.start]);
            out.push_str(link.text);
            out.push(' ');
            out.push_str(anchors.resolve(link.url));
            cursor = link.range.end;
            link_count += 1;
        }

        if link_count == 0 {
            return Transformed {
                text: input.to_string(),
                footnotes: Vec::new(),
            };
        }

        out.push_str(&input[cursor..]);
        let footnotes = anchors.into_footnotes();
        for footnote in &footnotes {
            out.push_str("\n\n");
            out.push_str(&footnote.tag);
            out.push_str(": ");
            out.push_str(&footnote.url);
        }

        debug!(
            links = link_count,
            footnotes = footnotes.len(),
            "rewrote links as footnote anchors"
        );
        Transformed {
            text: out,
            footnotes,
        }
    }
}

pub fn transform(input: &str) -> String {
    LinkFootnoteTransformer.transform(input)
}

const ANCHOR_STEM: &str = "anchor";

/// URL to anchor assignments for a single call. Dropped when the call returns.
#[derive(Debug)]
struct AnchorRegistry {
    // url -> slot in `footnotes`
    by_url: HashMap<String, usize>,
    footnotes: Vec<Footnote>,
}

impl AnchorRegistry {
    fn new() -> Self {
        Self {
            by_url: HashMap::new(),
            footnotes: Vec::new(),
        }
    }

    /// Tag for `url`, allocating the next index on first sight.
    fn resolve(&mut self, url: &str) -> &str {
        if let Some(&slot) = self.by_url.get(url) {
            let tag = &self.footnotes[slot].tag;
            trace!(url, tag = tag.as_str(), "reusing anchor");
            return tag;
        }

        let slot = self.footnotes.len();
        let index = slot + 1;
        let tag = format!("[^{ANCHOR_STEM}{index}]");
        trace!(url, tag = tag.as_str(), "allocated anchor");
        self.by_url.insert(url.to_string(), slot);
        self.footnotes.push(Footnote {
            index,
            tag,
            url: url.to_string(),
        });
        &self.footnotes[slot].tag
    }

    fn into_footnotes(self) -> Vec<Footnote> {
        self.footnotes
    }
}
