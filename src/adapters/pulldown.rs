//! Read rewritten text back as CommonMark with footnotes enabled.

use pulldown_cmark::{Event, Options as PulldownOptions, Parser, Tag, TagEnd};

fn parser(input: &str) -> Parser<'_> {
    Parser::new_ext(input, PulldownOptions::ENABLE_FOOTNOTES)
}

pub fn parse_events(input: &str) -> Vec<Event<'static>> {
    parser(input).map(|e| e.into_static()).collect()
}

/// `(label, text)` for each footnote definition, in document order.
///
/// The text is the concatenated inline text of the definition body.
pub fn footnote_definitions(input: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut current: Option<(String, String)> = None;
    for event in parser(input) {
        match event {
            Event::Start(Tag::FootnoteDefinition(label)) => {
                current = Some((label.to_string(), String::new()));
            }
            Event::End(TagEnd::FootnoteDefinition) => {
                if let Some(def) = current.take() {
                    out.push(def);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, body)) = current.as_mut() {
                    body.push_str(&text);
                }
            }
            _ => {}
        }
    }
    out
}

/// Labels of inline footnote references, in document order.
pub fn footnote_references(input: &str) -> Vec<String> {
    parser(input)
        .filter_map(|e| match e {
            Event::FootnoteReference(label) => Some(label.to_string()),
            _ => None,
        })
        .collect()
}
