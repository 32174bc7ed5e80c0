use linknotes::transform;

#[test]
fn empty_input_stays_empty() {
    assert_eq!(transform(""), "");
}

#[test]
fn text_without_links_is_untouched() {
    assert_eq!(transform("text"), "text");
    assert_eq!(
        transform("# Heading\n\n*emphasis* and (parens) and [brackets]"),
        "# Heading\n\n*emphasis* and (parens) and [brackets]"
    );
}

#[test]
fn rewrites_single_link() {
    assert_eq!(
        transform("[text link](url)"),
        "text link [^anchor1]\n\n[^anchor1]: url"
    );
}

#[test]
fn keeps_text_before_link() {
    assert_eq!(
        transform("irrelevant [text link](url)"),
        "irrelevant text link [^anchor1]\n\n[^anchor1]: url"
    );
}

#[test]
fn keeps_text_after_link() {
    assert_eq!(
        transform("[text link](url) irrelevant"),
        "text link [^anchor1] irrelevant\n\n[^anchor1]: url"
    );
}

#[test]
fn keeps_text_around_link() {
    assert_eq!(
        transform("irrelevant [text link](url) irrelevant"),
        "irrelevant text link [^anchor1] irrelevant\n\n[^anchor1]: url"
    );
}

#[test]
fn distinct_urls_get_sequential_anchors() {
    assert_eq!(
        transform("[text link](url) [text link2](url2)"),
        "text link [^anchor1] text link2 [^anchor2]\n\n[^anchor1]: url\n\n[^anchor2]: url2"
    );
}

#[test]
fn repeated_url_reuses_first_anchor() {
    assert_eq!(
        transform("[text link](url) irrelevant [text link2](url)"),
        "text link [^anchor1] irrelevant text link2 [^anchor1]\n\n[^anchor1]: url"
    );
}

#[test]
fn bare_parentheses_are_not_urls() {
    assert_eq!(
        transform("[text link](url) (irrelevant) [text link2](url)"),
        "text link [^anchor1] (irrelevant) text link2 [^anchor1]\n\n[^anchor1]: url"
    );
}

#[test]
fn reuse_after_new_url_keeps_original_numbering() {
    assert_eq!(
        transform("[a](x) [b](y) [c](x) [d](z)"),
        "a [^anchor1] b [^anchor2] c [^anchor1] d [^anchor3]\
         \n\n[^anchor1]: x\n\n[^anchor2]: y\n\n[^anchor3]: z"
    );
}

#[test]
fn malformed_syntax_passes_through() {
    for input in [
        "[unclosed(url)",
        "[text] (url)",
        "[text](url",
        "text](url)",
        "[a\nb](u)",
        "[a\rb](u)",
        "[a](u\u{2028}v)",
    ] {
        assert_eq!(transform(input), input);
    }
}

#[test]
fn links_across_lines_and_markdown() {
    assert_eq!(
        transform("# Title\n\n- [one](u1)\n- **[two](u2)**\n"),
        "# Title\n\n- one [^anchor1]\n- **two [^anchor2]**\n\n\n[^anchor1]: u1\n\n[^anchor2]: u2"
    );
}

#[test]
fn empty_text_and_url() {
    assert_eq!(
        transform("[](u) and [t]()"),
        " [^anchor1] and t [^anchor2]\n\n[^anchor1]: u\n\n[^anchor2]: "
    );
}

#[test]
fn unicode_text_keeps_byte_boundaries() {
    assert_eq!(
        transform("voir [là-bas](https://exemple.fr/é) « fin »"),
        "voir là-bas [^anchor1] « fin »\n\n[^anchor1]: https://exemple.fr/é"
    );
}

#[test]
fn stray_delimiters_inside_literal_use_first_match() {
    assert_eq!(
        transform("[a]b](c)"),
        "a [^anchor1]\n\n[^anchor1]: c"
    );
    assert_eq!(
        transform("[a)b](c)"),
        "a)b [^anchor1]\n\n[^anchor1]: )b]("
    );
}

#[test]
fn crlf_documents_keep_line_endings() {
    assert_eq!(
        transform("one\r\n[a](u)\r\ntwo"),
        "one\r\na [^anchor1]\r\ntwo\n\n[^anchor1]: u"
    );
}
