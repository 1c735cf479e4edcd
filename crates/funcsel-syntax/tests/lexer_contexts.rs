//! Context classification over adversarial JavaScript input.

use funcsel_syntax::context::{classify, ContextLabel};
use text_size::TextSize;

fn label_at(source: &str, cursor: &str) -> ContextLabel {
    let offset = source.find(cursor).expect("cursor") as u32;
    classify(source).label_at(TextSize::from(offset))
}

#[test]
fn test_braces_in_every_literal_kind() {
    let source = "a = \"{\"; b = '}'; c = `{`; d = /{/; e = 1; // {\nf = 2; /* } */";
    assert_eq!(label_at(source, "\"{\""), ContextLabel::String);
    assert_eq!(label_at(source, "'}'"), ContextLabel::String);
    assert_eq!(label_at(source, "`{`"), ContextLabel::String);
    assert_eq!(label_at(source, "/{/"), ContextLabel::Regex);
    assert_eq!(label_at(source, "// {"), ContextLabel::LineComment);
    assert_eq!(label_at(source, "/* } */"), ContextLabel::BlockComment);
    assert_eq!(label_at(source, "e = 1"), ContextLabel::Code);
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    let source = r#"var s = "a\"b"; x();"#;
    assert_eq!(label_at(source, "b\""), ContextLabel::String);
    assert_eq!(label_at(source, "x()"), ContextLabel::Code);
}

#[test]
fn test_quote_styles_do_not_mix() {
    // The double quote inside single quotes must not close anything.
    let source = r#"var s = '"'; done();"#;
    assert_eq!(label_at(source, "done"), ContextLabel::Code);
}

#[test]
fn test_division_stays_code() {
    let source = "var rate = total / count; next();";
    assert_eq!(label_at(source, "/ count"), ContextLabel::Code);
    assert_eq!(label_at(source, "next"), ContextLabel::Code);
}

#[test]
fn test_regex_after_operators_and_delimiters() {
    for source in [
        "x = /a}/;",
        "f(/a}/);",
        "xs = [/a}/];",
        "x = 1 + /a}/.length;",
        "return /a}/;",
    ] {
        assert_eq!(label_at(source, "/a}/"), ContextLabel::Regex, "{source}");
    }
}

#[test]
fn test_division_after_closing_paren() {
    let source = "x = (a + b) / 2; y();";
    assert_eq!(label_at(source, "/ 2"), ContextLabel::Code);
}

#[test]
fn test_escaped_slash_in_regex() {
    let source = r"m = /a\/b}/; tail();";
    assert_eq!(label_at(source, "b}/"), ContextLabel::Regex);
    assert_eq!(label_at(source, "tail"), ContextLabel::Code);
}

#[test]
fn test_unterminated_string_excludes_rest() {
    let source = "var s = \"open { and } never closed";
    let map = classify(source);
    assert_eq!(
        map.label_at(TextSize::from(source.len() as u32 - 1)),
        ContextLabel::String
    );
}

#[test]
fn test_unterminated_regex_excludes_rest() {
    let source = "m = /never { closed";
    let map = classify(source);
    assert_eq!(
        map.label_at(TextSize::from(source.len() as u32 - 1)),
        ContextLabel::Regex
    );
}

#[test]
fn test_line_comment_ends_at_newline() {
    let source = "// only this line\nactive();";
    assert_eq!(label_at(source, "active"), ContextLabel::Code);
}

#[test]
fn test_spans_partition_the_document() {
    let source = "function f() { return \"}\" + /}/ /* } */; } // end";
    let map = classify(source);
    let mut expected = TextSize::from(0);
    for span in map.spans() {
        assert_eq!(span.range.start(), expected);
        assert!(!span.range.is_empty());
        expected = span.range.end();
    }
    assert_eq!(usize::from(expected), source.len());
    // Adjacent spans never share a label.
    for pair in map.spans().windows(2) {
        assert_ne!(pair[0].label, pair[1].label);
    }
}
