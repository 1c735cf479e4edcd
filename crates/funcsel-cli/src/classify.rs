//! The `classify` subcommand.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use funcsel_syntax::context::{classify, ContextLabel};

#[derive(Serialize)]
struct SpanOutput<'a> {
    start: u32,
    end: u32,
    label: &'static str,
    text: &'a str,
}

fn label_name(label: ContextLabel) -> &'static str {
    match label {
        ContextLabel::Code => "code",
        ContextLabel::String => "string",
        ContextLabel::LineComment => "line-comment",
        ContextLabel::BlockComment => "block-comment",
        ContextLabel::Regex => "regex",
    }
}

pub fn run_classify(file: &Path, json: bool) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let map = classify(&source);

    if json {
        let output: Vec<SpanOutput<'_>> = map
            .spans()
            .iter()
            .map(|span| SpanOutput {
                start: span.range.start().into(),
                end: span.range.end().into(),
                label: label_name(span.label),
                text: &source[usize::from(span.range.start())..usize::from(span.range.end())],
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for span in map.spans() {
            println!(
                "{:>6}..{:<6} {:<13} {:?}",
                u32::from(span.range.start()),
                u32::from(span.range.end()),
                label_name(span.label),
                &source[usize::from(span.range.start())..usize::from(span.range.end())]
            );
        }
    }
    Ok(())
}
