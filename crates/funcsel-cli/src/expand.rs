//! The `expand` subcommand.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use funcsel_ide::{
    expand_selection_to_function, restore_last_selection, Database, DocumentSession, FileId,
    Region, SelectionHost, SourceDatabase,
};

use crate::selspec::SelectionSpec;

/// One-shot host: the "editor selection" is just a vector.
struct CliHost {
    regions: Vec<Region>,
}

impl SelectionHost for CliHost {
    fn active_regions(&self) -> Vec<Region> {
        self.regions.clone()
    }

    fn set_active_regions(&mut self, regions: Vec<Region>) {
        self.regions = regions;
    }
}

#[derive(Serialize)]
struct RegionOutput<'a> {
    start: u32,
    end: u32,
    reversed: bool,
    text: &'a str,
}

pub fn run_expand(
    file: &Path,
    selections: &[String],
    steps: u32,
    restore: u32,
    json: bool,
) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let regions = parse_selections(selections, &source)?;

    let mut db = Database::new();
    let file_id = FileId(0);
    db.set_source_text(file_id, source.clone());
    let mut session = DocumentSession::new(file_id);
    let mut host = CliHost { regions };

    for _ in 0..steps {
        expand_selection_to_function(&db, &mut session, &mut host);
    }
    for _ in 0..restore {
        restore_last_selection(&mut session, &mut host);
    }

    if json {
        let output: Vec<RegionOutput<'_>> = host
            .regions
            .iter()
            .map(|r| RegionOutput {
                start: r.start().into(),
                end: r.end().into(),
                reversed: r.is_reversed(),
                text: &source[usize::from(r.start())..usize::from(r.end())],
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for region in &host.regions {
            let text = &source[usize::from(region.start())..usize::from(region.end())];
            println!("{}..{}", u32::from(region.start()), u32::from(region.end()));
            println!("{text}");
        }
    }
    Ok(())
}

fn parse_selections(selections: &[String], source: &str) -> anyhow::Result<Vec<Region>> {
    let mut regions = Vec::with_capacity(selections.len());
    for spec in selections {
        let parsed: SelectionSpec = spec
            .parse()
            .with_context(|| format!("parsing --at {spec}"))?;
        let region = parsed.0;
        // Offsets past the end of the file are a host-side mistake; reject
        // them here so the core never sees them.
        anyhow::ensure!(
            usize::from(region.end()) <= source.len(),
            "--at {} is past the end of the file ({} bytes)",
            spec,
            source.len()
        );
        regions.push(region);
    }
    Ok(regions)
}
