use courier_core::config::AppConfig;
use courier_core::paginate;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageOutput {
    pub items: Vec<String>,
    pub next_offset: usize,
    pub total: usize,
    pub has_more: bool,
}

pub fn page_items(items: &[String], page_size: usize, from: usize) -> Result<PageOutput, CliError> {
    let mut page = Vec::new();
    let next_offset = paginate(items, &mut page, page_size, from)?;
    Ok(PageOutput {
        items: page,
        next_offset,
        total: items.len(),
        has_more: next_offset < items.len(),
    })
}

pub fn run_paginate(
    items: &[String],
    page_size: Option<usize>,
    from: usize,
    as_json: bool,
    config: &AppConfig,
) -> Result<(), CliError> {
    let output = page_items(items, page_size.unwrap_or(config.page_size), from)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for item in &output.items {
        println!("{item}");
    }
    if output.has_more {
        println!(
            "-- {} of {} shown, continue with --from {}",
            output.next_offset, output.total, output.next_offset
        );
    }
    Ok(())
}
