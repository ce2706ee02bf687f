//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use mdblocks_document::Block;
use serde::Serialize;

/// JSON output for `mdblocks get`.
#[derive(Serialize)]
pub struct JsonSection<'a> {
    /// The requested block path.
    pub path: &'a str,
    /// Extracted text.
    pub text: &'a str,
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints block texts separated by blank lines.
pub fn print_blocks<'a>(blocks: impl IntoIterator<Item = &'a Block>) {
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", block.text);
    }
}

/// Renders a table of block paths and body lengths.
pub fn blocks_table<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Path", "Length"]);
    for block in blocks {
        table.add_row(vec![
            Cell::new(&block.path),
            Cell::new(block.length).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
