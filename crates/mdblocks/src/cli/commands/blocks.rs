//! Implementation of `mdblocks blocks`.

use std::{path::Path, process::ExitCode};

use mdblocks_document::{ParseOutput, parse_file};

use crate::cli::{
    args::BlocksCommand,
    context::CommandContext,
    output::{blocks_table, print_blocks, print_json},
};

/// Splits a file into blocks and prints the ones long enough to keep.
pub fn run(ctx: &CommandContext, cmd: &BlocksCommand) -> ExitCode {
    let parser = ctx.parser(&cmd.parse);

    // `./notes/a.md` and `notes/a.md` address the same blocks.
    let file = Path::new(&cmd.file);
    let file = file.strip_prefix(".").unwrap_or(file);

    let output = match parse_file(file, &parser) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.log {
        for line in &output.log {
            eprintln!("{line}");
        }
    }

    let min_len = parser.min_len();
    if cmd.json {
        let kept = ParseOutput {
            blocks: output.blocks_with_min_len(min_len).cloned().collect(),
            log: output.log,
            file_path: output.file_path,
        };
        return print_json(&kept);
    }

    if cmd.list {
        println!("{}", blocks_table(output.blocks_with_min_len(min_len)));
    } else {
        print_blocks(output.blocks_with_min_len(min_len));
    }

    ExitCode::SUCCESS
}
