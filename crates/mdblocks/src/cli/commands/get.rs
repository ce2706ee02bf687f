//! Implementation of `mdblocks get`.

use std::process::ExitCode;

use mdblocks_document::extract_from_file;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{JsonSection, print_json},
};

/// Prints the section a block path points to.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
    let options = ctx.extract_options(&cmd.extract);

    let text = match extract_from_file(&cmd.block_path, &ctx.cwd, &options) {
        Ok(Some(text)) => text,
        Ok(None) => {
            eprintln!("error: not found: {}", cmd.block_path);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&JsonSection {
            path: &cmd.block_path,
            text: &text,
        });
    }

    println!("{text}");
    ExitCode::SUCCESS
}
