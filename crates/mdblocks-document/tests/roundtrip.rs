//! Integration tests for mdblocks-document.
//!
//! Every block the parser emits must be retrievable again through its block path.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use mdblocks_document::{
    BlockParser, ExtractOptions, Extracted, ParseOptions, ParseOutput,
    classify::{CODE_INDENT, is_fence, is_heading},
    get_block_from_path,
};

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/guide.md");
    fs::read_to_string(path).unwrap()
}

fn parse(parser: &BlockParser) -> (String, ParseOutput) {
    let raw = fixture();
    let output = parser.parse(&raw, Some("guide.md"));
    (raw, output)
}

/// Extracted text with the code-line indent removed, comparable to a block body.
fn extract_plain(path: &str, raw: &str) -> String {
    let extracted = get_block_from_path(path, raw, &ExtractOptions::default())
        .unwrap_or_else(|| panic!("no section for {path}"));
    extracted
        .as_str()
        .split('\n')
        .map(|line| line.strip_prefix(CODE_INDENT).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn fixture_block_paths() {
    let (_, output) = parse(&BlockParser::default());
    let paths: Vec<&str> = output.blocks.iter().map(|b| b.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "guide.md",
            "guide.md#Install",
            "guide.md#Install#Linux",
            "guide.md#Install#Mac",
            "guide.md#Usage",
            "guide.md#Usage#Basics",
            "guide.md#Usage#Basics{1}",
            "guide.md#Install{1}",
            "guide.md#Install#Linux{1}",
            "guide.md#Build",
            "guide.md#FAQ",
        ]
    );
    assert!(output.log.is_empty());
}

#[test]
fn every_section_block_round_trips() {
    let (raw, output) = parse(&BlockParser::default());

    for block in output.blocks.iter().filter(|b| !b.heading.is_empty()) {
        let extracted = extract_plain(&block.path, &raw);
        assert_eq!(extracted, block.body(), "mismatch for {}", block.path);
    }
}

#[test]
fn code_sections_extract_indented() {
    let raw = fixture();
    let extracted = get_block_from_path("guide.md#Build", &raw, &ExtractOptions::default());
    assert_eq!(
        extracted.map(Extracted::into_string).as_deref(),
        Some("Compile from source:\n\t```sh\n\tcargo build --release\n```\nThen copy the binary.")
    );
}

#[test]
fn truncated_blocks_are_prefixes_of_their_sections() {
    let parser = BlockParser::new(ParseOptions {
        max_len: 30,
        ..Default::default()
    });
    let (raw, output) = parse(&parser);

    let build = output
        .blocks
        .iter()
        .find(|b| b.path == "guide.md#Build")
        .unwrap();
    assert_eq!(build.text, "guide: Build:\nCompile from sou");
    assert_eq!(build.length, 74);

    for block in output.blocks.iter().filter(|b| !b.heading.is_empty()) {
        assert!(block.text.chars().count() <= 30, "{} too long", block.path);
        let extracted = extract_plain(&block.path, &raw);
        assert!(
            extracted.starts_with(block.body()),
            "{:?} is not a prefix of {:?}",
            block.body(),
            extracted
        );
    }
}

#[test]
fn heading_counts_agree_outside_fences() {
    let (raw, output) = parse(&BlockParser::default());

    let mut in_code = false;
    let mut scanned = 0;
    for line in raw.split('\n') {
        if is_fence(line) {
            in_code = !in_code;
        }
        if !in_code && is_heading(line) {
            scanned += 1;
        }
    }

    let emitted = output.blocks.iter().filter(|b| !b.heading.is_empty()).count();
    assert_eq!(scanned, emitted);
}

#[test]
fn preamble_path_returns_whole_document() {
    let (raw, output) = parse(&BlockParser::default());
    let preamble = &output.blocks[0];
    assert_eq!(preamble.text, "guide: :\nWelcome to the guide.");

    let extracted = get_block_from_path(&preamble.path, &raw, &ExtractOptions::default());
    assert_eq!(extracted, Some(Extracted::Document(raw.as_str())));
}

#[test]
fn duplicate_sections_resolve_to_their_own_bodies() {
    let (raw, _) = parse(&BlockParser::default());
    let get = |path: &str| {
        get_block_from_path(path, &raw, &ExtractOptions::default()).map(Extracted::into_string)
    };

    assert_eq!(
        get("guide.md#Install#Linux").as_deref(),
        Some("Run the installer script.\n#linux-only")
    );
    assert_eq!(
        get("guide.md#Install#Linux{1}").as_deref(),
        Some("Reinstall notes for linux.")
    );
    assert_eq!(
        get("guide.md#Usage#Basics{1}").as_deref(),
        Some("A second basics section.")
    );
    assert_eq!(get("guide.md#Usage#Basics{2}"), None);
}

#[test]
fn marker_blocks_extract_as_empty_sections() {
    let (raw, output) = parse(&BlockParser::default());
    let faq = output.blocks.last().unwrap();
    assert_eq!(faq.text, "guide: FAQ");
    assert_eq!(faq.length, 0);

    let extracted = get_block_from_path(&faq.path, &raw, &ExtractOptions::default());
    assert_eq!(extracted, Some(Extracted::Section(String::new())));
}

#[test]
fn skipping_and_exclusion_keep_remaining_paths_stable() {
    let parser = BlockParser::new(ParseOptions {
        excluded_headings: vec!["Mac".into()],
        skip_blocks_with_headings_only: true,
        ..Default::default()
    });
    let (_, output) = parse(&parser);
    let paths: Vec<&str> = output.blocks.iter().map(|b| b.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "guide.md",
            "guide.md#Install",
            "guide.md#Install#Linux",
            "guide.md#Usage#Basics",
            "guide.md#Usage#Basics{1}",
            "guide.md#Install#Linux{1}",
            "guide.md#Build",
        ]
    );
    assert_eq!(
        output.log,
        vec![
            "Skipping excluded heading: #Install#Mac",
            "Skipping headings-only block: guide: Usage",
            "Skipping headings-only block: guide: Install",
            "Skipping headings-only block: guide: FAQ",
        ]
    );
}

#[test]
fn parsing_twice_is_identical() {
    let parser = BlockParser::default();
    assert_eq!(parse(&parser).1, parse(&parser).1);
}
