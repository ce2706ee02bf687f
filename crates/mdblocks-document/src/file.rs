//! Loading documents from disk for the parser and the extractor.

use std::{fs, io, path::Path};

use crate::{
    BlockParser, BlockPath, DocumentError, ExtractOptions, Extracted, ParseOutput,
    get_block_from_path,
};

/// Extensions treated as documents.
const SUPPORTED_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Reads and parses a document.
///
/// The path, with `\` separators normalized to `/`, becomes the logical document path of
/// every emitted block.
pub fn parse_file(path: &Path, parser: &BlockParser) -> Result<ParseOutput, DocumentError> {
    let content = read_document(path)?;
    let logical = logical_path(path);
    Ok(parser.parse(&content, Some(&logical)))
}

/// Resolves a block path against documents under `base_dir`.
///
/// The document part of `block_path` (everything before the first `#`) is read relative to
/// `base_dir`. Returns `Ok(None)` when the document exists but has no matching section.
pub fn extract_from_file(
    block_path: &str,
    base_dir: &Path,
    options: &ExtractOptions,
) -> Result<Option<String>, DocumentError> {
    let path = base_dir.join(BlockPath::document_of(block_path));
    let raw = read_document(&path)?;
    Ok(get_block_from_path(block_path, &raw, options).map(Extracted::into_string))
}

/// Reads a supported document as UTF-8 text.
fn read_document(path: &Path) -> Result<String, DocumentError> {
    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
    if !supported {
        return Err(DocumentError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => DocumentError::InvalidUtf8 {
            path: path.to_path_buf(),
        },
        _ => DocumentError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Renders a filesystem path as a logical document path.
fn logical_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
