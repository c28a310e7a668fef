//! Import injection over generated text.
//!
//! Each extension's import resolver scans the finished code for references
//! it is responsible for and returns complete import lines. The collected
//! block lands at a fixed offset from the top of the file, immediately after
//! the header block, so the insertion point never depends on content.

use decogen_engine::ImportResolver;

/// Line index where the import block is inserted (position 3 in the file,
/// after the header comment and one blank line).
pub const IMPORT_ANCHOR_LINE: usize = 2;

/// Run `resolvers` in declaration order over `code` and insert any missing
/// imports. Returns `code` unchanged when nothing is needed.
pub fn inject_imports(code: &str, resolvers: &[&dyn ImportResolver]) -> String {
    let imports: Vec<String> = resolvers
        .iter()
        .flat_map(|resolver| resolver.resolve(code))
        .collect();
    if imports.is_empty() {
        return code.to_string();
    }

    let block = imports.join("\n");
    let mut lines: Vec<&str> = code.split('\n').collect();
    let at = IMPORT_ANCHOR_LINE.min(lines.len());
    lines.insert(at, &block);
    lines.join("\n")
}
