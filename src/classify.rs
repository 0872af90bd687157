use crate::ir::{Block, BlockKind};

/// Assign a block its category. First matching rule wins; a leading newline
/// is prepended so `\nfoo` reads as "a line starting with foo".
pub fn classify(block: &str) -> BlockKind {
    let e = format!("\n{}", block.to_lowercase());
    let has_line = |prefix: &str| e.contains(&format!("\n{}", prefix));

    if has_line("timeout ") || has_line("prompt") {
        return BlockKind::Header;
    }
    if has_line("menu exit") {
        return BlockKind::Exit;
    }
    if e.contains("kbdmap.c32") {
        return BlockKind::Keyboard;
    }
    if has_line("label") && (has_line("kernel") || has_line("linux") || e.contains("linux.")) {
        return BlockKind::Entry;
    }
    if has_line("menu title") {
        return BlockKind::MenuBegin;
    }
    if has_line("menu end") {
        return BlockKind::MenuEnd;
    }
    if has_line("menu separator") {
        return BlockKind::Separator;
    }
    BlockKind::Unknown
}

pub fn classify_all(blocks: Vec<String>) -> Vec<Block> {
    blocks
        .into_iter()
        .map(|text| Block {
            kind: classify(&text),
            text,
        })
        .collect()
}
