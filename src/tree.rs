use crate::config::{Config, MenuEndPolicy};
use crate::error::{Error, Result};
use crate::ir::{Block, BlockKind, MenuItem, MenuNode};
use tracing::{debug, warn};

/// Title of a `menu_begin` block: the first `menu title` line minus its
/// two leading tokens.
fn menu_title(block: &str) -> String {
    block
        .split('\n')
        .find(|l| l.to_lowercase().contains("menu title"))
        .map(|l| l.split(' ').skip(2).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Pop the innermost open menu and hand it to its parent. Its slot in the
/// parent's entries was reserved when the menu was opened.
fn close_menu(stack: &mut Vec<MenuNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(child) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.sub.push(child);
        }
    }
}

pub fn build_tree(blocks: &[Block], config: &Config) -> Result<MenuNode> {
    let mut stack: Vec<MenuNode> = vec![MenuNode::new(config.root_title.as_str())];

    for block in blocks {
        debug!(kind = block.kind.as_str(), depth = stack.len(), "block");
        // The root is never popped, so the stack always has a top.
        let Some(current) = stack.last_mut() else {
            break;
        };
        match block.kind {
            BlockKind::MenuBegin => {
                let index = current.sub.len();
                current.entries.push(MenuItem::Submenu(index));
                stack.push(MenuNode::new(menu_title(&block.text)));
            }
            BlockKind::MenuEnd => {
                if stack.len() < 2 {
                    match config.menu_end_policy {
                        MenuEndPolicy::Ignore => {
                            warn!("ignoring unbalanced menu end\n----\n{}\n----", block.text);
                        }
                        MenuEndPolicy::Error => {
                            return Err(Error::UnbalancedMenuEnd {
                                block: block.text.clone(),
                            });
                        }
                    }
                    continue;
                }
                close_menu(&mut stack);
            }
            BlockKind::Entry => current.entries.push(MenuItem::Entry(block.text.clone())),
            BlockKind::Exit => current.entries.push(MenuItem::Exit(block.text.clone())),
            BlockKind::Unknown => {
                warn!("ignoring unknown entry\n----\n{}\n----", block.text);
            }
            BlockKind::Header | BlockKind::Keyboard | BlockKind::Separator => {
                debug!(kind = block.kind.as_str(), "dropping block with no menu.lst equivalent");
            }
        }
    }

    // Menus left open at end of input are closed implicitly.
    while stack.len() > 1 {
        close_menu(&mut stack);
    }

    let mut root = stack.pop().unwrap_or_default();
    // A file wrapped in one top-level menu uses that menu as the root.
    if config.unwrap_single_submenu && root.sub.len() == 1 {
        root = root.sub.remove(0);
    }
    Ok(root)
}
