use crate::entry::strip_carets;
use crate::ir::{BootEntry, MenuFile, MenuItem, MenuNode};
use tracing::warn;

/// Stanza that jumps to another generated file.
fn link_stanza(title: &str, stem: &str) -> String {
    format!(
        "title {}\nfind --set-root {}.lst\nconfigfile {}.lst",
        title, stem, stem
    )
}

/// Label of a `menu exit` block. Among the lines mentioning `label` the
/// greatest one wins, so `menu label Foo` beats a bare `label foo`.
pub fn exit_label(block: &str) -> Option<String> {
    let mut candidates: Vec<&str> = block
        .split('\n')
        .filter(|l| l.to_lowercase().contains("label"))
        .collect();
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    let line = candidates.first()?;

    let skip = if line.to_lowercase().starts_with("menu") { 2 } else { 1 };
    let title = line.split(' ').skip(skip).collect::<Vec<_>>().join(" ");
    Some(strip_carets(&title))
}

/// Render `node` into `<name>.lst`, recursing into submenus as
/// `<name>_<index>.lst`. Exit stubs point back at `previous`. Files of
/// nested menus precede the file of the menu that contains them.
pub fn emit_menu(node: &MenuNode, name: &str, previous: &str, prefix: &str) -> Vec<MenuFile> {
    let mut files: Vec<MenuFile> = Vec::new();
    let mut stanzas: Vec<String> = Vec::new();

    for item in &node.entries {
        match item {
            MenuItem::Entry(block) => match BootEntry::parse(block) {
                Some(entry) => stanzas.push(entry.render(prefix)),
                None => warn!("ignoring entry without label\n----\n{}\n----", block),
            },
            MenuItem::Submenu(index) => {
                let Some(child) = node.sub.get(*index) else {
                    warn!(index = *index, menu = node.title.as_str(), "submenu index out of range");
                    continue;
                };
                let sub_name = format!("{}_{}", name, index);
                stanzas.push(link_stanza(&child.title, &sub_name));
                files.extend(emit_menu(child, &sub_name, name, prefix));
            }
            MenuItem::Exit(block) => match exit_label(block) {
                Some(title) => stanzas.push(link_stanza(&title, previous)),
                None => warn!("ignoring menu exit without label\n----\n{}\n----", block),
            },
        }
    }

    files.push(MenuFile {
        name: format!("{}.lst", name),
        content: stanzas.join("\n\n").trim().to_string(),
    });
    files
}
