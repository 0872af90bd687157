/// Semantic category of one block of syslinux config text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Exit,
    Keyboard,
    Entry,
    MenuBegin,
    MenuEnd,
    Separator,
    Unknown,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Exit => "exit",
            BlockKind::Keyboard => "keyboard",
            BlockKind::Entry => "entry",
            BlockKind::MenuBegin => "menu_begin",
            BlockKind::MenuEnd => "menu_end",
            BlockKind::Separator => "separator",
            BlockKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Raw text of a boot entry block, parsed at emission time.
    Entry(String),
    /// Index into the owning node's `sub`.
    Submenu(usize),
    /// Raw text of a `menu exit` block.
    Exit(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuNode {
    pub title: String,
    pub entries: Vec<MenuItem>,
    pub sub: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(title: impl Into<String>) -> Self {
        MenuNode {
            title: title.into(),
            entries: Vec::new(),
            sub: Vec::new(),
        }
    }

    /// Number of menu levels from this node down, counting itself.
    pub fn depth(&self) -> usize {
        1 + self.sub.iter().map(MenuNode::depth).max().unwrap_or(0)
    }
}

/// Fields of one boot entry. `kernel: Some("")` is distinct from `None`:
/// it marks a `linux.c32` chainload entry whose flags ride on the kernel line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootEntry {
    pub label: String,
    pub kernel: Option<String>,
    pub options: Option<String>,
    pub initrd: Option<String>,
}

/// One rendered output file. `name` is the absolute path inside the target
/// filesystem, e.g. `/boot/grub/menu_0.lst`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFile {
    pub name: String,
    pub content: String,
}
