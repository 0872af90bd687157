use crate::ir::BootEntry;
use regex::Regex;
use std::sync::LazyLock;

static RE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(menu )?label (.*)$").unwrap());
static RE_KERNEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(kernel|linux) (.*)$").unwrap());
static RE_CHAINLOAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)linux\.c32").unwrap());
static RE_APPEND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^append (.*)$").unwrap());
static RE_INITRD_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)initrd=([^ ]*)").unwrap());
static RE_INITRD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^initrd (.*)$").unwrap());

/// Remove syslinux hotkey markers.
pub fn strip_carets(text: &str) -> String {
    text.replace('^', "")
}

impl BootEntry {
    /// Scan an entry block line by line; every directive overwrites its
    /// field, so the last occurrence wins. Returns `None` when the block has
    /// no `label` line.
    pub fn parse(block: &str) -> Option<BootEntry> {
        let mut label: Option<String> = None;
        let mut entry = BootEntry::default();

        for line in block.split('\n') {
            let line = line.trim();
            if let Some(caps) = RE_LABEL.captures(line) {
                label = Some(strip_carets(&caps[2]).trim().to_string());
            }
            if let Some(caps) = RE_KERNEL.captures(line) {
                entry.kernel = Some(caps[2].trim().to_string());
            }
            if RE_CHAINLOAD.is_match(line) {
                entry.kernel = Some(String::new());
            }
            if let Some(caps) = RE_APPEND.captures(line) {
                let options = RE_INITRD_INLINE.replace_all(&caps[1], "");
                entry.options = Some(options.trim().to_string());
            }
            if let Some(caps) = RE_INITRD_INLINE.captures(line) {
                entry.initrd = Some(caps[1].trim().to_string());
            }
            if let Some(caps) = RE_INITRD.captures(line) {
                entry.initrd = Some(caps[1].trim().to_string());
            }
        }

        entry.label = label?;
        Some(entry)
    }

    /// Render as a GRUB legacy stanza. `prefix` is prepended to the kernel
    /// and initrd paths.
    pub fn render(&self, prefix: &str) -> String {
        let mut out = format!("title {}", self.label);
        if let Some(ref kernel) = self.kernel {
            let mut k = kernel.trim().to_string();
            if !k.is_empty() && !k.starts_with('/') {
                k.insert(0, '/');
            }
            out.push_str(&format!("\nkernel {}{}", prefix, k));
            if let Some(ref options) = self.options {
                if !k.is_empty() {
                    out.push(' ');
                } else if !options.starts_with('/') {
                    // chainload flags ride on the kernel line as a path
                    out.push('/');
                }
                out.push_str(options);
            }
        }
        if let Some(ref initrd) = self.initrd {
            out.push_str(&format!("\ninitrd {}{}", prefix, initrd.trim()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_entry() {
        let e = BootEntry::parse("label linux\nkernel /vmlinuz\nappend root=/dev/sda1").unwrap();
        assert_eq!(e.label, "linux");
        assert_eq!(e.kernel.as_deref(), Some("/vmlinuz"));
        assert_eq!(e.options.as_deref(), Some("root=/dev/sda1"));
        assert_eq!(e.initrd, None);
    }

    #[test]
    fn test_menu_label_overrides_label() {
        let e = BootEntry::parse("label live\nmenu label ^Start  live system \nkernel /live/vmlinuz")
            .unwrap();
        assert_eq!(e.label, "Start  live system");
    }

    #[test]
    fn test_inline_initrd_stripped_from_options() {
        let e = BootEntry::parse("label a\nlinux /bz\nappend initrd=/initrd.gz quiet splash").unwrap();
        assert_eq!(e.options.as_deref(), Some("quiet splash"));
        assert_eq!(e.initrd.as_deref(), Some("/initrd.gz"));
    }

    #[test]
    fn test_initrd_directive_last_wins() {
        let e = BootEntry::parse("label a\nkernel /a\nappend initrd=/one.img\ninitrd /two.img").unwrap();
        assert_eq!(e.initrd.as_deref(), Some("/two.img"));

        let e = BootEntry::parse("label a\nkernel /a\ninitrd /two.img\nappend initrd=/one.img").unwrap();
        assert_eq!(e.initrd.as_deref(), Some("/one.img"));
    }

    #[test]
    fn test_chainload_sets_empty_kernel() {
        let e = BootEntry::parse("label hd\nkernel linux.c32\nappend hd0,0").unwrap();
        assert_eq!(e.kernel.as_deref(), Some(""));
        assert_eq!(e.options.as_deref(), Some("hd0,0"));
    }

    #[test]
    fn test_case_insensitive_directives() {
        let e = BootEntry::parse("LABEL A\nKERNEL vmlinuz\nAPPEND quiet\nINITRD initrd.img").unwrap();
        assert_eq!(e.label, "A");
        assert_eq!(e.kernel.as_deref(), Some("vmlinuz"));
        assert_eq!(e.options.as_deref(), Some("quiet"));
        assert_eq!(e.initrd.as_deref(), Some("initrd.img"));
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(BootEntry::parse("kernel /a\nappend quiet"), None);
    }

    #[test]
    fn test_render_with_prefix() {
        let e = BootEntry::parse("label x\nlinux bz\ninitrd=/initrd.img").unwrap();
        assert_eq!(
            e.render("/boot"),
            "title x\nkernel /boot/bz\ninitrd /boot/initrd.img"
        );
    }

    #[test]
    fn test_render_no_double_slash() {
        let e = BootEntry::parse("label a\nkernel /vmlinuz").unwrap();
        assert_eq!(e.render(""), "title a\nkernel /vmlinuz");
    }

    #[test]
    fn test_render_chainload_options_as_path() {
        let e = BootEntry::parse("label hd\ncom32 linux.c32\nappend casper/vmlinuz quiet").unwrap();
        assert_eq!(e.render(""), "title hd\nkernel /casper/vmlinuz quiet");

        let e = BootEntry::parse("label hd\ncom32 linux.c32\nappend /casper/vmlinuz").unwrap();
        assert_eq!(e.render("/iso"), "title hd\nkernel /iso/casper/vmlinuz");
    }

    #[test]
    fn test_render_without_kernel_drops_options() {
        let e = BootEntry {
            label: "odd".to_string(),
            kernel: None,
            options: Some("quiet".to_string()),
            initrd: Some("/i.img".to_string()),
        };
        assert_eq!(e.render(""), "title odd\ninitrd /i.img");
    }
}
