pub mod blocks;
pub mod classify;
pub mod config;
pub mod emit;
pub mod entry;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod target;
pub mod tree;

use config::Config;
use error::{Error, Result};
use ir::{MenuFile, MenuNode};
use std::fs;
use std::path::{Path, PathBuf};
use target::Target;
use tracing::{debug, info};

/// Parse syslinux config text into a menu tree.
pub fn parse_menu(text: &str, config: &Config) -> Result<MenuNode> {
    // Stage 0
    let lines = normalize::stage0(text);

    // Stage 1
    let blocks = blocks::segment(&lines);
    debug!(count = blocks.len(), "segmented input");

    // Stage 2
    let blocks = classify::classify_all(blocks);

    // Stage 3
    let menu = tree::build_tree(&blocks, config)?;
    debug!(title = menu.title.as_str(), depth = menu.depth(), "built menu tree");
    Ok(menu)
}

/// Convert syslinux config text into the menu.lst files for `target`.
pub fn convert(text: &str, target: &Target, config: &Config) -> Result<Vec<MenuFile>> {
    let menu = parse_menu(text, config)?;
    Ok(emit::emit_menu(&menu, &target.stem, "", &target.prefix))
}

pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Location of a generated file under the output root.
pub fn output_path(out_root: &Path, name: &str) -> PathBuf {
    out_root.join(name.trim_start_matches('/'))
}

/// Write every file under `out_root`, creating directories as needed.
/// Files already written stay in place if a later write fails.
pub fn write_files(out_root: &Path, files: &[MenuFile]) -> Result<Vec<PathBuf>> {
    let mut written: Vec<PathBuf> = Vec::new();
    for file in files {
        let path = output_path(out_root, &file.name);
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&path, format!("{}\n", file.content)).map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!("Saved file {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_convert() {
        let target = Target::resolve("/menu.lst").unwrap();
        let files = convert(
            "label linux\n kernel /vmlinuz\n append root=/dev/sda1\n",
            &target,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "/menu.lst");
        assert_eq!(files[0].content, "title linux\nkernel /vmlinuz root=/dev/sda1");
    }

    #[test]
    fn test_determinism() {
        let input = "menu title A\n\nlabel a\nkernel /a\n\nmenu end\n\nmenu title B\n\nlabel b\nkernel /b\n\nmenu end\n";
        let target = Target::resolve("/boot/menu.lst").unwrap();
        let config = Config::default();
        let r1 = convert(input, &target, &config).unwrap();
        let r2 = convert(input, &target, &config).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_parse_menu_depth() {
        let input = "menu title A\n\nmenu title B\n\nlabel b\nkernel /b\n\nmenu end\n\nmenu end\n\nlabel c\nkernel /c\n";
        let config = Config {
            unwrap_single_submenu: false,
            ..Config::default()
        };
        let menu = parse_menu(input, &config).unwrap();
        assert_eq!(menu.depth(), 3);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), "/boot/grub/menu.lst"),
            PathBuf::from("out/boot/grub/menu.lst")
        );
    }

    #[test]
    fn test_read_missing_input() {
        let err = read_input(Path::new("/nonexistent/isolinux.cfg")).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
    }
}
