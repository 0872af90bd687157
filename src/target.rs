use crate::error::{Error, Result};

/// Where the generated files live inside the destination filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Absolute file stem of the root menu, without `.lst`.
    pub stem: String,
    /// Directory of the stem, prepended to kernel and initrd paths.
    /// Empty when the stem sits at the filesystem root.
    pub prefix: String,
}

impl Target {
    pub fn resolve(path: &str) -> Result<Target> {
        if !path.starts_with('/') {
            return Err(Error::RelativeTarget(path.to_string()));
        }
        let mut stem = path.strip_suffix(".lst").unwrap_or(path).to_string();
        if stem.ends_with('/') {
            stem.push_str("menu");
        }
        let prefix = dirname(&stem).to_string();
        Ok(Target { stem, prefix })
    }
}

fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => path[..idx].trim_end_matches('/'),
        None => "",
    }
}
