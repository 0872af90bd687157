use regex::Regex;
use std::sync::LazyLock;

static RE_LABEL_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^label").unwrap());

fn flush(buf: &mut Vec<&str>, out: &mut Vec<String>) {
    let block = buf.join("\n");
    let block = block.trim_matches('\n');
    if !block.trim().is_empty() {
        out.push(block.to_string());
    }
    buf.clear();
}

/// Split normalized lines into blocks separated by blank lines, forcing a
/// boundary before every `label` line so stanzas sharing no blank line
/// still land in separate blocks.
pub fn segment(lines: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut buf: Vec<&str> = Vec::new();

    for line in lines {
        if line.is_empty() {
            flush(&mut buf, &mut out);
            continue;
        }
        if RE_LABEL_LINE.is_match(line) {
            flush(&mut buf, &mut out);
        }
        buf.push(line);
    }
    flush(&mut buf, &mut out);

    out
}
