use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Placeholder version checked into the manifest.
pub const SENTINEL: &str = "0.0.0a0";

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read manifest {}", path.display()))
}

// Universal-newline separators, including the Unicode ones.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line break, treating `\r\n` as one. No trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(idx) = rest.find(is_line_break) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..idx];
        let brk = rest[idx..].chars().next()?;
        let mut end = idx + brk.len_utf8();
        if brk == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        rest = &rest[end..];
        Some(line)
    })
}

/// Substitute `version` for every sentinel in `original`.
///
/// Every line of the result ends with `\n`, whatever the original did.
pub fn patch(original: &str, version: &str) -> String {
    let mut patched = String::with_capacity(original.len() + 1);
    for line in split_lines(original) {
        if line.contains(SENTINEL) {
            let line = line.replace(SENTINEL, version);
            debug!("patching: {}", line);
            patched.push_str(&line);
        } else {
            patched.push_str(line);
        }
        patched.push('\n');
    }
    debug!(updated = %patched, "patched manifest");
    patched
}

/// Overwrite the manifest in place with `contents`.
///
/// The file must already exist; links, ownership and permissions are left alone.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open manifest {} for writing", path.display()))?;

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write manifest {}", path.display()))
}
