use std::fs;
use std::path::Path;

use anyhow::Context;

/// Read newline-delimited candidate labels. Malformed UTF-8 is replaced
/// rather than fatal; blank lines survive here and fall out at validation.
pub fn read_wordlist(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(|line| line.to_string()).collect())
}
