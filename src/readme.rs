use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::config::{END_MARKER, START_MARKER};
use crate::error::Result;

// Replaces the activity section of `content` with `report` and a fresh footer.
// Everything before the start marker is kept; everything from it onwards is rewritten.
pub fn splice_section(content: &str, report: &str, updated_at: &str) -> String {
    let (kept, header) = match content.find(START_MARKER) {
        None if content.is_empty() => ("", format!("{}\n\n", START_MARKER)),
        None => (content, format!("\n\n{}\n\n", START_MARKER)),
        Some(start) => {
            let old_end = content[start..].find(END_MARKER).map(|offset| start + offset);
            debug!(start, footer = ?old_end, len = content.len(), "replacing existing activity section");
            (&content[..start], format!("{}\n\n", START_MARKER))
        }
    };

    let mut document = String::with_capacity(kept.len() + header.len() + report.len() + 64);
    document.push_str(kept);
    document.push_str(&header);
    document.push_str(report);
    document.push_str(&format!("\n{} {}*\n", END_MARKER, updated_at));
    document
}

// Current README text, or an empty document when the file does not exist yet
pub fn read_readme(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

// Reads, splices and fully rewrites the README at `path`
pub fn write_to_readme(path: &Path, report: &str, updated_at: &str) -> Result<()> {
    let content = read_readme(path)?;
    let document = splice_section(&content, report, updated_at);
    fs::write(path, document)?;
    Ok(())
}
