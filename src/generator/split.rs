use once_cell::sync::Lazy;
use regex::Regex;

use super::output::CodeGenFile;

// Two or more '=', then '>', then any further '=', anchored at line start.
static FILE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^==+>=*").expect("file marker regex should be valid"));

/// Split rendered template text into files.
///
/// A line starting with `==>` (any number of `=` from two up, optionally
/// followed by more `=`) opens a new file named by the rest of the line,
/// trimmed. Lines before the first marker are
/// preamble and dropped. In each file a single leading blank line is removed
/// and all trailing blank lines are removed.
pub fn split_files(text: &str) -> Vec<CodeGenFile> {
    let mut files = Vec::new();
    // None while outside any file.
    let mut current: Option<(String, Vec<String>)> = None;

    for line in text.lines() {
        if let Some(marker) = FILE_MARKER.find(line) {
            if let Some((name, lines)) = current.take() {
                files.push(finish_file(name, lines));
            }
            current = Some((line[marker.end()..].trim().to_string(), Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.to_string());
        }
    }
    if let Some((name, lines)) = current {
        files.push(finish_file(name, lines));
    }

    files
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn finish_file(name: String, mut lines: Vec<String>) -> CodeGenFile {
    if lines.first().is_some_and(|l| is_blank(l)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }
    CodeGenFile::new(name, lines)
}
