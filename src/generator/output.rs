use std::fmt;

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenFile {
    /// Path relative to the output directory.
    pub name: String,
    /// Content lines, without line terminators.
    pub lines: Vec<String>,
}

impl CodeGenFile {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        CodeGenFile {
            name: name.into(),
            lines,
        }
    }

    /// File text: every line followed by `\n`.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// A file-name pattern whose matches carry a given generated-code marker.
///
/// Lets an external cleanup step delete stale generated files, and only those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenPattern {
    pub pattern: String,
    pub required_substring: String,
}

impl CodeGenPattern {
    pub fn new(pattern: impl Into<String>, required_substring: impl Into<String>) -> Self {
        CodeGenPattern {
            pattern: pattern.into(),
            required_substring: required_substring.into(),
        }
    }
}

/// Everything one generation run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeGenOutput {
    pub files: Vec<CodeGenFile>,
    pub patterns_to_clean: Vec<CodeGenPattern>,
}

impl CodeGenOutput {
    pub fn file(&self, name: &str) -> Option<&CodeGenFile> {
        self.files.iter().find(|f| f.name == name)
    }
}

/// Marker text placed at the top of every generated file.
pub fn codegen_comment(generator_name: &str) -> String {
    format!("DO NOT EDIT: generated by {generator_name}")
}

impl fmt::Display for CodeGenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} lines)", self.name, self.lines.len())
    }
}
