use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub path: String,
    pub found: bool,
    pub files_scanned: usize,
    pub new_characters: usize,
}

/// Accumulated result of a scan. Characters are kept in code-point order.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub characters: BTreeSet<char>,
    pub directories: Vec<DirectorySummary>,
    pub files_scanned: usize,
    pub punctuation_added: usize,
    pub warnings: Vec<String>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions one directory's characters into the report and returns how many were new.
    pub fn merge_directory(
        &mut self,
        path: &Path,
        characters: BTreeSet<char>,
        files_scanned: usize,
    ) -> usize {
        let before = self.characters.len();
        self.characters.extend(characters);
        let new_characters = self.characters.len() - before;

        self.files_scanned += files_scanned;
        self.directories.push(DirectorySummary {
            path: path.display().to_string(),
            found: true,
            files_scanned,
            new_characters,
        });

        new_characters
    }

    pub fn record_missing_directory(&mut self, path: &Path) {
        self.directories.push(DirectorySummary {
            path: path.display().to_string(),
            found: false,
            files_scanned: 0,
            new_characters: 0,
        });
    }

    pub fn add_punctuation(&mut self, punctuation: &[char]) -> usize {
        let before = self.characters.len();
        self.characters.extend(punctuation.iter().copied());
        let added = self.characters.len() - before;
        self.punctuation_added += added;
        added
    }

    pub fn add_warning<S: Into<String>>(&mut self, warning: S) {
        self.warnings.push(warning.into());
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn sorted_characters(&self) -> Vec<char> {
        self.characters.iter().copied().collect()
    }

    pub fn wrap_lines(&self, width: usize) -> Vec<String> {
        wrap_characters(&self.sorted_characters(), width)
    }

    pub fn to_json(&self, width: usize) -> serde_json::Value {
        serde_json::json!({
            "type": "report",
            "count": self.len(),
            "characters": self.characters.iter().collect::<String>(),
            "lines": self.wrap_lines(width),
            "files_scanned": self.files_scanned,
            "punctuation_added": self.punctuation_added,
            "directories": self.directories,
            "warnings": self.warnings,
        })
    }
}

/// Splits `characters` into lines of `width` characters; the last line may be shorter.
pub fn wrap_characters(characters: &[char], width: usize) -> Vec<String> {
    characters
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
