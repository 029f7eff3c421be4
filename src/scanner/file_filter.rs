use crate::config::ScanConfig;
use regex::Regex;
use std::path::Path;

pub struct FileFilter {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_patterns: Vec<Regex>,
}

impl FileFilter {
    pub fn new(config: &ScanConfig) -> Self {
        // Patterns are checked by Config::validate; anything that slipped through is ignored.
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            extensions: config.extensions.iter().map(|e| e.to_lowercase()).collect(),
            exclude_dirs: config.exclude_dirs.iter().map(|d| d.to_lowercase()).collect(),
            exclude_patterns,
        }
    }

    /// Plain case-insensitive suffix match on the file name.
    pub fn is_source_file(&self, path: &Path) -> bool {
        let Some(filename) = path.file_name() else {
            return false;
        };
        let filename = filename.to_string_lossy().to_lowercase();

        self.extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
    }

    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        if let Some(dir_name) = path.file_name().and_then(|s| s.to_str()) {
            let dir_name_lower = dir_name.to_lowercase();

            if self.exclude_dirs.iter().any(|exclude| *exclude == dir_name_lower) {
                return false;
            }
        }

        !self.matches_any_pattern(&path.to_string_lossy())
    }

    pub fn matches_any_pattern(&self, text: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(text))
    }

    pub fn get_extensions(&self) -> &Vec<String> {
        &self.extensions
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        let config = ScanConfig::default();
        Self::new(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> ScanConfig {
        ScanConfig {
            extensions: vec![".c".to_string(), ".H".to_string(), ".cpp".to_string()],
            exclude_dirs: vec!["build".to_string(), ".git".to_string()],
            exclude_patterns: vec![r"third_party".to_string()],
            ..ScanConfig::default()
        }
    }

    #[test]
    fn test_source_file_detection() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_source_file(Path::new("gui_info.c")));
        assert!(filter.is_source_file(Path::new("nyx/frontend/fe_emmc_tools.c")));
        assert!(filter.is_source_file(Path::new("types.h")));
        assert!(filter.is_source_file(Path::new("engine.cpp")));

        assert!(!filter.is_source_file(Path::new("notes.txt")));
        assert!(!filter.is_source_file(Path::new("main.rs")));
        assert!(!filter.is_source_file(Path::new("Makefile")));
    }

    #[test]
    fn test_case_insensitive_extensions() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_source_file(Path::new("MAIN.C")));
        assert!(filter.is_source_file(Path::new("Main.c")));
        assert!(filter.is_source_file(Path::new("types.H")));
        assert!(filter.is_source_file(Path::new("engine.CPP")));
    }

    #[test]
    fn test_suffix_without_dot() {
        let config = ScanConfig {
            extensions: vec!["txt".to_string()],
            ..ScanConfig::default()
        };
        let filter = FileFilter::new(&config);

        assert!(filter.is_source_file(Path::new("readme.txt")));
        assert!(filter.is_source_file(Path::new("mytxt")));
        assert!(!filter.is_source_file(Path::new("readme.md")));
    }

    #[test]
    fn test_directory_traversal_rules() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.should_traverse_directory(Path::new("src")));
        assert!(filter.should_traverse_directory(Path::new("nyx/frontend")));
        assert!(filter.should_traverse_directory(Path::new(".github")));

        assert!(!filter.should_traverse_directory(Path::new("build")));
        assert!(!filter.should_traverse_directory(Path::new("src/BUILD")));
        assert!(!filter.should_traverse_directory(Path::new(".git")));
        assert!(!filter.should_traverse_directory(Path::new("lib/third_party/zlib")));
    }

    #[test]
    fn test_invalid_patterns_are_ignored() {
        let config = ScanConfig {
            exclude_patterns: vec!["(unclosed".to_string(), r"\.cache".to_string()],
            ..ScanConfig::default()
        };
        let filter = FileFilter::new(&config);

        assert!(filter.matches_any_pattern("home/.cache"));
        assert!(!filter.matches_any_pattern("(unclosed"));
    }

    #[test]
    fn test_default_filter() {
        let filter = FileFilter::default();
        assert_eq!(filter.get_extensions(), &vec![".c".to_string()]);
    }
}
