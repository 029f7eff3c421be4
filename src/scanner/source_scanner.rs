use crate::config::ScanConfig;
use crate::error::{CjkScanError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub source_path: PathBuf,
    pub relative_path: PathBuf,
    pub size: u64,
}

impl SourceFile {
    pub fn new(source_path: PathBuf, relative_path: PathBuf, size: u64) -> Self {
        Self {
            source_path,
            relative_path,
            size,
        }
    }

    pub fn display_path(&self) -> String {
        self.relative_path.display().to_string()
    }

    pub fn format_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// Files found under one root, plus the entries the walk could not read.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub files: Vec<SourceFile>,
    pub errors: Vec<CjkScanError>,
}

pub struct SourceScanner {
    filter: FileFilter,
    max_depth: Option<usize>,
}

impl SourceScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
            max_depth: config.max_depth,
        }
    }

    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<DirectoryListing> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(CjkScanError::InvalidDirectory {
                path: root_path.display().to_string(),
            });
        }

        let mut listing = DirectoryListing::default();

        let mut walker = WalkDir::new(root_path).follow_links(false);
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|e| self.should_traverse(e));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    listing.errors.push(err.into());
                    continue;
                }
            };

            // Symlinked directories are skipped, not descended into. Any other
            // entry is a candidate, so a dangling link surfaces as a read error.
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());

            if is_dir || !self.filter.is_source_file(entry.path()) {
                continue;
            }

            match self.source_file(&entry, root_path) {
                Ok(file) => listing.files.push(file),
                Err(err) => listing.errors.push(err),
            }
        }

        // Sort by relative path for consistent output
        listing
            .files
            .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(listing)
    }

    fn should_traverse(&self, entry: &DirEntry) -> bool {
        // Always allow the root itself (depth 0)
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        self.filter.should_traverse_directory(entry.path())
    }

    fn source_file(&self, entry: &DirEntry, root_path: &Path) -> Result<SourceFile> {
        let path = entry.path();
        let metadata = entry.metadata()?;

        let relative_path = path
            .strip_prefix(root_path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());

        Ok(SourceFile::new(
            path.to_path_buf(),
            relative_path,
            metadata.len(),
        ))
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
