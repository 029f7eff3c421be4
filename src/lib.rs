pub mod charset;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use charset::{is_target_character, Charset, COMMON_PUNCTUATION};
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{CjkScanError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{wrap_characters, CharExtractor, DirectorySummary, ScanReport};
pub use scanner::{DirectoryListing, FileFilter, SourceFile, SourceScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

/// Main library interface: scans the configured directories for CJK characters.
pub struct CjkScan {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl CjkScan {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create a CjkScan instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Scan every configured directory. Per-directory and per-file failures
    /// become warnings on the report; this never fails.
    pub fn run(&self) -> ScanReport {
        let scanner = SourceScanner::new(&self.config.scan);
        let extractor = CharExtractor::new(self.config.scan.charset);
        let mut report = ScanReport::new();

        for directory in &self.config.scan.directories {
            self.output_formatter
                .start_operation(&format!("Scanning directory: {} ...", directory.display()));

            match self.scan_root(&scanner, &extractor, directory, &mut report) {
                Some(new_characters) => self.output_formatter.info(&format!(
                    "  Found {} new unique characters in this directory.",
                    new_characters
                )),
                None => report.record_missing_directory(directory),
            }
        }

        if self.config.output.include_punctuation {
            let added = report.add_punctuation(&COMMON_PUNCTUATION);
            self.output_formatter
                .info(&format!("Added {} common Chinese punctuation marks.", added));
        }

        self.progress_manager.clear();
        report
    }

    /// Returns the number of new characters, or `None` if the root could not be listed.
    fn scan_root(
        &self,
        scanner: &SourceScanner,
        extractor: &CharExtractor,
        root: &Path,
        report: &mut ScanReport,
    ) -> Option<usize> {
        let spinner = self
            .progress_manager
            .create_spinner(&format!("Listing {}", root.display()));
        let listing = scanner.scan_directory(root);
        spinner.finish_and_clear();

        let listing = match listing {
            Ok(listing) => listing,
            Err(e) => {
                self.warn(report, &e);
                return None;
            }
        };

        for error in &listing.errors {
            self.warn(report, error);
        }

        let start_time = Instant::now();
        let file_progress = self
            .progress_manager
            .create_file_progress(listing.files.len() as u64);

        let mut characters = BTreeSet::new();
        let mut files_read = 0;

        for (index, file) in listing.files.iter().enumerate() {
            ui::progress::update_file_progress(&file_progress, index, &file.display_path());

            match extractor.extract_from_file(&file.source_path) {
                Ok(found) => {
                    self.progress_manager.suspend(|| {
                        self.output_formatter.debug(&format!(
                            "{} ({}): {} characters",
                            file.display_path(),
                            file.format_size(),
                            found.len()
                        ))
                    });
                    characters.extend(found);
                    files_read += 1;
                }
                Err(e) => self.warn(report, &e),
            }
        }

        file_progress.set_position(listing.files.len() as u64);
        ui::progress::finish_progress_with_summary(
            &file_progress,
            &format!("Read {} files", files_read),
            start_time.elapsed(),
        );

        Some(report.merge_directory(root, characters, files_read))
    }

    fn warn(&self, report: &mut ScanReport, error: &CjkScanError) {
        let message = error.user_message();
        self.progress_manager
            .suspend(|| self.output_formatter.warning(&message));
        report.add_warning(message);
    }

    /// List the files a scan would read, without reading them.
    pub fn plan(&self) -> Vec<(String, Result<DirectoryListing>)> {
        let scanner = SourceScanner::new(&self.config.scan);

        self.config
            .scan
            .directories
            .iter()
            .map(|dir| (dir.display().to_string(), scanner.scan_directory(dir)))
            .collect()
    }

    /// Print the wrapped character lines (or the JSON report) for `report`.
    pub fn print_report(&self, report: &ScanReport) {
        self.output_formatter.print_scan_summary(report);
        self.output_formatter
            .print_characters(report, self.config.output.line_length);
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }
}

/// Scan `directories` with default settings and return the sorted characters.
pub fn scan_directories<P: AsRef<Path>>(
    directories: &[P],
    extensions: &[&str],
    include_punctuation: bool,
) -> Vec<char> {
    let mut config = Config::default();
    config.scan.directories = directories
        .iter()
        .map(|d| d.as_ref().to_path_buf())
        .collect();
    config.scan.extensions = extensions.iter().map(|e| e.to_string()).collect();
    config.output.include_punctuation = include_punctuation;

    CjkScan::new(config, OutputMode::Plain, 0, true)
        .run()
        .sorted_characters()
}
