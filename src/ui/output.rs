use crate::config::Config;
use crate::error::{CjkScanError, UserFriendlyError};
use crate::extractor::ScanReport;
use console::{style, Emoji, Term};
use std::io::{self, Write};

// Writes to stdout, dropping write errors such as a closed pipe.
macro_rules! status {
    ($($arg:tt)*) => {{
        let _ = writeln!(io::stdout(), $($arg)*);
    }};
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static MAGNIFIER: Emoji = Emoji("🔍 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Success, message),
                OutputMode::Json => self.print_json_message("success", message),
                OutputMode::Plain => status!("SUCCESS: {}", message),
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    /// Warnings go to stderr and are shown even in quiet mode.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Warning, message),
            OutputMode::Json => self.print_json_message("warning", message),
            OutputMode::Plain => eprintln!("WARNING: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => status!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        status!("  {}", style(message).dim());
                    } else {
                        status!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => status!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        status!("{}{}", MAGNIFIER, style(operation).bold());
                    } else {
                        status!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => status!("STARTING: {}", operation),
            }
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &CjkScanError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_configuration(&self, config: &Config) {
        if self.quiet {
            return;
        }

        let directories: Vec<String> = config
            .scan
            .directories
            .iter()
            .map(|d| d.display().to_string())
            .collect();

        match self.mode {
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "configuration",
                    "directories": directories,
                    "extensions": config.scan.extensions,
                    "charset": config.scan.charset,
                    "include_punctuation": config.output.include_punctuation,
                    "line_length": config.output.line_length,
                }));
            }
            _ => {
                self.print_header("Configuration");
                status!("  Directories:         {}", directories.join(", "));
                status!("  Extensions:          {}", config.scan.extensions.join(", "));
                status!("  Charset:             {}", config.scan.charset);
                status!("  Include punctuation: {}", config.output.include_punctuation);
                status!("  Line length:         {}", config.output.line_length);
                if !config.scan.exclude_dirs.is_empty() {
                    status!("  Excluded dirs:       {}", config.scan.exclude_dirs.join(", "));
                }
                if let Some(max_depth) = config.scan.max_depth {
                    status!("  Max depth:           {}", max_depth);
                }
                self.print_separator();
            }
        }
    }

    // Summary and reporting
    pub fn print_scan_summary(&self, report: &ScanReport) {
        if self.quiet || self.mode == OutputMode::Json {
            return;
        }

        status!();
        self.print_separator();
        self.success(&format!(
            "Scan complete! Found {} unique characters in {} files.",
            report.len(),
            report.files_scanned
        ));
        if !report.warnings.is_empty() {
            status!("  Warnings: {}", report.warnings.len());
        }
        self.print_separator();
    }

    /// Prints the wrapped character block, or the JSON report in JSON mode.
    pub fn print_characters(&self, report: &ScanReport, line_length: usize) {
        if self.mode == OutputMode::Json {
            self.print_json_object(&report.to_json(line_length));
            return;
        }

        if report.is_empty() {
            self.info("No Chinese characters found.");
            return;
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in report.wrap_lines(line_length) {
            if writeln!(out, "{}", line).is_err() {
                // Downstream pipe closed
                return;
            }
        }
        let _ = out.flush();
    }

    // Specialized output methods
    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    status!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    status!("=== {} ===", title);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                status!("=== {} ===", title);
            }
        }
    }

    /// Print `line` as-is, regardless of mode or verbosity.
    pub fn print_line(&self, line: &str) {
        status!("{}", line);
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    status!("{}", style("─".repeat(50)).dim());
                } else {
                    status!("{}", "-".repeat(50));
                }
            }
            OutputMode::Plain => {
                status!("{}", "-".repeat(50));
            }
            OutputMode::Json => {} // No separator in JSON mode
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error | MessageType::Warning => {
                    eprintln!("{}{}", emoji, color_fn(message))
                }
                _ => status!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error | MessageType::Warning => eprintln!("{} {}", prefix, message),
                _ => status!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        let object = serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        match level {
            "error" | "warning" => eprintln!(
                "{}",
                serde_json::to_string(&object).unwrap_or_else(|_| "{}".to_string())
            ),
            _ => self.print_json_object(&object),
        }
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        status!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}
