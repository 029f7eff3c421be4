use crate::charset::Charset;
use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cjkscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect every unique Chinese character used in a source tree")]
#[command(
    long_about = "cjkscan walks one or more directories, extracts every CJK ideograph and \
                  CJK punctuation mark from matching source files, and prints the sorted, \
                  deduplicated set. The output is typically fed to a font subsetter."
)]
#[command(after_help = "EXAMPLES:\n  \
    cjkscan\n  \
    cjkscan nyx/nyx_gui/frontend bdk/usb -e .c .h\n  \
    cjkscan src --no-punctuation --line-length 80 --quiet\n  \
    cjkscan src --charset basic --exclude build,vendor\n  \
    cjkscan --generate-config --config cjkscan.toml")]
pub struct Cli {
    /// Directories to scan (defaults to the configured directories)
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// File name suffixes to include (e.g. -e .c .h .cpp)
    #[arg(short, long, value_name = "EXT", num_args = 1.., value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Do not add the built-in common Chinese punctuation marks
    #[arg(short = 'n', long, visible_alias = "np")]
    pub no_punctuation: bool,

    /// Number of characters per output line
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub line_length: Option<u64>,

    /// Character table to match against
    #[arg(long, value_enum)]
    pub charset: Option<Charset>,

    /// Directory names to skip while walking (comma-separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Maximum directory depth to descend
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_depth: Option<u64>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode, print only the final character lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (list the files that would be scanned without reading them)
    #[arg(long)]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    /// Rewrite the two-letter `-np` spelling to `--no-punctuation`. Arguments
    /// after a `--` terminator are left alone.
    pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut positional_only = false;

        args.into_iter()
            .map(Into::into)
            .map(|arg| {
                if positional_only {
                    return arg;
                }
                if arg == "--" {
                    positional_only = true;
                    arg
                } else if arg == "-np" {
                    OsString::from("--no-punctuation")
                } else {
                    arg
                }
            })
            .collect()
    }

    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let directories = if self.directories.is_empty() {
            None
        } else {
            Some(self.directories.clone())
        };

        CliOverrides::new()
            .with_directories(directories)
            .with_extensions(self.extensions.clone())
            .with_charset(self.charset)
            .with_exclude(self.exclude.clone())
            .with_max_depth(self.max_depth.map(|d| d as usize))
            .with_include_punctuation(self.no_punctuation.then_some(false))
            .with_line_length(self.line_length.map(|n| n as usize))
    }

    pub fn config_output_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from("cjkscan.toml"))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
