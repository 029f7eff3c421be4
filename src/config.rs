use crate::charset::Charset;
use crate::error::{CjkScanError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub directories: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub charset: Charset,
    pub exclude_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub include_punctuation: bool,
    pub line_length: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directories: vec![
                PathBuf::from("./nyx/nyx_gui/frontend"),
                PathBuf::from("./bdk/usb"),
            ],
            extensions: vec![".c".to_string()],
            charset: Charset::Full,
            exclude_dirs: Vec::new(),
            exclude_patterns: Vec::new(),
            max_depth: None, // Unlimited
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_punctuation: true,
            line_length: 50,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CjkScanError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CjkScanError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CjkScanError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["cjkscan.toml", "cjkscan.config.toml", ".cjkscan.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref directories) = cli_args.directories {
            if !directories.is_empty() {
                self.scan.directories = directories.clone();
            }
        }

        if let Some(ref extensions) = cli_args.extensions {
            self.scan.extensions = extensions
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(charset) = cli_args.charset {
            self.scan.charset = charset;
        }

        if let Some(ref exclude) = cli_args.exclude {
            self.scan.exclude_dirs.extend(exclude.iter().cloned());
        }

        if let Some(max_depth) = cli_args.max_depth {
            self.scan.max_depth = Some(max_depth);
        }

        if let Some(include_punctuation) = cli_args.include_punctuation {
            self.output.include_punctuation = include_punctuation;
        }

        if let Some(line_length) = cli_args.line_length {
            self.output.line_length = line_length;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            return Err(CjkScanError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if self.output.line_length == 0 {
            return Err(CjkScanError::Config {
                message: "Line length must be greater than 0".to_string(),
            });
        }

        if self.scan.max_depth == Some(0) {
            return Err(CjkScanError::Config {
                message: "Maximum directory depth must be greater than 0".to_string(),
            });
        }

        for pattern in &self.scan.exclude_patterns {
            if let Err(e) = Regex::new(pattern) {
                return Err(CjkScanError::Config {
                    message: format!("Invalid exclude pattern '{}': {}", pattern, e),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub directories: Option<Vec<PathBuf>>,
    pub extensions: Option<Vec<String>>,
    pub charset: Option<Charset>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub include_punctuation: Option<bool>,
    pub line_length: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directories(mut self, directories: Option<Vec<PathBuf>>) -> Self {
        self.directories = directories;
        self
    }

    pub fn with_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_charset(mut self, charset: Option<Charset>) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_include_punctuation(mut self, include: Option<bool>) -> Self {
        self.include_punctuation = include;
        self
    }

    pub fn with_line_length(mut self, line_length: Option<usize>) -> Self {
        self.line_length = line_length;
        self
    }
}
