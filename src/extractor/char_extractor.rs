use crate::charset::Charset;
use crate::error::{CjkScanError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct CharExtractor {
    charset: Charset,
    buffer_size: usize,
}

impl CharExtractor {
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            buffer_size: 64 * 1024, // 64KB buffer
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(4096); // Minimum 4KB buffer
        self
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn extract_from_str(&self, text: &str) -> BTreeSet<char> {
        text.chars().filter(|&c| self.charset.contains(c)).collect()
    }

    /// Reads `path` line by line; invalid UTF-8 is decoded lossily and never matches.
    pub fn extract_from_file(&self, path: &Path) -> Result<BTreeSet<char>> {
        let file = fs::File::open(path).map_err(|e| CjkScanError::from_io(path, e))?;
        let reader = BufReader::with_capacity(self.buffer_size, file);

        let mut characters = BTreeSet::new();
        // '\n' never occurs inside a multi-byte UTF-8 sequence.
        for line in reader.split(b'\n') {
            let line = line.map_err(|e| CjkScanError::from_io(path, e))?;
            characters.extend(
                String::from_utf8_lossy(&line)
                    .chars()
                    .filter(|&c| self.charset.contains(c)),
            );
        }

        Ok(characters)
    }
}

impl Default for CharExtractor {
    fn default() -> Self {
        Self::new(Charset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_from_str() {
        let extractor = CharExtractor::default();
        let chars = extractor.extract_from_str("lv_label_set_text(label, \"中文测试，中文\");");

        let expected: BTreeSet<char> = ['中', '文', '测', '试', '，'].into_iter().collect();
        assert_eq!(chars, expected);
    }

    #[test]
    fn test_ascii_only_text() {
        let extractor = CharExtractor::default();
        assert!(extractor.extract_from_str("int main(void) { return 0; }").is_empty());
    }

    #[test]
    fn test_basic_charset_skips_punctuation() {
        let extractor = CharExtractor::new(Charset::Basic);
        let chars = extractor.extract_from_str("你好，世界。");

        let expected: BTreeSet<char> = ['你', '好', '世', '界'].into_iter().collect();
        assert_eq!(chars, expected);
        assert_eq!(extractor.charset(), Charset::Basic);
    }

    #[test]
    fn test_extract_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gui.c");
        std::fs::write(&path, "// 第一行\nconst char *s = \"第二行\";\r\n").unwrap();

        let extractor = CharExtractor::default().with_buffer_size(16);
        let chars = extractor.extract_from_file(&path).unwrap();

        let expected: BTreeSet<char> = ['第', '一', '二', '行'].into_iter().collect();
        assert_eq!(chars, expected);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.c");

        let mut bytes = "汉".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE, 0x80]);
        bytes.extend_from_slice("字".as_bytes());
        // Truncated three-byte sequence at end of file
        bytes.extend_from_slice(&"中".as_bytes()[..2]);
        std::fs::write(&path, bytes).unwrap();

        let chars = CharExtractor::default().extract_from_file(&path).unwrap();

        let expected: BTreeSet<char> = ['汉', '字'].into_iter().collect();
        assert_eq!(chars, expected);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.c");

        let result = CharExtractor::default().extract_from_file(&path);
        assert!(matches!(result, Err(CjkScanError::FileNotFound { .. })));
    }
}
