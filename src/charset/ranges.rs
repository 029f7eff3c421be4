use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    const fn new(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, start, end }
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }
}

const FULL_RANGES: &[CodePointRange] = &[
    CodePointRange::new("CJK Symbols and Punctuation", 0x3000, 0x303F),
    CodePointRange::new("CJK Unified Ideographs Extension A", 0x3400, 0x4DBF),
    CodePointRange::new("CJK Unified Ideographs", 0x4E00, 0x9FFF),
    CodePointRange::new("Halfwidth and Fullwidth Forms", 0xFF00, 0xFFEF),
    CodePointRange::new("CJK Unified Ideographs Extension B", 0x20000, 0x2A6DF),
    CodePointRange::new("CJK Unified Ideographs Extension C", 0x2A700, 0x2B73F),
    CodePointRange::new("CJK Unified Ideographs Extension D", 0x2B740, 0x2B81F),
    CodePointRange::new("CJK Unified Ideographs Extension E", 0x2B820, 0x2CEAF),
    CodePointRange::new("CJK Unified Ideographs Extension F", 0x2CEB0, 0x2EBEF),
];

// GB2312-era ideograph block, before the 9FA6.. additions.
const BASIC_RANGES: &[CodePointRange] = &[CodePointRange::new(
    "CJK Unified Ideographs (U+4E00..U+9FA5)",
    0x4E00,
    0x9FA5,
)];

/// Which code-point table a scan accepts characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Unified ideographs, extensions A-F, CJK punctuation and fullwidth forms
    #[default]
    Full,
    /// Unified ideographs U+4E00..U+9FA5 only
    Basic,
}

impl Charset {
    pub fn ranges(self) -> &'static [CodePointRange] {
        match self {
            Charset::Full => FULL_RANGES,
            Charset::Basic => BASIC_RANGES,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.ranges().iter().any(|range| range.contains(c))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Full => write!(f, "full"),
            Charset::Basic => write!(f, "basic"),
        }
    }
}

/// Returns true if `c` lies in one of the CJK ranges of the full table.
pub fn is_target_character(c: char) -> bool {
    Charset::Full.contains(c)
}
