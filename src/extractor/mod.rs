pub mod char_extractor;
pub mod scan_report;

pub use char_extractor::CharExtractor;
pub use scan_report::{wrap_characters, DirectorySummary, ScanReport};
