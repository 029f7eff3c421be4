pub mod punctuation;
pub mod ranges;

pub use punctuation::{is_common_punctuation, COMMON_PUNCTUATION};
pub use ranges::{is_target_character, Charset, CodePointRange};
