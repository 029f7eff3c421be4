/// Punctuation marks added to every result unless `--no-punctuation` is set.
pub const COMMON_PUNCTUATION: [char; 21] = [
    '。', '，', '、', '；', '：', '？', '！', '（', '）', '【', '】', '『', '』', '《', '》', '…', '—',
    '‘', '’', '“', '”',
];

pub fn is_common_punctuation(c: char) -> bool {
    COMMON_PUNCTUATION.contains(&c)
}
