//! 地址分段

/// 规范分隔符
pub const SEPARATOR: char = '·';

/// 拼接各段时使用的分隔串
pub const JOINER: &str = " · ";

/// 视同规范分隔符的字符
const SEPARATOR_CHARS: [char; 4] = [SEPARATOR, '•', '，', ','];

/// 去掉首尾空白，包括 BOM（U+FEFF）
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 将原始文本切分为去除首尾空白的非空段
///
/// ```text
/// "广东，深圳 • 南山" -> ["广东", "深圳", "南山"]
/// ```
pub fn split_segments(raw: &str) -> Vec<&str> {
    split_segments_by(raw, &SEPARATOR_CHARS)
}

/// 按给定的分隔字符集切分，规则同 [`split_segments`]
pub fn split_segments_by<'a>(raw: &'a str, separators: &[char]) -> Vec<&'a str> {
    raw.split(separators)
        .map(trim_text)
        .filter(|s| !s.is_empty())
        .collect()
}

/// 用规范分隔串拼接各段，跳过空段
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| trim_text(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(JOINER)
}
