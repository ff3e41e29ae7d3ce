//! 地址脱敏：只保留省、市两级，其余用 `***` 遮盖

use crate::segment::{split_segments_by, trim_text, SEPARATOR};
use once_cell::sync::Lazy;
use regex::Regex;

/// 脱敏时视为分段的字符
const MASK_SEPARATOR_CHARS: [char; 5] = [SEPARATOR, '•', '，', ',', '/'];

/// 遮盖占位
pub const MASK: &str = "***";

/// 省级后缀（省、自治区、特别行政区）
static PROVINCE_TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(省|自治区|特别行政区)").expect("valid regex"));

/// 地级后缀（市、州、盟、地区）
static CITY_TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(市|州|盟|地区)").expect("valid regex"));

/// 对地址脱敏
///
/// - 能分出两段及以上时保留前两段：`"广东省·深圳市·南山区"` -> `"广东省·深圳市·***"`
/// - 不分段时截到第一个省级后缀，再截到其后第一个地级后缀
/// - 没有省级后缀时截到第一个"市"
/// - 都没有时整体遮盖为 `***`
///
/// 空白输入返回空串。
pub fn mask_address(input: &str) -> String {
    let s = trim_text(input);
    if s.is_empty() {
        return String::new();
    }

    let segments = split_segments_by(s, &MASK_SEPARATOR_CHARS);
    if let [first, second, ..] = segments.as_slice() {
        return format!("{first}{SEPARATOR}{second}{SEPARATOR}{MASK}");
    }

    if let Some(province) = PROVINCE_TIER_RE.find(s) {
        let end = match CITY_TIER_RE.find(&s[province.end()..]) {
            Some(city) => province.end() + city.end(),
            None => province.end(),
        };
        return format!("{}{SEPARATOR}{MASK}", &s[..end]);
    }

    match s.find('市') {
        Some(pos) => format!("{}{SEPARATOR}{MASK}", &s[..pos + '市'.len_utf8()]),
        None => MASK.to_string(),
    }
}
