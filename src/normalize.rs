//! 行政后缀识别与市、区县名称标准化

use crate::data::{xinjiang_prefecture, XINJIANG};
use crate::segment::trim_text;
use once_cell::sync::Lazy;
use regex::Regex;

/// 区县及以下层级后缀
static DISTRICT_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(自治县|旗|区|县|市|林区|矿区|特区|新区|镇|街道|乡)$").expect("valid regex")
});

/// 街道、道路、村、社区等层级后缀
static STREET_LIKE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(镇|街道|乡|路|街|道|巷|弄|村|社区|大道|广场)$").expect("valid regex")
});

/// 地级层级后缀（市、地区、自治州、盟、州）
static CITY_TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(市|地区|自治州|盟|州)$").expect("valid regex"));

/// 别名匹配后残留在开头的行政限定词
static LEADING_QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(省|市|自治区|特别行政区|壮族|回族|维吾尔|藏)").expect("valid regex")
});

/// 是否带有区县及以下层级后缀
pub fn has_district_suffix(s: &str) -> bool {
    DISTRICT_SUFFIX_RE.is_match(s)
}

/// 是否像街道、道路、村一级
pub fn is_street_like(s: &str) -> bool {
    STREET_LIKE_RE.is_match(s)
}

/// 是否带有地级层级后缀
pub fn has_city_tier_suffix(s: &str) -> bool {
    CITY_TIER_RE.is_match(s)
}

/// 反复去掉开头的行政限定词，直到没有可去掉的为止
///
/// ```text
/// "维吾尔喀什" -> "喀什"
/// "省深圳"     -> "深圳"
/// ```
pub fn strip_leading_qualifiers(s: &str) -> &str {
    let mut out = s;
    while let Some(m) = LEADING_QUALIFIER_RE.find(out) {
        out = &out[m.end()..];
    }
    out
}

/// 城市名称标准化
///
/// 新疆的地州简称查表得到全称；已带市、地区、盟、自治州后缀的原样返回；
/// 其余补"市"。
pub fn normalize_city(raw: &str, province: &str) -> String {
    let s = trim_text(raw);
    if s.is_empty() {
        return String::new();
    }
    if province == XINJIANG {
        if let Some(full) = xinjiang_prefecture(s) {
            return full.to_string();
        }
    }
    if s.ends_with("市") || s.ends_with("地区") || s.ends_with("盟") || s.ends_with("自治州") {
        s.to_string()
    } else {
        format!("{}市", s)
    }
}

/// 区县名称标准化
///
/// 已带区县级后缀的原样返回。否则看后一段：后一段像街道、道路、村一级时，
/// 当前段视为县级市补"市"，否则补"区"。
///
/// 注意：这条规则依赖输入顺序，对确有歧义的输入可能误判。
pub fn normalize_district(raw: &str, next: Option<&str>) -> String {
    let s = trim_text(raw);
    if s.is_empty() {
        return String::new();
    }
    if has_district_suffix(s) {
        return s.to_string();
    }
    match next.map(trim_text) {
        Some(n) if !n.is_empty() && is_street_like(n) => format!("{}市", s),
        _ => format!("{}区", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_classifiers() {
        assert!(has_district_suffix("南山区"));
        assert!(has_district_suffix("疏附县"));
        assert!(has_district_suffix("额济纳旗"));
        assert!(has_district_suffix("义乌市"));
        assert!(has_district_suffix("长安镇"));
        assert!(has_district_suffix("望京街道"));
        assert!(!has_district_suffix("南山"));
        assert!(!has_district_suffix(""));

        assert!(is_street_like("科技园路"));
        assert!(is_street_like("望京街道"));
        assert!(is_street_like("幸福村"));
        assert!(is_street_like("人民广场"));
        assert!(!is_street_like("南山"));

        assert!(has_city_tier_suffix("深圳市"));
        assert!(has_city_tier_suffix("喀什地区"));
        assert!(has_city_tier_suffix("锡林郭勒盟"));
        assert!(has_city_tier_suffix("杭州"));
        assert!(!has_city_tier_suffix("深圳"));
    }

    #[test]
    fn test_strip_leading_qualifiers() {
        assert_eq!(strip_leading_qualifiers("维吾尔喀什"), "喀什");
        assert_eq!(strip_leading_qualifiers("壮族自治区南宁"), "南宁");
        assert_eq!(strip_leading_qualifiers("省深圳市"), "深圳市");
        assert_eq!(strip_leading_qualifiers("深圳"), "深圳");
        assert_eq!(strip_leading_qualifiers("省"), "");
        assert_eq!(strip_leading_qualifiers(""), "");
    }

    // ==================== 城市 ====================

    #[test]
    fn test_normalize_city_default_suffix() {
        assert_eq!(normalize_city("深圳", "广东省"), "深圳市");
        assert_eq!(normalize_city("深圳市", "广东省"), "深圳市");
        assert_eq!(normalize_city("杭州", "浙江省"), "杭州市");
        assert_eq!(normalize_city("大理白族自治州", "云南省"), "大理白族自治州");
        assert_eq!(normalize_city("锡林郭勒盟", "内蒙古自治区"), "锡林郭勒盟");
        assert_eq!(normalize_city("  ", "广东省"), "");
    }

    #[test]
    fn test_normalize_city_xinjiang_overrides() {
        assert_eq!(normalize_city("喀什", XINJIANG), "喀什地区");
        assert_eq!(normalize_city("伊犁", XINJIANG), "伊犁哈萨克自治州");
        assert_eq!(normalize_city("哈密", XINJIANG), "哈密市");
        assert_eq!(normalize_city("乌鲁木齐", XINJIANG), "乌鲁木齐市");
        // 仅对新疆生效
        assert_eq!(normalize_city("喀什", "甘肃省"), "喀什市");
    }

    // ==================== 区县 ====================

    #[test]
    fn test_normalize_district() {
        assert_eq!(normalize_district("南山区", None), "南山区");
        assert_eq!(normalize_district("疏附县", Some("")), "疏附县");
        assert_eq!(normalize_district("南山", None), "南山区");
        assert_eq!(normalize_district("南山", Some("")), "南山区");
        assert_eq!(normalize_district("朝阳", Some("某小区")), "朝阳区");
        assert_eq!(normalize_district("", Some("望京街道")), "");
    }

    #[test]
    fn test_normalize_district_street_lookahead() {
        // 后一段像街道时当前段视为县级市
        assert_eq!(normalize_district("朝阳", Some("望京街道")), "朝阳市");
        assert_eq!(normalize_district("南山", Some("科技园路")), "南山市");
        assert_eq!(normalize_district("南山", Some("  科技园路 ")), "南山市");
    }
}
