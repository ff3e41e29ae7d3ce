//! # cnaddr - 中国点分地址解析
//!
//! 将 "省·市·区·街道" 形式的点分地址解析为结构化的四级记录，
//! 并能把记录重新格式化为规范的点分文本。
//!
//! ## 功能特性
//!
//! - 省份简称与全称互认（如 "广东" -> "广东省"），最长别名优先
//! - 直辖市没有市一级，`city` 恒为空
//! - 新疆地州简称按查表补全（如 "喀什" -> "喀什地区"）
//! - 不设区的地级市（东莞、中山、儋州、嘉峪关、三沙）下一段原样保留
//! - 无法识别的输入整体落入 `street`，不丢信息
//! - 地址脱敏，只保留省、市两级（`mask`）
//!
//! 解析是有损的规范化：不校验行政区划是否真实存在，也不保证还原原始文本。
//!
//! ## 快速开始
//!
//! ```rust
//! use cnaddr::AddressParser;
//!
//! let parser = AddressParser::new();
//!
//! let result = parser.parse("广东·深圳·南山");
//! assert_eq!(result.province, "广东省");
//! assert_eq!(result.city, "深圳市");
//! assert_eq!(result.district, "南山区");
//!
//! // 直辖市
//! let result = parser.parse("北京·朝阳区·望京街道");
//! assert_eq!(result.province, "北京");
//! assert_eq!(result.city, "");
//! assert_eq!(result.street, "望京街道");
//!
//! // 格式化
//! assert_eq!(parser.format(&result), "北京 · 朝阳区 · 望京街道");
//! ```

mod data;
mod error;
mod mask;
mod normalize;
mod parser;
mod region;
mod segment;

pub use data::{AliasIndex, ProvinceEntry, MUNICIPALITIES, NO_DISTRICT_CITIES, PROVINCES};
pub use error::ParseError;
pub use mask::MASK;
pub use parser::{AddressParser, ProvinceMatch};
pub use region::ParsedAddress;
pub use segment::{JOINER, SEPARATOR};

/// 便捷函数：使用全局解析器解析地址
///
/// ```rust
/// let result = cnaddr::parse("新疆·喀什·疏附县");
/// assert_eq!(result.province, "新疆维吾尔自治区");
/// assert_eq!(result.city, "喀什地区");
/// assert_eq!(result.district, "疏附县");
/// ```
pub fn parse(input: &str) -> ParsedAddress {
    AddressParser::global().parse(input)
}

/// 便捷函数：解析可能缺失的输入
pub fn parse_opt(input: Option<&str>) -> ParsedAddress {
    AddressParser::global().parse_opt(input)
}

/// 便捷函数：严格解析，无法识别省份时返回错误
pub fn try_parse(input: &str) -> Result<ParsedAddress, ParseError> {
    AddressParser::global().try_parse(input)
}

/// 便捷函数：格式化为规范的点分地址
///
/// ```rust
/// let addr = cnaddr::parse("广东·东莞·莲花山");
/// assert_eq!(cnaddr::format(&addr), "广东省 · 东莞市 · 莲花山");
/// ```
pub fn format(address: &ParsedAddress) -> String {
    AddressParser::global().format(address)
}

/// 便捷函数：地址脱敏
///
/// ```rust
/// assert_eq!(cnaddr::mask("广东省·深圳市·南山区"), "广东省·深圳市·***");
/// assert_eq!(cnaddr::mask("广东省深圳市南山区"), "广东省深圳市·***");
/// ```
pub fn mask(input: &str) -> String {
    AddressParser::global().mask(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenarios() {
        let r = parse("北京·朝阳区·望京街道");
        assert_eq!(r.province, "北京");
        assert_eq!(r.city, "");
        assert_eq!(r.district, "朝阳区");
        assert_eq!(r.street, "望京街道");

        let r = parse("广东·东莞·莲花山");
        assert_eq!(r.city, "东莞市");
        assert_eq!(r.district, "莲花山");

        let r = parse("火星·一号殖民地");
        assert!(!r.has_province());
        assert_eq!(r.street, "火星 · 一号殖民地");

        assert!(parse("").is_empty());
        assert!(parse_opt(None).is_empty());
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(try_parse(""), Err(ParseError::Empty));
        assert!(try_parse("广东·深圳").is_ok());
    }

    #[test]
    fn test_format_missing_fields() {
        let addr = ParsedAddress {
            city: "深圳市".to_string(),
            ..Default::default()
        };
        assert_eq!(format(&addr), "深圳市");
        assert_eq!(format(&ParsedAddress::default()), "");
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("北京·朝阳区·望京街道"), "北京·朝阳区·***");
        assert_eq!(mask("某某路123号"), MASK);
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::UnknownProvince("火星".to_string()).to_string(),
            "No matching province found for: 火星"
        );
    }
}
