//! 地址解析器核心实现

use crate::data::{self, AliasIndex, PROVINCES};
use crate::error::ParseError;
use crate::mask::mask_address;
use crate::normalize::{
    has_city_tier_suffix, has_district_suffix, normalize_city, normalize_district,
    strip_leading_qualifiers,
};
use crate::region::ParsedAddress;
use crate::segment::{join_segments, split_segments, trim_text};
use once_cell::sync::Lazy;

/// 全局解析器实例
static GLOBAL_PARSER: Lazy<AddressParser> = Lazy::new(AddressParser::new);

/// 首段匹配到的省份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceMatch<'a> {
    /// 规范省份名
    pub province: &'static str,
    /// 去掉别名和行政限定词后的剩余文本
    pub rest: &'a str,
}

/// 地址解析器
///
/// 所有知识表都是进程级只读数据，解析器本身不持有可变状态，可跨线程共享。
#[derive(Debug, Clone, Copy)]
pub struct AddressParser {
    aliases: &'static AliasIndex,
}

impl AddressParser {
    /// 创建新的解析器实例
    pub fn new() -> Self {
        Self {
            aliases: AliasIndex::global(),
        }
    }

    /// 获取全局解析器实例
    pub fn global() -> &'static AddressParser {
        &GLOBAL_PARSER
    }

    /// 用别名索引匹配首段的省份
    ///
    /// 最长别名优先；命中后去掉剩余文本开头残留的"省"、"自治区"、民族名等限定词。
    ///
    /// ```rust
    /// use cnaddr::AddressParser;
    ///
    /// let m = AddressParser::new().match_province("新疆维吾尔喀什").unwrap();
    /// assert_eq!(m.province, "新疆维吾尔自治区");
    /// assert_eq!(m.rest, "喀什");
    /// ```
    pub fn match_province<'a>(&self, segment: &'a str) -> Option<ProvinceMatch<'a>> {
        let s = trim_text(segment);
        if s.is_empty() {
            return None;
        }
        let (alias, province) = self.aliases.find_longest_prefix(s)?;
        let rest = trim_text(strip_leading_qualifiers(&s[alias.len()..]));
        Some(ProvinceMatch { province, rest })
    }

    /// 解析点分地址
    ///
    /// # 参数
    /// * `input` - 形如 "省·市·区·街道" 的地址文本
    ///
    /// # 返回
    /// 解析结果；无法识别省份时全部内容落入 `street`
    ///
    /// # 示例
    /// ```rust
    /// use cnaddr::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// let result = parser.parse("广东·深圳·南山");
    /// assert_eq!(result.province, "广东省");
    /// assert_eq!(result.city, "深圳市");
    /// assert_eq!(result.district, "南山区");
    /// ```
    pub fn parse(&self, input: &str) -> ParsedAddress {
        let raw = trim_text(input);
        if raw.is_empty() {
            return ParsedAddress::empty();
        }

        let segments = split_segments(raw);
        let Some(head) = segments.first() else {
            return ParsedAddress::empty();
        };

        let Some(matched) = self.match_province(head) else {
            tracing::trace!(segments = segments.len(), "no province matched, keeping input as street");
            return ParsedAddress {
                street: join_segments(&segments),
                ..Default::default()
            };
        };
        let province = matched.province;

        let mut remaining: Vec<&str> = Vec::with_capacity(segments.len());
        if !matched.rest.is_empty() {
            remaining.push(matched.rest);
        }
        remaining.extend_from_slice(&segments[1..]);

        if data::is_municipality(province) {
            tracing::trace!(province, "municipality");
            return ParsedAddress {
                province: province.to_string(),
                city: String::new(),
                district: normalize_district(
                    remaining.first().copied().unwrap_or_default(),
                    remaining.get(1).copied(),
                ),
                street: join_segments(tail(&remaining, 1)),
            };
        }

        let Some(&first) = remaining.first() else {
            return ParsedAddress {
                province: province.to_string(),
                ..Default::default()
            };
        };
        let second = remaining.get(1).copied();

        // 只有一段且带区县后缀：省下直接是县级单位，没有市一级
        if second.is_none() && has_district_suffix(first) {
            tracing::trace!(province, "county directly under province");
            return ParsedAddress {
                province: province.to_string(),
                district: normalize_district(first, None),
                ..Default::default()
            };
        }

        let city = normalize_city(first, province);

        if data::is_no_district_city(&city) {
            tracing::trace!(province, city = %city, "no-district city");
            return ParsedAddress {
                province: province.to_string(),
                city,
                district: second.map(trim_text).unwrap_or_default().to_string(),
                street: join_segments(tail(&remaining, 2)),
            };
        }

        match second {
            Some(second) => {
                tracing::trace!(province, city = %city, "city tier");
                ParsedAddress {
                    province: province.to_string(),
                    city,
                    district: normalize_district(second, remaining.get(2).copied()),
                    street: join_segments(tail(&remaining, 2)),
                }
            }
            None => {
                // 有无地级后缀都按市一级处理
                tracing::trace!(
                    province,
                    city = %city,
                    suffixed = has_city_tier_suffix(first),
                    "single city token"
                );
                ParsedAddress {
                    province: province.to_string(),
                    city,
                    ..Default::default()
                }
            }
        }
    }

    /// 解析可能缺失的输入，缺失视为空串
    pub fn parse_opt(&self, input: Option<&str>) -> ParsedAddress {
        self.parse(input.unwrap_or_default())
    }

    /// 严格解析：输入为空或无法识别省份时返回错误
    ///
    /// 成功时的结果与 [`parse`](Self::parse) 完全一致。
    ///
    /// ```rust
    /// use cnaddr::{AddressParser, ParseError};
    ///
    /// let parser = AddressParser::new();
    /// assert!(parser.try_parse("北京·朝阳区").is_ok());
    /// assert_eq!(
    ///     parser.try_parse("火星·一号殖民地"),
    ///     Err(ParseError::UnknownProvince("火星".to_string()))
    /// );
    /// ```
    pub fn try_parse(&self, input: &str) -> Result<ParsedAddress, ParseError> {
        let segments = split_segments(input);
        let head = segments.first().ok_or(ParseError::Empty)?;
        if self.match_province(head).is_none() {
            return Err(ParseError::UnknownProvince(head.to_string()));
        }
        Ok(self.parse(input))
    }

    /// 将解析结果格式化为规范的点分地址
    ///
    /// ```rust
    /// use cnaddr::{AddressParser, ParsedAddress};
    ///
    /// let addr = ParsedAddress {
    ///     province: "北京".to_string(),
    ///     district: "朝阳区".to_string(),
    ///     street: "望京街道".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(AddressParser::new().format(&addr), "北京 · 朝阳区 · 望京街道");
    /// ```
    pub fn format(&self, address: &ParsedAddress) -> String {
        address.full_address()
    }

    /// 地址脱敏，只保留省、市两级
    ///
    /// ```rust
    /// use cnaddr::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// assert_eq!(parser.mask("新疆·喀什·疏附县"), "新疆·喀什·***");
    /// assert_eq!(parser.mask("深圳市南山区"), "深圳市·***");
    /// ```
    pub fn mask(&self, input: &str) -> String {
        mask_address(input)
    }

    /// 批量解析地址
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<ParsedAddress> {
        addresses.iter().map(|a| self.parse(a)).collect()
    }

    /// 检查地址是否有效（至少能识别出省份）
    pub fn is_valid_address(&self, address: &str) -> bool {
        self.parse(address).has_province()
    }

    /// 获取所有省级行政区的规范名
    pub fn provinces(&self) -> Vec<&'static str> {
        PROVINCES.iter().map(|p| p.full).collect()
    }

    /// 是否是直辖市（规范名）
    pub fn is_municipality(&self, province: &str) -> bool {
        data::is_municipality(province)
    }

    /// 是否是不设区的市
    pub fn is_no_district_city(&self, city: &str) -> bool {
        data::is_no_district_city(city)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}

fn tail<'s, 'a>(segments: &'s [&'a str], from: usize) -> &'s [&'a str] {
    segments.get(from..).unwrap_or_default()
}
