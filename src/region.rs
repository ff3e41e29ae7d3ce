//! 解析结果数据结构

use crate::mask::mask_address;
use crate::segment::join_segments;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 解析结果
///
/// 四个字段相互独立，均可能为空：
/// - 省份为空时，市和区县也为空，全部内容落入 `street`
/// - 直辖市没有市一级，`city` 恒为空
/// - 不设区的市，`district` 保存原样的下一段，不强加后缀
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParsedAddress {
    /// 省份（含直辖市、自治区、特别行政区）
    pub province: String,
    /// 城市（地级市、地区、自治州、盟）
    pub city: String,
    /// 区县
    pub district: String,
    /// 剩余各段，以规范分隔串拼接
    pub street: String,
}

impl ParsedAddress {
    /// 创建空的解析结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 四个字段是否都为空
    pub fn is_empty(&self) -> bool {
        self.province.is_empty()
            && self.city.is_empty()
            && self.district.is_empty()
            && self.street.is_empty()
    }

    /// 是否解析到了省份
    pub fn has_province(&self) -> bool {
        !self.province.is_empty()
    }

    /// 是否解析到了城市
    pub fn has_city(&self) -> bool {
        !self.city.is_empty()
    }

    /// 是否解析到了区县
    pub fn has_district(&self) -> bool {
        !self.district.is_empty()
    }

    /// 是否有剩余的街道部分
    pub fn has_street(&self) -> bool {
        !self.street.is_empty()
    }

    /// 格式化为规范的点分地址，空字段跳过
    pub fn full_address(&self) -> String {
        join_segments(&[&self.province, &self.city, &self.district, &self.street])
    }

    /// 脱敏后的地址，只保留省、市两级
    pub fn masked(&self) -> String {
        mask_address(&self.full_address())
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_address())
    }
}
