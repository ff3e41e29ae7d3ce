//! 静态行政区划知识表：省份别名、直辖市、不设区的市、新疆地州映射

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// 省级行政区及其别名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceEntry {
    /// 规范全称
    pub full: &'static str,
    /// 可匹配的别名（包含全称本身）
    pub aliases: &'static [&'static str],
}

const fn entry(full: &'static str, aliases: &'static [&'static str]) -> ProvinceEntry {
    ProvinceEntry { full, aliases }
}

/// 省级行政区列表
///
/// 直辖市的规范名不带"市"后缀。
pub const PROVINCES: &[ProvinceEntry] = &[
    // 直辖市
    entry("北京", &["北京", "北京市"]),
    entry("天津", &["天津", "天津市"]),
    entry("上海", &["上海", "上海市"]),
    entry("重庆", &["重庆", "重庆市"]),
    // 省份
    entry("河北省", &["河北", "河北省"]),
    entry("山西省", &["山西", "山西省"]),
    entry("辽宁省", &["辽宁", "辽宁省"]),
    entry("吉林省", &["吉林", "吉林省"]),
    entry("黑龙江省", &["黑龙江", "黑龙江省"]),
    entry("江苏省", &["江苏", "江苏省"]),
    entry("浙江省", &["浙江", "浙江省"]),
    entry("安徽省", &["安徽", "安徽省"]),
    entry("福建省", &["福建", "福建省"]),
    entry("江西省", &["江西", "江西省"]),
    entry("山东省", &["山东", "山东省"]),
    entry("河南省", &["河南", "河南省"]),
    entry("湖北省", &["湖北", "湖北省"]),
    entry("湖南省", &["湖南", "湖南省"]),
    entry("广东省", &["广东", "广东省"]),
    entry("海南省", &["海南", "海南省"]),
    entry("四川省", &["四川", "四川省"]),
    entry("贵州省", &["贵州", "贵州省"]),
    entry("云南省", &["云南", "云南省"]),
    entry("陕西省", &["陕西", "陕西省"]),
    entry("甘肃省", &["甘肃", "甘肃省"]),
    entry("青海省", &["青海", "青海省"]),
    // 自治区
    entry("内蒙古自治区", &["内蒙古", "内蒙古自治区"]),
    entry("广西壮族自治区", &["广西", "广西壮族自治区"]),
    entry("西藏自治区", &["西藏", "西藏自治区"]),
    entry("宁夏回族自治区", &["宁夏", "宁夏回族自治区"]),
    entry("新疆维吾尔自治区", &["新疆", "新疆维吾尔自治区"]),
    // 特别行政区
    entry("香港特别行政区", &["香港", "香港特别行政区"]),
    entry("澳门特别行政区", &["澳门", "澳门特别行政区"]),
    entry("台湾省", &["台湾", "台湾省"]),
];

/// 直辖市列表（规范名）
pub const MUNICIPALITIES: [&str; 4] = ["北京", "天津", "上海", "重庆"];

/// 新疆维吾尔自治区的规范名
pub const XINJIANG: &str = "新疆维吾尔自治区";

/// 不设区的地级市（直筒子市）
pub const NO_DISTRICT_CITIES: [&str; 5] = ["东莞市", "中山市", "儋州市", "嘉峪关市", "三沙市"];

/// 新疆地州简称 -> 全称
///
/// 这些简称本身不带后缀，默认补"市"会得到错误的层级。
const XINJIANG_PREFECTURES: [(&str, &str); 10] = [
    ("喀什", "喀什地区"),
    ("阿克苏", "阿克苏地区"),
    ("和田", "和田地区"),
    ("吐鲁番", "吐鲁番市"),
    ("哈密", "哈密市"),
    ("伊犁", "伊犁哈萨克自治州"),
    ("昌吉", "昌吉回族自治州"),
    ("博尔塔拉", "博尔塔拉蒙古自治州"),
    ("巴音郭楞", "巴音郭楞蒙古自治州"),
    ("克孜勒苏", "克孜勒苏柯尔克孜自治州"),
];

static ALIAS_INDEX: Lazy<AliasIndex> = Lazy::new(|| AliasIndex::build(PROVINCES));

static NO_DISTRICT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NO_DISTRICT_CITIES.into_iter().collect());

static XINJIANG_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| XINJIANG_PREFECTURES.into_iter().collect());

/// 展平后的别名索引，按别名长度降序排列
///
/// 顺序扫描时第一个命中的前缀即为最长匹配，短别名不会抢先于更具体的长别名。
#[derive(Debug)]
pub struct AliasIndex {
    entries: Vec<(&'static str, &'static str)>,
}

impl AliasIndex {
    /// 从省份列表构建索引
    pub fn build(provinces: &[ProvinceEntry]) -> Self {
        let mut entries: Vec<(&'static str, &'static str)> = provinces
            .iter()
            .flat_map(|p| p.aliases.iter().map(move |alias| (*alias, p.full)))
            .collect();
        // 稳定排序，同长度保持表内顺序
        entries.sort_by_key(|(alias, _)| std::cmp::Reverse(alias.chars().count()));
        Self { entries }
    }

    /// 全局索引
    pub fn global() -> &'static AliasIndex {
        &ALIAS_INDEX
    }

    /// 查找作为 `text` 前缀的最长别名
    ///
    /// 返回 (别名, 规范全称)
    pub fn find_longest_prefix(&self, text: &str) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .find(|(alias, _)| text.starts_with(*alias))
            .copied()
    }

    /// 按匹配顺序遍历 (别名, 规范全称)
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// 是否是直辖市
pub fn is_municipality(province: &str) -> bool {
    MUNICIPALITIES.contains(&province)
}

/// 是否是不设区的市
pub fn is_no_district_city(city: &str) -> bool {
    NO_DISTRICT_SET.contains(city)
}

/// 新疆地州简称的全称
pub fn xinjiang_prefecture(short: &str) -> Option<&'static str> {
    XINJIANG_OVERRIDES.get(short).copied()
}
