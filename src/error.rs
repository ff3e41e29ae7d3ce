//! 错误类型定义

use thiserror::Error;

/// 严格解析错误
///
/// 只由 [`AddressParser::try_parse`](crate::AddressParser::try_parse) 返回，
/// 宽松的 `parse` 永不失败。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 输入为空或只含分隔符
    #[error("Empty address")]
    Empty,

    /// 首段无法识别出省级行政区
    #[error("No matching province found for: {0}")]
    UnknownProvince(String),
}
