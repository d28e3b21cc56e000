//! 错误类型定义

use thiserror::Error;

/// 名称归一化错误
///
/// 只有严格查询接口 [`crate::NameNormalizer::lookup`] 会返回错误；
/// [`crate::normalize`] 本身对任何输入都有定义，从不失败。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// 未找到匹配的省份
    #[error("unknown province name: {0}")]
    UnknownName(String),
}
