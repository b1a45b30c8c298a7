//! 比对过程中的错误类型。
//!
//! 所有错误对单次比对请求都是不可恢复的：计算是纯函数式的，
//! 不改变输入就重试没有意义，因此这里只负责尽早、准确地失败。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Debug, Error)]
pub enum AlignError {
    /// 输入源缺失、无法读取，或者形状不合法（如打分表列数不对）
    #[error("missing or malformed input '{origin}': {reason}")]
    MissingInput { origin: String, reason: String },

    /// 序列中的符号在打分表里没有对应的行/列
    #[error("unknown symbol {symbol:?} in {location}")]
    UnknownSymbol { symbol: char, location: String },

    /// 空序列、非整数 gap penalty、矩阵与序列不一致等
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AlignError {
    pub(crate) fn missing(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        AlignError::MissingInput { origin: origin.into(), reason: reason.into() }
    }

    pub(crate) fn unknown(symbol: u8, location: impl Into<String>) -> Self {
        AlignError::UnknownSymbol { symbol: symbol as char, location: location.into() }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AlignError::InvalidInput(msg.into())
    }
}
