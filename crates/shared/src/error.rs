//! 统一错误处理模块
//!
//! 定义销售数据生成链路上所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 调用链只通过 Result 传递错误，日志统一在调用边界记录一次。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum SalesError {
    // ==================== 参考数据错误 ====================
    #[error("参考数据缺失: {dataset} path={path}")]
    ReferenceDataMissing {
        dataset: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("参考数据格式错误: {dataset} - {reason}")]
    ReferenceDataMalformed { dataset: String, reason: String },

    #[error("参考数据为空: {dataset}")]
    EmptyReferenceData { dataset: String },

    // ==================== 生成错误 ====================
    #[error("交易记录生成失败: {0}")]
    GenerationFailed(String),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("无效的配置: {field} - {message}")]
    InvalidConfig { field: String, message: String },

    // ==================== 调用错误 ====================
    #[error("无效的调用事件: {0}")]
    InvalidEvent(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SalesError>;

impl SalesError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReferenceDataMissing { .. } => "REFERENCE_DATA_MISSING",
            Self::ReferenceDataMalformed { .. } => "REFERENCE_DATA_MALFORMED",
            Self::EmptyReferenceData { .. } => "EMPTY_REFERENCE_DATA",
            Self::GenerationFailed(_) => "GENERATION_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::InvalidEvent(_) => "INVALID_EVENT",
        }
    }

    /// 构造格式错误
    pub fn malformed(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReferenceDataMalformed {
            dataset: dataset.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = SalesError::EmptyReferenceData {
            dataset: "stores".to_string(),
        };
        assert_eq!(err.code(), "EMPTY_REFERENCE_DATA");

        let err = SalesError::malformed("products", "missing field `mrp`");
        assert_eq!(err.code(), "REFERENCE_DATA_MALFORMED");
    }

    #[test]
    fn test_error_display() {
        let err = SalesError::ReferenceDataMissing {
            dataset: "stores".to_string(),
            path: "stores.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "参考数据缺失: stores path=stores.json");

        let err = SalesError::GenerationFailed("total 溢出".to_string());
        assert_eq!(err.to_string(), "交易记录生成失败: total 溢出");
    }
}
