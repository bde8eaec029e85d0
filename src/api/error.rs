// ==========================================
// 资源生物经济引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,将各层技术错误转换为用户可读的错误消息
// ==========================================

use crate::config::error::ConfigError;
use crate::export::error::ExportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("配置加载失败: {0}")]
    ConfigLoad(String),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("导出失败: {0}")]
    Export(#[from] ExportError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownStock(name) => ApiError::NotFound(format!("种群 {}", name)),
            e @ (ConfigError::FileRead { .. } | ConfigError::Parse(_)) => {
                ApiError::ConfigLoad(e.to_string())
            }
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let api_err: ApiError = ConfigError::UnknownStock("Trucha".to_string()).into();
        match api_err {
            ApiError::NotFound(msg) => assert!(msg.contains("Trucha")),
            _ => panic!("Expected NotFound"),
        }

        let api_err: ApiError = ConfigError::invalid("scenario.years", 0, "必须大于 0").into();
        match api_err {
            ApiError::InvalidInput(msg) => assert!(msg.contains("scenario.years")),
            _ => panic!("Expected InvalidInput"),
        }
    }
}
