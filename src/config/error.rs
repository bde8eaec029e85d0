// ==========================================
// 资源生物经济引擎 - 配置错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 配置错误在模拟开始前即被拒绝（致命）
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 参数校验错误 =====
    #[error("参数非法: {field}={value}, 原因: {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("未知资源种类: {0}")]
    UnknownStock(String),

    // ===== 加载错误 =====
    #[error("配置文件读取失败 ({path}): {message}")]
    FileRead { path: String, message: String },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("环境变量覆写失败 ({key}={value}): {message}")]
    EnvOverride {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// 构造参数非法错误
    pub fn invalid(field: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// 配置层 Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
