// ==========================================
// 资源生物经济引擎 - 环境数据错误类型
// ==========================================
// 说明: 环境数据错误一律在本地恢复（回退默认因子）,不向上传播为致命错误
// ==========================================

use thiserror::Error;

/// 环境数据获取错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("外部数据缺失: {0}")]
    NoData(String),

    #[error("外部数据获取超时: {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("外部数据源错误: {0}")]
    Source(String),
}

/// 环境层 Result 类型别名
pub type EnvironmentResult<T> = Result<T, EnvironmentError>;
