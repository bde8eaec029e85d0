// ==========================================
// 资源生物经济引擎 - API 层
// ==========================================
// 职责: 对外提供分析接口,供命令行或上层应用调用
// ==========================================

pub mod analysis_api;
pub mod error;

// 重导出核心类型
pub use analysis_api::AnalysisApi;
pub use error::{ApiError, ApiResult};
