// ==========================================
// 资源生物经济引擎 - 核心库
// ==========================================
// 系统定位: 自然资源开发决策支持
// 内容: 产量模型 / 轮伐期优化 / 情景模拟 / 可持续性评价 / 政策建议
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 参数与校验
pub mod config;

// 环境层 - 外部数据源与环境因子
pub mod environment;

// 引擎层 - 模型与决策规则
pub mod engine;

// 导出层 - CSV/JSON 输出
pub mod export;

// API 层 - 对外接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DataQuality, GuardedRatio, PolicyTier, Productivity, WaterSector};

// 领域实体
pub use domain::{
    AnalysisReport, IndicatorSet, MsyResult, Recommendation, ResourceParameterSet,
    RotationResult, Scenario, ScenarioOutcome, ScenarioYearRecord, SustainabilityIndex,
};

// 配置
pub use config::{ConfigError, ConfigLoader, EngineConfig};

// 环境数据源
pub use environment::{
    EnvironmentalDataSource, StaticEnvironmentalSource, UnavailableEnvironmentalSource,
};

// 引擎
pub use engine::{
    AnalysisOrchestrator, BiomassEstimator, IndicatorAggregator, RecommendationEngine,
    RotationOptimizer, ScenarioProductionSimulator, SustainabilityIndexCalculator,
    WaterAllocationOptimizer, YieldModel,
};

// API
pub use api::{AnalysisApi, ApiError, ApiResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "资源生物经济引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
