// ==========================================
// 资源生物经济引擎 - 配置层
// ==========================================
// 职责: 配置定义、加载、覆写与校验
// 存储: JSON 文件 + 环境变量
// ==========================================

pub mod config_loader;
pub mod engine_config;
pub mod error;

// 重导出核心配置类型
pub use config_loader::{ConfigLoader, CONFIG_PATH_ENV, LOCALE_ENV, YEARS_ENV};
pub use engine_config::{
    default_water_sectors, BasinHydrology, EngineConfig, EnvironmentConfig, FisheryConfig,
    RecommendationThresholds, RotationConfig, ScenarioConfig, SectorConfig, StockConfig,
    SustainabilityScales, WaterAllocationConfig,
};
pub use error::{ConfigError, ConfigResult};
