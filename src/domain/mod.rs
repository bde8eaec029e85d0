// ==========================================
// 资源生物经济引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、结果对象
// 红线: 不含引擎逻辑,不含外部数据访问
// ==========================================

pub mod environment;
pub mod indicator;
pub mod report;
pub mod resource;
pub mod scenario;
pub mod types;

// 重导出核心类型
pub use environment::{
    EnvironmentalFactorBundle, FactorProvenance, NdviProxies, RawEnvironmentalStats,
    ResolvedEnvironment,
};
pub use indicator::{IndicatorSet, SustainabilityIndex};
pub use report::{
    AnalysisReport, IndexDeltas, IndicatorDeltas, Recommendation, RotationPoint, RotationResult,
    SectorAllocation, WaterAllocationResult,
};
pub use resource::{BiomassEstimate, MsyResult, ResourceParameterSet};
pub use scenario::{Scenario, ScenarioOutcome, ScenarioYearRecord};
pub use types::{DataQuality, FactorSource, GuardedRatio, PolicyTier, Productivity, WaterSector};
