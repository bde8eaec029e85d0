// ==========================================
// 资源生物经济引擎 - 引擎层
// ==========================================
// 职责: 实现模型与决策规则,不做外部数据访问
// 红线: 除零一律输出 NotApplicable, 配置错误在模拟前拒绝
// ==========================================

pub mod biomass;
pub mod indicator;
pub mod orchestrator;
pub mod recommendation;
pub mod rotation;
pub mod scenario_simulator;
pub mod sustainability;
pub mod water_allocation;
pub mod yield_model;

// 重导出核心引擎
pub use biomass::BiomassEstimator;
pub use indicator::IndicatorAggregator;
pub use orchestrator::AnalysisOrchestrator;
pub use recommendation::RecommendationEngine;
pub use rotation::RotationOptimizer;
pub use scenario_simulator::{ScenarioProductionSimulator, YearEconomics};
pub use sustainability::SustainabilityIndexCalculator;
pub use water_allocation::WaterAllocationOptimizer;
pub use yield_model::YieldModel;
