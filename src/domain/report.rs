// ==========================================
// 资源生物经济引擎 - 分析报告领域模型
// ==========================================
// 职责: 各引擎输出对象 + 单次运行完整报告
// 用途: 交给外部可视化/导出层,核心不再做语义解释
// ==========================================

use crate::domain::environment::ResolvedEnvironment;
use crate::domain::resource::{BiomassEstimate, MsyResult};
use crate::domain::scenario::ScenarioOutcome;
use crate::domain::types::{DataQuality, GuardedRatio, PolicyTier, WaterSector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// 轮伐期优化结果
// ==========================================

/// 单个候选林龄的估值点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationPoint {
    pub age: u32,
    pub npv: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    pub optimal_age: u32,
    pub max_npv: f64,
    pub curve: Vec<RotationPoint>, // 诊断用完整曲线
}

// ==========================================
// 政策建议
// ==========================================

/// 各汇总指标的百分比变化（工业化相对原料出口）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDeltas {
    pub total_profit_pct: GuardedRatio,
    pub total_value_added_pct: GuardedRatio,
    pub total_jobs_pct: GuardedRatio,
    pub avg_tech_rent_pct: GuardedRatio,
    pub total_volume_pct: GuardedRatio,
    pub total_env_impact_pct: GuardedRatio,
    pub profit_per_unit_pct: GuardedRatio,
}

/// 各可持续性分项的百分比变化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDeltas {
    pub economic_pct: GuardedRatio,
    pub social_pct: GuardedRatio,
    pub environmental_pct: GuardedRatio,
    pub technological_pct: GuardedRatio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub gap: f64, // industrialization.composite - raw_material.composite
    pub tier: PolicyTier,
    pub title: String,     // 本地化标题
    pub rationale: String, // 本地化理由
    pub indicator_deltas: IndicatorDeltas,
    pub index_deltas: IndexDeltas,
}

// ==========================================
// 水资源分配
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    pub sector: WaterSector,
    pub minimum: f64,
    pub allocated: f64,
    pub demand: f64,
    pub demand_coverage: GuardedRatio, // allocated / demand
    pub benefit: f64,                  // allocated × benefit_per_m3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAllocationResult {
    pub availability: f64,
    pub total_minimum: f64,
    pub remainder: f64, // availability - total_minimum
    pub deficit: bool,  // 可用水量不足以满足最低保障
    pub allocations: Vec<SectorAllocation>,
    pub total_benefit: f64,
}

// ==========================================
// AnalysisReport - 单次运行完整报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub data_quality: DataQuality,
    pub environment: ResolvedEnvironment,

    pub fishery: Vec<MsyResult>,
    pub rotation: RotationResult,
    pub biomass: Option<BiomassEstimate>,
    pub biomass_yield: Option<MsyResult>,

    pub scenarios: Vec<ScenarioOutcome>, // 按情景声明顺序
    pub recommendation: Recommendation,
    pub water_allocation: Option<WaterAllocationResult>,
}
