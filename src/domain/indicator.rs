// ==========================================
// 资源生物经济引擎 - 指标领域模型
// ==========================================

use crate::domain::types::GuardedRatio;
use serde::{Deserialize, Serialize};

// ==========================================
// IndicatorSet - 情景汇总指标
// ==========================================
// 每次运行全量重算,不做增量更新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub total_profit: f64,
    pub total_value_added: f64,
    pub total_jobs: f64,
    pub avg_tech_rent: f64,
    pub total_volume: f64, // 等于逐年 extracted_volume 之和
    pub total_env_impact: f64,
    pub profit_per_unit: GuardedRatio, // total_volume 为 0 时 NotApplicable
}

// ==========================================
// SustainabilityIndex - 可持续性指数
// ==========================================
// 各分项与综合值均位于 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityIndex {
    pub economic: f64,
    pub social: f64,
    pub environmental: f64,
    pub technological: f64,
    pub composite: f64, // 四个分项的算术平均
}
