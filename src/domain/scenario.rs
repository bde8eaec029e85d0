// ==========================================
// 资源生物经济引擎 - 情景领域模型
// ==========================================
// 职责: 情景枚举 + 逐年记录 + 情景汇总结果
// 红线: 年份序列从 1 开始、连续、严格递增
// ==========================================

use crate::domain::indicator::{IndicatorSet, SustainabilityIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 生产情景 (Scenario)
// ==========================================
// 每个变体拥有自己的经济计算策略（见 engine::scenario_simulator）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    RawMaterial,       // 原料出口
    Industrialization, // 本地工业化
}

impl Scenario {
    /// 全部情景（声明顺序即输出顺序）
    pub const ALL: [Scenario; 2] = [Scenario::RawMaterial, Scenario::Industrialization];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::RawMaterial => "raw_material",
            Scenario::Industrialization => "industrialization",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            Scenario::RawMaterial => "原料出口",
            Scenario::Industrialization => "本地工业化",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw_material" | "raw-material" => Ok(Scenario::RawMaterial),
            "industrialization" => Ok(Scenario::Industrialization),
            other => Err(format!("未知情景类型: {}", other)),
        }
    }
}

// ==========================================
// ScenarioYearRecord - 情景逐年记录
// ==========================================
// 生成后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioYearRecord {
    pub year: u32,

    // ===== 产量与经济 =====
    pub extracted_volume: f64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub value_added: f64, // 附加值 = 利润 × 情景系数

    // ===== 社会与技术 =====
    pub jobs: f64,
    pub tech_rent: f64,

    // ===== 环境 =====
    pub water_consumed: f64,
    pub co2_emitted: f64,
    pub environmental_impact: f64,
}

// ==========================================
// ScenarioOutcome - 单情景完整结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub records: Vec<ScenarioYearRecord>,
    pub indicators: IndicatorSet,
    pub index: SustainabilityIndex,
}
