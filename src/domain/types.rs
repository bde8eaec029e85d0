// ==========================================
// 资源生物经济引擎 - 领域类型定义
// ==========================================
// 职责: 政策等级、数据质量、除零保护结果等值类型
// 红线: 任何比值不得输出 NaN/Infinity
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 政策建议等级 (Policy Tier)
// ==========================================
// 顺序: OptimizeCurrentExtraction < PhasedTransition < StrongIndustrialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyTier {
    OptimizeCurrentExtraction, // 优化现有开采
    PhasedTransition,          // 分阶段转型
    StrongIndustrialization,   // 全面工业化
}

impl PolicyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyTier::OptimizeCurrentExtraction => "optimize_current_extraction",
            PolicyTier::PhasedTransition => "phased_transition",
            PolicyTier::StrongIndustrialization => "strong_industrialization",
        }
    }

    /// 国际化键前缀（标题与理由共用）
    pub fn i18n_key(&self) -> String {
        format!("recommendation.{}", self.as_str())
    }
}

impl fmt::Display for PolicyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyTier::OptimizeCurrentExtraction => write!(f, "OPTIMIZE_CURRENT_EXTRACTION"),
            PolicyTier::PhasedTransition => write!(f, "PHASED_TRANSITION"),
            PolicyTier::StrongIndustrialization => write!(f, "STRONG_INDUSTRIALIZATION"),
        }
    }
}

// ==========================================
// 环境因子来源 (Factor Source)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorSource {
    Measured, // 外部平台实测值
    Fallback, // 缺测时的默认常量
}

impl fmt::Display for FactorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorSource::Measured => write!(f, "MEASURED"),
            FactorSource::Fallback => write!(f, "FALLBACK"),
        }
    }
}

// ==========================================
// 数据质量标签 (Data Quality)
// ==========================================
// 使用了默认环境因子的结果必须标记为 Degraded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "status")]
pub enum DataQuality {
    Measured,
    Degraded {
        fallback_factors: Vec<String>, // 使用默认值的因子名
        reason: String,                // 降级原因
    },
}

impl DataQuality {
    pub fn is_degraded(&self) -> bool {
        matches!(self, DataQuality::Degraded { .. })
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQuality::Measured => write!(f, "MEASURED"),
            DataQuality::Degraded { fallback_factors, .. } => {
                write!(f, "DEGRADED({})", fallback_factors.join(","))
            }
        }
    }
}

// ==========================================
// 除零保护比值 (Guarded Ratio)
// ==========================================
// 分母为零或结果非有限值时输出 NotApplicable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardedRatio {
    Value(f64),
    NotApplicable,
}

impl GuardedRatio {
    /// 受保护的除法
    pub fn divide(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return GuardedRatio::NotApplicable;
        }
        let ratio = numerator / denominator;
        if ratio.is_finite() {
            GuardedRatio::Value(ratio)
        } else {
            GuardedRatio::NotApplicable
        }
    }

    /// 百分比变化: (candidate - baseline) / |baseline| × 100
    ///
    /// 基线为负（如亏损）时方向保持一致: 改善为正,恶化为负
    pub fn percent_change(candidate: f64, baseline: f64) -> Self {
        match GuardedRatio::divide(candidate - baseline, baseline.abs()) {
            GuardedRatio::Value(ratio) => GuardedRatio::Value(ratio * 100.0),
            GuardedRatio::NotApplicable => GuardedRatio::NotApplicable,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            GuardedRatio::Value(v) => Some(*v),
            GuardedRatio::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, GuardedRatio::Value(_))
    }
}

impl fmt::Display for GuardedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardedRatio::Value(v) => write!(f, "{:.4}", v),
            GuardedRatio::NotApplicable => write!(f, "N/A"),
        }
    }
}

// ==========================================
// 初级生产力等级 (Primary Productivity)
// ==========================================
// 依据叶绿素 a 浓度 (mg/m³) 分级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Productivity {
    Low,    // <= 2
    Medium, // (2, 5]
    High,   // > 5
}

impl Productivity {
    pub fn from_chlorophyll(chlorophyll_a: f64) -> Self {
        if chlorophyll_a > 5.0 {
            Productivity::High
        } else if chlorophyll_a > 2.0 {
            Productivity::Medium
        } else {
            Productivity::Low
        }
    }
}

impl fmt::Display for Productivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Productivity::Low => write!(f, "LOW"),
            Productivity::Medium => write!(f, "MEDIUM"),
            Productivity::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 用水部门 (Water Sector)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSector {
    Agriculture,
    Municipal,
    Industrial,
    Environmental,
}

impl WaterSector {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterSector::Agriculture => "agriculture",
            WaterSector::Municipal => "municipal",
            WaterSector::Industrial => "industrial",
            WaterSector::Environmental => "environmental",
        }
    }
}

impl fmt::Display for WaterSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
