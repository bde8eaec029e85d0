// ==========================================
// 资源生物经济引擎 - 政策建议引擎
// ==========================================
// 输入: 原料出口与工业化两个情景的结果
// 规则: gap = industrialization.composite - raw_material.composite
// - gap > strong           => 全面工业化
// - phased < gap <= strong => 分阶段转型
// - gap <= phased          => 优化现有开采
// 输出: gap + 等级 + 各指标百分比变化（基线为 0 时 NotApplicable）
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::RecommendationThresholds;
use crate::domain::indicator::{IndicatorSet, SustainabilityIndex};
use crate::domain::report::{IndexDeltas, IndicatorDeltas, Recommendation};
use crate::domain::scenario::ScenarioOutcome;
use crate::domain::types::{GuardedRatio, PolicyTier};
use crate::i18n::t;
use tracing::info;

// ==========================================
// RecommendationEngine - 政策建议引擎
// ==========================================
pub struct RecommendationEngine {
    thresholds: RecommendationThresholds,
}

impl RecommendationEngine {
    /// 校验阈值并构造
    pub fn new(thresholds: RecommendationThresholds) -> ConfigResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// 按 gap 判定政策等级
    pub fn classify(&self, gap: f64) -> PolicyTier {
        if gap > self.thresholds.strong {
            PolicyTier::StrongIndustrialization
        } else if gap > self.thresholds.phased {
            PolicyTier::PhasedTransition
        } else {
            PolicyTier::OptimizeCurrentExtraction
        }
    }

    /// 生成政策建议
    ///
    /// # 参数
    /// - `raw_material`: 原料出口情景结果（基线）
    /// - `industrialization`: 工业化情景结果
    pub fn recommend(
        &self,
        raw_material: &ScenarioOutcome,
        industrialization: &ScenarioOutcome,
    ) -> Recommendation {
        let gap = industrialization.index.composite - raw_material.index.composite;
        let tier = self.classify(gap);
        let key = tier.i18n_key();

        info!(
            gap,
            tier = %tier,
            raw_composite = raw_material.index.composite,
            industrial_composite = industrialization.index.composite,
            "政策建议生成完成"
        );

        Recommendation {
            gap,
            tier,
            title: t(&format!("{}.title", key)),
            rationale: t(&format!("{}.rationale", key)),
            indicator_deltas: indicator_deltas(
                &raw_material.indicators,
                &industrialization.indicators,
            ),
            index_deltas: index_deltas(&raw_material.index, &industrialization.index),
        }
    }
}

fn indicator_deltas(baseline: &IndicatorSet, candidate: &IndicatorSet) -> IndicatorDeltas {
    let profit_per_unit_pct = match (candidate.profit_per_unit, baseline.profit_per_unit) {
        (GuardedRatio::Value(c), GuardedRatio::Value(b)) => GuardedRatio::percent_change(c, b),
        _ => GuardedRatio::NotApplicable,
    };

    IndicatorDeltas {
        total_profit_pct: GuardedRatio::percent_change(candidate.total_profit, baseline.total_profit),
        total_value_added_pct: GuardedRatio::percent_change(
            candidate.total_value_added,
            baseline.total_value_added,
        ),
        total_jobs_pct: GuardedRatio::percent_change(candidate.total_jobs, baseline.total_jobs),
        avg_tech_rent_pct: GuardedRatio::percent_change(
            candidate.avg_tech_rent,
            baseline.avg_tech_rent,
        ),
        total_volume_pct: GuardedRatio::percent_change(candidate.total_volume, baseline.total_volume),
        total_env_impact_pct: GuardedRatio::percent_change(
            candidate.total_env_impact,
            baseline.total_env_impact,
        ),
        profit_per_unit_pct,
    }
}

fn index_deltas(baseline: &SustainabilityIndex, candidate: &SustainabilityIndex) -> IndexDeltas {
    IndexDeltas {
        economic_pct: GuardedRatio::percent_change(candidate.economic, baseline.economic),
        social_pct: GuardedRatio::percent_change(candidate.social, baseline.social),
        environmental_pct: GuardedRatio::percent_change(
            candidate.environmental,
            baseline.environmental,
        ),
        technological_pct: GuardedRatio::percent_change(
            candidate.technological,
            baseline.technological,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let engine = RecommendationEngine::new(RecommendationThresholds::default()).unwrap();
        assert_eq!(engine.classify(0.30), PolicyTier::StrongIndustrialization);
        assert_eq!(engine.classify(0.15), PolicyTier::PhasedTransition);
        assert_eq!(engine.classify(0.10), PolicyTier::PhasedTransition);
        assert_eq!(engine.classify(0.05), PolicyTier::OptimizeCurrentExtraction);
        assert_eq!(engine.classify(-0.2), PolicyTier::OptimizeCurrentExtraction);
    }

    #[test]
    fn test_index_deltas_guard_zero_baseline() {
        let baseline = SustainabilityIndex {
            economic: 0.0,
            social: 0.2,
            environmental: 0.5,
            technological: 0.25,
            composite: 0.2375,
        };
        let candidate = SustainabilityIndex {
            economic: 0.4,
            social: 0.4,
            environmental: 0.5,
            technological: 0.5,
            composite: 0.45,
        };
        let deltas = index_deltas(&baseline, &candidate);
        assert_eq!(deltas.economic_pct, GuardedRatio::NotApplicable);
        assert_eq!(deltas.social_pct, GuardedRatio::Value(100.0));
        assert_eq!(deltas.environmental_pct, GuardedRatio::Value(0.0));
        assert_eq!(deltas.technological_pct, GuardedRatio::Value(100.0));
    }
}
