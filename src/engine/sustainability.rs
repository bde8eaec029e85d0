// ==========================================
// 资源生物经济引擎 - 可持续性指数计算器
// ==========================================
// - economic      = clamp(total_profit / economic_scale)
// - social        = clamp(total_jobs / social_scale)
// - environmental = clamp(1 - total_env_impact / environmental_scale)（反向）
// - technological = clamp(avg_tech_rent / technological_scale)
// - composite     = 四项算术平均
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::SustainabilityScales;
use crate::domain::indicator::{IndicatorSet, SustainabilityIndex};

// ==========================================
// SustainabilityIndexCalculator - 指数计算器
// ==========================================
pub struct SustainabilityIndexCalculator {
    scales: SustainabilityScales,
}

impl SustainabilityIndexCalculator {
    /// 校验参考尺度并构造
    pub fn new(scales: SustainabilityScales) -> ConfigResult<Self> {
        scales.validate()?;
        Ok(Self { scales })
    }

    pub fn calculate(&self, indicators: &IndicatorSet) -> SustainabilityIndex {
        let economic = unit_clamp(indicators.total_profit / self.scales.economic);
        let social = unit_clamp(indicators.total_jobs / self.scales.social);
        let environmental =
            unit_clamp(1.0 - indicators.total_env_impact / self.scales.environmental);
        let technological = unit_clamp(indicators.avg_tech_rent / self.scales.technological);

        SustainabilityIndex {
            economic,
            social,
            environmental,
            technological,
            composite: (economic + social + environmental + technological) / 4.0,
        }
    }
}

/// 截断到 [0, 1]; NaN 视为 0
fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::GuardedRatio;

    fn indicators(profit: f64, jobs: f64, impact: f64, tech: f64) -> IndicatorSet {
        IndicatorSet {
            total_profit: profit,
            total_value_added: profit,
            total_jobs: jobs,
            avg_tech_rent: tech,
            total_volume: 1.0,
            total_env_impact: impact,
            profit_per_unit: GuardedRatio::Value(profit),
        }
    }

    #[test]
    fn test_out_of_range_ratios_are_clamped() {
        let calc = SustainabilityIndexCalculator::new(SustainabilityScales::default()).unwrap();

        let high = calc.calculate(&indicators(1.0e12, 1.0e6, -50.0, 100.0));
        assert_eq!(high.economic, 1.0);
        assert_eq!(high.social, 1.0);
        assert_eq!(high.environmental, 1.0);
        assert_eq!(high.technological, 1.0);
        assert_eq!(high.composite, 1.0);

        let low = calc.calculate(&indicators(-1.0e12, -5.0, 1.0e9, -1.0));
        assert_eq!(low.economic, 0.0);
        assert_eq!(low.social, 0.0);
        assert_eq!(low.environmental, 0.0);
        assert_eq!(low.technological, 0.0);
        assert_eq!(low.composite, 0.0);
    }

    #[test]
    fn test_composite_is_mean() {
        let calc = SustainabilityIndexCalculator::new(SustainabilityScales::default()).unwrap();
        let index = calc.calculate(&indicators(2.5e9, 500.0, 50_000.0, 1.5));
        assert_eq!(index.economic, 0.5);
        assert_eq!(index.social, 0.5);
        assert_eq!(index.environmental, 0.5);
        assert_eq!(index.technological, 0.5);
        assert_eq!(index.composite, 0.5);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let scales = SustainabilityScales {
            social: 0.0,
            ..SustainabilityScales::default()
        };
        assert!(SustainabilityIndexCalculator::new(scales).is_err());
    }
}
