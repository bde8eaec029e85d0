// ==========================================
// 资源生物经济引擎 - 指标汇总器
// ==========================================
// 职责: 将逐年记录归约为一组汇总指标
// - 求和: profit / value_added / jobs / volume / environmental_impact
// - 平均: tech_rent
// - 单位利润: total_profit / total_volume（除零保护）
// ==========================================

use crate::domain::indicator::IndicatorSet;
use crate::domain::scenario::ScenarioYearRecord;
use crate::domain::types::GuardedRatio;

// ==========================================
// IndicatorAggregator - 指标汇总器
// ==========================================
pub struct IndicatorAggregator {
    // 无状态,每次全量重算
}

impl IndicatorAggregator {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总逐年记录
    ///
    /// 空序列返回全 0 指标,单位利润为 NotApplicable
    pub fn aggregate(&self, records: &[ScenarioYearRecord]) -> IndicatorSet {
        let mut total_profit = 0.0;
        let mut total_value_added = 0.0;
        let mut total_jobs = 0.0;
        let mut total_volume = 0.0;
        let mut total_env_impact = 0.0;
        let mut tech_rent_sum = 0.0;

        for record in records {
            total_profit += record.profit;
            total_value_added += record.value_added;
            total_jobs += record.jobs;
            total_volume += record.extracted_volume;
            total_env_impact += record.environmental_impact;
            tech_rent_sum += record.tech_rent;
        }

        let avg_tech_rent = if records.is_empty() {
            0.0
        } else {
            tech_rent_sum / records.len() as f64
        };

        IndicatorSet {
            total_profit,
            total_value_added,
            total_jobs,
            avg_tech_rent,
            total_volume,
            total_env_impact,
            profit_per_unit: GuardedRatio::divide(total_profit, total_volume),
        }
    }
}

impl Default for IndicatorAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u32, volume: f64, profit: f64, tech_rent: f64) -> ScenarioYearRecord {
        ScenarioYearRecord {
            year,
            extracted_volume: volume,
            revenue: profit,
            cost: 0.0,
            profit,
            value_added: profit,
            jobs: volume * 0.01,
            tech_rent,
            water_consumed: 0.0,
            co2_emitted: 0.0,
            environmental_impact: volume,
        }
    }

    #[test]
    fn test_sums_and_mean() {
        let records = vec![record(1, 100.0, 50.0, 1.0), record(2, 300.0, 150.0, 3.0)];
        let indicators = IndicatorAggregator::new().aggregate(&records);

        assert_eq!(indicators.total_volume, 400.0);
        assert_eq!(indicators.total_profit, 200.0);
        assert_eq!(indicators.total_value_added, 200.0);
        assert_eq!(indicators.avg_tech_rent, 2.0);
        assert_eq!(indicators.total_env_impact, 400.0);
        assert_eq!(indicators.profit_per_unit, GuardedRatio::Value(0.5));
    }

    #[test]
    fn test_zero_volume_is_not_applicable() {
        let records = vec![record(1, 0.0, -10.0, 1.0)];
        let indicators = IndicatorAggregator::new().aggregate(&records);
        assert_eq!(indicators.profit_per_unit, GuardedRatio::NotApplicable);
    }

    #[test]
    fn test_empty_sequence() {
        let indicators = IndicatorAggregator::new().aggregate(&[]);
        assert_eq!(indicators.total_volume, 0.0);
        assert_eq!(indicators.avg_tech_rent, 0.0);
        assert_eq!(indicators.profit_per_unit, GuardedRatio::NotApplicable);
    }
}
