// ==========================================
// 资源生物经济引擎 - 森林轮伐期优化
// ==========================================
// 模型: 离散林龄网格上的单次轮伐净现值
// - volume(t) = V0·e^(g·t)
// - NPV(t)    = (price - cost)·volume(t) / (1 + d)^t
// 注意: 未做无限轮伐 (Faustmann) 修正,保持单次轮伐口径
// 平局: 按迭代顺序保留最小林龄
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::RotationConfig;
use crate::domain::report::{RotationPoint, RotationResult};
use tracing::debug;

// ==========================================
// RotationOptimizer - 轮伐期优化器
// ==========================================
pub struct RotationOptimizer {
    config: RotationConfig,
}

impl RotationOptimizer {
    /// 校验参数并构造
    pub fn new(config: RotationConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 单个林龄的估值点
    pub fn evaluate_age(&self, age: u32) -> RotationPoint {
        let cfg = &self.config;
        let t = age as f64;
        let volume = cfg.initial_volume * (cfg.growth_rate * t).exp();
        let net_value = (cfg.price_per_volume - cfg.harvest_cost_per_volume) * volume;
        let npv = net_value / (1.0 + cfg.discount_rate).powf(t);

        RotationPoint { age, npv, volume }
    }

    /// 在林龄网格上搜索 NPV 最大值
    pub fn optimize(&self) -> RotationResult {
        let curve: Vec<RotationPoint> = self
            .config
            .age_grid()
            .into_iter()
            .map(|age| self.evaluate_age(age))
            .collect();

        // 首个网格点作为初始值,严格大于才替换（平局保留较小林龄）
        let mut best = curve[0];
        for point in curve.iter().skip(1) {
            if point.npv > best.npv {
                best = *point;
            }
        }

        debug!(
            optimal_age = best.age,
            max_npv = best.npv,
            grid_points = curve.len(),
            "轮伐期优化完成"
        );

        RotationResult {
            optimal_age: best.age,
            max_npv: best.npv,
            curve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_matches_direct_argmax() {
        let optimizer = RotationOptimizer::new(RotationConfig::default()).unwrap();
        let result = optimizer.optimize();

        let direct = |t: f64| (180.0 - 85.0) * 150.0 * (0.025 * t).exp() / 1.07_f64.powf(t);
        let mut expected_age = 10;
        let mut expected_npv = direct(10.0);
        for age in (15..=60).step_by(5) {
            let npv = direct(age as f64);
            if npv > expected_npv {
                expected_npv = npv;
                expected_age = age;
            }
        }

        assert_eq!(result.optimal_age, expected_age);
        assert!((result.max_npv - expected_npv).abs() < 1e-9);
        assert_eq!(result.curve.len(), 11);
    }

    #[test]
    fn test_tie_keeps_smallest_age() {
        // 价格等于成本 => 所有林龄 NPV 均为 0
        let config = RotationConfig {
            price_per_volume: 85.0,
            harvest_cost_per_volume: 85.0,
            ..RotationConfig::default()
        };
        let optimizer = RotationOptimizer::new(config).unwrap();
        let result = optimizer.optimize();
        assert_eq!(result.optimal_age, 10);
    }

    #[test]
    fn test_negative_margin_still_returns_grid_age() {
        let config = RotationConfig {
            price_per_volume: 50.0,
            harvest_cost_per_volume: 85.0,
            ..RotationConfig::default()
        };
        let result = RotationOptimizer::new(config).unwrap().optimize();
        assert!(result.max_npv < 0.0);
        assert!(result.curve.iter().any(|p| p.age == result.optimal_age));
    }

    #[test]
    fn test_rejects_invalid_discount_rate() {
        let config = RotationConfig {
            discount_rate: 1.5,
            ..RotationConfig::default()
        };
        assert!(RotationOptimizer::new(config).is_err());
    }
}
