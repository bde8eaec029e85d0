// ==========================================
// 资源生物经济引擎 - 森林生物量估计
// ==========================================
// 依据 NDVI 代理估计 Logistic 模型参数:
// - B0 = 120·ndvi_mean + 20
// - K  = 150·ndvi_max / 0.85
// - r  = (ndvi_next - ndvi_mean) / ndvi_mean
// 森林判定: ndvi_mean > 0.3
// 不可用的估计只做标记,不致命
// ==========================================

use crate::domain::environment::NdviProxies;
use crate::domain::resource::{BiomassEstimate, ResourceParameterSet};
use crate::domain::types::GuardedRatio;

/// 森林掩膜阈值
pub const FOREST_NDVI_THRESHOLD: f64 = 0.3;

const BIOMASS_SLOPE: f64 = 120.0;
const BIOMASS_INTERCEPT: f64 = 20.0;
const CAPACITY_SCALE: f64 = 150.0;
const NDVI_SATURATION: f64 = 0.85;

pub struct BiomassEstimator;

impl BiomassEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, ndvi: &NdviProxies) -> BiomassEstimate {
        let initial_biomass = BIOMASS_SLOPE * ndvi.mean_base_year + BIOMASS_INTERCEPT;
        let carrying_capacity = CAPACITY_SCALE * ndvi.max_base_year / NDVI_SATURATION;
        let growth_rate = GuardedRatio::divide(
            ndvi.mean_next_year - ndvi.mean_base_year,
            ndvi.mean_base_year,
        );
        let is_forest = ndvi.mean_base_year > FOREST_NDVI_THRESHOLD;

        let reason = if !is_forest {
            Some(format!(
                "NDVI 均值 {:.3} 未超过森林阈值 {}",
                ndvi.mean_base_year, FOREST_NDVI_THRESHOLD
            ))
        } else if !(carrying_capacity > 0.0) {
            Some(format!("容纳量 {:.3} 非正", carrying_capacity))
        } else {
            match growth_rate {
                GuardedRatio::Value(r) if r > 0.0 && r < 1.0 => None,
                GuardedRatio::Value(r) => Some(format!("增长率 {:.4} 不在 (0, 1) 区间", r)),
                GuardedRatio::NotApplicable => Some("增长率不可计算".to_string()),
            }
        };

        BiomassEstimate {
            initial_biomass,
            carrying_capacity,
            growth_rate: growth_rate.value().unwrap_or(0.0),
            is_forest,
            usable: reason.is_none(),
            reason,
        }
    }

    /// 可用估计 -> 产量模型参数（价格/成本由调用方给定）
    pub fn to_parameters(
        &self,
        estimate: &BiomassEstimate,
        unit_price: f64,
        unit_cost: f64,
    ) -> Option<ResourceParameterSet> {
        if !estimate.usable {
            return None;
        }
        ResourceParameterSet::new(
            estimate.carrying_capacity,
            estimate.growth_rate,
            unit_price,
            unit_cost,
        )
        .ok()
    }
}

impl Default for BiomassEstimator {
    fn default() -> Self {
        Self::new()
    }
}
