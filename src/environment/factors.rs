// ==========================================
// 资源生物经济引擎 - 环境因子派生
// ==========================================
// 换算:
// - water       = water_index + offset
// - temperature = 温度(°C) / reference
// - evaporation = 蒸散量 / reference
// 每个因子独立回退,最后统一截断到 [min_bound, max_bound]
// ==========================================

use crate::config::EnvironmentConfig;
use crate::domain::environment::{EnvironmentalFactorBundle, FactorProvenance, RawEnvironmentalStats};
use crate::domain::types::FactorSource;

// ==========================================
// EnvironmentalFactorDeriver - 因子派生器
// ==========================================
pub struct EnvironmentalFactorDeriver {
    config: EnvironmentConfig,
}

impl EnvironmentalFactorDeriver {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    /// 从原始统计量派生因子包
    pub fn derive(&self, stats: &RawEnvironmentalStats) -> EnvironmentalFactorBundle {
        let cfg = &self.config;

        let (water_index_factor, water_source) = self.resolve(
            stats.water_index.map(|v| v + cfg.water_index_offset),
            cfg.fallback_water_index,
        );
        let (temperature_factor, temperature_source) = self.resolve(
            stats.mean_temperature_c.map(|v| v / cfg.temperature_reference),
            cfg.fallback_temperature,
        );
        let (evaporation_factor, evaporation_source) = self.resolve(
            stats.evapotranspiration.map(|v| v / cfg.evaporation_reference),
            cfg.fallback_evaporation,
        );

        EnvironmentalFactorBundle {
            water_index_factor,
            temperature_factor,
            evaporation_factor,
            provenance: FactorProvenance {
                water_index: water_source,
                temperature: temperature_source,
                evaporation: evaporation_source,
            },
        }
    }

    /// 全部因子回退到默认常量
    pub fn fallback_bundle(&self) -> EnvironmentalFactorBundle {
        self.derive(&RawEnvironmentalStats::default())
    }

    fn resolve(&self, measured: Option<f64>, fallback: f64) -> (f64, FactorSource) {
        match measured.filter(|v| v.is_finite()) {
            Some(v) => (self.clamp(v), FactorSource::Measured),
            None => (self.clamp(fallback), FactorSource::Fallback),
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.config.min_bound).min(self.config.max_bound)
    }
}
