// ==========================================
// 测试辅助函数 - 用于集成测试
// ==========================================
// 职责: 提供配置构建、环境因子构建、测试数据源
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use resource_bioeconomics::config::EngineConfig;
use resource_bioeconomics::domain::environment::{
    EnvironmentalFactorBundle, FactorProvenance, RawEnvironmentalStats,
};
use resource_bioeconomics::domain::indicator::{IndicatorSet, SustainabilityIndex};
use resource_bioeconomics::domain::scenario::{Scenario, ScenarioOutcome};
use resource_bioeconomics::domain::types::{FactorSource, GuardedRatio};
use resource_bioeconomics::environment::{EnvironmentResult, EnvironmentalDataSource};
use std::time::Duration;

// ==========================================
// 配置构建
// ==========================================

/// 默认配置,模拟产能改为 150000
pub fn config_with_capacity(capacity: f64) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.scenario.capacity = capacity;
    config
}

/// 短超时配置（用于超时回退测试）
pub fn config_with_timeout_ms(timeout_ms: u64) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.environment.fetch_timeout_ms = timeout_ms;
    config
}

// ==========================================
// 环境输入构建
// ==========================================

pub fn measured_bundle(water: f64, temperature: f64, evaporation: f64) -> EnvironmentalFactorBundle {
    EnvironmentalFactorBundle {
        water_index_factor: water,
        temperature_factor: temperature,
        evaporation_factor: evaporation,
        provenance: FactorProvenance::all(FactorSource::Measured),
    }
}

/// 三项统计齐全: 水体指数 0.2 / 地表温度 15℃ / 蒸散 150
pub fn complete_stats() -> RawEnvironmentalStats {
    RawEnvironmentalStats {
        mean_temperature_c: Some(15.0),
        water_index: Some(0.2),
        evapotranspiration: Some(150.0),
        chlorophyll_a: Some(6.0),
        ndvi: None,
    }
}

// ==========================================
// 情景结果构建
// ==========================================

pub fn indicator_set(profit: f64, jobs: f64, volume: f64) -> IndicatorSet {
    IndicatorSet {
        total_profit: profit,
        total_value_added: profit,
        total_jobs: jobs,
        avg_tech_rent: 1.0,
        total_volume: volume,
        total_env_impact: 0.0,
        profit_per_unit: GuardedRatio::divide(profit, volume),
    }
}

pub fn outcome_with_composite(
    scenario: Scenario,
    indicators: IndicatorSet,
    composite: f64,
) -> ScenarioOutcome {
    ScenarioOutcome {
        scenario,
        records: Vec::new(),
        indicators,
        index: SustainabilityIndex {
            economic: composite,
            social: composite,
            environmental: composite,
            technological: composite,
            composite,
        },
    }
}

// ==========================================
// 测试数据源
// ==========================================

/// 延迟返回的数据源（模拟外部服务卡顿）
pub struct SlowEnvironmentalSource {
    pub delay: Duration,
    pub stats: RawEnvironmentalStats,
}

#[async_trait]
impl EnvironmentalDataSource for SlowEnvironmentalSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch(&self) -> EnvironmentResult<RawEnvironmentalStats> {
        tokio::time::sleep(self.delay).await;
        Ok(self.stats.clone())
    }
}
