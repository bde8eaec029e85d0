// ==========================================
// AnalysisOrchestrator 集成测试
// ==========================================
// 测试目标: 外部数据获取 -> 模拟延续 -> 报告
// 覆盖范围: 实测数据 / 无数据 / 超时 / 部分缺失 / 生物量 / 水资源分配
// ==========================================

mod helpers;

use helpers::*;
use resource_bioeconomics::config::{EngineConfig, WaterAllocationConfig};
use resource_bioeconomics::domain::environment::{NdviProxies, RawEnvironmentalStats};
use resource_bioeconomics::domain::scenario::Scenario;
use resource_bioeconomics::domain::types::{DataQuality, FactorSource, Productivity};
use resource_bioeconomics::engine::orchestrator::BIOMASS_STOCK_NAME;
use resource_bioeconomics::engine::AnalysisOrchestrator;
use resource_bioeconomics::environment::{StaticEnvironmentalSource, UnavailableEnvironmentalSource};
use std::sync::Arc;
use std::time::Duration;

fn orchestrator(config: EngineConfig) -> AnalysisOrchestrator {
    AnalysisOrchestrator::new(Arc::new(config)).unwrap()
}

// ==========================================
// 数据质量标签
// ==========================================

#[tokio::test]
async fn test_measured_source_produces_measured_report() {
    let orchestrator = orchestrator(EngineConfig::default());
    let source = StaticEnvironmentalSource::new("static", complete_stats());

    let report = orchestrator.run(&source).await.unwrap();

    assert_eq!(report.data_quality, DataQuality::Measured);
    assert_eq!(report.environment.source_name, "static");
    assert!(report.environment.failure_reason.is_none());
    assert_eq!(report.environment.productivity, Some(Productivity::High));

    let bundle = report.environment.bundle;
    assert!((bundle.water_index_factor - 0.7).abs() < 1e-12);
    assert!((bundle.temperature_factor - 0.5).abs() < 1e-12);
    assert!((bundle.evaporation_factor - 0.5).abs() < 1e-12);
    assert_eq!(bundle.provenance.water_index, FactorSource::Measured);

    // 情景按声明顺序输出
    let order: Vec<Scenario> = report.scenarios.iter().map(|o| o.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());
    assert_eq!(report.fishery.len(), 3);
}

#[tokio::test]
async fn test_unavailable_source_falls_back_and_is_degraded() {
    let orchestrator = orchestrator(config_with_capacity(150_000.0));

    let report = orchestrator.run(&UnavailableEnvironmentalSource).await.unwrap();

    match &report.data_quality {
        DataQuality::Degraded { fallback_factors, .. } => {
            assert_eq!(
                fallback_factors,
                &vec![
                    "water_index".to_string(),
                    "temperature".to_string(),
                    "evaporation".to_string()
                ]
            );
        }
        other => panic!("Expected Degraded, got {:?}", other),
    }
    assert!(report.environment.failure_reason.is_some());

    // 回退因子 0.5 / 0.5 / 0.7 => 第 1 年产量 3150
    let raw = &report.scenarios[0];
    assert_eq!(raw.scenario, Scenario::RawMaterial);
    assert!((raw.records[0].extracted_volume - 3_150.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_slow_source_times_out_and_run_still_completes() {
    let orchestrator = orchestrator(config_with_timeout_ms(50));
    let source = SlowEnvironmentalSource {
        delay: Duration::from_millis(500),
        stats: complete_stats(),
    };

    let report = orchestrator.run(&source).await.unwrap();

    assert!(report.data_quality.is_degraded());
    let reason = report.environment.failure_reason.clone().unwrap();
    assert!(reason.contains("50"), "超时原因应包含超时时长: {}", reason);
    assert_eq!(report.scenarios.len(), 2);
    assert_eq!(report.scenarios[1].records.len(), 10);
}

#[tokio::test]
async fn test_partial_stats_degrade_only_missing_factors() {
    let orchestrator = orchestrator(EngineConfig::default());
    let stats = RawEnvironmentalStats {
        water_index: Some(0.2),
        ..RawEnvironmentalStats::default()
    };
    let source = StaticEnvironmentalSource::new("partial", stats);

    let report = orchestrator.run(&source).await.unwrap();

    match &report.data_quality {
        DataQuality::Degraded { fallback_factors, .. } => {
            assert!(!fallback_factors.contains(&"water_index".to_string()));
            assert!(fallback_factors.contains(&"temperature".to_string()));
            assert!(fallback_factors.contains(&"evaporation".to_string()));
        }
        other => panic!("Expected Degraded, got {:?}", other),
    }
    assert!(report.environment.failure_reason.is_none());
    assert!(report.environment.productivity.is_none());
}

// ==========================================
// 可选分析
// ==========================================

#[tokio::test]
async fn test_biomass_and_water_allocation_included_when_configured() {
    let mut config = EngineConfig::default();
    config.biomass = Some(NdviProxies {
        mean_base_year: 0.5,
        max_base_year: 0.85,
        mean_next_year: 0.55,
    });
    config.water_allocation = Some(WaterAllocationConfig::new(645.0));

    let report = orchestrator(config)
        .run(&UnavailableEnvironmentalSource)
        .await
        .unwrap();

    let biomass = report.biomass.expect("biomass estimate");
    assert!(biomass.usable);
    let biomass_yield = report.biomass_yield.expect("biomass yield");
    assert_eq!(biomass_yield.stock_name, BIOMASS_STOCK_NAME);
    assert!((biomass_yield.msy - 150.0 * 0.1 / 4.0).abs() < 1e-9);

    let water = report.water_allocation.expect("water allocation");
    assert!(!water.deficit);
    assert!((water.remainder - 95.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_optional_sections_absent_by_default() {
    let report = orchestrator(EngineConfig::default())
        .run(&UnavailableEnvironmentalSource)
        .await
        .unwrap();

    assert!(report.biomass.is_none());
    assert!(report.biomass_yield.is_none());
    assert!(report.water_allocation.is_none());
}

// ==========================================
// 配置拒绝
// ==========================================

#[test]
fn test_invalid_config_rejected_before_run() {
    let mut config = EngineConfig::default();
    config.scenario.years = 0;
    assert!(AnalysisOrchestrator::new(Arc::new(config)).is_err());

    let mut config = EngineConfig::default();
    config.rotation.discount_rate = 0.0;
    assert!(AnalysisOrchestrator::new(Arc::new(config)).is_err());
}
