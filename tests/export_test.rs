// ==========================================
// 导出与 API 集成测试
// ==========================================
// 测试目标: 分析结果写出为 CSV/JSON,API 层错误映射
// ==========================================

mod helpers;

use helpers::*;
use resource_bioeconomics::api::{AnalysisApi, ApiError};
use resource_bioeconomics::config::EngineConfig;
use resource_bioeconomics::domain::report::AnalysisReport;
use resource_bioeconomics::environment::{StaticEnvironmentalSource, UnavailableEnvironmentalSource};
use resource_bioeconomics::export::CsvExporter;
use tempfile::TempDir;

#[tokio::test]
async fn test_run_and_export_writes_all_tables() {
    let dir = TempDir::new().unwrap();
    let api = AnalysisApi::new(EngineConfig::default()).unwrap();
    let source = StaticEnvironmentalSource::new("static", complete_stats());

    let (report, summary) = api.run_and_export(&source, dir.path()).await.unwrap();

    let expected = [
        "scenario_raw_material.csv",
        "scenario_industrialization.csv",
        "indicators.csv",
        "sustainability.csv",
        "rotation_curve.csv",
        "fishery_yields.csv",
        "report.json",
    ];
    assert_eq!(summary.files.len(), expected.len());
    for name in expected {
        assert!(dir.path().join(name).exists(), "缺少文件 {}", name);
    }

    // 逐年表: 表头 + 每年一行
    let mut reader = csv::Reader::from_path(dir.path().join("scenario_raw_material.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "year");
    assert!(headers.iter().any(|h| h == "extracted_volume"));
    assert_eq!(reader.records().count(), report.scenarios[0].records.len());

    // JSON 可以原样读回
    let raw = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let parsed: AnalysisReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.run_id, report.run_id);
    assert_eq!(parsed.recommendation.tier, report.recommendation.tier);
}

#[tokio::test]
async fn test_exporter_creates_nested_output_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("runs").join("latest");
    let api = AnalysisApi::new(EngineConfig::default()).unwrap();
    let report = api.run(&UnavailableEnvironmentalSource).await.unwrap();

    let summary = CsvExporter::new(&nested).export(&report).unwrap();

    assert_eq!(summary.output_dir, nested);
    assert!(nested.join("indicators.csv").exists());

    let mut reader = csv::Reader::from_path(nested.join("indicators.csv")).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "raw_material");
    assert_eq!(&rows[1][0], "industrialization");
}

#[test]
fn test_stock_yield_lookup() {
    let api = AnalysisApi::new(EngineConfig::default()).unwrap();

    let karachi = api.stock_yield("KARACHI").unwrap();
    assert!((karachi.msy - 1_350.0).abs() < 1e-9);

    match api.stock_yield("Trucha") {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("Trucha")),
        other => panic!("Expected NotFound, got {:?}", other.map(|r| r.stock_name)),
    }
    assert!(matches!(api.stock_yield("  "), Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_invalid_config_maps_to_invalid_input() {
    let mut config = EngineConfig::default();
    config.scenario.concentration = 0.0;

    match AnalysisApi::new(config) {
        Err(ApiError::InvalidInput(msg)) => assert!(msg.contains("concentration")),
        Err(other) => panic!("Expected InvalidInput, got {}", other),
        Ok(_) => panic!("Expected InvalidInput, got Ok"),
    }
}
