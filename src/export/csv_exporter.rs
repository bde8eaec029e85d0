// ==========================================
// 资源生物经济引擎 - CSV/JSON 导出器
// ==========================================
// 输出文件:
// - scenario_<name>.csv   逐年模拟记录
// - indicators.csv        各情景汇总指标
// - sustainability.csv    各情景可持续性指数
// - rotation_curve.csv    轮伐期 NPV 曲线
// - fishery_yields.csv    种群 MSY 结果
// - report.json           完整报告
// ==========================================

use crate::domain::report::AnalysisReport;
use crate::export::error::{ExportError, ExportResult};
use crate::i18n::t_with_args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 输出目录环境变量
pub const OUTPUT_DIR_ENV: &str = "RESOURCE_BIOECONOMICS_OUTPUT_DIR";

/// 默认输出目录: 环境变量优先,其次为本地数据目录
pub fn default_output_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_local_dir()
        .map(|d| d.join("resource-bioeconomics").join("output"))
        .unwrap_or_else(|| PathBuf::from("output"))
}

/// 导出摘要
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

// ==========================================
// 扁平化 CSV 行
// ==========================================
// GuardedRatio 以文本写出 ("N/A" 表示不适用)

#[derive(Debug, Serialize)]
struct IndicatorRow<'a> {
    scenario: &'a str,
    total_profit: f64,
    total_value_added: f64,
    total_jobs: f64,
    avg_tech_rent: f64,
    total_volume: f64,
    total_env_impact: f64,
    profit_per_unit: String,
}

#[derive(Debug, Serialize)]
struct SustainabilityRow<'a> {
    scenario: &'a str,
    economic: f64,
    social: f64,
    environmental: f64,
    technological: f64,
    composite: f64,
}

pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 写出完整报告
    ///
    /// # 返回
    /// - 已写出文件列表（按写出顺序）
    pub fn export(&self, report: &AnalysisReport) -> ExportResult<ExportSummary> {
        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::CreateDir {
            path: self.output_dir.clone(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();

        for outcome in &report.scenarios {
            let name = format!("scenario_{}.csv", outcome.scenario.as_str());
            files.push(self.write_rows(&name, &outcome.records)?);
        }

        let indicator_rows: Vec<IndicatorRow> = report
            .scenarios
            .iter()
            .map(|o| IndicatorRow {
                scenario: o.scenario.as_str(),
                total_profit: o.indicators.total_profit,
                total_value_added: o.indicators.total_value_added,
                total_jobs: o.indicators.total_jobs,
                avg_tech_rent: o.indicators.avg_tech_rent,
                total_volume: o.indicators.total_volume,
                total_env_impact: o.indicators.total_env_impact,
                profit_per_unit: o.indicators.profit_per_unit.to_string(),
            })
            .collect();
        files.push(self.write_rows("indicators.csv", &indicator_rows)?);

        let index_rows: Vec<SustainabilityRow> = report
            .scenarios
            .iter()
            .map(|o| SustainabilityRow {
                scenario: o.scenario.as_str(),
                economic: o.index.economic,
                social: o.index.social,
                environmental: o.index.environmental,
                technological: o.index.technological,
                composite: o.index.composite,
            })
            .collect();
        files.push(self.write_rows("sustainability.csv", &index_rows)?);

        files.push(self.write_rows("rotation_curve.csv", &report.rotation.curve)?);

        let mut yields = report.fishery.clone();
        yields.extend(report.biomass_yield.clone());
        files.push(self.write_rows("fishery_yields.csv", &yields)?);

        let json_path = self.output_dir.join("report.json");
        fs::write(&json_path, serde_json::to_string_pretty(report)?)?;
        log_written(&json_path);
        files.push(json_path);

        info!(
            run_id = %report.run_id,
            output_dir = %self.output_dir.display(),
            files = files.len(),
            "报告导出完成"
        );

        Ok(ExportSummary {
            output_dir: self.output_dir.clone(),
            files,
        })
    }

    fn write_rows<T: Serialize>(&self, file_name: &str, rows: &[T]) -> ExportResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!(rows = rows.len(), "CSV 行数");
        log_written(&path);
        Ok(path)
    }
}

fn log_written(path: &Path) {
    let path_str = path.display().to_string();
    debug!("{}", t_with_args("export.file_written", &[("path", path_str.as_str())]));
}
