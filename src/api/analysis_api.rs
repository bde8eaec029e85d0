// ==========================================
// 资源生物经济引擎 - 分析 API
// ==========================================
// 职责: 分析执行、单种群查询、报告导出
// ==========================================

use std::path::Path;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::EngineConfig;
use crate::domain::report::AnalysisReport;
use crate::domain::resource::MsyResult;
use crate::engine::{AnalysisOrchestrator, YieldModel};
use crate::environment::EnvironmentalDataSource;
use crate::export::{CsvExporter, ExportSummary};
use tracing::info;

// ==========================================
// AnalysisApi - 分析 API
// ==========================================
pub struct AnalysisApi {
    config: Arc<EngineConfig>,
    orchestrator: AnalysisOrchestrator,
}

impl AnalysisApi {
    /// 创建API实例（配置在此处完成校验）
    pub fn new(config: EngineConfig) -> ApiResult<Self> {
        let config = Arc::new(config);
        let orchestrator = AnalysisOrchestrator::new(Arc::clone(&config))?;
        Ok(Self {
            config,
            orchestrator,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 执行一次完整分析
    pub async fn run(&self, source: &dyn EnvironmentalDataSource) -> ApiResult<AnalysisReport> {
        Ok(self.orchestrator.run(source).await?)
    }

    /// 执行分析并导出至指定目录
    ///
    /// # 返回
    /// - (报告, 导出摘要)
    pub async fn run_and_export(
        &self,
        source: &dyn EnvironmentalDataSource,
        output_dir: &Path,
    ) -> ApiResult<(AnalysisReport, ExportSummary)> {
        let report = self.run(source).await?;
        let summary = CsvExporter::new(output_dir).export(&report)?;

        info!(
            run_id = %report.run_id,
            files = summary.files.len(),
            "分析与导出完成"
        );
        Ok((report, summary))
    }

    /// 按名称查询单个种群的 MSY（不区分大小写）
    pub fn stock_yield(&self, stock_name: &str) -> ApiResult<MsyResult> {
        let trimmed = stock_name.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidInput("种群名称不能为空".to_string()));
        }

        let model = YieldModel::new(self.config.fishery.precautionary_fraction);
        let mut results = model.evaluate_catalogue(&self.config.fishery.stocks, Some(trimmed))?;
        results
            .pop()
            .ok_or_else(|| ApiError::NotFound(format!("种群 {}", trimmed)))
    }
}
