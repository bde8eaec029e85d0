// ==========================================
// 资源生物经济引擎 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序
// 流程: 外部数据源 -> 环境因子 -> {产量 | 轮伐 | 情景模拟}
//       -> 指标汇总 -> 可持续性指数 -> 政策建议 -> 报告
// 说明: 模拟是环境数据 await 之后的直接延续
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::EngineConfig;
use crate::domain::environment::{EnvironmentalFactorBundle, ResolvedEnvironment};
use crate::domain::report::AnalysisReport;
use crate::domain::resource::{BiomassEstimate, MsyResult};
use crate::domain::scenario::{Scenario, ScenarioOutcome};
use crate::domain::types::DataQuality;
use crate::engine::{
    BiomassEstimator, IndicatorAggregator, RecommendationEngine, RotationOptimizer,
    ScenarioProductionSimulator, SustainabilityIndexCalculator, WaterAllocationOptimizer,
    YieldModel,
};
use crate::environment::{EnvironmentResolver, EnvironmentalDataSource};
use crate::i18n::t;
use crate::perf::PerfGuard;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 生物量派生种群在报告中的名称
pub const BIOMASS_STOCK_NAME: &str = "forest_biomass";

// ==========================================
// AnalysisOrchestrator - 引擎编排器
// ==========================================
pub struct AnalysisOrchestrator {
    config: Arc<EngineConfig>,
    resolver: EnvironmentResolver,
    yield_model: YieldModel,
    rotation: RotationOptimizer,
    simulator: ScenarioProductionSimulator,
    aggregator: IndicatorAggregator,
    index_calculator: SustainabilityIndexCalculator,
    recommender: RecommendationEngine,
    biomass: BiomassEstimator,
}

impl AnalysisOrchestrator {
    /// 创建编排器（所有配置错误在此处拒绝,模拟尚未开始）
    pub fn new(config: Arc<EngineConfig>) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            resolver: EnvironmentResolver::new(config.environment.clone()),
            yield_model: YieldModel::new(config.fishery.precautionary_fraction),
            rotation: RotationOptimizer::new(config.rotation.clone())?,
            simulator: ScenarioProductionSimulator::new(config.scenario.clone())?,
            aggregator: IndicatorAggregator::new(),
            index_calculator: SustainabilityIndexCalculator::new(config.scales.clone())?,
            recommender: RecommendationEngine::new(config.thresholds.clone())?,
            biomass: BiomassEstimator::new(),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 执行完整分析
    ///
    /// # 参数
    /// - source: 外部环境数据源（单次获取,带超时回退）
    pub async fn run(&self, source: &dyn EnvironmentalDataSource) -> ConfigResult<AnalysisReport> {
        let _perf = PerfGuard::new("analysis_run");

        info!(source = source.name(), years = self.config.scenario.years, "开始执行分析流程");

        let (environment, quality) = self.resolver.resolve(source).await;
        self.run_with_environment(environment, quality)
    }

    /// 在已解析的环境输入上执行全部同步计算
    pub fn run_with_environment(
        &self,
        environment: ResolvedEnvironment,
        quality: DataQuality,
    ) -> ConfigResult<AnalysisReport> {
        if quality.is_degraded() {
            warn!(data_quality = %quality, "{}", t("report.degraded_notice"));
        } else {
            info!("{}", t("report.measured_notice"));
        }

        // ==========================================
        // 步骤1: 产量模型 + 轮伐期优化
        // ==========================================
        debug!("步骤1: 计算种群 MSY 与轮伐期");
        let fishery = self
            .yield_model
            .evaluate_catalogue(&self.config.fishery.stocks, None)?;
        let rotation = self.rotation.optimize();
        let (biomass, biomass_yield) = self.evaluate_biomass(&environment);

        // ==========================================
        // 步骤2: 情景模拟 + 指标 + 指数
        // ==========================================
        debug!("步骤2: 情景模拟与指标汇总");
        let scenarios: Vec<ScenarioOutcome> = Scenario::ALL
            .iter()
            .map(|scenario| self.evaluate_scenario(*scenario, &environment.bundle))
            .collect();

        // ==========================================
        // 步骤3: 政策建议
        // ==========================================
        debug!("步骤3: 生成政策建议");
        let recommendation = self.recommender.recommend(&scenarios[0], &scenarios[1]);

        // ==========================================
        // 步骤4: 流域水资源分配（可选）
        // ==========================================
        let water_allocation = self
            .config
            .water_allocation
            .clone()
            .map(|water| WaterAllocationOptimizer::new(water).allocate());

        let report = AnalysisReport {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            data_quality: quality,
            environment,
            fishery,
            rotation,
            biomass,
            biomass_yield,
            scenarios,
            recommendation,
            water_allocation,
        };

        info!(
            run_id = %report.run_id,
            tier = %report.recommendation.tier,
            gap = report.recommendation.gap,
            data_quality = %report.data_quality,
            "分析流程完成"
        );

        Ok(report)
    }

    /// 单情景: 模拟 -> 汇总 -> 指数
    pub fn evaluate_scenario(
        &self,
        scenario: Scenario,
        env: &EnvironmentalFactorBundle,
    ) -> ScenarioOutcome {
        let records = self.simulator.simulate(scenario, env);
        let indicators = self.aggregator.aggregate(&records);
        let index = self.index_calculator.calculate(&indicators);

        debug!(
            scenario = %scenario,
            total_profit = indicators.total_profit,
            total_volume = indicators.total_volume,
            composite = index.composite,
            "情景评估完成"
        );

        ScenarioOutcome {
            scenario,
            records,
            indicators,
            index,
        }
    }

    /// NDVI 代理优先取外部统计,其次取配置
    fn evaluate_biomass(
        &self,
        environment: &ResolvedEnvironment,
    ) -> (Option<BiomassEstimate>, Option<MsyResult>) {
        let ndvi = match environment.stats.ndvi.or(self.config.biomass) {
            Some(ndvi) => ndvi,
            None => return (None, None),
        };

        let estimate = self.biomass.estimate(&ndvi);
        if let Some(reason) = &estimate.reason {
            warn!(reason = %reason, "生物量估计不可用于产量模型");
        }

        let yield_result = self
            .biomass
            .to_parameters(
                &estimate,
                self.config.rotation.price_per_volume,
                self.config.rotation.harvest_cost_per_volume,
            )
            .map(|params| self.yield_model.calculate(BIOMASS_STOCK_NAME, &params));

        (Some(estimate), yield_result)
    }
}
