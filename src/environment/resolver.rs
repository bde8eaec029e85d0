// ==========================================
// 资源生物经济引擎 - 环境输入解析器
// ==========================================
// 职责: 带超时地等待外部数据源,失败时回退默认因子
// 说明: 解析结果即模拟的起点（await 之后的延续）
// ==========================================

use crate::config::EnvironmentConfig;
use crate::domain::environment::{RawEnvironmentalStats, ResolvedEnvironment};
use crate::domain::types::{DataQuality, Productivity};
use crate::environment::error::EnvironmentError;
use crate::environment::factors::EnvironmentalFactorDeriver;
use crate::environment::source::EnvironmentalDataSource;
use crate::i18n::{t, t_with_args};
use std::time::Duration;
use tracing::{info, warn};

// ==========================================
// EnvironmentResolver - 环境输入解析器
// ==========================================
pub struct EnvironmentResolver {
    deriver: EnvironmentalFactorDeriver,
    timeout: Duration,
}

impl EnvironmentResolver {
    pub fn new(config: EnvironmentConfig) -> Self {
        let timeout = Duration::from_millis(config.fetch_timeout_ms);
        Self {
            deriver: EnvironmentalFactorDeriver::new(config),
            timeout,
        }
    }

    /// 获取并派生环境因子
    ///
    /// # 返回
    /// (解析后的环境输入, 数据质量标签)
    ///
    /// # 说明
    /// 任何获取失败都不会向上传播,只会导致 Degraded 标签
    pub async fn resolve(
        &self,
        source: &dyn EnvironmentalDataSource,
    ) -> (ResolvedEnvironment, DataQuality) {
        let timeout_ms = self.timeout.as_millis() as u64;

        let (stats, failure) = match tokio::time::timeout(self.timeout, source.fetch()).await {
            Ok(Ok(stats)) => (stats, None),
            Ok(Err(e)) => {
                warn!(source = source.name(), error = %e, "环境数据获取失败,使用默认因子");
                (RawEnvironmentalStats::default(), Some(e))
            }
            Err(_) => {
                let e = EnvironmentError::Timeout { timeout_ms };
                warn!(source = source.name(), timeout_ms, "环境数据获取超时,使用默认因子");
                (RawEnvironmentalStats::default(), Some(e))
            }
        };

        let bundle = self.deriver.derive(&stats);
        let fallback_factors = bundle.provenance.fallback_factors();

        let quality = if fallback_factors.is_empty() {
            DataQuality::Measured
        } else {
            let reason = match &failure {
                Some(e) => failure_notice(e),
                None => t("environment.partial_missing"),
            };
            DataQuality::Degraded {
                fallback_factors,
                reason,
            }
        };

        let productivity = stats
            .chlorophyll_a
            .filter(|v| v.is_finite())
            .map(Productivity::from_chlorophyll);

        info!(
            source = source.name(),
            water_index_factor = bundle.water_index_factor,
            temperature_factor = bundle.temperature_factor,
            evaporation_factor = bundle.evaporation_factor,
            data_quality = %quality,
            "环境因子解析完成"
        );

        let resolved = ResolvedEnvironment {
            stats,
            bundle,
            productivity,
            source_name: source.name().to_string(),
            failure_reason: failure.as_ref().map(failure_notice),
        };

        (resolved, quality)
    }
}

/// 获取失败的本地化说明
fn failure_notice(err: &EnvironmentError) -> String {
    match err {
        EnvironmentError::Timeout { timeout_ms } => {
            let timeout = timeout_ms.to_string();
            t_with_args("environment.timeout", &[("timeout_ms", timeout.as_str())])
        }
        other => {
            let detail = other.to_string();
            t_with_args("environment.source_failed", &[("error", detail.as_str())])
        }
    }
}
