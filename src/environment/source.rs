// ==========================================
// 资源生物经济引擎 - 外部环境数据源
// ==========================================
// 职责: 定义外部地理空间平台的单次异步获取接口
// 说明: 空间归约在平台侧完成,此处只接收标量统计
// ==========================================

use crate::domain::environment::RawEnvironmentalStats;
use crate::environment::error::{EnvironmentError, EnvironmentResult};
use async_trait::async_trait;

// ==========================================
// EnvironmentalDataSource - 数据源 Trait
// ==========================================

/// 外部环境数据源
///
/// # 实现说明
/// - fetch 为单次获取,解析结果后才开始模拟
/// - 取消/重试不在此处处理,超时由 EnvironmentResolver 控制
#[async_trait]
pub trait EnvironmentalDataSource: Send + Sync {
    /// 数据源名称（用于日志与报告）
    fn name(&self) -> &str;

    /// 获取已归约的环境统计量
    async fn fetch(&self) -> EnvironmentResult<RawEnvironmentalStats>;
}

// ==========================================
// StaticEnvironmentalSource - 静态数据源
// ==========================================

/// 使用预先归约好的统计量（配置文件/测试）
#[derive(Debug, Clone)]
pub struct StaticEnvironmentalSource {
    name: String,
    stats: RawEnvironmentalStats,
}

impl StaticEnvironmentalSource {
    pub fn new(name: &str, stats: RawEnvironmentalStats) -> Self {
        Self {
            name: name.to_string(),
            stats,
        }
    }
}

#[async_trait]
impl EnvironmentalDataSource for StaticEnvironmentalSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> EnvironmentResult<RawEnvironmentalStats> {
        Ok(self.stats.clone())
    }
}

// ==========================================
// UnavailableEnvironmentalSource - 无数据源
// ==========================================

/// 始终报告无数据（离线运行,全部因子回退）
#[derive(Debug, Clone, Default)]
pub struct UnavailableEnvironmentalSource;

#[async_trait]
impl EnvironmentalDataSource for UnavailableEnvironmentalSource {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn fetch(&self) -> EnvironmentResult<RawEnvironmentalStats> {
        Err(EnvironmentError::NoData("未配置外部环境数据源".to_string()))
    }
}
