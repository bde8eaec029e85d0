// ==========================================
// 资源生物经济引擎 - 环境因子领域模型
// ==========================================
// 职责: 外部地理空间平台统计量 -> 模型因子的桥接对象
// 红线: 因子在截断后必须位于 [min_bound, max_bound]
// ==========================================

use crate::domain::types::{FactorSource, Productivity};
use serde::{Deserialize, Serialize};

// ==========================================
// RawEnvironmentalStats - 外部平台原始统计量
// ==========================================
// 每个字段均可能为 None（外部平台"无数据"标记）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEnvironmentalStats {
    /// 空间平均地表温度 (°C)
    #[serde(default)]
    pub mean_temperature_c: Option<f64>,

    /// 归一化水体/植被指数 (约 -1..1)
    #[serde(default)]
    pub water_index: Option<f64>,

    /// 平均蒸散量
    #[serde(default)]
    pub evapotranspiration: Option<f64>,

    /// 叶绿素 a 浓度 (mg/m³)
    #[serde(default)]
    pub chlorophyll_a: Option<f64>,

    /// 生物量代理 (NDVI)
    #[serde(default)]
    pub ndvi: Option<NdviProxies>,
}

/// NDVI 生物量代理
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NdviProxies {
    pub mean_base_year: f64, // 基准年 NDVI 均值
    pub max_base_year: f64,  // 基准年 NDVI 最大值
    pub mean_next_year: f64, // 次年 NDVI 均值
}

// ==========================================
// FactorProvenance - 因子来源
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorProvenance {
    pub water_index: FactorSource,
    pub temperature: FactorSource,
    pub evaporation: FactorSource,
}

impl FactorProvenance {
    pub fn all(source: FactorSource) -> Self {
        Self {
            water_index: source,
            temperature: source,
            evaporation: source,
        }
    }

    /// 使用了默认常量的因子名
    pub fn fallback_factors(&self) -> Vec<String> {
        [
            ("water_index", self.water_index),
            ("temperature", self.temperature),
            ("evaporation", self.evaporation),
        ]
        .iter()
        .filter(|(_, source)| *source == FactorSource::Fallback)
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

// ==========================================
// EnvironmentalFactorBundle - 环境因子包
// ==========================================
// 每次运行只派生一次
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactorBundle {
    pub water_index_factor: f64,
    pub temperature_factor: f64,
    pub evaporation_factor: f64,
    pub provenance: FactorProvenance,
}

impl EnvironmentalFactorBundle {
    /// 限制因子乘积: 产出受最弱驱动因子约束
    pub fn base_factor(&self) -> f64 {
        self.water_index_factor * self.temperature_factor * self.evaporation_factor
    }
}

// ==========================================
// ResolvedEnvironment - 解析完成的环境输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEnvironment {
    pub stats: RawEnvironmentalStats,
    pub bundle: EnvironmentalFactorBundle,
    pub productivity: Option<Productivity>,
    pub source_name: String,
    pub failure_reason: Option<String>, // 获取失败/超时原因
}
