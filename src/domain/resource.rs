// ==========================================
// 资源生物经济引擎 - 资源参数领域模型
// ==========================================
// 职责: 单一资源单元的生物/经济常量 + 可持续产量结果
// 红线: capacity > 0, 0 < growth_rate < 1
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

// ==========================================
// ResourceParameterSet - 资源参数集
// ==========================================
// 不可变,只能通过 new() 校验后构造
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceParameterSet {
    capacity: f64,    // 环境容纳量 K
    growth_rate: f64, // 内禀增长率 r
    unit_price: f64,  // 单位价格
    unit_cost: f64,   // 单位成本
}

impl ResourceParameterSet {
    /// 校验并构造资源参数集
    ///
    /// # 错误
    /// - capacity <= 0
    /// - growth_rate 不在 (0, 1) 内
    pub fn new(capacity: f64, growth_rate: f64, unit_price: f64, unit_cost: f64) -> ConfigResult<Self> {
        if !(capacity > 0.0) || !capacity.is_finite() {
            return Err(ConfigError::invalid(
                "capacity",
                capacity,
                "环境容纳量必须为正数",
            ));
        }
        if !(growth_rate > 0.0 && growth_rate < 1.0) {
            return Err(ConfigError::invalid(
                "growth_rate",
                growth_rate,
                "增长率必须位于 (0, 1) 区间",
            ));
        }

        Ok(Self {
            capacity,
            growth_rate,
            unit_price,
            unit_cost,
        })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

// ==========================================
// MsyResult - 最大可持续产量结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsyResult {
    pub stock_name: String,

    // ===== 生物学最优 =====
    pub msy: f64,
    pub optimal_effort: f64,
    pub optimal_biomass: f64,
    pub optimal_catch: f64,

    // ===== 经济结果 =====
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,

    // ===== 预防性政策 =====
    // 与 msy 并列报告,不覆盖 msy
    pub precautionary_catch: f64,
}

// ==========================================
// BiomassEstimate - 植被指数生物量估计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomassEstimate {
    pub initial_biomass: f64,   // B0
    pub carrying_capacity: f64, // K
    pub growth_rate: f64,       // r
    pub is_forest: bool,        // NDVI 均值 > 0.3
    pub usable: bool,           // 可直接用于产量模型
    pub reason: Option<String>, // 不可用原因
}
