// ==========================================
// 资源生物经济引擎 - 最大可持续产量模型
// ==========================================
// 模型: Logistic 增长 (Schaefer) 的 MSY 解析解
// - MSY = K·r/4
// - 最优努力量 = r/2, 最优生物量 = K/2
// 输入: 资源参数集
// 输出: MsyResult（含预防性捕捞量）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::StockConfig;
use crate::domain::resource::{MsyResult, ResourceParameterSet};
use tracing::debug;

// ==========================================
// YieldModel - 产量模型
// ==========================================
pub struct YieldModel {
    precautionary_fraction: f64,
}

impl YieldModel {
    /// 构造函数
    ///
    /// # 参数
    /// - `precautionary_fraction`: 预防性捕捞比例（默认 0.8）
    pub fn new(precautionary_fraction: f64) -> Self {
        Self {
            precautionary_fraction,
        }
    }

    /// 计算单一资源的 MSY 及经济结果（纯函数）
    pub fn calculate(&self, stock_name: &str, params: &ResourceParameterSet) -> MsyResult {
        let k = params.capacity();
        let r = params.growth_rate();

        let msy = k * r / 4.0;
        let revenue = msy * params.unit_price();
        let cost = msy * params.unit_cost();

        MsyResult {
            stock_name: stock_name.to_string(),
            msy,
            optimal_effort: r / 2.0,
            optimal_biomass: k / 2.0,
            optimal_catch: msy,
            revenue,
            cost,
            profit: revenue - cost,
            precautionary_catch: msy * self.precautionary_fraction,
        }
    }

    /// 按目录评估种群
    ///
    /// # 参数
    /// - `stocks`: 种群目录
    /// - `only`: 仅评估指定名称（None 表示全部）
    ///
    /// # 返回
    /// 按目录顺序排列的结果
    pub fn evaluate_catalogue(
        &self,
        stocks: &[StockConfig],
        only: Option<&str>,
    ) -> ConfigResult<Vec<MsyResult>> {
        let selected: Vec<&StockConfig> = match only {
            Some(name) => {
                let stock = stocks
                    .iter()
                    .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
                    .ok_or_else(|| ConfigError::UnknownStock(name.to_string()))?;
                vec![stock]
            }
            None => stocks.iter().collect(),
        };

        let mut results = Vec::with_capacity(selected.len());
        for stock in selected {
            let params = ResourceParameterSet::new(
                stock.capacity,
                stock.growth_rate,
                stock.unit_price,
                stock.unit_cost,
            )?;
            let result = self.calculate(&stock.name, &params);
            debug!(
                stock = %stock.name,
                msy = result.msy,
                profit = result.profit,
                "种群 MSY 计算完成"
            );
            results.push(result);
        }

        Ok(results)
    }
}

impl Default for YieldModel {
    fn default() -> Self {
        Self::new(0.8)
    }
}
