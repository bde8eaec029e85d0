// ==========================================
// 资源生物经济引擎 - 情景生产模拟器
// ==========================================
// 模型: 以年份为计数器的离散差分方程
// - env_base        = water × temperature × evaporation
// - seasonal(year)  = 1 + amplitude·sin((year-1)·π/3)
// - base_extraction = capacity × env_base × seasonal(year)
// - volume          = base_extraction × concentration × efficiency
// 情景经济学由 Scenario 各变体自行计算
// 契约: 相同输入必然得到相同输出
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::ScenarioConfig;
use crate::domain::environment::EnvironmentalFactorBundle;
use crate::domain::scenario::{Scenario, ScenarioYearRecord};
use std::f64::consts::PI;
use tracing::debug;

/// 季节调制周期（年）
pub const SEASONAL_PERIOD_YEARS: f64 = 3.0;

// ==========================================
// 情景经济学（每个变体拥有自己的计算策略）
// ==========================================

/// 单年经济结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearEconomics {
    pub revenue: f64,
    pub cost: f64,
    pub jobs: f64,
    pub tech_rent: f64,
}

impl Scenario {
    /// 计算单年经济结果
    ///
    /// # 参数
    /// - `volume`: 当年开采量
    /// - `learning_factor`: 学习因子 ∈ [0, 1]（原料情景忽略）
    /// - `params`: 情景参数
    pub fn economics(&self, volume: f64, learning_factor: f64, params: &ScenarioConfig) -> YearEconomics {
        match self {
            Scenario::RawMaterial => YearEconomics {
                revenue: volume * params.raw_price,
                cost: volume * params.extraction_cost,
                jobs: volume * params.jobs_per_unit_raw,
                tech_rent: 1.0,
            },
            Scenario::Industrialization => {
                let scale = 0.5 + 0.5 * learning_factor;
                YearEconomics {
                    revenue: volume * params.industrial_price * scale,
                    cost: volume * params.extraction_cost * params.industrial_cost_multiplier
                        + decreasing_annual_investment(learning_factor, params),
                    jobs: volume * params.jobs_per_unit_industrial * scale,
                    tech_rent: 1.0 + params.technology_gain * learning_factor,
                }
            }
        }
    }

    /// 单位开采量的 CO2 排放
    /// 附加值系数（附加值 = 利润 × 系数）
    pub fn value_added_multiplier(&self, params: &ScenarioConfig) -> f64 {
        match self {
            Scenario::RawMaterial => params.value_added_multiplier_raw,
            Scenario::Industrialization => params.value_added_multiplier_industrial,
        }
    }

    pub fn co2_per_unit(&self, params: &ScenarioConfig) -> f64 {
        match self {
            Scenario::RawMaterial => params.co2_per_unit_raw,
            Scenario::Industrialization => params.co2_per_unit_industrial,
        }
    }
}

/// 逐年递减的投资摊销
///
/// (total_investment / amortization_years) × (1 - investment_decay × learning_factor)
pub fn decreasing_annual_investment(learning_factor: f64, params: &ScenarioConfig) -> f64 {
    let annual = params.total_investment / params.amortization_years as f64;
    annual * (1.0 - params.investment_decay * learning_factor)
}

// ==========================================
// ScenarioProductionSimulator - 情景生产模拟器
// ==========================================
pub struct ScenarioProductionSimulator {
    params: ScenarioConfig,
}

impl ScenarioProductionSimulator {
    /// 校验参数并构造
    ///
    /// # 错误
    /// capacity <= 0, concentration 不在 (0, 1], ramp_years == 0, years == 0
    pub fn new(params: ScenarioConfig) -> ConfigResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ScenarioConfig {
        &self.params
    }

    /// 季节调制系数
    pub fn seasonal_modulation(&self, year: u32) -> f64 {
        let phase = (year as f64 - 1.0) * PI / SEASONAL_PERIOD_YEARS;
        1.0 + self.params.seasonal_amplitude * phase.sin()
    }

    /// 学习因子: min(1, (year-1)/ramp_years)
    pub fn learning_factor(&self, year: u32) -> f64 {
        ((year as f64 - 1.0) / self.params.ramp_years as f64).min(1.0)
    }

    /// 当年开采量
    pub fn extracted_volume(&self, year: u32, env: &EnvironmentalFactorBundle) -> f64 {
        let base_extraction =
            self.params.capacity * env.base_factor() * self.seasonal_modulation(year);
        base_extraction * self.params.concentration * self.params.extraction_efficiency
    }

    /// 模拟单个情景单年
    pub fn simulate_year(
        &self,
        scenario: Scenario,
        year: u32,
        env: &EnvironmentalFactorBundle,
    ) -> ScenarioYearRecord {
        let p = &self.params;
        let volume = self.extracted_volume(year, env);
        let economics = scenario.economics(volume, self.learning_factor(year), p);

        let profit = economics.revenue - economics.cost;
        let water_consumed = volume * p.water_per_unit;
        let co2_emitted = volume * scenario.co2_per_unit(p);
        let environmental_impact =
            water_consumed * p.water_impact_weight + co2_emitted * p.co2_impact_weight;

        ScenarioYearRecord {
            year,
            extracted_volume: volume,
            revenue: economics.revenue,
            cost: economics.cost,
            profit,
            value_added: profit * scenario.value_added_multiplier(p),
            jobs: economics.jobs,
            tech_rent: economics.tech_rent,
            water_consumed,
            co2_emitted,
            environmental_impact,
        }
    }

    /// 模拟单个情景全部年份（年份升序）
    pub fn simulate(
        &self,
        scenario: Scenario,
        env: &EnvironmentalFactorBundle,
    ) -> Vec<ScenarioYearRecord> {
        let records: Vec<ScenarioYearRecord> = (1..=self.params.years)
            .map(|year| self.simulate_year(scenario, year, env))
            .collect();

        debug!(
            scenario = %scenario,
            years = records.len(),
            env_base = env.base_factor(),
            "情景模拟完成"
        );

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::FactorProvenance;
    use crate::domain::types::FactorSource;

    fn bundle(w: f64, t: f64, e: f64) -> EnvironmentalFactorBundle {
        EnvironmentalFactorBundle {
            water_index_factor: w,
            temperature_factor: t,
            evaporation_factor: e,
            provenance: FactorProvenance::all(FactorSource::Measured),
        }
    }

    #[test]
    fn test_learning_factor_ramp() {
        let sim = ScenarioProductionSimulator::new(ScenarioConfig::default()).unwrap();
        assert_eq!(sim.learning_factor(1), 0.0);
        assert_eq!(sim.learning_factor(3), 0.4);
        assert_eq!(sim.learning_factor(6), 1.0);
        assert_eq!(sim.learning_factor(10), 1.0);
    }

    #[test]
    fn test_seasonal_modulation_year_one_is_neutral() {
        let sim = ScenarioProductionSimulator::new(ScenarioConfig::default()).unwrap();
        assert_eq!(sim.seasonal_modulation(1), 1.0);
        // 周期 3 年的半周期正弦: 第 4 年回到 sin(π) ≈ 0
        assert!((sim.seasonal_modulation(4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_raw_material_year_values() {
        let sim = ScenarioProductionSimulator::new(ScenarioConfig::default()).unwrap();
        let env = bundle(0.5, 0.5, 0.7);
        let record = sim.simulate_year(Scenario::RawMaterial, 1, &env);

        let volume = 100_000.0 * env.base_factor() * 1.0 * 0.15 * 0.8;
        assert_eq!(record.extracted_volume, volume);
        assert_eq!(record.revenue, volume * 20_000.0);
        assert_eq!(record.cost, volume * 5_000.0);
        assert_eq!(record.tech_rent, 1.0);
        assert_eq!(record.co2_emitted, volume * 5.0);
        assert_eq!(record.value_added, record.profit);
    }

    #[test]
    fn test_industrial_first_year_uses_half_scale() {
        let sim = ScenarioProductionSimulator::new(ScenarioConfig::default()).unwrap();
        let env = bundle(0.5, 0.5, 0.7);
        let record = sim.simulate_year(Scenario::Industrialization, 1, &env);

        let volume = record.extracted_volume;
        assert_eq!(record.revenue, volume * 150_000.0 * 0.5);
        assert_eq!(record.cost, volume * 5_000.0 * 1.5 + 50_000_000.0);
        assert_eq!(record.tech_rent, 1.0);
        assert_eq!(record.co2_emitted, volume * 8.0);
        assert_eq!(record.value_added, record.profit * 1.5);
    }

    #[test]
    fn test_investment_decreases_with_learning() {
        let params = ScenarioConfig::default();
        let early = decreasing_annual_investment(0.0, &params);
        let late = decreasing_annual_investment(1.0, &params);
        assert_eq!(early, 50_000_000.0);
        assert_eq!(late, 25_000_000.0);
    }
}
