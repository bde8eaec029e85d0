// ==========================================
// 资源生物经济引擎 - 引擎配置
// ==========================================
// 职责: 显式、不可变的配置值,逐个注入各引擎
// 说明: 所有参考尺度均为可调默认值,不是物理常量
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::environment::{NdviProxies, RawEnvironmentalStats};
use crate::domain::types::WaterSector;
use serde::{Deserialize, Serialize};

// ==========================================
// 校验辅助函数
// ==========================================

fn ensure_positive(field: &str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "必须为正数"))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> ConfigResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "不能为负数"))
    }
}

fn ensure_open_unit(field: &str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "必须位于 (0, 1) 区间"))
    }
}

fn ensure_closed_unit(field: &str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "必须位于 [0, 1] 区间"))
    }
}

// ==========================================
// EngineConfig - 顶层配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fishery: FisheryConfig,
    pub rotation: RotationConfig,
    pub scenario: ScenarioConfig,
    pub scales: SustainabilityScales,
    pub thresholds: RecommendationThresholds,
    pub environment: EnvironmentConfig,

    /// NDVI 生物量代理（可选,启用森林生物量估计）
    pub biomass: Option<NdviProxies>,

    /// 流域水资源分配（可选）
    pub water_allocation: Option<WaterAllocationConfig>,

    /// 输出语言（"zh-CN" 或 "en"）
    pub locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fishery: FisheryConfig::default(),
            rotation: RotationConfig::default(),
            scenario: ScenarioConfig::default(),
            scales: SustainabilityScales::default(),
            thresholds: RecommendationThresholds::default(),
            environment: EnvironmentConfig::default(),
            biomass: None,
            water_allocation: None,
            locale: "zh-CN".to_string(),
        }
    }
}

impl EngineConfig {
    /// 校验全部子配置（任一失败即拒绝运行）
    pub fn validate(&self) -> ConfigResult<()> {
        self.fishery.validate()?;
        self.rotation.validate()?;
        self.scenario.validate()?;
        self.scales.validate()?;
        self.thresholds.validate()?;
        self.environment.validate()?;
        if let Some(water) = &self.water_allocation {
            water.validate()?;
        }
        Ok(())
    }
}

// ==========================================
// FisheryConfig - 渔业种群目录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FisheryConfig {
    /// 预防性捕捞比例（相对 MSY）
    pub precautionary_fraction: f64,
    pub stocks: Vec<StockConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    pub name: String,
    pub capacity: f64,
    pub growth_rate: f64,
    pub unit_price: f64,
    pub unit_cost: f64,
}

impl StockConfig {
    pub fn new(name: &str, capacity: f64, growth_rate: f64, unit_price: f64, unit_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            capacity,
            growth_rate,
            unit_price,
            unit_cost,
        }
    }
}

impl Default for FisheryConfig {
    fn default() -> Self {
        Self {
            precautionary_fraction: 0.8,
            stocks: vec![
                StockConfig::new("Karachi", 12000.0, 0.45, 2800.0, 1200.0),
                StockConfig::new("Ispi", 8000.0, 0.55, 2200.0, 900.0),
                StockConfig::new("Pejerrey", 6000.0, 0.35, 3500.0, 1500.0),
            ],
        }
    }
}

impl FisheryConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_closed_unit("fishery.precautionary_fraction", self.precautionary_fraction)?;
        for stock in &self.stocks {
            if stock.name.trim().is_empty() {
                return Err(ConfigError::invalid("fishery.stocks.name", "", "种群名称不能为空"));
            }
            ensure_positive(&format!("fishery.stocks[{}].capacity", stock.name), stock.capacity)?;
            ensure_open_unit(
                &format!("fishery.stocks[{}].growth_rate", stock.name),
                stock.growth_rate,
            )?;
        }
        Ok(())
    }
}

// ==========================================
// RotationConfig - 森林轮伐期估值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub price_per_volume: f64,        // USD/m³
    pub harvest_cost_per_volume: f64, // USD/m³
    pub discount_rate: f64,           // d ∈ (0, 1)
    pub growth_rate: f64,             // 指数生长率 g
    pub initial_volume: f64,          // V0 (m³/ha)

    // 候选林龄网格 [age_start, age_end], 步长 age_step
    pub age_start: u32,
    pub age_end: u32,
    pub age_step: u32,
    /// 林龄上限（限制网格规模）
    pub max_age: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            price_per_volume: 180.0,
            harvest_cost_per_volume: 85.0,
            discount_rate: 0.07,
            growth_rate: 0.025,
            initial_volume: 150.0,
            age_start: 10,
            age_end: 60,
            age_step: 5,
            max_age: 300,
        }
    }
}

impl RotationConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_open_unit("rotation.discount_rate", self.discount_rate)?;
        ensure_positive("rotation.initial_volume", self.initial_volume)?;
        if !self.growth_rate.is_finite() {
            return Err(ConfigError::invalid("rotation.growth_rate", self.growth_rate, "必须为有限值"));
        }
        if self.age_step == 0 {
            return Err(ConfigError::invalid("rotation.age_step", self.age_step, "步长必须大于 0"));
        }
        if self.age_start > self.age_end {
            return Err(ConfigError::invalid(
                "rotation.age_start",
                self.age_start,
                "起始林龄不能大于结束林龄",
            ));
        }
        if self.age_end > self.max_age {
            return Err(ConfigError::invalid(
                "rotation.age_end",
                self.age_end,
                &format!("结束林龄不能超过上限 {}", self.max_age),
            ));
        }
        Ok(())
    }

    /// 候选林龄网格（按迭代顺序）
    pub fn age_grid(&self) -> Vec<u32> {
        (self.age_start..=self.age_end)
            .step_by(self.age_step.max(1) as usize)
            .collect()
    }
}

// ==========================================
// ScenarioConfig - 情景生产模拟参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// 模拟年数 N
    pub years: u32,
    /// 模拟年数上限（防止超大迭代）
    pub max_years: u32,

    // ===== 产能 =====
    pub capacity: f64,              // 开采能力 (ton/年)
    pub extraction_efficiency: f64, // 开采效率
    pub concentration: f64,         // 品位 ∈ (0, 1]
    pub seasonal_amplitude: f64,    // 季节调制振幅

    // ===== 经济 =====
    pub raw_price: f64,
    pub industrial_price: f64,
    pub extraction_cost: f64,
    pub industrial_cost_multiplier: f64,
    pub total_investment: f64,
    pub amortization_years: u32,
    pub investment_decay: f64, // 学习因子为 1 时投资摊销下降的比例

    // ===== 社会与技术 =====
    pub jobs_per_unit_raw: f64,
    pub jobs_per_unit_industrial: f64,
    pub technology_gain: f64,
    pub ramp_years: u32, // 学习曲线爬坡年数

    // ===== 附加值 =====
    pub value_added_multiplier_raw: f64,        // 附加值 = 利润 × 系数
    pub value_added_multiplier_industrial: f64,

    // ===== 环境 =====
    pub water_per_unit: f64,
    pub co2_per_unit_raw: f64,
    pub co2_per_unit_industrial: f64,
    pub water_impact_weight: f64,
    pub co2_impact_weight: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            years: 10,
            max_years: 300,
            capacity: 100_000.0,
            extraction_efficiency: 0.8,
            concentration: 0.15,
            seasonal_amplitude: 0.1,
            raw_price: 20_000.0,
            industrial_price: 150_000.0,
            extraction_cost: 5_000.0,
            industrial_cost_multiplier: 1.5,
            total_investment: 500_000_000.0,
            amortization_years: 10,
            investment_decay: 0.5,
            jobs_per_unit_raw: 0.01,
            jobs_per_unit_industrial: 0.05,
            technology_gain: 2.0,
            ramp_years: 5,
            value_added_multiplier_raw: 1.0,
            value_added_multiplier_industrial: 1.5,
            water_per_unit: 500.0,
            co2_per_unit_raw: 5.0,
            co2_per_unit_industrial: 8.0,
            water_impact_weight: 0.001,
            co2_impact_weight: 0.1,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.years == 0 {
            return Err(ConfigError::invalid("scenario.years", self.years, "模拟年数必须大于 0"));
        }
        if self.years > self.max_years {
            return Err(ConfigError::invalid(
                "scenario.years",
                self.years,
                &format!("模拟年数不能超过上限 {}", self.max_years),
            ));
        }
        ensure_positive(
            "scenario.value_added_multiplier_raw",
            self.value_added_multiplier_raw,
        )?;
        ensure_positive(
            "scenario.value_added_multiplier_industrial",
            self.value_added_multiplier_industrial,
        )?;
        ensure_positive("scenario.capacity", self.capacity)?;
        if !(self.concentration > 0.0 && self.concentration <= 1.0) {
            return Err(ConfigError::invalid(
                "scenario.concentration",
                self.concentration,
                "品位必须位于 (0, 1] 区间",
            ));
        }
        if self.ramp_years == 0 {
            return Err(ConfigError::invalid(
                "scenario.ramp_years",
                self.ramp_years,
                "爬坡年数必须大于 0",
            ));
        }
        if self.amortization_years == 0 {
            return Err(ConfigError::invalid(
                "scenario.amortization_years",
                self.amortization_years,
                "摊销年数必须大于 0",
            ));
        }
        ensure_non_negative("scenario.extraction_efficiency", self.extraction_efficiency)?;
        ensure_non_negative("scenario.total_investment", self.total_investment)?;
        ensure_closed_unit("scenario.investment_decay", self.investment_decay)?;
        ensure_closed_unit("scenario.seasonal_amplitude", self.seasonal_amplitude)?;
        Ok(())
    }
}

// ==========================================
// SustainabilityScales - 归一化参考尺度
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SustainabilityScales {
    pub economic: f64,      // 总利润参考值
    pub social: f64,        // 总就业参考值
    pub environmental: f64, // 总环境影响参考值（反向）
    pub technological: f64, // 平均技术租金参考值
}

impl Default for SustainabilityScales {
    fn default() -> Self {
        Self {
            economic: 5.0e9,
            social: 1_000.0,
            environmental: 100_000.0,
            technological: 3.0,
        }
    }
}

impl SustainabilityScales {
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_positive("scales.economic", self.economic)?;
        ensure_positive("scales.social", self.social)?;
        ensure_positive("scales.environmental", self.environmental)?;
        ensure_positive("scales.technological", self.technological)?;
        Ok(())
    }
}

// ==========================================
// RecommendationThresholds - 政策等级阈值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub strong: f64, // gap > strong => 全面工业化
    pub phased: f64, // phased < gap <= strong => 分阶段转型
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            strong: 0.15,
            phased: 0.05,
        }
    }
}

impl RecommendationThresholds {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.phased < self.strong) {
            return Err(ConfigError::invalid(
                "thresholds.phased",
                self.phased,
                "分阶段阈值必须小于全面工业化阈值",
            ));
        }
        Ok(())
    }
}

// ==========================================
// EnvironmentConfig - 环境因子派生
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    // 截断区间
    pub min_bound: f64,
    pub max_bound: f64,

    // 缺测时的默认常量
    pub fallback_water_index: f64,
    pub fallback_temperature: f64,
    pub fallback_evaporation: f64,

    // 原始统计量 -> 因子的换算参数
    pub water_index_offset: f64,    // factor = index + offset
    pub temperature_reference: f64, // factor = °C / reference
    pub evaporation_reference: f64, // factor = ET / reference

    /// 外部获取超时（毫秒）
    pub fetch_timeout_ms: u64,

    /// 已由外部平台归约好的统计量（CLI 静态数据源使用）
    pub observed: Option<RawEnvironmentalStats>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            min_bound: 0.0,
            max_bound: 1.0,
            fallback_water_index: 0.5,
            fallback_temperature: 0.5,
            fallback_evaporation: 0.7,
            water_index_offset: 0.5,
            temperature_reference: 30.0,
            evaporation_reference: 300.0,
            fetch_timeout_ms: 10_000,
            observed: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_closed_unit("environment.min_bound", self.min_bound)?;
        ensure_closed_unit("environment.max_bound", self.max_bound)?;
        if self.min_bound > self.max_bound {
            return Err(ConfigError::invalid(
                "environment.min_bound",
                self.min_bound,
                "下界不能大于上界",
            ));
        }
        ensure_closed_unit("environment.fallback_water_index", self.fallback_water_index)?;
        ensure_closed_unit("environment.fallback_temperature", self.fallback_temperature)?;
        ensure_closed_unit("environment.fallback_evaporation", self.fallback_evaporation)?;
        ensure_positive("environment.temperature_reference", self.temperature_reference)?;
        ensure_positive("environment.evaporation_reference", self.evaporation_reference)?;
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "environment.fetch_timeout_ms",
                self.fetch_timeout_ms,
                "超时时间必须大于 0",
            ));
        }
        Ok(())
    }
}

// ==========================================
// WaterAllocationConfig - 流域水资源分配
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAllocationConfig {
    /// 流域可用水量（百万 m³/年）,给出 hydrology 时被水量平衡结果取代
    #[serde(default)]
    pub availability: f64,
    /// 流域水量平衡输入（可选）
    #[serde(default)]
    pub hydrology: Option<BasinHydrology>,
    #[serde(default = "default_water_sectors")]
    pub sectors: Vec<SectorConfig>,
}

/// 流域年均水量平衡输入（百万 m³/年）
///
/// 可用水量 = P - ET - runoff_coefficient·P,负值按 0 处理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasinHydrology {
    pub precipitation: f64,
    pub evapotranspiration: f64,
    #[serde(default = "default_runoff_coefficient")]
    pub runoff_coefficient: f64,
}

fn default_runoff_coefficient() -> f64 {
    0.3
}

impl BasinHydrology {
    pub fn new(precipitation: f64, evapotranspiration: f64) -> Self {
        Self {
            precipitation,
            evapotranspiration,
            runoff_coefficient: default_runoff_coefficient(),
        }
    }

    /// 水量平衡
    pub fn balance(&self) -> f64 {
        let runoff = self.precipitation * self.runoff_coefficient;
        (self.precipitation - self.evapotranspiration - runoff).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorConfig {
    pub sector: WaterSector,
    pub demand: f64,         // 需求（百万 m³）
    pub benefit_per_m3: f64, // 单位效益（USD/m³）
    pub minimum: f64,        // 最低保障（百万 m³）
}

/// 默认部门参数
pub fn default_water_sectors() -> Vec<SectorConfig> {
    vec![
        SectorConfig {
            sector: WaterSector::Agriculture,
            demand: 450.0,
            benefit_per_m3: 0.8,
            minimum: 300.0,
        },
        SectorConfig {
            sector: WaterSector::Municipal,
            demand: 120.0,
            benefit_per_m3: 2.5,
            minimum: 100.0,
        },
        SectorConfig {
            sector: WaterSector::Industrial,
            demand: 80.0,
            benefit_per_m3: 5.0,
            minimum: 50.0,
        },
        SectorConfig {
            sector: WaterSector::Environmental,
            demand: 150.0,
            benefit_per_m3: 1.2,
            minimum: 100.0,
        },
    ]
}

impl WaterAllocationConfig {
    pub fn new(availability: f64) -> Self {
        Self {
            availability,
            hydrology: None,
            sectors: default_water_sectors(),
        }
    }

    /// 由水量平衡派生可用水量
    pub fn from_hydrology(hydrology: BasinHydrology) -> Self {
        Self {
            availability: 0.0,
            hydrology: Some(hydrology),
            sectors: default_water_sectors(),
        }
    }

    /// 实际参与分配的可用水量
    pub fn effective_availability(&self) -> f64 {
        match &self.hydrology {
            Some(hydrology) => hydrology.balance(),
            None => self.availability,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ensure_non_negative("water_allocation.availability", self.availability)?;
        if let Some(hydrology) = &self.hydrology {
            ensure_non_negative("water_allocation.hydrology.precipitation", hydrology.precipitation)?;
            ensure_non_negative(
                "water_allocation.hydrology.evapotranspiration",
                hydrology.evapotranspiration,
            )?;
            ensure_closed_unit(
                "water_allocation.hydrology.runoff_coefficient",
                hydrology.runoff_coefficient,
            )?;
        }
        if self.sectors.is_empty() {
            return Err(ConfigError::invalid("water_allocation.sectors", 0, "至少需要一个用水部门"));
        }
        for sector in &self.sectors {
            ensure_non_negative(&format!("water_allocation.{}.minimum", sector.sector), sector.minimum)?;
            ensure_non_negative(&format!("water_allocation.{}.demand", sector.sector), sector.demand)?;
            ensure_non_negative(
                &format!("water_allocation.{}.benefit_per_m3", sector.sector),
                sector.benefit_per_m3,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_age_grid() {
        let grid = RotationConfig::default().age_grid();
        assert_eq!(grid, vec![10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60]);
    }

    #[test]
    fn test_reject_concentration_above_one() {
        let mut config = ScenarioConfig::default();
        config.concentration = 1.2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scenario.concentration"));

        config.concentration = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reject_years_above_limit() {
        let mut config = ScenarioConfig::default();
        config.years = 4_000_000_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scenario.years"));

        config.years = config.max_years;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reject_age_grid_above_limit() {
        let config = RotationConfig {
            age_end: u32::MAX,
            age_step: 1,
            ..RotationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rotation.age_end"));
    }

    #[test]
    fn test_hydrology_balance() {
        // 800 - 300 - 0.3·800 = 260
        let config = WaterAllocationConfig::from_hydrology(BasinHydrology::new(800.0, 300.0));
        assert!((config.effective_availability() - 260.0).abs() < 1e-9);
        assert!(config.validate().is_ok());

        // 蒸散超过降水时可用水量为 0
        let dry = BasinHydrology::new(100.0, 400.0);
        assert_eq!(dry.balance(), 0.0);
    }

    #[test]
    fn test_reject_inverted_thresholds() {
        let thresholds = RecommendationThresholds {
            strong: 0.05,
            phased: 0.15,
        };
        assert!(thresholds.validate().is_err());
    }
}
