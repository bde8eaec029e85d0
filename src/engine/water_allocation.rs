// ==========================================
// 资源生物经济引擎 - 流域水资源分配
// ==========================================
// 规则:
// 1. 各部门先分配最低保障水量
// 2. 剩余水量按单位效益权重比例追加
// 3. 可用水量低于最低保障总和时标记亏缺,维持最低保障
// 给出流域水量平衡时,可用水量 = P - ET - 径流
// ==========================================

use crate::config::WaterAllocationConfig;
use crate::domain::report::{SectorAllocation, WaterAllocationResult};
use crate::domain::types::GuardedRatio;
use tracing::{debug, warn};

pub struct WaterAllocationOptimizer {
    config: WaterAllocationConfig,
}

impl WaterAllocationOptimizer {
    pub fn new(config: WaterAllocationConfig) -> Self {
        Self { config }
    }

    pub fn allocate(&self) -> WaterAllocationResult {
        let sectors = &self.config.sectors;
        let availability = self.config.effective_availability();

        let total_minimum: f64 = sectors.iter().map(|s| s.minimum).sum();
        let total_weight: f64 = sectors.iter().map(|s| s.benefit_per_m3).sum();
        let remainder = availability - total_minimum;
        let deficit = remainder < 0.0;

        if deficit {
            warn!(
                availability,
                total_minimum, "可用水量不足以满足最低保障,维持最低保障分配"
            );
        }

        let allocations: Vec<SectorAllocation> = sectors
            .iter()
            .map(|s| {
                let extra = if deficit {
                    0.0
                } else {
                    match GuardedRatio::divide(s.benefit_per_m3, total_weight) {
                        GuardedRatio::Value(share) => remainder * share,
                        GuardedRatio::NotApplicable => remainder / sectors.len() as f64,
                    }
                };
                let allocated = s.minimum + extra;

                SectorAllocation {
                    sector: s.sector,
                    minimum: s.minimum,
                    allocated,
                    demand: s.demand,
                    demand_coverage: GuardedRatio::divide(allocated, s.demand),
                    benefit: allocated * s.benefit_per_m3,
                }
            })
            .collect();

        let total_benefit: f64 = allocations.iter().map(|a| a.benefit).sum();

        debug!(
            availability,
            remainder,
            total_benefit,
            sectors = allocations.len(),
            "水资源分配完成"
        );

        WaterAllocationResult {
            availability,
            total_minimum,
            remainder,
            deficit,
            allocations,
            total_benefit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BasinHydrology, SectorConfig};
    use crate::domain::types::WaterSector;

    #[test]
    fn test_remainder_split_by_benefit_weight() {
        // 最低保障合计 550, 剩余 95; 权重合计 9.5
        let result = WaterAllocationOptimizer::new(WaterAllocationConfig::new(645.0)).allocate();

        assert!(!result.deficit);
        assert_eq!(result.total_minimum, 550.0);
        let industrial = result
            .allocations
            .iter()
            .find(|a| a.sector == WaterSector::Industrial)
            .unwrap();
        assert!((industrial.allocated - (50.0 + 95.0 * 5.0 / 9.5)).abs() < 1e-9);

        let total: f64 = result.allocations.iter().map(|a| a.allocated).sum();
        assert!((total - 645.0).abs() < 1e-9);
    }

    #[test]
    fn test_deficit_keeps_minimums() {
        let result = WaterAllocationOptimizer::new(WaterAllocationConfig::new(400.0)).allocate();
        assert!(result.deficit);
        for allocation in &result.allocations {
            assert_eq!(allocation.allocated, allocation.minimum);
        }
    }

    #[test]
    fn test_availability_from_hydrology() {
        // 1100 - 250 - 0.3·1100 = 520 < 550 => 亏缺
        let config = WaterAllocationConfig::from_hydrology(BasinHydrology::new(1100.0, 250.0));
        let result = WaterAllocationOptimizer::new(config).allocate();
        assert!((result.availability - 520.0).abs() < 1e-9);
        assert!(result.deficit);
    }

    #[test]
    fn test_zero_demand_coverage_not_applicable() {
        let config = WaterAllocationConfig {
            availability: 10.0,
            hydrology: None,
            sectors: vec![SectorConfig {
                sector: WaterSector::Environmental,
                demand: 0.0,
                benefit_per_m3: 0.0,
                minimum: 0.0,
            }],
        };
        let result = WaterAllocationOptimizer::new(config).allocate();
        assert_eq!(result.allocations[0].allocated, 10.0);
        assert_eq!(result.allocations[0].demand_coverage, GuardedRatio::NotApplicable);
    }
}
