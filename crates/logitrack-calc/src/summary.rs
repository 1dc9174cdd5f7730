//! 分配計劃彙總

use logitrack_core::{AllocationPlan, OrderOutcome, RejectedOrder, Result, Warehouse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::ProductStock;

/// 倉庫出貨使用率
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseUtilization {
    pub warehouse_id: String,
    /// 已出貨數量
    pub shipped: Decimal,
    /// 出貨上限
    pub capacity: Decimal,
    /// 使用率（出貨 / 上限；上限為 0 時為 0）
    pub utilization: Decimal,
}

/// 計劃彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// 總成本
    pub total_cost: Decimal,
    /// 總需求量（有效訂單）
    pub total_requested: Decimal,
    /// 總分配量
    pub total_allocated: Decimal,
    /// 滿足率（無需求時為 1）
    pub fulfillment_rate: Decimal,
    /// 各倉庫使用率（依倉庫表順序）
    pub warehouse_utilization: Vec<WarehouseUtilization>,
    /// 未完全滿足的訂單
    pub unfulfilled_orders: Vec<OrderOutcome>,
    /// 被拒絕的訂單
    pub rejected_orders: Vec<RejectedOrder>,
    /// 補貨警示（分配前庫存）
    pub reorder_alerts: Vec<ProductStock>,
}

impl PlanSummary {
    /// 總未滿足數量
    pub fn total_unfulfilled(&self) -> Decimal {
        self.total_requested - self.total_allocated
    }
}

/// 計劃彙總器
pub struct PlanSummarizer;

impl PlanSummarizer {
    /// 彙總分配計劃，不修改計劃本身
    pub fn summarize(
        plan: &AllocationPlan,
        warehouses: &[Warehouse],
        stocks: &[ProductStock],
    ) -> Result<PlanSummary> {
        let shipped = plan.shipped_by_warehouse();

        let warehouse_utilization = warehouses
            .iter()
            .map(|w| {
                let shipped = shipped.get(w.id.as_str()).copied().unwrap_or(Decimal::ZERO);
                let utilization = if w.capacity > Decimal::ZERO {
                    shipped / w.capacity
                } else {
                    Decimal::ZERO
                };
                WarehouseUtilization {
                    warehouse_id: w.id.clone(),
                    shipped,
                    capacity: w.capacity,
                    utilization,
                }
            })
            .collect();

        let total_requested: Decimal = plan.outcomes.iter().map(|o| o.requested).sum();
        let total_allocated: Decimal = plan.outcomes.iter().map(|o| o.allocated).sum();
        let fulfillment_rate = if total_requested > Decimal::ZERO {
            total_allocated / total_requested
        } else {
            Decimal::ONE
        };

        Ok(PlanSummary {
            total_cost: plan.total_cost()?,
            total_requested,
            total_allocated,
            fulfillment_rate,
            warehouse_utilization,
            unfulfilled_orders: plan.unfulfilled().cloned().collect(),
            rejected_orders: plan.rejected.clone(),
            reorder_alerts: stocks.iter().filter(|s| s.needs_reorder).cloned().collect(),
        })
    }
}
