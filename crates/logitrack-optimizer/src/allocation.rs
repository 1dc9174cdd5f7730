//! 分配引擎：依優先順序、由低成本倉庫開始出貨
//!
//! 訂單嚴格依排序處理，已提交的明細不會回頭調整。
//! 這是以緊急度優先於全域成本最佳化的貪婪策略。

use logitrack_calc::{CostModel, CostQuote, RankedOrder};
use logitrack_core::{
    AllocationLine, AllocationPlan, Order, OrderOutcome, RejectedOrder, Result, Warehouse,
};
use rust_decimal::Decimal;

use crate::state::WorkingState;

/// 分配引擎
pub struct AllocationEngine<'a> {
    cost_model: &'a CostModel,
    warehouses: &'a [Warehouse],
}

impl<'a> AllocationEngine<'a> {
    /// 創建分配引擎
    pub fn new(cost_model: &'a CostModel, warehouses: &'a [Warehouse]) -> Self {
        Self {
            cost_model,
            warehouses,
        }
    }

    /// 依排序結果分配所有訂單
    ///
    /// 成本計算溢位時中止並回傳錯誤。
    pub fn allocate(
        &self,
        ranked: &[RankedOrder<'_>],
        state: &mut WorkingState,
    ) -> Result<AllocationPlan> {
        let mut plan = AllocationPlan::new();

        for entry in ranked {
            self.allocate_order(entry.order, state, &mut plan)?;
        }

        tracing::debug!(
            "分配完成：明細 {} 筆，未完全滿足 {} 筆，拒絕 {} 筆",
            plan.lines.len(),
            plan.unfulfilled().count(),
            plan.rejected.len()
        );

        Ok(plan)
    }

    /// 分配單一訂單，可拆分到多個倉庫
    fn allocate_order(
        &self,
        order: &Order,
        state: &mut WorkingState,
        plan: &mut AllocationPlan,
    ) -> Result<()> {
        if !order.has_valid_quantity() {
            tracing::warn!("訂單 {} 需求數量無效 ({})，跳過", order.id, order.quantity);
            plan.rejected.push(RejectedOrder {
                order_id: order.id.clone(),
                quantity: order.quantity,
                reason: format!("需求數量必須大於 0，實際為 {}", order.quantity),
            });
            return Ok(());
        }

        let mut outcome = OrderOutcome::new(
            order.id.clone(),
            order.product_id.clone(),
            order.quantity,
        );

        for quote in self.candidates(order, state)? {
            let remaining = outcome.unfulfilled();
            if remaining <= Decimal::ZERO {
                break;
            }

            let taken = state.take(&quote.warehouse_id, &order.product_id, remaining);
            if taken <= Decimal::ZERO {
                continue;
            }

            tracing::debug!(
                "訂單 {} 由倉庫 {} 出貨 {}，單位成本 {}",
                order.id,
                quote.warehouse_id,
                taken,
                quote.unit_cost
            );

            let line = AllocationLine {
                order_id: order.id.clone(),
                product_id: order.product_id.clone(),
                warehouse_id: quote.warehouse_id,
                quantity: taken,
                unit_cost: quote.unit_cost,
                distance_km: quote.distance_km,
            };
            line.line_cost()?;

            outcome.allocated += taken;
            plan.lines.push(line);
        }

        if !outcome.is_fulfilled() {
            tracing::warn!(
                "訂單 {} 產品 {} 未完全滿足：需求 {}，缺 {}",
                order.id,
                order.product_id,
                outcome.requested,
                outcome.unfulfilled()
            );
        }

        plan.outcomes.push(outcome);
        Ok(())
    }

    /// 可出貨倉庫報價，依單位成本升序、倉庫ID升序
    fn candidates(&self, order: &Order, state: &WorkingState) -> Result<Vec<CostQuote>> {
        let mut quotes = self
            .warehouses
            .iter()
            .filter(|w| state.available(&w.id, &order.product_id) > Decimal::ZERO)
            .map(|w| self.cost_model.quote(w, order))
            .collect::<Result<Vec<CostQuote>>>()?;

        quotes.sort_by(|a, b| {
            a.unit_cost
                .cmp(&b.unit_cost)
                .then_with(|| a.warehouse_id.cmp(&b.warehouse_id))
        });

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use logitrack_calc::OrderPrioritizer;
    use logitrack_core::{AllocError, AllocationConfig, GeoPoint, InventoryRecord, OrderStatus};
    use rstest::rstest;

    fn here() -> GeoPoint {
        GeoPoint::new(19.0760, 72.8777)
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()
    }

    fn two_warehouses(cap1: i64, cap2: i64) -> Vec<Warehouse> {
        vec![
            Warehouse::new("W1".to_string(), here(), Decimal::from(cap1), Decimal::from(5)),
            Warehouse::new("W2".to_string(), here(), Decimal::from(cap2), Decimal::from(3)),
        ]
    }

    fn stock() -> Vec<InventoryRecord> {
        vec![
            InventoryRecord::new("W1".to_string(), "P".to_string(), Decimal::from(10)),
            InventoryRecord::new("W2".to_string(), "P".to_string(), Decimal::from(20)),
        ]
    }

    fn order(id: &str, quantity: i64) -> Order {
        Order::new(id.to_string(), "P".to_string(), Decimal::from(quantity), here())
    }

    fn run_with(
        config: &AllocationConfig,
        warehouses: &[Warehouse],
        inventory: &[InventoryRecord],
        orders: &[Order],
    ) -> logitrack_core::Result<AllocationPlan> {
        let cost_model = CostModel::new(config);
        let ranked = OrderPrioritizer::new(config).prioritize(orders, as_of());
        let mut state = WorkingState::new(warehouses, inventory);
        AllocationEngine::new(&cost_model, warehouses).allocate(&ranked, &mut state)
    }

    fn run(
        warehouses: &[Warehouse],
        inventory: &[InventoryRecord],
        orders: &[Order],
    ) -> AllocationPlan {
        run_with(&AllocationConfig::default(), warehouses, inventory, orders).unwrap()
    }

    #[rstest]
    #[case::cheapest_sufficient(100, 15, &[("W2", 15)], 0, 45)]
    #[case::spill_to_next_cheapest(100, 25, &[("W2", 20), ("W1", 5)], 0, 85)]
    #[case::partial_fulfillment(100, 40, &[("W2", 20), ("W1", 10)], 10, 110)]
    // W2 出貨上限 12，剩餘需求轉到 W1
    #[case::capacity_limits_shipment(12, 15, &[("W2", 12), ("W1", 3)], 0, 51)]
    fn test_single_order_allocation(
        #[case] w2_capacity: i64,
        #[case] quantity: i64,
        #[case] expected_lines: &[(&str, i64)],
        #[case] expected_unfulfilled: i64,
        #[case] expected_cost: i64,
    ) {
        let plan = run(&two_warehouses(100, w2_capacity), &stock(), &[order("O1", quantity)]);

        let lines: Vec<(&str, Decimal)> = plan
            .lines
            .iter()
            .map(|l| (l.warehouse_id.as_str(), l.quantity))
            .collect();
        let expected: Vec<(&str, Decimal)> = expected_lines
            .iter()
            .map(|&(id, qty)| (id, Decimal::from(qty)))
            .collect();
        assert_eq!(lines, expected);

        let outcome = plan.outcome("O1").unwrap();
        assert_eq!(outcome.unfulfilled(), Decimal::from(expected_unfulfilled));
        assert_eq!(plan.unfulfilled().count(), usize::from(expected_unfulfilled > 0));
        assert_eq!(plan.total_cost().unwrap(), Decimal::from(expected_cost));
    }

    #[test]
    fn test_product_without_stock_is_unfulfilled() {
        let mut missing = order("O1", 5);
        missing.product_id = "Q".to_string();

        let plan = run(&two_warehouses(100, 100), &stock(), &[missing]);

        assert!(plan.lines.is_empty());
        assert_eq!(plan.outcome("O1").unwrap().unfulfilled(), Decimal::from(5));
    }

    #[test]
    fn test_invalid_quantity_rejected_and_run_continues() {
        let plan = run(
            &two_warehouses(100, 100),
            &stock(),
            &[order("BAD", 0), order("NEG", -4), order("OK", 5)],
        );

        assert_eq!(plan.rejected.len(), 2);
        assert!(plan.outcome("BAD").is_none());
        assert_eq!(plan.outcome("OK").unwrap().allocated, Decimal::from(5));
    }

    #[test]
    fn test_priority_order_consumes_shared_stock_first() {
        let orders = vec![
            order("LATER", 20),
            order("FIRST", 20).with_status(OrderStatus::Urgent),
        ];

        let plan = run(&two_warehouses(100, 100), &stock(), &orders);

        // 緊急訂單先取得 W2 的全部庫存
        let first: Vec<_> = plan.lines_for_order("FIRST").collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].warehouse_id, "W2");
        assert_eq!(first[0].quantity, Decimal::from(20));

        let later = plan.outcome("LATER").unwrap();
        assert_eq!(later.allocated, Decimal::from(10));
        assert_eq!(plan.outcomes[0].order_id, "FIRST");
    }

    #[test]
    fn test_tie_broken_by_warehouse_id() {
        let warehouses = vec![
            Warehouse::new("WB".to_string(), here(), Decimal::from(100), Decimal::from(3)),
            Warehouse::new("WA".to_string(), here(), Decimal::from(100), Decimal::from(3)),
        ];
        let inventory = vec![
            InventoryRecord::new("WB".to_string(), "P".to_string(), Decimal::from(10)),
            InventoryRecord::new("WA".to_string(), "P".to_string(), Decimal::from(10)),
        ];

        let plan = run(&warehouses, &inventory, &[order("O1", 4)]);

        assert_eq!(plan.lines[0].warehouse_id, "WA");
    }

    #[test]
    fn test_zero_capacity_warehouse_skipped() {
        let plan = run(&two_warehouses(100, 0), &stock(), &[order("O1", 8)]);

        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].warehouse_id, "W1");
    }

    #[test]
    fn test_cost_overflow_aborts_allocation() {
        // 唯一有庫存的倉庫報價溢位，不可提交明細
        let config = AllocationConfig::default()
            .with_distance_rate(Decimal::from_i128_with_scale(10i128.pow(27), 0));
        let warehouses = vec![Warehouse::new(
            "DEL".to_string(),
            GeoPoint::new(28.7041, 77.1025),
            Decimal::from(100),
            Decimal::from(3),
        )];
        let inventory = vec![InventoryRecord::new(
            "DEL".to_string(),
            "P".to_string(),
            Decimal::from(10),
        )];

        let err = run_with(&config, &warehouses, &inventory, &[order("O1", 2)]).unwrap_err();

        assert!(matches!(err, AllocError::CostOverflow(_)));
    }
}
