//! 分配計劃模型（分配運算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{AllocError, Result};

/// 分配明細：從某倉庫為某訂單出貨指定數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// 訂單ID
    pub order_id: String,

    /// 產品ID
    pub product_id: String,

    /// 出貨倉庫ID
    pub warehouse_id: String,

    /// 出貨數量
    pub quantity: Decimal,

    /// 單位成本（運輸 + 倉儲）
    pub unit_cost: Decimal,

    /// 倉庫到送貨地點的距離（公里）
    pub distance_km: Decimal,
}

impl AllocationLine {
    /// 明細總成本（數量 × 單位成本，溢位時回傳錯誤）
    pub fn line_cost(&self) -> Result<Decimal> {
        self.quantity.checked_mul(self.unit_cost).ok_or_else(|| {
            AllocError::CostOverflow(format!(
                "訂單 {} 倉庫 {}: {} × {}",
                self.order_id, self.warehouse_id, self.quantity, self.unit_cost
            ))
        })
    }
}

/// 單一訂單的分配結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// 訂單ID
    pub order_id: String,

    /// 產品ID
    pub product_id: String,

    /// 需求數量
    pub requested: Decimal,

    /// 已分配數量
    pub allocated: Decimal,
}

impl OrderOutcome {
    /// 創建尚未分配的結果
    pub fn new(order_id: String, product_id: String, requested: Decimal) -> Self {
        Self {
            order_id,
            product_id,
            requested,
            allocated: Decimal::ZERO,
        }
    }

    /// 未滿足數量（需求 - 已分配）
    pub fn unfulfilled(&self) -> Decimal {
        self.requested - self.allocated
    }

    /// 是否完全滿足
    pub fn is_fulfilled(&self) -> bool {
        self.unfulfilled() <= Decimal::ZERO
    }
}

/// 因資料無效而被跳過的訂單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedOrder {
    pub order_id: String,
    pub quantity: Decimal,
    pub reason: String,
}

/// 分配計劃
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// 分配明細（依提交順序）
    pub lines: Vec<AllocationLine>,

    /// 每張訂單的結果（依處理順序）
    pub outcomes: Vec<OrderOutcome>,

    /// 被拒絕的訂單
    pub rejected: Vec<RejectedOrder>,
}

impl AllocationPlan {
    /// 創建空的分配計劃
    pub fn new() -> Self {
        Self::default()
    }

    /// 計劃總成本
    pub fn total_cost(&self) -> Result<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |total, line| {
            let cost = line.line_cost()?;
            total.checked_add(cost).ok_or_else(|| {
                AllocError::CostOverflow(format!(
                    "計劃總成本超出範圍（{} 筆明細）",
                    self.lines.len()
                ))
            })
        })
    }

    /// 查詢訂單結果
    pub fn outcome(&self, order_id: &str) -> Option<&OrderOutcome> {
        self.outcomes.iter().find(|o| o.order_id == order_id)
    }

    /// 查詢訂單的所有明細
    pub fn lines_for_order<'a>(
        &'a self,
        order_id: &'a str,
    ) -> impl Iterator<Item = &'a AllocationLine> + 'a {
        self.lines.iter().filter(move |l| l.order_id == order_id)
    }

    /// 有未滿足數量的訂單
    pub fn unfulfilled(&self) -> impl Iterator<Item = &OrderOutcome> {
        self.outcomes.iter().filter(|o| !o.is_fulfilled())
    }

    /// 各倉庫出貨總量（依倉庫ID排序）
    pub fn shipped_by_warehouse(&self) -> BTreeMap<&str, Decimal> {
        let mut shipped = BTreeMap::new();
        for line in &self.lines {
            *shipped
                .entry(line.warehouse_id.as_str())
                .or_insert(Decimal::ZERO) += line.quantity;
        }
        shipped
    }
}
