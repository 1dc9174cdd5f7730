//! 訂單緊急度評分與排序

use chrono::NaiveDate;
use logitrack_core::{AllocationConfig, Order};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// 已評分的訂單
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOrder<'a> {
    pub order: &'a Order,
    /// 緊急度分數（越高越優先）
    pub urgency: Decimal,
}

/// 訂單優先級排序器
///
/// 分數 = w1 × 緊急標記 + w2 × max(0, 1 - 距交期天數 / 時界)
///
/// 無交期的訂單交期分數為 0。排序鍵：
/// 1) 分數降序
/// 2) 交期升序（無交期排最後）
/// 3) 需求數量降序
/// 4) 訂單ID升序
#[derive(Debug, Clone)]
pub struct OrderPrioritizer {
    urgent_weight: Decimal,
    deadline_weight: Decimal,
    horizon_days: u32,
}

impl OrderPrioritizer {
    /// 依配置創建排序器（配置須已通過 `AllocationConfig::validate`）
    pub fn new(config: &AllocationConfig) -> Self {
        Self {
            urgent_weight: config.urgent_weight,
            deadline_weight: config.deadline_weight,
            horizon_days: config.deadline_horizon_days,
        }
    }

    /// 計算單一訂單的緊急度
    pub fn score(&self, order: &Order, as_of: NaiveDate) -> Decimal {
        let flag = if order.is_urgent() {
            Decimal::ONE
        } else {
            Decimal::ZERO
        };

        let proximity = match order.days_until_deadline(as_of) {
            Some(days) => {
                let ratio = Decimal::from(days) / Decimal::from(self.horizon_days);
                (Decimal::ONE - ratio).max(Decimal::ZERO)
            }
            None => Decimal::ZERO,
        };

        self.urgent_weight * flag + self.deadline_weight * proximity
    }

    /// 排序待分配訂單（終止狀態的訂單被排除）
    pub fn prioritize<'a>(&self, orders: &'a [Order], as_of: NaiveDate) -> Vec<RankedOrder<'a>> {
        let mut ranked: Vec<RankedOrder<'a>> = Self::open_orders(orders)
            .map(|order| RankedOrder {
                order,
                urgency: self.score(order, as_of),
            })
            .collect();

        ranked.sort_by(Self::compare);

        tracing::debug!(
            "訂單排序完成：{} 筆待分配（排除 {} 筆已終止）",
            ranked.len(),
            orders.len() - ranked.len()
        );

        ranked
    }

    /// 排序後的訂單ID
    pub fn ranked_ids(&self, orders: &[Order], as_of: NaiveDate) -> Vec<String> {
        self.prioritize(orders, as_of)
            .into_iter()
            .map(|r| r.order.id.clone())
            .collect()
    }

    /// 非終止狀態的訂單
    pub fn open_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
        orders.iter().filter(|o| o.is_open())
    }

    /// 人工標記為緊急的訂單
    pub fn urgent_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
        orders.iter().filter(|o| o.is_urgent())
    }

    fn compare(a: &RankedOrder<'_>, b: &RankedOrder<'_>) -> Ordering {
        b.urgency
            .cmp(&a.urgency)
            .then_with(|| match (a.order.delivery_deadline, b.order.delivery_deadline) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| b.order.quantity.cmp(&a.order.quantity))
            .then_with(|| a.order.id.cmp(&b.order.id))
    }
}
