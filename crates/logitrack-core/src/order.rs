//! 訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 待處理
    Pending,
    /// 人工標記為緊急
    Urgent,
    /// 已出貨完成
    Fulfilled,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    /// 終止狀態的訂單不再參與分配
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Fulfilled | OrderStatus::Cancelled)
    }
}

/// 客戶訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: String,

    /// 產品ID
    pub product_id: String,

    /// 需求數量
    pub quantity: Decimal,

    /// 送貨地點
    pub destination: GeoPoint,

    /// 狀態
    pub status: OrderStatus,

    /// 交期（可為空）
    pub delivery_deadline: Option<NaiveDate>,
}

impl Order {
    /// 創建新的訂單（預設狀態為待處理、無交期）
    pub fn new(id: String, product_id: String, quantity: Decimal, destination: GeoPoint) -> Self {
        Self {
            id,
            product_id,
            quantity,
            destination,
            status: OrderStatus::Pending,
            delivery_deadline: None,
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置交期
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.delivery_deadline = Some(deadline);
        self
    }

    /// 是否被人工標記為緊急
    pub fn is_urgent(&self) -> bool {
        self.status == OrderStatus::Urgent
    }

    /// 是否仍待分配（非終止狀態）
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// 需求數量是否有效
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    /// 距交期天數（無交期時為 None，逾期為負數）
    pub fn days_until_deadline(&self, as_of: NaiveDate) -> Option<i64> {
        self.delivery_deadline
            .map(|deadline| (deadline - as_of).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            "ORD001".to_string(),
            "P001".to_string(),
            Decimal::from(500),
            GeoPoint::new(19.0760, 72.8777),
        )
    }

    #[test]
    fn test_create_order() {
        let order = sample_order();

        assert_eq!(order.id, "ORD001");
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.is_open());
        assert!(!order.is_urgent());
        assert!(order.has_valid_quantity());
        assert_eq!(order.delivery_deadline, None);
    }

    #[test]
    fn test_order_builder() {
        let order = sample_order()
            .with_status(OrderStatus::Urgent)
            .with_deadline(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap());

        assert!(order.is_urgent());
        assert_eq!(
            order.days_until_deadline(NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()),
            Some(2)
        );
        assert_eq!(
            order.days_until_deadline(NaiveDate::from_ymd_opt(2025, 3, 28).unwrap()),
            Some(-2)
        );
    }

    #[test]
    fn test_terminal_status() {
        assert!(OrderStatus::Fulfilled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Urgent.is_terminal());

        let cancelled = sample_order().with_status(OrderStatus::Cancelled);
        assert!(!cancelled.is_open());
    }

    #[test]
    fn test_invalid_quantity() {
        let mut order = sample_order();
        order.quantity = Decimal::ZERO;
        assert!(!order.has_valid_quantity());

        order.quantity = Decimal::from(-3);
        assert!(!order.has_valid_quantity());
    }
}
