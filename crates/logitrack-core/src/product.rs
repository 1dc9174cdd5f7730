//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 再訂購點（全網庫存低於此值時需補貨）
    pub reorder_point: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: String, unit_cost: Decimal, reorder_point: Decimal) -> Self {
        Self {
            id,
            unit_cost,
            reorder_point,
        }
    }

    /// 檢查給定庫存是否低於再訂購點
    pub fn needs_reorder(&self, network_stock: Decimal) -> bool {
        network_stock < self.reorder_point
    }

    /// 補足到再訂購點所需的數量
    pub fn shortfall(&self, network_stock: Decimal) -> Decimal {
        if self.needs_reorder(network_stock) {
            self.reorder_point - network_stock
        } else {
            Decimal::ZERO
        }
    }
}
