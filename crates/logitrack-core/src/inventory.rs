//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存記錄（每個倉庫、產品組合最多一筆）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 倉庫ID
    pub warehouse_id: String,

    /// 產品ID
    pub product_id: String,

    /// 現有庫存
    pub quantity: Decimal,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(warehouse_id: String, product_id: String, quantity: Decimal) -> Self {
        Self {
            warehouse_id,
            product_id,
            quantity,
        }
    }
}
