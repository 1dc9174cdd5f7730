//! 單次運算的剩餘庫存與出貨量追蹤

use logitrack_core::{InventoryRecord, Snapshot, Warehouse};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// 分配過程中的可變工作狀態
///
/// 每次運算各自擁有一份，從快照複製而來，不回寫快照。
#[derive(Debug, Clone, Default)]
pub struct WorkingState {
    /// 倉庫 -> 產品 -> 剩餘庫存
    stock: HashMap<String, HashMap<String, Decimal>>,
    /// 倉庫 -> 剩餘出貨量
    capacity: HashMap<String, Decimal>,
}

impl WorkingState {
    /// 從倉庫與庫存記錄建立
    pub fn new(warehouses: &[Warehouse], inventory: &[InventoryRecord]) -> Self {
        let capacity = warehouses
            .iter()
            .map(|w| (w.id.clone(), w.capacity))
            .collect();

        let mut stock: HashMap<String, HashMap<String, Decimal>> = HashMap::new();
        for record in inventory {
            stock
                .entry(record.warehouse_id.clone())
                .or_default()
                .insert(record.product_id.clone(), record.quantity);
        }

        Self { stock, capacity }
    }

    /// 從快照建立
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::new(&snapshot.warehouses, &snapshot.inventory)
    }

    /// 剩餘庫存
    pub fn remaining_stock(&self, warehouse_id: &str, product_id: &str) -> Decimal {
        self.stock
            .get(warehouse_id)
            .and_then(|products| products.get(product_id))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 剩餘出貨量
    pub fn remaining_capacity(&self, warehouse_id: &str) -> Decimal {
        self.capacity
            .get(warehouse_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 可出貨數量（庫存與出貨量取小）
    pub fn available(&self, warehouse_id: &str, product_id: &str) -> Decimal {
        self.remaining_stock(warehouse_id, product_id)
            .min(self.remaining_capacity(warehouse_id))
            .max(Decimal::ZERO)
    }

    /// 扣減庫存與出貨量，回傳實際扣減數量
    pub fn take(&mut self, warehouse_id: &str, product_id: &str, quantity: Decimal) -> Decimal {
        let taken = quantity.min(self.available(warehouse_id, product_id));
        if taken <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        if let Some(stock) = self
            .stock
            .get_mut(warehouse_id)
            .and_then(|products| products.get_mut(product_id))
        {
            *stock -= taken;
        }
        if let Some(capacity) = self.capacity.get_mut(warehouse_id) {
            *capacity -= taken;
        }

        taken
    }
}
