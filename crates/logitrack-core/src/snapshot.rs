//! 輸入快照：單次分配運算所需的四張資料表

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{AllocError, GeoPoint, InventoryRecord, Order, Product, Result, Warehouse};

/// 輸入資料快照
///
/// 分配引擎只讀取快照，不會修改其中任何記錄。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub warehouses: Vec<Warehouse>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryRecord>,
    pub orders: Vec<Order>,
}

impl Snapshot {
    /// 創建新的快照
    pub fn new(
        warehouses: Vec<Warehouse>,
        products: Vec<Product>,
        inventory: Vec<InventoryRecord>,
        orders: Vec<Order>,
    ) -> Self {
        Self {
            warehouses,
            products,
            inventory,
            orders,
        }
    }

    /// 依 ID 查詢倉庫
    pub fn warehouse(&self, id: &str) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    /// 依 ID 查詢產品
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 檢查參照完整性與數值不變量
    ///
    /// 任何違反都會立即回傳錯誤；需求數量非正的訂單不在此檢查，
    /// 由分配引擎逐筆拒絕。
    pub fn validate(&self) -> Result<()> {
        let mut warehouse_ids = HashSet::new();
        for warehouse in &self.warehouses {
            if !warehouse_ids.insert(warehouse.id.as_str()) {
                return Err(AllocError::DuplicateId {
                    table: "倉庫",
                    id: warehouse.id.clone(),
                });
            }
            check_non_negative(&warehouse.id, "capacity", warehouse.capacity)?;
            check_non_negative(&warehouse.id, "storage_cost", warehouse.storage_cost)?;
            check_coordinate(&warehouse.id, &warehouse.location)?;
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(AllocError::DuplicateId {
                    table: "產品",
                    id: product.id.clone(),
                });
            }
            check_non_negative(&product.id, "unit_cost", product.unit_cost)?;
            check_non_negative(&product.id, "reorder_point", product.reorder_point)?;
        }

        let mut record_keys = HashSet::new();
        for record in &self.inventory {
            if !warehouse_ids.contains(record.warehouse_id.as_str()) {
                return Err(AllocError::UnknownWarehouse(record.warehouse_id.clone()));
            }
            if !product_ids.contains(record.product_id.as_str()) {
                return Err(AllocError::UnknownProduct(record.product_id.clone()));
            }
            if !record_keys.insert((record.warehouse_id.as_str(), record.product_id.as_str())) {
                return Err(AllocError::DuplicateInventoryRecord {
                    warehouse_id: record.warehouse_id.clone(),
                    product_id: record.product_id.clone(),
                });
            }
            check_non_negative(
                &format!("{}/{}", record.warehouse_id, record.product_id),
                "quantity",
                record.quantity,
            )?;
        }

        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(order.id.as_str()) {
                return Err(AllocError::DuplicateId {
                    table: "訂單",
                    id: order.id.clone(),
                });
            }
            if !product_ids.contains(order.product_id.as_str()) {
                return Err(AllocError::UnknownProduct(order.product_id.clone()));
            }
            check_coordinate(&order.id, &order.destination)?;
        }

        Ok(())
    }
}

fn check_non_negative(entity: &str, field: &'static str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AllocError::NegativeValue {
            entity: entity.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

fn check_coordinate(owner: &str, point: &GeoPoint) -> Result<()> {
    if !point.is_valid() {
        return Err(AllocError::InvalidCoordinate {
            owner: owner.to_string(),
            lat: point.latitude,
            lon: point.longitude,
        });
    }
    Ok(())
}
