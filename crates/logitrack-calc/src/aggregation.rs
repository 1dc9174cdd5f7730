//! 全網庫存彙總與補貨警示

use logitrack_core::{AllocError, InventoryRecord, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一產品的全網庫存狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStock {
    /// 產品ID
    pub product_id: String,
    /// 全網庫存
    pub network_stock: Decimal,
    /// 持有庫存記錄的倉庫數
    pub warehouse_count: usize,
    /// 再訂購點
    pub reorder_point: Decimal,
    /// 是否需要補貨
    pub needs_reorder: bool,
    /// 補足到再訂購點的數量
    pub shortfall: Decimal,
}

/// 庫存彙總計算器
pub struct InventoryAggregator;

impl InventoryAggregator {
    /// 彙總全網庫存
    ///
    /// 必須在分配前以當下庫存計算；結果順序與產品表一致。
    /// 參照未知產品的庫存記錄視為資料錯誤。
    pub fn aggregate(
        products: &[Product],
        inventory: &[InventoryRecord],
    ) -> logitrack_core::Result<Vec<ProductStock>> {
        let mut totals: HashMap<&str, (Decimal, usize)> = products
            .iter()
            .map(|p| (p.id.as_str(), (Decimal::ZERO, 0)))
            .collect();

        for record in inventory {
            let entry = totals
                .get_mut(record.product_id.as_str())
                .ok_or_else(|| AllocError::UnknownProduct(record.product_id.clone()))?;
            entry.0 += record.quantity;
            entry.1 += 1;
        }

        let stocks: Vec<ProductStock> = products
            .iter()
            .map(|product| {
                let (network_stock, warehouse_count) = totals
                    .get(product.id.as_str())
                    .copied()
                    .unwrap_or((Decimal::ZERO, 0));

                ProductStock {
                    product_id: product.id.clone(),
                    network_stock,
                    warehouse_count,
                    reorder_point: product.reorder_point,
                    needs_reorder: product.needs_reorder(network_stock),
                    shortfall: product.shortfall(network_stock),
                }
            })
            .collect();

        tracing::debug!(
            "庫存彙總完成：產品 {} 項，需補貨 {} 項",
            stocks.len(),
            stocks.iter().filter(|s| s.needs_reorder).count()
        );

        Ok(stocks)
    }

    /// 篩選需要補貨的產品
    pub fn reorder_alerts(stocks: &[ProductStock]) -> Vec<ProductStock> {
        stocks.iter().filter(|s| s.needs_reorder).cloned().collect()
    }
}
