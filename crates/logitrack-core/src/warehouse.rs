//! 倉庫模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// 倉庫
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// 倉庫ID
    pub id: String,

    /// 名稱
    pub name: Option<String>,

    /// 位置
    pub location: GeoPoint,

    /// 單次運算可出貨的總量上限（吞吐量，而非儲位）
    pub capacity: Decimal,

    /// 每單位倉儲成本
    pub storage_cost: Decimal,
}

impl Warehouse {
    /// 創建新的倉庫
    pub fn new(id: String, location: GeoPoint, capacity: Decimal, storage_cost: Decimal) -> Self {
        Self {
            id,
            name: None,
            location,
            capacity,
            storage_cost,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// 顯示用名稱（無名稱時使用 ID）
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
