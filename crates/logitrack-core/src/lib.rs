//! # LogiTrack Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod geo;
pub mod inventory;
pub mod order;
pub mod plan;
pub mod product;
pub mod snapshot;
pub mod warehouse;

// Re-export 主要類型
pub use config::AllocationConfig;
pub use geo::GeoPoint;
pub use inventory::InventoryRecord;
pub use order::{Order, OrderStatus};
pub use plan::{AllocationLine, AllocationPlan, OrderOutcome, RejectedOrder};
pub use product::Product;
pub use snapshot::Snapshot;
pub use warehouse::Warehouse;

/// 分配錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocError {
    #[error("找不到倉庫: {0}")]
    UnknownWarehouse(String),

    #[error("找不到產品: {0}")]
    UnknownProduct(String),

    #[error("重複的{table}識別碼: {id}")]
    DuplicateId { table: &'static str, id: String },

    #[error("重複的庫存記錄: 倉庫 {warehouse_id}, 產品 {product_id}")]
    DuplicateInventoryRecord {
        warehouse_id: String,
        product_id: String,
    },

    #[error("{entity} 的 {field} 不可為負數: {value}")]
    NegativeValue {
        entity: String,
        field: &'static str,
        value: rust_decimal::Decimal,
    },

    #[error("無效的座標 ({lat}, {lon}): {owner}")]
    InvalidCoordinate { owner: String, lat: f64, lon: f64 },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("成本計算溢位: {0}")]
    CostOverflow(String),
}

impl AllocError {
    /// 是否為資料完整性錯誤（參照或數值不變量被破壞）
    pub fn is_data_integrity(&self) -> bool {
        !matches!(
            self,
            AllocError::InvalidConfig(_) | AllocError::CostOverflow(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AllocError>;
