//! # LogiTrack
//!
//! 倉庫出貨分配引擎：庫存彙總、訂單排序、成本模型、分配與彙總。
//!
//! ```
//! use chrono::NaiveDate;
//! use logitrack::{
//!     AllocationConfig, FulfillmentOptimizer, GeoPoint, InventoryRecord, Order, Product,
//!     Snapshot, Warehouse,
//! };
//! use rust_decimal::Decimal;
//!
//! let here = GeoPoint::new(19.0760, 72.8777);
//! let snapshot = Snapshot::new(
//!     vec![Warehouse::new("W1".to_string(), here, Decimal::from(100), Decimal::from(3))],
//!     vec![Product::new("P".to_string(), Decimal::from(10), Decimal::from(5))],
//!     vec![InventoryRecord::new("W1".to_string(), "P".to_string(), Decimal::from(20))],
//!     vec![Order::new("O1".to_string(), "P".to_string(), Decimal::from(15), here)],
//! );
//!
//! let optimizer = FulfillmentOptimizer::new(AllocationConfig::default()).unwrap();
//! let result = optimizer
//!     .run(&snapshot, NaiveDate::from_ymd_opt(2025, 3, 24).unwrap())
//!     .unwrap();
//!
//! assert_eq!(result.summary.total_cost, Decimal::from(45));
//! ```

pub use logitrack_calc::{
    CostModel, CostQuote, InventoryAggregator, OrderPrioritizer, PlanSummarizer, PlanSummary,
    ProductStock, RankedOrder, WarehouseUtilization,
};
pub use logitrack_core::{
    AllocError, AllocationConfig, AllocationLine, AllocationPlan, GeoPoint, InventoryRecord,
    Order, OrderOutcome, OrderStatus, Product, RejectedOrder, Result, Snapshot, Warehouse,
};
pub use logitrack_optimizer::{
    AllocationEngine, FulfillmentOptimizer, OptimizationResult, WorkingState,
};
