//! # LogiTrack Calculation
//!
//! 庫存彙總、訂單排序、成本模型與計劃彙總

pub mod aggregation;
pub mod cost;
pub mod priority;
pub mod summary;

// Re-export 主要類型
pub use aggregation::{InventoryAggregator, ProductStock};
pub use cost::{CostModel, CostQuote};
pub use priority::{OrderPrioritizer, RankedOrder};
pub use summary::{PlanSummarizer, PlanSummary, WarehouseUtilization};
