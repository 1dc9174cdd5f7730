//! # LogiTrack Optimizer
//!
//! 出貨分配演算法（優先順序 + 最低成本貪婪分配）

pub mod allocation;
pub mod optimizer;
pub mod state;

// Re-export 主要類型
pub use allocation::AllocationEngine;
pub use optimizer::FulfillmentOptimizer;
pub use state::WorkingState;

use logitrack_calc::{PlanSummary, ProductStock};
use logitrack_core::AllocationPlan;
use serde::Serialize;

/// 分配運算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// 分配計劃
    pub plan: AllocationPlan,

    /// 計劃彙總
    pub summary: PlanSummary,

    /// 分配前的全網庫存
    pub stock_levels: Vec<ProductStock>,
}

impl OptimizationResult {
    /// 是否所有有效訂單都已完全滿足
    pub fn is_fully_fulfilled(&self) -> bool {
        self.plan.unfulfilled().next().is_none()
    }
}
