//! 出貨分配主流程

use chrono::NaiveDate;
use logitrack_calc::{CostModel, InventoryAggregator, OrderPrioritizer, PlanSummarizer};
use logitrack_core::{AllocationConfig, Snapshot};
use rayon::prelude::*;

use crate::allocation::AllocationEngine;
use crate::state::WorkingState;
use crate::OptimizationResult;

/// 出貨分配最佳化器
///
/// 自身不持有可變狀態，同一實例可被多個運算同時使用。
#[derive(Debug, Clone)]
pub struct FulfillmentOptimizer {
    config: AllocationConfig,
    cost_model: CostModel,
    prioritizer: OrderPrioritizer,
}

impl FulfillmentOptimizer {
    /// 創建最佳化器（配置無效時回傳錯誤）
    pub fn new(config: AllocationConfig) -> logitrack_core::Result<Self> {
        config.validate()?;
        Ok(Self {
            cost_model: CostModel::new(&config),
            prioritizer: OrderPrioritizer::new(&config),
            config,
        })
    }

    /// 目前配置
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// 主分配入口
    ///
    /// 資料完整性錯誤會在任何分配前回傳；成本溢位會中止運算；
    /// 無效訂單與未滿足數量記錄在結果中。
    pub fn run(
        &self,
        snapshot: &Snapshot,
        as_of: NaiveDate,
    ) -> logitrack_core::Result<OptimizationResult> {
        tracing::info!(
            "開始分配運算：倉庫 {} 個，產品 {} 項，庫存 {} 筆，訂單 {} 筆",
            snapshot.warehouses.len(),
            snapshot.products.len(),
            snapshot.inventory.len(),
            snapshot.orders.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 資料完整性檢查
        tracing::debug!("Step 1: 資料檢查");
        snapshot.validate()?;

        // Step 2: 以分配前庫存計算補貨警示
        tracing::debug!("Step 2: 庫存彙總");
        let stock_levels = InventoryAggregator::aggregate(&snapshot.products, &snapshot.inventory)?;

        // Step 3: 訂單排序
        tracing::debug!("Step 3: 訂單排序");
        let ranked = self.prioritizer.prioritize(&snapshot.orders, as_of);

        // Step 4: 分配
        tracing::debug!("Step 4: 分配");
        let mut state = WorkingState::from_snapshot(snapshot);
        let plan = AllocationEngine::new(&self.cost_model, &snapshot.warehouses)
            .allocate(&ranked, &mut state)?;

        // Step 5: 彙總
        tracing::debug!("Step 5: 彙總");
        let summary = PlanSummarizer::summarize(&plan, &snapshot.warehouses, &stock_levels)?;

        tracing::info!("分配運算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "明細 {} 筆，總成本 {}，滿足率 {}",
            plan.lines.len(),
            summary.total_cost,
            summary.fulfillment_rate.round_dp(4)
        );

        Ok(OptimizationResult {
            plan,
            summary,
            stock_levels,
        })
    }

    /// 平行執行多個獨立快照，每個運算各自擁有工作狀態
    pub fn run_scenarios(
        &self,
        snapshots: &[Snapshot],
        as_of: NaiveDate,
    ) -> Vec<logitrack_core::Result<OptimizationResult>> {
        snapshots
            .par_iter()
            .map(|snapshot| self.run(snapshot, as_of))
            .collect()
    }
}
