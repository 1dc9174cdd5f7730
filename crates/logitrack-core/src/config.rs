//! 分配配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AllocError, Result};

/// 分配運算參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// 每公里每單位運輸成本
    pub distance_rate: Decimal,

    /// 倉儲成本權重
    pub storage_cost_weight: Decimal,

    /// 緊急標記權重（w1）
    pub urgent_weight: Decimal,

    /// 交期接近度權重（w2）
    pub deadline_weight: Decimal,

    /// 交期評估時界（天）
    ///
    /// 距交期超過此天數的訂單，交期分數為 0；
    /// 已逾期的訂單分數會超過 1，逾期越久越優先。
    pub deadline_horizon_days: u32,
}

impl AllocationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            distance_rate: Decimal::from(10),
            storage_cost_weight: Decimal::ONE,
            urgent_weight: Decimal::ONE,
            deadline_weight: Decimal::ONE,
            deadline_horizon_days: 14,
        }
    }

    /// 從 JSON 讀取配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AllocError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置運輸費率
    pub fn with_distance_rate(mut self, rate: Decimal) -> Self {
        self.distance_rate = rate;
        self
    }

    /// 建構器模式：設置倉儲成本權重
    pub fn with_storage_cost_weight(mut self, weight: Decimal) -> Self {
        self.storage_cost_weight = weight;
        self
    }

    /// 建構器模式：設置緊急標記權重
    pub fn with_urgent_weight(mut self, weight: Decimal) -> Self {
        self.urgent_weight = weight;
        self
    }

    /// 建構器模式：設置交期權重
    pub fn with_deadline_weight(mut self, weight: Decimal) -> Self {
        self.deadline_weight = weight;
        self
    }

    /// 建構器模式：設置交期時界
    pub fn with_deadline_horizon(mut self, days: u32) -> Self {
        self.deadline_horizon_days = days;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("distance_rate", self.distance_rate),
            ("storage_cost_weight", self.storage_cost_weight),
            ("urgent_weight", self.urgent_weight),
            ("deadline_weight", self.deadline_weight),
        ];

        for (name, value) in weights {
            if value < Decimal::ZERO {
                return Err(AllocError::InvalidConfig(format!(
                    "{} 不可為負數: {}",
                    name, value
                )));
            }
        }

        if self.deadline_horizon_days == 0 {
            return Err(AllocError::InvalidConfig(
                "deadline_horizon_days 必須大於 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new()
    }
}
