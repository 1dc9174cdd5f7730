//! 單位成本模型

use logitrack_core::{AllocError, AllocationConfig, GeoPoint, Order, Result, Warehouse};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// 距離保留的小數位數
const DISTANCE_DP: u32 = 6;

/// 某倉庫服務某訂單的報價
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostQuote {
    pub warehouse_id: String,
    pub distance_km: Decimal,
    pub unit_cost: Decimal,
}

/// 成本模型：單位成本 = 距離 × 運輸費率 + 倉儲成本 × 權重
///
/// 無狀態，不查詢即時庫存。
#[derive(Debug, Clone)]
pub struct CostModel {
    distance_rate: Decimal,
    storage_cost_weight: Decimal,
}

impl CostModel {
    /// 依配置創建成本模型
    pub fn new(config: &AllocationConfig) -> Self {
        Self {
            distance_rate: config.distance_rate,
            storage_cost_weight: config.storage_cost_weight,
        }
    }

    /// 兩點距離（公里，四捨五入到固定小數位）
    ///
    /// 座標經 `Snapshot::validate` 檢查後距離必為有限值；否則以 Decimal::MAX 表示。
    pub fn distance_km(from: &GeoPoint, to: &GeoPoint) -> Decimal {
        Decimal::from_f64(from.distance_km(to))
            .map(|d| d.round_dp(DISTANCE_DP))
            .unwrap_or(Decimal::MAX)
    }

    /// 從倉庫出貨一單位到訂單地點的成本
    pub fn unit_cost(&self, warehouse: &Warehouse, order: &Order) -> Result<Decimal> {
        Ok(self.quote(warehouse, order)?.unit_cost)
    }

    /// 報價（含距離）
    ///
    /// 費率過大導致單位成本超出 Decimal 範圍時回傳 `AllocError::CostOverflow`。
    pub fn quote(&self, warehouse: &Warehouse, order: &Order) -> Result<CostQuote> {
        let distance_km = Self::distance_km(&warehouse.location, &order.destination);
        let unit_cost = distance_km
            .checked_mul(self.distance_rate)
            .zip(warehouse.storage_cost.checked_mul(self.storage_cost_weight))
            .and_then(|(transport, storage)| transport.checked_add(storage))
            .ok_or_else(|| {
                AllocError::CostOverflow(format!(
                    "倉庫 {} 到訂單 {} 的單位成本（距離 {} km）",
                    warehouse.id, order.id, distance_km
                ))
            })?;

        Ok(CostQuote {
            warehouse_id: warehouse.id.clone(),
            distance_km,
            unit_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse(id: &str, location: GeoPoint, storage_cost: i64) -> Warehouse {
        Warehouse::new(
            id.to_string(),
            location,
            Decimal::from(1000),
            Decimal::from(storage_cost),
        )
    }

    fn order_at(destination: GeoPoint) -> Order {
        Order::new("O1".to_string(), "P".to_string(), Decimal::from(1), destination)
    }

    #[test]
    fn test_colocated_cost_is_storage_only() {
        let here = GeoPoint::new(19.0760, 72.8777);
        let model = CostModel::new(&AllocationConfig::default());

        let quote = model.quote(&warehouse("W1", here, 5), &order_at(here)).unwrap();

        assert_eq!(quote.distance_km, Decimal::ZERO);
        assert_eq!(quote.unit_cost, Decimal::from(5));
    }

    #[test]
    fn test_distance_term() {
        // 赤道上經度差 1 度約 111.19 公里
        let model = CostModel::new(
            &AllocationConfig::default()
                .with_distance_rate(Decimal::ONE)
                .with_storage_cost_weight(Decimal::ZERO),
        );

        let cost = model
            .unit_cost(
                &warehouse("W1", GeoPoint::new(0.0, 0.0), 7),
                &order_at(GeoPoint::new(0.0, 1.0)),
            )
            .unwrap();

        assert!(cost > Decimal::from(111) && cost < Decimal::from(112), "cost was {}", cost);
    }

    #[test]
    fn test_nearer_warehouse_is_cheaper() {
        let model = CostModel::new(&AllocationConfig::default());
        let order = order_at(GeoPoint::new(19.0760, 72.8777));

        let near = model
            .unit_cost(&warehouse("NEAR", GeoPoint::new(18.5204, 73.8567), 3), &order)
            .unwrap();
        let far = model
            .unit_cost(&warehouse("FAR", GeoPoint::new(28.7041, 77.1025), 3), &order)
            .unwrap();

        assert!(near < far);
    }

    #[test]
    fn test_distance_matches_shared_metric() {
        let a = GeoPoint::new(12.9716, 77.5946);
        let b = GeoPoint::new(13.0827, 80.2707);

        let expected = Decimal::from_f64(a.distance_km(&b)).unwrap().round_dp(DISTANCE_DP);
        assert_eq!(CostModel::distance_km(&a, &b), expected);
    }

    #[test]
    fn test_oversized_rate_reports_overflow() {
        let model = CostModel::new(
            &AllocationConfig::default().with_distance_rate(Decimal::from_i128_with_scale(
                10i128.pow(27),
                0,
            )),
        );

        let result = model.quote(
            &warehouse("DEL", GeoPoint::new(28.7041, 77.1025), 3),
            &order_at(GeoPoint::new(19.0760, 72.8777)),
        );

        assert!(matches!(result, Err(AllocError::CostOverflow(_))));
    }
}
