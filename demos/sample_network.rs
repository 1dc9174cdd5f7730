//! 範例倉庫網路分配示例
//!
//! RUST_LOG=debug cargo run --example sample_network

use chrono::NaiveDate;
use logitrack::{
    AllocationConfig, FulfillmentOptimizer, GeoPoint, InventoryRecord, Order, OrderStatus,
    Product, Snapshot, Warehouse,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn sample_snapshot() -> Snapshot {
    let warehouses = vec![
        Warehouse::new(
            "W001".to_string(),
            GeoPoint::new(19.0760, 72.8777),
            Decimal::from(600),
            Decimal::from(12),
        )
        .with_name("Mumbai Central".to_string()),
        Warehouse::new(
            "W002".to_string(),
            GeoPoint::new(28.7041, 77.1025),
            Decimal::from(400),
            Decimal::from(9),
        )
        .with_name("Delhi North".to_string()),
        Warehouse::new(
            "W003".to_string(),
            GeoPoint::new(12.9716, 77.5946),
            Decimal::from(300),
            Decimal::from(10),
        )
        .with_name("Bangalore South".to_string()),
    ];

    let products = vec![
        Product::new("P001".to_string(), Decimal::from(250), Decimal::from(500)),
        Product::new("P002".to_string(), Decimal::from(80), Decimal::from(200)),
    ];

    let inventory = vec![
        InventoryRecord::new("W001".to_string(), "P001".to_string(), Decimal::from(300)),
        InventoryRecord::new("W002".to_string(), "P001".to_string(), Decimal::from(150)),
        InventoryRecord::new("W003".to_string(), "P001".to_string(), Decimal::from(120)),
        InventoryRecord::new("W002".to_string(), "P002".to_string(), Decimal::from(90)),
        InventoryRecord::new("W003".to_string(), "P002".to_string(), Decimal::from(60)),
    ];

    let orders = vec![
        Order::new(
            "ORD001".to_string(),
            "P001".to_string(),
            Decimal::from(350),
            GeoPoint::new(18.5204, 73.8567),
        )
        .with_deadline(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap()),
        Order::new(
            "ORD002".to_string(),
            "P001".to_string(),
            Decimal::from(200),
            GeoPoint::new(26.9124, 75.7873),
        )
        .with_status(OrderStatus::Urgent),
        Order::new(
            "ORD003".to_string(),
            "P002".to_string(),
            Decimal::from(180),
            GeoPoint::new(13.0827, 80.2707),
        ),
        Order::new(
            "ORD004".to_string(),
            "P002".to_string(),
            Decimal::from(40),
            GeoPoint::new(22.5726, 88.3639),
        )
        .with_status(OrderStatus::Cancelled),
    ];

    Snapshot::new(warehouses, products, inventory, orders)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 範例倉庫網路分配 ===\n");

    let snapshot = sample_snapshot();
    let as_of = NaiveDate::from_ymd_opt(2025, 3, 24).unwrap();

    let optimizer = FulfillmentOptimizer::new(AllocationConfig::default())?;
    let result = optimizer.run(&snapshot, as_of)?;

    println!("分配明細:");
    for line in &result.plan.lines {
        println!(
            "  - 訂單 {} <- 倉庫 {}: 數量 {}, 距離 {} km, 單位成本 {}",
            line.order_id,
            line.warehouse_id,
            line.quantity,
            line.distance_km.round_dp(1),
            line.unit_cost.round_dp(2)
        );
    }

    let summary = &result.summary;
    println!("\n總成本: {}", summary.total_cost.round_dp(2));
    println!("滿足率: {}%", (summary.fulfillment_rate * Decimal::from(100)).round_dp(1));

    println!("\n倉庫使用率:");
    for util in &summary.warehouse_utilization {
        let name = snapshot
            .warehouse(&util.warehouse_id)
            .map(|w| w.display_name())
            .unwrap_or(util.warehouse_id.as_str());
        println!(
            "  - {}: {} / {} ({}%)",
            name,
            util.shipped,
            util.capacity,
            (util.utilization * Decimal::from(100)).round_dp(1)
        );
    }

    println!("\n未完全滿足的訂單:");
    for outcome in &summary.unfulfilled_orders {
        println!("  - {}: 缺 {}", outcome.order_id, outcome.unfulfilled());
    }

    println!("\n補貨警示:");
    for alert in &summary.reorder_alerts {
        println!(
            "  - {}: 全網庫存 {}, 再訂購點 {}, 缺口 {}",
            alert.product_id, alert.network_stock, alert.reorder_point, alert.shortfall
        );
    }

    println!("\nJSON:\n{}", serde_json::to_string_pretty(summary)?);

    Ok(())
}
