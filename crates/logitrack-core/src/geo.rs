//! 地理座標與距離

use serde::{Deserialize, Serialize};

/// 地球半徑（公里）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 經緯度座標（度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 緯度
    pub latitude: f64,
    /// 經度
    pub longitude: f64,
}

impl GeoPoint {
    /// 創建新的座標
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 檢查座標是否落在合法範圍內
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// 大圓距離（Haversine，公里）
    ///
    /// 成本模型與路線繪製共用此函數，兩者的距離必須一致。
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        assert_eq!(mumbai.distance_km(&mumbai), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // 孟買 -> 德里 約 1150 公里
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        let delhi = GeoPoint::new(28.7041, 77.1025);
        let d = mumbai.distance_km(&delhi);
        assert!((d - 1150.0).abs() < 15.0, "distance was {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(12.9716, 77.5946);
        let b = GeoPoint::new(22.5726, 88.3639);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
