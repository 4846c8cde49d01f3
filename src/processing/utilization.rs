//! Address space utilization.

use crate::models::UtilizationColor;

/// Utilization at or above this is rated yellow.
pub const YELLOW_THRESHOLD: f64 = 70.0;
/// Utilization at or above this is rated red.
pub const RED_THRESHOLD: f64 = 90.0;

/// Percentage of `total` that `used` represents, rounded to one decimal.
///
/// A `total` of zero gives `0.0`.
pub fn calculate_utilization(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = used as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Rate a utilization percentage.
pub fn get_utilization_color(percentage: f64) -> UtilizationColor {
    if percentage < YELLOW_THRESHOLD {
        UtilizationColor::Green
    } else if percentage < RED_THRESHOLD {
        UtilizationColor::Yellow
    } else {
        UtilizationColor::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_utilization() {
        assert_eq!(calculate_utilization(180, 200), 90.0);
        assert_eq!(calculate_utilization(0, 0), 0.0);
        assert_eq!(calculate_utilization(5, 0), 0.0);
        assert_eq!(calculate_utilization(1, 3), 33.3);
        assert_eq!(calculate_utilization(2, 3), 66.7);
        assert_eq!(calculate_utilization(256, 256), 100.0);
        assert_eq!(calculate_utilization(300, 200), 150.0);
        assert_eq!(calculate_utilization(1, 4294967296), 0.0);
    }

    #[test]
    fn test_get_utilization_color() {
        assert_eq!(get_utilization_color(0.0), UtilizationColor::Green);
        assert_eq!(get_utilization_color(69.9), UtilizationColor::Green);
        assert_eq!(get_utilization_color(70.0), UtilizationColor::Yellow);
        assert_eq!(get_utilization_color(89.9), UtilizationColor::Yellow);
        assert_eq!(get_utilization_color(90.0), UtilizationColor::Red);
        assert_eq!(get_utilization_color(150.0), UtilizationColor::Red);
    }
}
