//! JSON output.

use serde::Serialize;
use std::error::Error;

/// Serialize any engine result as pretty printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate_cidr_info;

    #[test]
    fn test_to_json_cidr_info() {
        let info = calculate_cidr_info("10.0.0.0/24").unwrap();
        let json = to_json(&info).unwrap();
        assert!(json.contains(r#""networkAddress": "10.0.0.0""#));
        assert!(json.contains(r#""usableIPs": 254"#));
    }

    #[test]
    fn test_to_json_list() {
        let subnets = vec!["10.0.0.0/25".to_string(), "10.0.0.128/25".to_string()];
        let json = to_json(&subnets).unwrap();
        let back: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subnets);
    }
}
