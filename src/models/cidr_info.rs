//! Derived CIDR block information.

use serde::{Deserialize, Serialize};

/// Everything a consumer needs to display about one CIDR block.
///
/// Addresses and masks are dotted-quad strings. Counts are u64 since a
/// `/0` block holds 2^32 addresses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CidrInfo {
    /// The CIDR string as given.
    pub cidr: String,
    /// Lowest address of the block.
    pub network_address: String,
    /// Highest address of the block.
    pub broadcast_address: String,
    /// First address handed to hosts.
    #[serde(rename = "firstUsableIP")]
    pub first_usable_ip: String,
    /// Last address handed to hosts.
    #[serde(rename = "lastUsableIP")]
    pub last_usable_ip: String,
    /// Number of addresses in the block.
    #[serde(rename = "totalIPs")]
    pub total_ips: u64,
    /// Number of addresses between first and last usable, inclusive.
    #[serde(rename = "usableIPs")]
    pub usable_ips: u64,
    pub subnet_mask: String,
    pub wildcard_mask: String,
}
