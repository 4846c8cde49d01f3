//! Subnet plan check.
//!
//! Combines the engine operations into one report for a VPC and the subnets
//! planned inside it.

use super::gap_finder::free_blocks;
use super::info::block_info;
use super::overlap::{find_overlapping_subnets, OverlapConflict};
use super::utilization::{calculate_utilization, get_utilization_color};
use super::validate::parse_cidr;
use crate::models::{CidrInfo, Ipv4, UtilizationColor};
use serde::Serialize;

/// One planned subnet as seen from its VPC.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub cidr: String,
    pub valid: bool,
    /// Inside the VPC. Always false for invalid entries.
    pub contained: bool,
    #[serde(rename = "totalIPs")]
    pub total_ips: u64,
}

/// Result of checking a subnet plan against its VPC.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub vpc: CidrInfo,
    pub subnets: Vec<PlanEntry>,
    pub overlaps: Vec<OverlapConflict>,
    pub free_blocks: Vec<String>,
    /// Addresses covered by the union of valid, contained subnets.
    #[serde(rename = "allocatedIPs")]
    pub allocated_ips: u64,
    pub utilization: f64,
    pub color: UtilizationColor,
}

impl PlanReport {
    /// Entries that are invalid or fall outside the VPC.
    pub fn rejected(&self) -> impl Iterator<Item = &PlanEntry> {
        self.subnets.iter().filter(|entry| !entry.contained)
    }
}

/// Check `subnets` against `vpc_cidr`.
///
/// Returns `None` when the VPC does not validate.
pub fn check_subnet_plan(vpc_cidr: &str, subnets: &[&str]) -> Option<PlanReport> {
    let vpc = match parse_cidr(vpc_cidr) {
        Ok(vpc) => vpc,
        Err(e) => {
            log::debug!("check_subnet_plan({vpc_cidr}) rejected: {e}");
            return None;
        }
    };

    let mut entries = Vec::with_capacity(subnets.len());
    let mut allocated: Vec<Ipv4> = Vec::new();
    for cidr in subnets {
        let entry = match parse_cidr(cidr) {
            Ok(block) => {
                let contained = vpc.contains_block(&block);
                if contained {
                    allocated.push(block);
                } else {
                    log::warn!("Subnet {cidr} is outside VPC {vpc_cidr}");
                }
                PlanEntry {
                    cidr: cidr.to_string(),
                    valid: true,
                    contained,
                    total_ips: block.size(),
                }
            }
            Err(e) => {
                log::warn!("Subnet '{cidr}' is not a valid CIDR: {e}");
                PlanEntry {
                    cidr: cidr.to_string(),
                    valid: false,
                    contained: false,
                    total_ips: 0,
                }
            }
        };
        entries.push(entry);
    }

    let free = free_blocks(&vpc, &allocated);
    let free_ips: u64 = free.iter().map(|block| block.size()).sum();
    let allocated_ips = vpc.size() - free_ips;
    let utilization = calculate_utilization(allocated_ips, vpc.size());

    Some(PlanReport {
        vpc: block_info(vpc_cidr, &vpc),
        subnets: entries,
        overlaps: find_overlapping_subnets(subnets),
        free_blocks: free.iter().map(|block| block.to_string()).collect(),
        allocated_ips,
        utilization,
        color: get_utilization_color(utilization),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_subnet_plan() {
        let report = check_subnet_plan(
            "10.0.0.0/24",
            &["10.0.0.0/26", "10.0.0.64/26", "10.0.1.0/26", "nope"],
        )
        .unwrap();

        assert_eq!(report.vpc.total_ips, 256);
        assert_eq!(report.subnets.len(), 4);
        assert!(report.subnets[0].contained);
        assert!(report.subnets[2].valid);
        assert!(!report.subnets[2].contained);
        assert!(!report.subnets[3].valid);
        assert_eq!(report.subnets[3].total_ips, 0);
        assert_eq!(report.rejected().count(), 2);
        assert!(report.overlaps.is_empty());
        assert_eq!(report.free_blocks, vec!["10.0.0.128/25"]);
        assert_eq!(report.allocated_ips, 128);
        assert_eq!(report.utilization, 50.0);
        assert_eq!(report.color, UtilizationColor::Green);
    }

    #[test]
    fn test_check_subnet_plan_overlap_not_double_counted() {
        let report = check_subnet_plan(
            "10.0.0.0/24",
            &["10.0.0.0/25", "10.0.0.0/26", "10.0.0.128/26", "10.0.0.192/27"],
        )
        .unwrap();

        assert_eq!(report.overlaps.len(), 1);
        assert_eq!(report.allocated_ips, 224);
        assert_eq!(report.utilization, 87.5);
        assert_eq!(report.color, UtilizationColor::Yellow);
        assert_eq!(report.free_blocks, vec!["10.0.0.224/27"]);
    }

    #[test]
    fn test_check_subnet_plan_full() {
        let report = check_subnet_plan("10.0.0.0/24", &["10.0.0.0/24"]).unwrap();
        assert_eq!(report.utilization, 100.0);
        assert_eq!(report.color, UtilizationColor::Red);
        assert!(report.free_blocks.is_empty());
    }

    #[test]
    fn test_check_subnet_plan_invalid_vpc() {
        assert!(check_subnet_plan("10.0.0.0/40", &["10.0.0.0/24"]).is_none());
    }

    #[test]
    fn test_plan_report_json() {
        let report = check_subnet_plan("10.0.0.0/16", &["10.0.0.0/17"]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["vpc"]["networkAddress"], "10.0.0.0");
        assert_eq!(json["subnets"][0]["totalIPs"], 32768);
        assert_eq!(json["allocatedIPs"], 32768);
        assert_eq!(json["freeBlocks"][0], "10.0.128.0/17");
        assert_eq!(json["color"], "green");
    }
}
