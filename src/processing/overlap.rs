//! Overlapping CIDR detection.
//!
//! Finds blocks in a list whose address ranges intersect, so a plan that
//! double-books address space can be flagged before it is applied.

use super::validate::parse_cidr;
use crate::models::Ipv4;
use itertools::Itertools;
use serde::Serialize;

/// Two blocks sharing at least one address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OverlapConflict {
    pub first: Ipv4,
    pub second: Ipv4,
}

/// Find every pair of overlapping blocks.
///
/// # Arguments
/// * `cidrs` - CIDR strings to compare, invalid entries are skipped
///
/// # Returns
/// Conflicts ordered by the lower block, each pair reported once
pub fn find_overlapping_subnets(cidrs: &[&str]) -> Vec<OverlapConflict> {
    let blocks: Vec<Ipv4> = cidrs
        .iter()
        .filter_map(|cidr| match parse_cidr(cidr) {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("Skipping '{cidr}' in overlap check: {e}");
                None
            }
        })
        .sorted_by_key(|block| (block.lo(), block.mask))
        .collect();

    blocks
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.overlaps(b))
        .map(|(a, b)| OverlapConflict {
            first: *a,
            second: *b,
        })
        .collect()
}

/// Log overlapping blocks as warnings.
pub fn log_overlapping_subnets(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping CIDRs found.");
        return;
    }

    log::warn!("Found {} overlapping CIDR pair(s):", conflicts.len());
    for conflict in conflicts {
        log::warn!(
            "  {} [{} - {}] overlaps {} [{} - {}]",
            conflict.first,
            conflict.first.lo(),
            conflict.first.hi(),
            conflict.second,
            conflict.second.lo(),
            conflict.second.hi()
        );
    }
}
