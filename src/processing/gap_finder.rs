//! Gap finding inside a VPC.
//!
//! Identifies unused IP address ranges between allocated subnets and
//! expresses them as the largest aligned CIDR blocks.

use super::validate::parse_cidr;
use crate::models::{lo_mask, Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Free blocks of `vpc` not covered by any block in `allocated`.
///
/// `vpc` is cut to its network address. Allocated blocks outside the VPC
/// are ignored.
pub fn free_blocks(vpc: &Ipv4, allocated: &[Ipv4]) -> Vec<Ipv4> {
    let vpc = vpc.network();
    let mut used: Vec<Ipv4> = allocated
        .iter()
        .filter(|block| vpc.contains_block(block))
        .map(|block| block.network())
        .collect();
    used.sort();

    let mut free = Vec::new();
    let mut next_ip = u64::from(u32::from(vpc.lo()));
    for block in &used {
        let block_lo = u64::from(u32::from(block.lo()));
        if next_ip < block_lo {
            fill_gap(next_ip, block_lo, vpc.mask, &mut free);
        }
        next_ip = next_ip.max(u64::from(u32::from(block.hi())) + 1);
    }
    fill_gap(next_ip, u64::from(u32::from(vpc.hi())) + 1, vpc.mask, &mut free);

    free
}

/// Free blocks of `vpc_cidr` as CIDR strings, lowest first.
///
/// Returns an empty list when `vpc_cidr` does not validate. Invalid entries
/// in `allocated` are skipped.
pub fn find_free_blocks(vpc_cidr: &str, allocated: &[&str]) -> Vec<String> {
    let vpc = match parse_cidr(vpc_cidr) {
        Ok(vpc) => vpc,
        Err(e) => {
            log::debug!("find_free_blocks({vpc_cidr}) rejected: {e}");
            return Vec::new();
        }
    };
    let allocated: Vec<Ipv4> = allocated
        .iter()
        .filter_map(|cidr| match parse_cidr(cidr) {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("Skipping '{cidr}' in free block search: {e}");
                None
            }
        })
        .collect();

    free_blocks(&vpc, &allocated)
        .iter()
        .map(|block| block.to_string())
        .collect()
}

/// Cover `[start, end)` with the largest aligned blocks.
fn fill_gap(mut start: u64, end: u64, min_mask: u8, out: &mut Vec<Ipv4>) {
    while start < end {
        let addr = Ipv4Addr::from(start as u32);
        let mask = find_biggest_subnet(addr, min_mask, end);
        out.push(Ipv4 { addr, mask });
        start += 1u64 << (MAX_LENGTH - mask);
    }
}

/// Find the biggest subnet starting at `start_ip` that ends before `end`.
///
/// The returned mask is constrained by:
/// 1. The `start_mask` parameter (won't return a shorter mask)
/// 2. The IP alignment - `start_ip` must be a valid network address for the mask
/// 3. The subnet must not reach `end`
fn find_biggest_subnet(start_ip: Ipv4Addr, start_mask: u8, end: u64) -> u8 {
    let start = u64::from(u32::from(start_ip));
    let mut next_mask = start_mask.max(lo_mask(start_ip));
    while next_mask < MAX_LENGTH && start + (1u64 << (MAX_LENGTH - next_mask)) > end {
        next_mask += 1;
    }
    next_mask
}
