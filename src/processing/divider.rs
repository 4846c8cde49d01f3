//! Splitting a parent block into equally sized children.

use super::validate::parse_cidr;
use crate::models::{ip_after_subnet, Ipv4};
use std::error::Error;

/// Longest prefix a suggested subnet may have, leaving room for hosts.
pub const MAX_SPLIT_PREFIX: u8 = 30;

/// Split `parent` into `count` contiguous blocks of equal size.
///
/// The new prefix is the parent prefix plus `ceil(log2(count))`. Children
/// start at the parent's network address, each one begins right after the
/// previous. The walk stops at the last child so it never steps past the
/// parent.
pub fn split_block(parent: &Ipv4, count: usize) -> Result<Vec<Ipv4>, Box<dyn Error>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let bits_needed = count
        .checked_next_power_of_two()
        .ok_or_else(|| format!("Too many subnets requested: {count}"))?
        .trailing_zeros();
    let new_prefix = u32::from(parent.mask) + bits_needed;
    if new_prefix > u32::from(MAX_SPLIT_PREFIX) {
        return Err(format!(
            "Cannot split {parent} into {count} subnets: /{new_prefix} is longer than /{MAX_SPLIT_PREFIX}"
        )
        .into());
    }
    let new_prefix = new_prefix as u8;

    let mut subnets = Vec::with_capacity(count);
    let mut next = Ipv4 {
        addr: parent.lo(),
        mask: new_prefix,
    };
    subnets.push(next);
    while subnets.len() < count {
        next.addr = ip_after_subnet(next.addr, new_prefix)?;
        subnets.push(next);
    }
    Ok(subnets)
}

/// Suggest `count` equally sized subnets of `parent_cidr`.
///
/// Returns an empty list when the parent does not validate, when `count` is
/// zero, or when the split would need a prefix longer than /30.
///
/// # Examples
/// ```
/// use vpc_cidr_planner::suggest_subnets;
/// assert_eq!(
///     suggest_subnets("10.0.0.0/24", 2),
///     vec!["10.0.0.0/25", "10.0.0.128/25"]
/// );
/// ```
pub fn suggest_subnets(parent_cidr: &str, count: usize) -> Vec<String> {
    let parent = match parse_cidr(parent_cidr) {
        Ok(parent) => parent,
        Err(e) => {
            log::debug!("suggest_subnets({parent_cidr}) rejected: {e}");
            return Vec::new();
        }
    };
    match split_block(&parent, count) {
        Ok(subnets) => subnets.iter().map(|s| s.to_string()).collect(),
        Err(e) => {
            log::debug!("suggest_subnets({parent_cidr}, {count}) infeasible: {e}");
            Vec::new()
        }
    }
}
