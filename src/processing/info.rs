//! Block information for a CIDR.

use super::codec::int_to_ip;
use super::validate::parse_cidr;
use crate::models::{CidrInfo, Ipv4};

/// Derive network/broadcast/usable range and counts for a CIDR string.
///
/// Returns `None` when the string does not validate.
///
/// Blocks of more than two addresses exclude the network and broadcast
/// addresses from the usable range. `/31` and `/32` report the whole block
/// as usable.
pub fn calculate_cidr_info(cidr: &str) -> Option<CidrInfo> {
    match parse_cidr(cidr) {
        Ok(block) => Some(block_info(cidr, &block)),
        Err(e) => {
            log::debug!("calculate_cidr_info({cidr}) rejected: {e}");
            None
        }
    }
}

/// Build the [`CidrInfo`] of an already parsed block, labelled `cidr`.
pub fn block_info(cidr: &str, block: &Ipv4) -> CidrInfo {
    let mask = block.netmask();
    let wildcard = !mask;
    let network = u32::from(block.addr) & mask;
    let broadcast = network | wildcard;
    let total_ips = block.size();

    let (first_usable, last_usable, usable_ips) = if total_ips > 2 {
        (network + 1, broadcast - 1, total_ips - 2)
    } else {
        (network, broadcast, total_ips)
    };

    CidrInfo {
        cidr: cidr.to_string(),
        network_address: int_to_ip(network),
        broadcast_address: int_to_ip(broadcast),
        first_usable_ip: int_to_ip(first_usable),
        last_usable_ip: int_to_ip(last_usable),
        total_ips,
        usable_ips,
        subnet_mask: int_to_ip(mask),
        wildcard_mask: int_to_ip(wildcard),
    }
}
