//! Domain models for CIDR planning.
//!
//! This module contains the value types used throughout the crate:
//! - [`Ipv4`] - IPv4 block with CIDR notation support
//! - [`CidrInfo`] - Derived information about a CIDR block
//! - [`UtilizationColor`] - Traffic-light rating of address space usage

mod cidr_info;
mod ipv4;
mod utilization;

// Re-export public types
pub use cidr_info::CidrInfo;
pub use ipv4::{block_size, get_cidr_mask, ip_after_subnet, lo_mask, Ipv4, MAX_LENGTH};
pub use utilization::UtilizationColor;
