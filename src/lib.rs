//! IPv4 CIDR addressing engine.
//!
//! Validates CIDR notation, converts addresses between dotted-quad and u32,
//! derives block information, checks containment and splits a VPC block
//! into equally sized subnets. Every operation is a pure function; invalid
//! input yields `false`, `None` or an empty list instead of an error.

pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{CidrInfo, Ipv4, UtilizationColor};
pub use processing::{
    calculate_cidr_info, calculate_utilization, check_subnet_plan, find_free_blocks,
    find_overlapping_subnets, get_utilization_color, int_to_ip, ip_to_int, is_subnet_of,
    suggest_subnets, validate_cidr,
};
