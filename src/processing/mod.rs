//! CIDR processing logic.
//!
//! This module contains the addressing engine:
//! - [`validate`] - CIDR string validation and parsing
//! - [`codec`] - Dotted-quad <-> u32 conversion
//! - [`info`] - Network/broadcast/usable range of a block
//! - [`containment`] - Subnet containment checks
//! - [`divider`] - Splitting a block into equal subnets
//! - [`utilization`] - Utilization percentage and rating
//! - [`overlap`] - Overlapping block detection
//! - [`gap_finder`] - Free space inside a VPC
//! - [`plan`] - Combined subnet plan report

mod codec;
mod containment;
mod divider;
mod gap_finder;
mod info;
mod overlap;
mod plan;
mod utilization;
mod validate;

// Re-export public functions
pub use codec::{int_to_ip, ip_to_int, octets_to_int, parse_octets};
pub use containment::is_subnet_of;
pub use divider::{split_block, suggest_subnets, MAX_SPLIT_PREFIX};
pub use gap_finder::{find_free_blocks, free_blocks};
pub use info::{block_info, calculate_cidr_info};
pub use overlap::{find_overlapping_subnets, log_overlapping_subnets, OverlapConflict};
pub use plan::{check_subnet_plan, PlanEntry, PlanReport};
pub use utilization::{
    calculate_utilization, get_utilization_color, RED_THRESHOLD, YELLOW_THRESHOLD,
};
pub use validate::{parse_cidr, validate_cidr};
