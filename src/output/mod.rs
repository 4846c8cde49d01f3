//! Output formatting for engine results.
//!
//! This module handles rendering results for the command line:
//! - [`terminal`] - Human readable text with colors
//! - [`json`] - Pretty printed JSON

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{
    format_field, paint_utilization, render_cidr_info, render_overlaps, render_plan,
    render_subnets,
};
