//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{CidrInfo, UtilizationColor};
use crate::processing::{get_utilization_color, OverlapConflict, PlanReport};
use colored::{ColoredString, Colorize};
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Percentage with one decimal, painted with its rating color.
pub fn paint_utilization(percentage: f64) -> ColoredString {
    let text = format!("{percentage:.1}%");
    match get_utilization_color(percentage) {
        UtilizationColor::Green => text.green(),
        UtilizationColor::Yellow => text.yellow(),
        UtilizationColor::Red => text.red(),
    }
}

/// Block information as aligned `label: value` lines.
pub fn render_cidr_info(info: &CidrInfo) -> String {
    [
        ("CIDR", info.cidr.clone()),
        ("Network", info.network_address.clone()),
        ("Broadcast", info.broadcast_address.clone()),
        ("First usable", info.first_usable_ip.clone()),
        ("Last usable", info.last_usable_ip.clone()),
        ("Total IPs", info.total_ips.to_string()),
        ("Usable IPs", info.usable_ips.to_string()),
        ("Subnet mask", info.subnet_mask.clone()),
        ("Wildcard mask", info.wildcard_mask.clone()),
    ]
    .iter()
    .map(|(label, value)| format!("{:<14} {value}", format!("{label}:")))
    .join("\n")
}

/// Numbered list of subnets.
pub fn render_subnets(subnets: &[String]) -> String {
    subnets
        .iter()
        .enumerate()
        .map(|(i, subnet)| format!("{:>4}  {subnet}", i + 1))
        .join("\n")
}

pub fn render_overlaps(conflicts: &[OverlapConflict]) -> String {
    conflicts
        .iter()
        .map(|c| format!("{} overlaps {}", c.first, c.second))
        .join("\n")
}

/// Plan report as a CSV-like table followed by a summary.
pub fn render_plan(report: &PlanReport) -> String {
    let mut lines = vec![format!(
        "VPC {} [{} - {}] {} IPs",
        report.vpc.cidr.bold(),
        report.vpc.network_address,
        report.vpc.broadcast_address,
        report.vpc.total_ips
    )];

    lines.push(format!(
        "{},{},{},{}",
        format_field("cnt", 6),
        format_field("subnet_cidr", 20),
        format_field("total_ips", 12),
        format_field("status", 12),
    ));
    for (i, entry) in report.subnets.iter().enumerate() {
        let status = if !entry.valid {
            "invalid"
        } else if !entry.contained {
            "outside"
        } else {
            "ok"
        };
        lines.push(format!(
            "{},{},{},{}",
            format_field(i + 1, 6),
            format_field(&entry.cidr, 20),
            format_field(entry.total_ips, 12),
            format_field(status, 12),
        ));
    }
    for block in &report.free_blocks {
        lines.push(format!(
            "{},{},{},{}",
            format_field("-gap-", 6),
            format_field(block, 20),
            format_field("", 12),
            format_field("free", 12),
        ));
    }

    if !report.overlaps.is_empty() {
        lines.push(format!("{}", "Overlapping subnets:".on_red()));
        lines.push(render_overlaps(&report.overlaps));
    }

    lines.push(format!(
        "Allocated {} of {} IPs ({})",
        report.allocated_ips,
        report.vpc.total_ips,
        paint_utilization(report.utilization)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{calculate_cidr_info, check_subnet_plan, find_overlapping_subnets};

    #[test]
    fn test_format_field_cidr_column() {
        assert_eq!(format_field("10.0.0.0/25", 20), r#"       "10.0.0.0/25""#);
        assert_eq!(format_field("255.255.255.255/32", 20), r#""255.255.255.255/32""#);
        assert_eq!(format_field("255.255.255.255/32", 20).len(), 20);
    }

    #[test]
    fn test_format_field_count_columns() {
        assert_eq!(format_field(3, 6), r#"   "3""#);
        assert_eq!(format_field(4294967296u64, 12), r#""4294967296""#);
        assert_eq!(format_field("-gap-", 6), r#""-gap-""#);
        assert_eq!(format_field("", 12), r#"          """#);
    }

    #[test]
    fn test_format_field_overflows_width() {
        assert_eq!(format_field("invalid-entry", 12), r#""invalid-entry""#);
    }

    #[test]
    fn test_paint_utilization_text() {
        assert!(paint_utilization(90.0).to_string().contains("90.0%"));
        assert!(paint_utilization(12.3).to_string().contains("12.3%"));
    }

    #[test]
    fn test_render_cidr_info() {
        let info = calculate_cidr_info("10.0.0.0/24").unwrap();
        let text = render_cidr_info(&info);
        assert_eq!(text.lines().count(), 9);
        assert!(text.starts_with("CIDR:          10.0.0.0/24"));
        assert!(text.contains("Broadcast:     10.0.0.255"));
        assert!(text.contains("Usable IPs:    254"));
    }

    #[test]
    fn test_render_subnets() {
        let subnets = vec!["10.0.0.0/25".to_string(), "10.0.0.128/25".to_string()];
        assert_eq!(
            render_subnets(&subnets),
            "   1  10.0.0.0/25\n   2  10.0.0.128/25"
        );
        assert_eq!(render_subnets(&[]), "");
    }

    #[test]
    fn test_render_overlaps() {
        let conflicts = find_overlapping_subnets(&["10.0.0.0/24", "10.0.0.0/25"]);
        assert_eq!(
            render_overlaps(&conflicts),
            "10.0.0.0/24 overlaps 10.0.0.0/25"
        );
    }

    #[test]
    fn test_render_plan() {
        let report =
            check_subnet_plan("10.0.0.0/24", &["10.0.0.0/25", "10.9.0.0/25", "x"]).unwrap();
        let text = render_plan(&report);
        assert!(text.contains(r#""10.0.0.0/25""#));
        assert!(text.contains(r#""outside""#));
        assert!(text.contains(r#""invalid""#));
        assert!(text.contains(r#""10.0.0.128/25""#));
        assert!(text.contains("Allocated 128 of 256 IPs"));
        assert!(!text.contains("Overlapping"));
    }
}
