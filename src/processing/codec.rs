//! Dotted-quad <-> u32 conversion.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

lazy_static! {
    static ref DOTTED_QUAD_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Split a dotted-quad string into its four octets.
///
/// Octets are read as decimal, so `010` is `10`.
pub fn parse_octets(ip: &str) -> Result<[u8; 4], Box<dyn Error>> {
    let caps = DOTTED_QUAD_RE
        .captures(ip)
        .ok_or_else(|| format!("Invalid address {ip}"))?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let text = &caps[i + 1];
        *octet = text
            .parse()
            .map_err(|_| format!("Octet out of range {text} in {ip}"))?;
    }
    Ok(octets)
}

/// Fold four octets MSB-first into a u32.
pub fn octets_to_int(octets: [u8; 4]) -> u32 {
    octets
        .iter()
        .fold(0u32, |acc, &octet| (acc << 8) | u32::from(octet))
}

/// Convert a dotted-quad string to its u32 value.
///
/// Returns `None` when `ip` is not four decimal octets in 0-255.
///
/// # Examples
/// ```
/// use vpc_cidr_planner::ip_to_int;
/// assert_eq!(ip_to_int("10.0.0.1"), Some(0x0A000001));
/// assert_eq!(ip_to_int("256.0.0.1"), None);
/// ```
pub fn ip_to_int(ip: &str) -> Option<u32> {
    match parse_octets(ip) {
        Ok(octets) => Some(octets_to_int(octets)),
        Err(e) => {
            log::debug!("ip_to_int rejected input: {e}");
            None
        }
    }
}

/// Convert a u32 to its dotted-quad string.
pub fn int_to_ip(value: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (value >> 24) & 0xFF,
        (value >> 16) & 0xFF,
        (value >> 8) & 0xFF,
        value & 0xFF
    )
}
