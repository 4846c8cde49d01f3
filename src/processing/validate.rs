//! CIDR string validation.
//!
//! Gates every other engine operation: the only accepted form is four
//! decimal octets (0-255) separated by `.`, then `/` and a decimal prefix
//! length (0-32). Nothing is trimmed.

use super::codec::parse_octets;
use crate::models::{Ipv4, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3}(?:\.[0-9]{1,3}){3})/([0-9]{1,2})$").expect("Invalid Regex?");
}

/// Parse a CIDR string into an [`Ipv4`] block.
///
/// The address is kept as written, it is not cut to the network address.
pub fn parse_cidr(cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
    let caps = CIDR_RE
        .captures(cidr)
        .ok_or_else(|| format!("Invalid address/mask {cidr}"))?;
    let octets = parse_octets(&caps[1])?;
    let mask: u8 = caps[2].parse()?;
    if mask > MAX_LENGTH {
        return Err(format!("Network length is too long /{mask}").into());
    }
    Ok(Ipv4 {
        addr: Ipv4Addr::from(octets),
        mask,
    })
}

/// True when `cidr` is a well formed IPv4 CIDR string.
///
/// # Examples
/// ```
/// use vpc_cidr_planner::validate_cidr;
/// assert!(validate_cidr("10.0.0.0/16"));
/// assert!(!validate_cidr("10.0.0.0/33"));
/// ```
pub fn validate_cidr(cidr: &str) -> bool {
    match parse_cidr(cidr) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("validate_cidr({cidr}) rejected: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cidr_accepts() {
        assert!(validate_cidr("10.0.0.0/24"));
        assert!(validate_cidr("0.0.0.0/0"));
        assert!(validate_cidr("255.255.255.255/32"));
        assert!(validate_cidr("192.168.1.77/31"));
        assert!(validate_cidr("010.001.000.000/08"));
    }

    #[test]
    fn test_validate_cidr_rejects_range() {
        assert!(!validate_cidr("10.0.0.0/33"));
        assert!(!validate_cidr("10.0.0.0/99"));
        assert!(!validate_cidr("999.0.0.0/24"));
        assert!(!validate_cidr("10.256.0.0/24"));
        assert!(!validate_cidr("10.0.0.1000/24"));
    }

    #[test]
    fn test_validate_cidr_rejects_format() {
        assert!(!validate_cidr(""));
        assert!(!validate_cidr("10.0.0.0"));
        assert!(!validate_cidr("10.0.0/24"));
        assert!(!validate_cidr("10.0.0.0.0/24"));
        assert!(!validate_cidr("10.0.0.0/"));
        assert!(!validate_cidr("10.0.0.0/100"));
        assert!(!validate_cidr("10.0.0.0/-1"));
        assert!(!validate_cidr(" 10.0.0.0/24"));
        assert!(!validate_cidr("10.0.0.0/24 "));
        assert!(!validate_cidr("a.b.c.d/24"));
        assert!(!validate_cidr("10.0.0.0/24/8"));
        assert!(!validate_cidr("10.0.0.٣/24"));
    }

    #[test]
    fn test_parse_cidr_keeps_address() {
        let block = parse_cidr("10.0.0.5/24").unwrap();
        assert_eq!(block.addr, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(block.mask, 24);
        assert_eq!(
            parse_cidr("10.0.0.0/33").unwrap_err().to_string(),
            "Network length is too long /33"
        );
    }
}
