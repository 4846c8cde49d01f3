//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 block (address plus
//! prefix length), along with the mask arithmetic shared by the engine.
//! All arithmetic is done on `u32`, masks never rely on shift overflow.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// A prefix of `0` is the all-zero mask.
///
/// # Examples
/// ```
/// use vpc_cidr_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    match len {
        0 => Ok(0),
        1..=MAX_LENGTH => Ok(u32::MAX << (MAX_LENGTH - len)),
        _ => Err("Network length is too long".into()),
    }
}

/// Number of addresses in a block of the given prefix length.
///
/// Returned as u64, a `/0` holds 2^32 addresses.
pub fn block_size(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Returns the IP address following the given subnet.
pub fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let network_bits = u64::from(u32::from(addr) & get_cidr_mask(cidr)?);
    let next_subnet_bits = network_bits + block_size(cidr)?;
    let next_subnet_bits =
        u32::try_from(next_subnet_bits).map_err(|_| "Next subnet calculation overflowed")?;
    Ok(Ipv4Addr::from(next_subnet_bits))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix and yields `0`.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// IPv4 block in CIDR notation.
///
/// `addr` is kept as given, it is not masked down to the network address.
/// `mask` is always 0-32: outside the crate a block is only built through
/// [`Ipv4::new`] or deserialization, which both validate.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    pub(crate) addr: Ipv4Addr,
    pub(crate) mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Accepts exactly the form [`crate::processing::validate_cidr`] accepts.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        crate::processing::parse_cidr(addr_cidr)
    }

    /// The IPv4 address as written.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The subnet mask as u32.
    pub fn netmask(&self) -> u32 {
        match self.mask {
            0 => 0,
            len => u32::MAX << (MAX_LENGTH - len),
        }
    }

    /// The wildcard (host) mask as u32.
    pub fn wildcard(&self) -> u32 {
        !self.netmask()
    }

    /// Number of addresses in this block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// This block with the address cut down to the network address.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | self.wildcard())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// True if `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// True if `other` is this block or nested inside it.
    pub fn contains_block(&self, other: &Ipv4) -> bool {
        other.mask >= self.mask
            && (u32::from(other.addr) & self.netmask()) == (u32::from(self.addr) & self.netmask())
    }

    /// True if the two blocks share at least one address.
    ///
    /// Two blocks overlap when either one holds the other's network address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.contains(other.lo()) || other.contains(self.lo())
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
