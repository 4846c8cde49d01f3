//! Subnet containment.

use super::validate::parse_cidr;

/// True when `child_cidr` lies inside `parent_cidr`.
///
/// The child must have an equal or longer prefix, and its address masked to
/// the parent's prefix must equal the parent's network address. Either input
/// failing to validate gives `false`.
pub fn is_subnet_of(child_cidr: &str, parent_cidr: &str) -> bool {
    let (child, parent) = match (parse_cidr(child_cidr), parse_cidr(parent_cidr)) {
        (Ok(child), Ok(parent)) => (child, parent),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("is_subnet_of({child_cidr}, {parent_cidr}) rejected: {e}");
            return false;
        }
    };
    parent.contains_block(&child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subnet_of() {
        assert!(is_subnet_of("10.0.1.0/24", "10.0.0.0/16"));
        assert!(!is_subnet_of("10.1.0.0/24", "10.0.0.0/16"));
        assert!(is_subnet_of("10.0.0.0/16", "10.0.0.0/16"));
        assert!(is_subnet_of("10.0.255.255/32", "10.0.0.0/16"));
        assert!(is_subnet_of("192.168.1.0/24", "0.0.0.0/0"));
    }

    #[test]
    fn test_is_subnet_of_larger_child() {
        assert!(!is_subnet_of("10.0.0.0/8", "10.0.0.0/16"));
        assert!(!is_subnet_of("0.0.0.0/0", "10.0.0.0/16"));
    }

    #[test]
    fn test_is_subnet_of_unmasked_parent() {
        // parent address is masked before comparing
        assert!(is_subnet_of("10.0.7.0/24", "10.0.3.9/16"));
    }

    #[test]
    fn test_is_subnet_of_invalid() {
        assert!(!is_subnet_of("10.0.1.0/33", "10.0.0.0/16"));
        assert!(!is_subnet_of("10.0.1.0/24", "10.0.0.0"));
        assert!(!is_subnet_of("", ""));
    }
}
