//! Host classification shared by the resolver and the address model.
//!
//! Classification is address-family agnostic: IPv4 and IPv6 literals are
//! parsed with the standard library parsers, and anything that is not a
//! literal is checked against hostname syntax.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

/// Maximum length of a fully qualified hostname (without the root dot).
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single hostname label.
const MAX_LABEL_LEN: usize = 63;

/// What a host string claims to be.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HostKind {
    /// IPv4 or IPv6 literal.
    IpLiteral,
    /// DNS name.
    Hostname,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostKind::IpLiteral => write!(f, "ip"),
            HostKind::Hostname => write!(f, "hostname"),
        }
    }
}

/// Parse `host` as an IP literal.
///
/// IPv6 literals are accepted bare (`::1`) or bracketed (`[::1]`).
pub fn parse_ip_literal(host: &str) -> Option<IpAddr> {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<Ipv6Addr>().ok().map(IpAddr::V6);
    }
    host.parse::<IpAddr>().ok()
}

/// True for 127.0.0.0/8, `::1` and IPv4-mapped loopback (`::ffff:127.x.y.z`).
pub fn is_loopback_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_loopback(),
        IpAddr::V6(v6) => {
            v6.is_loopback() || v6.to_ipv4_mapped().is_some_and(|v4| v4.is_loopback())
        }
    }
}

/// Loopback classification for a configured host string.
///
/// Literals are classified by address range; a non-literal is loopback only
/// when it is `localhost` (any case, optional trailing root dot).
pub fn is_loopback_host(host: &str) -> bool {
    match parse_ip_literal(host) {
        Some(ip) => is_loopback_ip(&ip),
        None => host
            .strip_suffix('.')
            .unwrap_or(host)
            .eq_ignore_ascii_case("localhost"),
    }
}

/// RFC 1123 hostname syntax check. Underscores are tolerated since they
/// show up in real service names; a single trailing root dot is allowed.
pub fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}

/// Classify a host string, or `None` when it is neither an IP literal nor a
/// valid hostname.
pub fn classify_host(host: &str) -> Option<HostKind> {
    if parse_ip_literal(host).is_some() {
        Some(HostKind::IpLiteral)
    } else if is_valid_hostname(host) {
        Some(HostKind::Hostname)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ip_literal() {
        assert_eq!(
            parse_ip_literal("192.168.1.100"),
            Some("192.168.1.100".parse().unwrap())
        );
        assert_eq!(parse_ip_literal("::1"), Some("::1".parse().unwrap()));
        assert_eq!(parse_ip_literal("[fe80::1]"), Some("fe80::1".parse().unwrap()));
        assert_eq!(parse_ip_literal("[10.0.0.1]"), None);
        assert_eq!(parse_ip_literal("bookie1.example.com"), None);
        assert_eq!(parse_ip_literal(""), None);
    }

    #[test]
    fn test_loopback_ranges() {
        assert!(is_loopback_host("127.0.0.1"));
        assert!(is_loopback_host("127.255.0.9"));
        assert!(is_loopback_host("::1"));
        assert!(is_loopback_host("[::1]"));
        assert!(is_loopback_host("::ffff:127.0.0.1"));

        assert!(!is_loopback_host("192.168.1.100"));
        assert!(!is_loopback_host("128.0.0.1"));
        assert!(!is_loopback_host("::2"));
        assert!(!is_loopback_host("0.0.0.0"));
    }

    #[test]
    fn test_localhost_name() {
        assert!(is_loopback_host("localhost"));
        assert!(is_loopback_host("LocalHost"));
        assert!(is_loopback_host("localhost."));
        assert!(!is_loopback_host("localhost.."));
        assert!(!is_loopback_host("localhost.example.com"));
        assert!(!is_loopback_host("bookie1"));
    }

    #[test]
    fn test_hostname_syntax() {
        assert!(is_valid_hostname("bookie1"));
        assert!(is_valid_hostname("bookie-1.dc1.example.com"));
        assert!(is_valid_hostname("bookie-1.dc1.example.com."));
        assert!(is_valid_hostname("_bookkeeper._tcp.example.com"));

        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("."));
        assert!(!is_valid_hostname("-bookie"));
        assert!(!is_valid_hostname("bookie-"));
        assert!(!is_valid_hostname("two..dots"));
        assert!(!is_valid_hostname("has space"));
        assert!(!is_valid_hostname("host:3181"));
        assert!(!is_valid_hostname(&"a".repeat(64)));
        assert!(!is_valid_hostname(&["abc"; 64].join(".")));
    }

    #[test]
    fn test_classify_host() {
        assert_eq!(classify_host("10.0.0.1"), Some(HostKind::IpLiteral));
        assert_eq!(classify_host("2001:db8::1"), Some(HostKind::IpLiteral));
        assert_eq!(classify_host("localhost"), Some(HostKind::Hostname));
        assert_eq!(classify_host("not a host"), None);
    }
}
