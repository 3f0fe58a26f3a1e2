//! The firewall rule set every WordPress instance is attached to.

/// Name of the security group looked up (and created on first use).
pub const SECURITY_GROUP_NAME: &str = "wordpress-sg";

/// Description given to the security group when it is created.
pub const SECURITY_GROUP_DESCRIPTION: &str = "Security group for wordpress";

/// EC2 error code returned when a security group name does not exist.
pub const GROUP_NOT_FOUND_CODE: &str = "InvalidGroup.NotFound";

/// One inbound permission: protocol, inclusive port range, source CIDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngressRule {
    pub protocol: &'static str,
    pub from_port: i32,
    pub to_port: i32,
    pub cidr: &'static str,
}

impl IngressRule {
    /// Returns `true` for IPv6 source ranges.
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        self.cidr.contains(':')
    }
}

/// HTTP from anywhere, over both address families.
pub const WEB_INGRESS: [IngressRule; 2] = [
    IngressRule {
        protocol: "tcp",
        from_port: 80,
        to_port: 80,
        cidr: "0.0.0.0/0",
    },
    IngressRule {
        protocol: "tcp",
        from_port: 80,
        to_port: 80,
        cidr: "::/0",
    },
];
