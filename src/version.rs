//! SNMP version enumeration.

/// SNMP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[derive(Default)]
pub enum Version {
    /// SNMPv1 (RFC 1157)
    V1,
    /// SNMPv2c (RFC 1901)
    #[default]
    V2c,
    /// SNMPv3 (RFC 3411-3418)
    V3,
}

impl Version {
    /// Value passed to the Net-SNMP `-v` flag.
    pub const fn as_flag(self) -> &'static str {
        match self {
            Version::V1 => "1",
            Version::V2c => "2c",
            Version::V3 => "3",
        }
    }

    /// Parse a `-v` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Version::V1),
            "2c" | "2C" => Some(Version::V2c),
            "3" => Some(Version::V3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::V1 => write!(f, "SNMPv1"),
            Version::V2c => write!(f, "SNMPv2c"),
            Version::V3 => write!(f, "SNMPv3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_roundtrip() {
        for v in [Version::V1, Version::V2c, Version::V3] {
            assert_eq!(Version::from_flag(v.as_flag()), Some(v));
        }
        assert_eq!(Version::from_flag("2"), None);
        assert_eq!(Version::from_flag(""), None);
    }
}
