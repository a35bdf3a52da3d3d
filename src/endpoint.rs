//! Target endpoint.

use crate::error::{Error, Result};

/// Default SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// Agent host and optional port, rendered as a Net-SNMP UDP transport address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: Option<u16>,
}

/// Hostnames and IPv4 literals only: the host reaches the shell unquoted.
fn check_host(host: &str) -> Result<()> {
    let valid = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidEndpoint { input: host.into() })
    }
}

impl Endpoint {
    /// Endpoint on the default port.
    ///
    /// The host may only contain ASCII letters, digits, `.`, `-` and `_`.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        check_host(&host)?;
        Ok(Self { host, port: None })
    }

    /// Set an explicit port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port, falling back to [`DEFAULT_PORT`].
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Transport address as passed to the tools, e.g. `udp:10.0.0.1:161`.
    pub fn transport_address(&self) -> String {
        format!("udp:{}:{}", self.host, self.effective_port())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.effective_port())
    }
}

impl std::str::FromStr for Endpoint {
    type Err = Error;

    /// Accepts `host` or `host:port`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidEndpoint { input: s.into() };
        let (host, port) = match s.rsplit_once(':') {
            Some((host, port)) => (host, Some(port.parse::<u16>().map_err(|_| invalid())?)),
            None => (s, None),
        };
        check_host(host).map_err(|_| invalid())?;
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let ep = Endpoint::new("10.0.0.1").unwrap();
        assert_eq!(ep.transport_address(), "udp:10.0.0.1:161");
        assert_eq!(ep.port(1161).transport_address(), "udp:10.0.0.1:1161");
    }

    #[test]
    fn test_from_str() {
        let ep: Endpoint = "switch01".parse().unwrap();
        assert_eq!(ep, Endpoint::new("switch01").unwrap());

        let ep: Endpoint = "192.168.1.1:1161".parse().unwrap();
        assert_eq!(ep.host(), "192.168.1.1");
        assert_eq!(ep.effective_port(), 1161);

        assert!("".parse::<Endpoint>().is_err());
        assert!(":161".parse::<Endpoint>().is_err());
        assert!("host:notaport".parse::<Endpoint>().is_err());
        assert!("host:70000".parse::<Endpoint>().is_err());
        assert!("bad host".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_host_rejects_shell_text() {
        for host in [
            "h$(touch /tmp/marker)",
            "10.0.0.1;id",
            "host name",
            "`id`",
            "a'b",
            "",
        ] {
            assert!(
                matches!(Endpoint::new(host), Err(Error::InvalidEndpoint { .. })),
                "{host:?}"
            );
            assert!(host.parse::<Endpoint>().is_err(), "{host:?}");
        }
        assert!(Endpoint::new("core-sw_01.lab.example").is_ok());
    }
}
