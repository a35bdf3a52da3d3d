//! SNMP credentials.
//!
//! [`Credential`] is a closed set of the five credential shapes the Net-SNMP
//! tools accept. Each variant carries exactly the fields its version and
//! security level need, so an inconsistent combination (privacy without
//! authentication, a community on a v3 request, ...) cannot be represented.
//!
//! # Examples
//!
//! ```
//! use snmp_shell::Credential;
//! use snmp_shell::v3::{AuthProtocol, PrivProtocol};
//!
//! let v2 = Credential::v2c("public");
//!
//! let v3 = Credential::v3("admin")
//!     .auth(AuthProtocol::Sha, "authpass123")
//!     .privacy(PrivProtocol::Aes, "privpass123");
//! assert_eq!(v3.security_level(), Some(snmp_shell::v3::SecurityLevel::AuthPriv));
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CredentialErrorKind, Error, Result};
use crate::v3::{AuthProtocol, PrivProtocol, SecurityLevel};
use crate::version::Version;

/// A secret string (community or passphrase).
///
/// Cleared from memory on drop and never printed by `Debug`. Copies made by
/// [`normalize`](crate::normalize()) and [`command::build`](crate::command::build)
/// are cleared when those values drop. The rendered command string and the
/// tool's process arguments are plain text outside this guarantee.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the plain value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(****)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Credentials for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// SNMPv1 community.
    V1 { community: Secret },
    /// SNMPv2c community.
    V2c { community: Secret },
    /// SNMPv3 without authentication or privacy.
    V3NoAuthNoPriv { sec_name: String },
    /// SNMPv3 with authentication only.
    V3AuthNoPriv {
        sec_name: String,
        auth_proto: AuthProtocol,
        auth_pass: Secret,
    },
    /// SNMPv3 with authentication and privacy.
    V3AuthPriv {
        sec_name: String,
        auth_proto: AuthProtocol,
        auth_pass: Secret,
        priv_proto: PrivProtocol,
        priv_pass: Secret,
    },
}

impl Credential {
    /// SNMPv1 with the given community.
    pub fn v1(community: impl Into<Secret>) -> Self {
        Self::V1 {
            community: community.into(),
        }
    }

    /// SNMPv2c with the given community.
    pub fn v2c(community: impl Into<Secret>) -> Self {
        Self::V2c {
            community: community.into(),
        }
    }

    /// SNMPv3 for the given security name, starting at noAuthNoPriv.
    ///
    /// Call [`.auth()`](UsmBuilder::auth) to add authentication.
    pub fn v3(sec_name: impl Into<String>) -> UsmBuilder {
        UsmBuilder {
            sec_name: sec_name.into(),
        }
    }

    /// Protocol version of this credential.
    pub fn version(&self) -> Version {
        match self {
            Self::V1 { .. } => Version::V1,
            Self::V2c { .. } => Version::V2c,
            _ => Version::V3,
        }
    }

    /// USM security level, `None` for community-based versions.
    pub fn security_level(&self) -> Option<SecurityLevel> {
        match self {
            Self::V1 { .. } | Self::V2c { .. } => None,
            Self::V3NoAuthNoPriv { .. } => Some(SecurityLevel::NoAuthNoPriv),
            Self::V3AuthNoPriv { .. } => Some(SecurityLevel::AuthNoPriv),
            Self::V3AuthPriv { .. } => Some(SecurityLevel::AuthPriv),
        }
    }
}

/// SNMPv3 credential at noAuthNoPriv.
///
/// Created via [`Credential::v3()`].
#[derive(Debug, Clone)]
pub struct UsmBuilder {
    sec_name: String,
}

impl UsmBuilder {
    /// Add authentication protocol and passphrase (authNoPriv).
    pub fn auth(self, protocol: AuthProtocol, passphrase: impl Into<Secret>) -> UsmAuthBuilder {
        UsmAuthBuilder {
            sec_name: self.sec_name,
            auth_proto: protocol,
            auth_pass: passphrase.into(),
        }
    }

    /// Finish as a noAuthNoPriv credential.
    pub fn build(self) -> Credential {
        Credential::V3NoAuthNoPriv {
            sec_name: self.sec_name,
        }
    }
}

impl From<UsmBuilder> for Credential {
    fn from(builder: UsmBuilder) -> Self {
        builder.build()
    }
}

/// SNMPv3 credential at authNoPriv.
///
/// Created via [`UsmBuilder::auth()`]. Call [`.privacy()`](Self::privacy) for authPriv.
#[derive(Debug, Clone)]
pub struct UsmAuthBuilder {
    sec_name: String,
    auth_proto: AuthProtocol,
    auth_pass: Secret,
}

impl UsmAuthBuilder {
    /// Add privacy protocol and passphrase, producing an authPriv credential.
    pub fn privacy(self, protocol: PrivProtocol, passphrase: impl Into<Secret>) -> Credential {
        Credential::V3AuthPriv {
            sec_name: self.sec_name,
            auth_proto: self.auth_proto,
            auth_pass: self.auth_pass,
            priv_proto: protocol,
            priv_pass: passphrase.into(),
        }
    }

    /// Finish as an authNoPriv credential.
    pub fn build(self) -> Credential {
        Credential::V3AuthNoPriv {
            sec_name: self.sec_name,
            auth_proto: self.auth_proto,
            auth_pass: self.auth_pass,
        }
    }
}

impl From<UsmAuthBuilder> for Credential {
    fn from(builder: UsmAuthBuilder) -> Self {
        builder.build()
    }
}

/// Loosely-typed credential fields, as read from configuration or user input.
///
/// Convert with `Credential::try_from(params)`. When `sec_level` is absent
/// it is inferred from which protocols are present.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CredentialParams {
    pub version: String,
    pub community: Option<String>,
    pub sec_level: Option<String>,
    pub sec_name: Option<String>,
    pub auth_proto: Option<String>,
    pub auth_pass: Option<String>,
    pub priv_proto: Option<String>,
    pub priv_pass: Option<String>,
}

impl std::fmt::Debug for CredentialParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "****");
        f.debug_struct("CredentialParams")
            .field("version", &self.version)
            .field("community", &mask(&self.community))
            .field("sec_level", &self.sec_level)
            .field("sec_name", &self.sec_name)
            .field("auth_proto", &self.auth_proto)
            .field("auth_pass", &mask(&self.auth_pass))
            .field("priv_proto", &self.priv_proto)
            .field("priv_pass", &mask(&self.priv_pass))
            .finish()
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    value.ok_or_else(|| Error::credential(CredentialErrorKind::MissingField(name)))
}

fn reject_present(fields: &[(&'static str, bool)]) -> Result<()> {
    match fields.iter().find(|(_, present)| *present) {
        Some((name, _)) => Err(Error::credential(CredentialErrorKind::UnexpectedField(
            *name,
        ))),
        None => Ok(()),
    }
}

impl TryFrom<CredentialParams> for Credential {
    type Error = Error;

    fn try_from(params: CredentialParams) -> Result<Self> {
        let version = Version::from_flag(&params.version)
            .ok_or_else(|| Error::credential(CredentialErrorKind::UnknownVersion))?;

        if version != Version::V3 {
            reject_present(&[
                ("sec_level", params.sec_level.is_some()),
                ("sec_name", params.sec_name.is_some()),
                ("auth_proto", params.auth_proto.is_some()),
                ("auth_pass", params.auth_pass.is_some()),
                ("priv_proto", params.priv_proto.is_some()),
                ("priv_pass", params.priv_pass.is_some()),
            ])?;
            let community = required(params.community, "community")?;
            return Ok(if version == Version::V1 {
                Credential::v1(community)
            } else {
                Credential::v2c(community)
            });
        }

        reject_present(&[("community", params.community.is_some())])?;

        let level = match params.sec_level.as_deref() {
            Some(s) => s
                .parse::<SecurityLevel>()
                .map_err(|_| Error::credential(CredentialErrorKind::UnknownSecurityLevel))?,
            None if params.priv_proto.is_some() => SecurityLevel::AuthPriv,
            None if params.auth_proto.is_some() => SecurityLevel::AuthNoPriv,
            None => SecurityLevel::NoAuthNoPriv,
        };
        let sec_name = required(params.sec_name, "sec_name")?;

        if level == SecurityLevel::NoAuthNoPriv {
            reject_present(&[
                ("auth_proto", params.auth_proto.is_some()),
                ("auth_pass", params.auth_pass.is_some()),
                ("priv_proto", params.priv_proto.is_some()),
                ("priv_pass", params.priv_pass.is_some()),
            ])?;
            return Ok(Credential::v3(sec_name).build());
        }

        let auth_proto = required(params.auth_proto, "auth_proto")?
            .parse::<AuthProtocol>()
            .map_err(|_| Error::credential(CredentialErrorKind::UnknownAuthProtocol))?;
        let auth_pass = required(params.auth_pass, "auth_pass")?;
        let builder = Credential::v3(sec_name).auth(auth_proto, auth_pass);

        if level == SecurityLevel::AuthNoPriv {
            reject_present(&[
                ("priv_proto", params.priv_proto.is_some()),
                ("priv_pass", params.priv_pass.is_some()),
            ])?;
            return Ok(builder.build());
        }

        let priv_proto = required(params.priv_proto, "priv_proto")?
            .parse::<PrivProtocol>()
            .map_err(|_| Error::credential(CredentialErrorKind::UnknownPrivProtocol))?;
        let priv_pass = required(params.priv_pass, "priv_pass")?;
        Ok(builder.privacy(priv_proto, priv_pass))
    }
}
