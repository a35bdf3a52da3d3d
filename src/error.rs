//! Error types for snmp-shell.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! The variants follow the request pipeline: credential and OID problems are
//! reported before any command is built, launch/timeout/exit problems come from
//! the external tool, and parse problems come from reading its output. A parse
//! error is never used to signal "no data": an empty result is `Ok(vec![])`.

use std::time::Duration;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Credential validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialErrorKind {
    /// Version string is not `1`, `2c` or `3`.
    UnknownVersion,
    /// Security level string is not one of the three USM levels.
    UnknownSecurityLevel,
    /// Authentication protocol outside `{md5, sha}`.
    UnknownAuthProtocol,
    /// Privacy protocol outside `{des, aes}`.
    UnknownPrivProtocol,
    /// A field required by the version/level is absent.
    MissingField(&'static str),
    /// A field was supplied that the version/level does not use.
    UnexpectedField(&'static str),
}

impl std::fmt::Display for CredentialErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVersion => write!(f, "unknown SNMP version; expected 1, 2c or 3"),
            Self::UnknownSecurityLevel => write!(
                f,
                "unknown security level; expected noAuthNoPriv, authNoPriv or authPriv"
            ),
            Self::UnknownAuthProtocol => {
                write!(f, "unknown authentication protocol; expected md5 or sha")
            }
            Self::UnknownPrivProtocol => write!(f, "unknown privacy protocol; expected des or aes"),
            Self::MissingField(name) => write!(f, "missing required field '{}'", name),
            Self::UnexpectedField(name) => {
                write!(f, "field '{}' is not valid for this security level", name)
            }
        }
    }
}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string or empty object list.
    Empty,
    /// Invalid arc value.
    InvalidArc,
    /// Unknown SET type letter.
    InvalidSetType,
    /// Object name with characters outside `[A-Za-z0-9:._-]`.
    InvalidName,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::InvalidSetType => write!(f, "invalid SET type specifier"),
            Self::InvalidName => write!(f, "invalid object name"),
        }
    }
}

/// Why an external tool could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchErrorKind {
    /// The shell itself could not be spawned.
    Spawn,
    /// The shell reported the tool as missing (exit status 127).
    NotFound,
    /// The shell found the tool but could not execute it (exit status 126).
    PermissionDenied,
}

impl std::fmt::Display for LaunchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn => write!(f, "failed to spawn shell"),
            Self::NotFound => write!(f, "command not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
        }
    }
}

/// Tool output parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Output was not empty but contained no `<oid> = <value>` line.
    NoData,
    /// Table output had no header line with the field delimiter.
    MissingHeader,
    /// A table row had a different number of fields than the header.
    ColumnCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "output contains no variable bindings"),
            Self::MissingHeader => write!(f, "table output has no header line"),
            Self::ColumnCountMismatch { expected, actual } => {
                write!(f, "expected {} columns, got {}", expected, actual)
            }
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Credential fields do not form a valid combination.
    #[error("invalid credential: {kind}")]
    InvalidCredential { kind: CredentialErrorKind },

    /// Invalid OID, object list or SET specifier.
    #[error("invalid OID: {kind}{}", input.as_ref().map(|i| format!(" ('{}')", i)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },

    /// Endpoint string could not be parsed.
    #[error("invalid endpoint '{input}'")]
    InvalidEndpoint { input: Box<str> },

    /// Configuration value out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The tool could not be launched.
    #[error("failed to launch {program}: {kind}")]
    ProcessLaunch {
        program: Box<str>,
        kind: LaunchErrorKind,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The tool did not finish within the configured timeout.
    #[error("{program} timed out after {elapsed:?}")]
    ProcessTimeout { program: Box<str>, elapsed: Duration },

    /// The tool exited unsuccessfully.
    #[error("{program} exited with {}: {}", code.map(|c| format!("status {}", c)).unwrap_or_else(|| "signal".to_string()), stderr.trim())]
    NonZeroExit {
        program: Box<str>,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        stderr: String,
    },

    /// I/O error while collecting the tool's output.
    #[error("I/O error running {program}: {source}")]
    Io {
        program: Box<str>,
        #[source]
        source: std::io::Error,
    },

    /// Tool output did not match the expected grammar.
    #[error("parse error{}: {kind}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        kind: ParseErrorKind,
        /// 1-based line number, when the failure is tied to a line.
        line: Option<usize>,
    },
}

impl Error {
    /// Create a credential error.
    pub fn credential(kind: CredentialErrorKind) -> Self {
        Self::InvalidCredential { kind }
    }

    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create a parse error not tied to a line.
    pub fn parse(kind: ParseErrorKind) -> Self {
        Self::Parse { kind, line: None }
    }

    /// Create a parse error at a 1-based line number.
    pub fn parse_at(kind: ParseErrorKind, line: usize) -> Self {
        Self::Parse {
            kind,
            line: Some(line),
        }
    }

    /// Get the program name if this error came from running a tool.
    pub fn program(&self) -> Option<&str> {
        match self {
            Self::ProcessLaunch { program, .. } => Some(program),
            Self::ProcessTimeout { program, .. } => Some(program),
            Self::NonZeroExit { program, .. } => Some(program),
            Self::Io { program, .. } => Some(program),
            _ => None,
        }
    }

    /// Whether the error was raised before any process was started.
    pub fn is_pre_execution(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredential { .. }
                | Self::InvalidOid { .. }
                | Self::InvalidEndpoint { .. }
                | Self::InvalidConfig { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_display() {
        let err = Error::NonZeroExit {
            program: "snmpget".into(),
            code: Some(1),
            stderr: "Timeout: No Response from udp:10.0.0.1:161.\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "snmpget exited with status 1: Timeout: No Response from udp:10.0.0.1:161."
        );

        let err = Error::NonZeroExit {
            program: "snmpwalk".into(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "snmpwalk exited with signal: ");
    }

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse_at(
            ParseErrorKind::ColumnCountMismatch {
                expected: 3,
                actual: 2,
            },
            4,
        );
        assert_eq!(err.to_string(), "parse error at line 4: expected 3 columns, got 2");
        assert_eq!(
            Error::parse(ParseErrorKind::NoData).to_string(),
            "parse error: output contains no variable bindings"
        );
    }

    #[test]
    fn test_invalid_oid_display() {
        let err = Error::invalid_oid_with_input(OidErrorKind::InvalidArc, "1.3.x");
        assert_eq!(err.to_string(), "invalid OID: invalid arc value ('1.3.x')");
        assert_eq!(
            Error::invalid_oid(OidErrorKind::Empty).to_string(),
            "invalid OID: empty OID"
        );
    }

    #[test]
    fn test_program_and_stage() {
        let err = Error::ProcessTimeout {
            program: "snmptable".into(),
            elapsed: Duration::from_millis(50),
        };
        assert_eq!(err.program(), Some("snmptable"));
        assert!(!err.is_pre_execution());

        let err = Error::credential(CredentialErrorKind::UnknownAuthProtocol);
        assert_eq!(err.program(), None);
        assert!(err.is_pre_execution());
    }
}
