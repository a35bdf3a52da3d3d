//! Command-line construction.
//!
//! [`build`] turns an operation, a normalized credential, an endpoint and a
//! context into the exact command line for the matching Net-SNMP tool. It
//! performs no I/O.
//!
//! # Quoting
//!
//! Community strings, security names, passphrases, the context and the table
//! field delimiter are wrapped in single quotes **verbatim**. Embedded single
//! quotes are not escaped, so such values produce a broken (or different)
//! shell command. Existing deployments depend on these exact strings, so the
//! behavior is kept as is.
//!
//! Every other value is made safe before it reaches the shell:
//!
//! - object names are limited to `[A-Za-z0-9:._-]` (see [`ObjectId::validate`]),
//! - endpoint hosts are checked when the [`Endpoint`] is created,
//! - SET values are single-quoted with embedded quotes escaped as `'\''`.
//!
//! ```
//! use snmp_shell::command::{build, Operation};
//! use snmp_shell::{normalize, oid, Config, Credential, Endpoint};
//!
//! let cmd = build(
//!     &Operation::Get(vec![oid!(1, 3, 6, 1, 2, 1, 1, 1, 0).into()]),
//!     &normalize(&Credential::v2c("public")),
//!     &Endpoint::new("10.0.0.1")?,
//!     "",
//!     &Config::default(),
//! )?;
//! assert_eq!(
//!     cmd.to_string(),
//!     "snmpget -Le -mALL -OUnet -n '' -v2c -c 'public' udp:10.0.0.1:161 .1.3.6.1.2.1.1.1.0"
//! );
//! # Ok::<(), snmp_shell::Error>(())
//! ```

use zeroize::Zeroize;

use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::normalize::{CredentialMap, Field};
use crate::oid::{ObjectId, SetObject};

/// Flags shared by `snmpget`, `snmpset` and `snmpwalk`: errors to stderr,
/// all MIBs loaded, numeric OIDs, no units, numeric enums and timeticks.
const SCALAR_FLAGS: &[&str] = &["-Le", "-mALL", "-OUnet"];

/// Kind of tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Get,
    Set,
    Walk,
    Table,
}

impl OperationKind {
    /// Executable name.
    pub const fn program(self) -> &'static str {
        match self {
            Self::Get => "snmpget",
            Self::Set => "snmpset",
            Self::Walk => "snmpwalk",
            Self::Table => "snmptable",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Set => write!(f, "SET"),
            Self::Walk => write!(f, "WALK"),
            Self::Table => write!(f, "TABLE"),
        }
    }
}

/// One tool invocation. GET and SET take several objects; WALK and TABLE
/// operate on a single object per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Get(Vec<ObjectId>),
    Set(Vec<SetObject>),
    Walk(ObjectId),
    Table(ObjectId),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Get(_) => OperationKind::Get,
            Self::Set(_) => OperationKind::Set,
            Self::Walk(_) => OperationKind::Walk,
            Self::Table(_) => OperationKind::Table,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    secret: bool,
}

/// A complete command line, kept as tokens until rendered.
///
/// `Display` yields the exact string handed to the shell. Use
/// [`redacted()`](Self::redacted) for anything that ends up in logs.
/// Secret tokens are zeroized on drop; strings rendered from the line are
/// plain copies.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandLine {
    kind: OperationKind,
    tokens: Vec<Token>,
}

impl CommandLine {
    fn new(kind: OperationKind) -> Self {
        let mut cmd = Self {
            kind,
            tokens: Vec::with_capacity(24),
        };
        cmd.push(kind.program());
        cmd
    }

    fn push(&mut self, text: impl Into<String>) {
        self.tokens.push(Token {
            text: text.into(),
            secret: false,
        });
    }

    fn push_quoted(&mut self, value: &str, secret: bool) {
        self.tokens.push(Token {
            text: format!("'{}'", value),
            secret,
        });
    }

    /// Build from raw tokens, bypassing the tool layout.
    #[cfg(any(test, feature = "testing"))]
    pub fn from_tokens<I, S>(kind: OperationKind, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            tokens: tokens
                .into_iter()
                .map(|t| Token {
                    text: t.into(),
                    secret: false,
                })
                .collect(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Program name (first token).
    pub fn program(&self) -> &str {
        self.tokens.first().map_or("", |t| t.text.as_str())
    }

    /// Rendered tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    /// The command line with communities and passphrases masked.
    pub fn redacted(&self) -> String {
        self.tokens
            .iter()
            .map(|t| if t.secret { "'****'" } else { t.text.as_str() })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Zeroize for CommandLine {
    /// Clear secret tokens in place.
    fn zeroize(&mut self) {
        for token in self.tokens.iter_mut().filter(|t| t.secret) {
            token.text.zeroize();
        }
    }
}

impl Drop for CommandLine {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Single-quote a value for `sh`, escaping embedded quotes as `'\''`.
pub(crate) fn shell_escape(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
            first = false;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CommandLine({})", self.redacted())
    }
}

/// Build the command line for one operation.
///
/// Fails with [`Error::InvalidOid`](crate::Error::InvalidOid) when an object
/// does not pass [`ObjectId::validate`].
pub fn build(
    operation: &Operation,
    credentials: &CredentialMap,
    endpoint: &Endpoint,
    context: &str,
    config: &Config,
) -> Result<CommandLine> {
    match operation {
        Operation::Get(objects) => objects.iter().try_for_each(ObjectId::validate)?,
        Operation::Set(objects) => objects.iter().try_for_each(|o| o.id.validate())?,
        Operation::Walk(object) | Operation::Table(object) => object.validate()?,
    }

    let kind = operation.kind();
    let mut cmd = CommandLine::new(kind);

    match kind {
        OperationKind::Table => {
            cmd.push("-Le");
            cmd.push("-mALL");
            cmd.push("-Cr");
            cmd.push(config.max_repetitions.to_string());
            cmd.push("-Clibf");
            cmd.push_quoted(&config.field_delimiter, false);
            cmd.push("-OXUet");
        }
        OperationKind::Get | OperationKind::Set | OperationKind::Walk => {
            for flag in SCALAR_FLAGS {
                cmd.push(*flag);
            }
        }
    }
    cmd.push("-n");
    cmd.push_quoted(context, false);

    for (field, value) in credentials.iter() {
        match field {
            Field::Version => cmd.push(format!("-v{}", value)),
            Field::Community => {
                cmd.push("-c");
                cmd.push_quoted(value, true);
            }
            Field::SecLevel => cmd.push(format!("-l{}", value)),
            Field::SecName => {
                cmd.push("-u");
                cmd.push_quoted(value, false);
            }
            Field::AuthProto => {
                cmd.push("-a");
                cmd.push(value);
            }
            Field::AuthPass => {
                cmd.push("-A");
                cmd.push_quoted(value, true);
            }
            Field::PrivProto => {
                cmd.push("-x");
                cmd.push(value);
            }
            Field::PrivPass => {
                cmd.push("-X");
                cmd.push_quoted(value, true);
            }
        }
    }

    cmd.push(endpoint.transport_address());

    match operation {
        Operation::Get(objects) => {
            for object in objects {
                cmd.push(object.to_operand());
            }
        }
        Operation::Set(objects) => {
            for object in objects {
                cmd.push(object.to_operand());
            }
        }
        Operation::Walk(object) | Operation::Table(object) => cmd.push(object.to_operand()),
    }

    Ok(cmd)
}
