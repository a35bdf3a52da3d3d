//! # snmp-shell
//!
//! Async driver for the Net-SNMP command line tools.
//!
//! Each request runs `snmpget`, `snmpset`, `snmpwalk` or `snmptable` as a
//! child process and parses its text output. The pipeline has four stages,
//! each usable on its own:
//!
//! 1. [`normalize`]: turn a [`Credential`] into ordered command-line fields.
//! 2. [`command::build`]: produce the exact command line.
//! 3. [`exec::Executor`]: run it with a timeout, capturing stdout and stderr.
//! 4. [`parse`]: turn stdout into [`VarBind`]s or table [`Row`]s.
//!
//! The Net-SNMP tools must be installed and on `PATH`; this crate implements
//! no part of the SNMP wire protocol.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use snmp_shell::{Client, Config, Credential, Endpoint, Target, oid};
//! use snmp_shell::v3::{AuthProtocol, PrivProtocol};
//!
//! #[tokio::main]
//! async fn main() -> snmp_shell::Result<()> {
//!     let client = Client::new(Config::default())?;
//!
//!     let credential = Credential::v3("admin")
//!         .auth(AuthProtocol::Sha, "authpass123")
//!         .privacy(PrivProtocol::Aes, "privpass123");
//!     let target = Target::new(Endpoint::new("192.168.1.1")?, credential);
//!
//!     let results = client
//!         .walk(&target, &[oid!(1, 3, 6, 1, 2, 1, 1).into()])
//!         .await?;
//!     for vb in results {
//!         println!("{} = {}", vb.oid, vb.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Failures are reported as [`Error`] variants: invalid input (including
//! object names and hosts that are not safe to pass to a shell) is rejected
//! before any process starts, tool failures carry the program name (and
//! stderr for non-zero exits), and output that cannot be parsed is an
//! [`Error::Parse`], distinct from an empty `Ok` result. Nothing is retried.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events. Command lines are only ever logged in
//! redacted form.

pub mod client;
pub mod command;
pub mod config;
pub mod credential;
pub mod endpoint;
pub mod error;
pub mod exec;
pub mod normalize;
pub mod oid;
pub mod parse;
pub mod prelude;
pub mod v3;
pub mod version;

pub use client::{Client, Target};
pub use command::{CommandLine, Operation, OperationKind};
pub use config::Config;
pub use credential::{Credential, CredentialParams, Secret};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use normalize::{CredentialMap, Field, normalize};
pub use oid::{ObjectId, Oid, SetObject, SetType};
pub use parse::{Row, ValueType, VarBind, parse_scalar_output, parse_table_output};
pub use version::Version;
