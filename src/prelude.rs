//! Prelude module for convenient imports.
//!
//! ```rust,no_run
//! use snmp_shell::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Client`], [`Target`], [`Endpoint`], [`Credential`], [`ObjectId`], [`Oid`]
//! - Results: [`VarBind`], [`Row`]
//! - Error handling: [`Error`], [`Result`]
//! - V3 protocols: [`AuthProtocol`], [`PrivProtocol`]
//! - The [`oid!`] macro for OID literals

pub use crate::client::{Client, Target};
pub use crate::config::Config;
pub use crate::credential::Credential;
pub use crate::endpoint::Endpoint;
pub use crate::error::{Error, Result};
pub use crate::oid::{ObjectId, Oid, SetObject, SetType};
pub use crate::parse::{Row, VarBind};
pub use crate::v3::{AuthProtocol, PrivProtocol};

#[doc(no_inline)]
pub use crate::oid;
