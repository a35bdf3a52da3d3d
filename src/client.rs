//! SNMP client.
//!
//! A [`Client`] runs one Net-SNMP tool per request and parses its output.
//! Requests are independent: the client holds no connection or per-target
//! state, so one client can serve any number of concurrent callers.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use snmp_shell::{Client, Config, Credential, Endpoint, ObjectId, Target};
//! # async fn example() -> snmp_shell::Result<()> {
//! let client = Client::new(Config::default())?;
//! let target = Target::new(Endpoint::new("192.168.1.1")?, Credential::v2c("public"));
//!
//! for vb in client.get(&target, &[ObjectId::parse("sysDescr.0")?]).await? {
//!     println!("{}", vb);
//! }
//!
//! for row in client.table(&target, &[ObjectId::parse("IF-MIB::ifTable")?]).await? {
//!     println!("{:?}", row.get("ifDescr"));
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use crate::command::{self, CommandLine, Operation};
use crate::config::Config;
use crate::credential::Credential;
use crate::endpoint::Endpoint;
use crate::error::{Error, OidErrorKind, Result};
use crate::exec::{Executor, ShellExecutor};
use crate::normalize::normalize;
use crate::oid::{ObjectId, SetObject};
use crate::parse::{Row, VarBind, parse_scalar_output, parse_table_output};

/// Where and as whom a request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub endpoint: Endpoint,
    pub credential: Credential,
    /// SNMPv3 context name, empty by default.
    pub context: String,
}

impl Target {
    /// Target with an empty context.
    pub fn new(endpoint: Endpoint, credential: Credential) -> Self {
        Self {
            endpoint,
            credential,
            context: String::new(),
        }
    }

    /// Set the context name.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Client for the Net-SNMP command line tools.
///
/// Cheap to clone; clones share configuration and executor.
#[derive(Clone)]
pub struct Client<E: Executor = ShellExecutor> {
    config: Arc<Config>,
    executor: E,
}

impl Client<ShellExecutor> {
    /// Client running tools through the configured shell.
    pub fn new(config: Config) -> Result<Self> {
        let executor = ShellExecutor::new(config.shell.as_str());
        Self::with_executor(config, executor)
    }
}

impl<E: Executor> Client<E> {
    /// Client with a custom executor.
    pub fn with_executor(config: Config, executor: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            executor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Build the command line for an operation without running it.
    pub fn command(&self, target: &Target, operation: &Operation) -> Result<CommandLine> {
        command::build(
            operation,
            &normalize(&target.credential),
            &target.endpoint,
            &target.context,
            &self.config,
        )
    }

    /// GET one or more objects in a single `snmpget` run.
    pub async fn get(&self, target: &Target, objects: &[ObjectId]) -> Result<Vec<VarBind>> {
        if objects.is_empty() {
            return Err(Error::invalid_oid(OidErrorKind::Empty));
        }
        let stdout = self
            .execute(target, &Operation::Get(objects.to_vec()))
            .await?;
        parse_scalar_output(&stdout)
    }

    /// SET one or more objects in a single `snmpset` run.
    ///
    /// Returns the bindings the agent echoed back.
    pub async fn set(&self, target: &Target, objects: &[SetObject]) -> Result<Vec<VarBind>> {
        if objects.is_empty() {
            return Err(Error::invalid_oid(OidErrorKind::Empty));
        }
        let stdout = self
            .execute(target, &Operation::Set(objects.to_vec()))
            .await?;
        parse_scalar_output(&stdout)
    }

    /// Walk each object's subtree, one `snmpwalk` run per object.
    ///
    /// Results are concatenated in input order. The first failure aborts the
    /// remaining walks.
    pub async fn walk(&self, target: &Target, objects: &[ObjectId]) -> Result<Vec<VarBind>> {
        let mut results = Vec::new();
        for object in objects {
            let stdout = self
                .execute(target, &Operation::Walk(object.clone()))
                .await?;
            results.extend(parse_scalar_output(&stdout)?);
        }
        Ok(results)
    }

    /// Read each table, one `snmptable` run per object.
    ///
    /// Rows are concatenated in input order.
    pub async fn table(&self, target: &Target, objects: &[ObjectId]) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        for object in objects {
            let stdout = self
                .execute(target, &Operation::Table(object.clone()))
                .await?;
            rows.extend(parse_table_output(&stdout, &self.config.field_delimiter)?);
        }
        Ok(rows)
    }

    async fn execute(&self, target: &Target, operation: &Operation) -> Result<String> {
        let cmd = self.command(target, operation)?;
        let span = tracing::debug_span!(
            "snmp_shell::execute",
            op = %operation.kind(),
            target = %target.endpoint,
        );

        async {
            tracing::debug!(command = %cmd.redacted(), "running tool");
            let start = Instant::now();
            let result = self.executor.run(&cmd, self.config.timeout).await;
            match &result {
                Ok(output) => {
                    if !output.stderr.trim().is_empty() {
                        tracing::debug!(stderr = output.stderr.trim(), "tool wrote to stderr");
                    }
                    tracing::debug!(elapsed = ?start.elapsed(), "tool succeeded");
                }
                Err(e) => tracing::warn!(error = %e, "tool failed"),
            }
            result.map(|output| output.stdout)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockExecutor;
    use crate::oid;

    fn target() -> Target {
        Target::new(Endpoint::new("10.0.0.1").unwrap(), Credential::v1("public"))
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let result = Client::with_executor(Config::default().max_repetitions(0), MockExecutor::new());
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[tokio::test]
    async fn test_get_empty_objects_runs_nothing() {
        let mock = MockExecutor::new();
        let client = Client::with_executor(Config::default(), mock.clone()).unwrap();
        let err = client.get(&target(), &[]).await.unwrap_err();
        assert!(err.is_pre_execution());
        assert!(mock.commands().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_object_runs_nothing() {
        let mock = MockExecutor::new();
        let client = Client::with_executor(Config::default(), mock.clone()).unwrap();
        let forged = ObjectId::Named("ifTable;id".into());

        let err = client.walk(&target(), &[forged.clone()]).await.unwrap_err();
        assert!(err.is_pre_execution());
        let err = client.table(&target(), &[forged]).await.unwrap_err();
        assert!(err.is_pre_execution());
        assert!(mock.commands().is_empty());
    }

    #[tokio::test]
    async fn test_get_passes_timeout() {
        let mut mock = MockExecutor::new();
        mock.queue_stdout(".1.3.6.1.2.1.1.5.0 = STRING: \"r1\"\n");
        let config = Config::default().timeout(std::time::Duration::from_millis(750));
        let client = Client::with_executor(config, mock.clone()).unwrap();

        let vbs = client
            .get(&target(), &[oid!(1, 3, 6, 1, 2, 1, 1, 5, 0).into()])
            .await
            .unwrap();
        assert_eq!(vbs[0].value, "r1");
        assert_eq!(
            mock.commands()[0].timeout,
            std::time::Duration::from_millis(750)
        );
    }
}
