//! Common test fixtures and canned tool output.

use snmp_shell::exec::MockExecutor;
use snmp_shell::v3::{AuthProtocol, PrivProtocol};
use snmp_shell::{Client, Config, Credential, Endpoint, ObjectId, Oid, Target, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}
pub fn sys_location() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 6, 0)
}

/// System subtree root: 1.3.6.1.2.1.1
pub fn system_subtree() -> ObjectId {
    oid!(1, 3, 6, 1, 2, 1, 1).into()
}

/// Interfaces subtree root: 1.3.6.1.2.1.2
pub fn interfaces_subtree() -> ObjectId {
    oid!(1, 3, 6, 1, 2, 1, 2).into()
}

// =============================================================================
// Credentials
// =============================================================================

pub const AUTH_PASSWORD: &str = "authpass123";
pub const PRIV_PASSWORD: &str = "privpass123";
pub const COMMUNITY_RO: &str = "public";
pub const COMMUNITY_RW: &str = "private";

pub fn v3_auth_priv() -> Credential {
    Credential::v3("privaes_user")
        .auth(AuthProtocol::Sha, AUTH_PASSWORD)
        .privacy(PrivProtocol::Aes, PRIV_PASSWORD)
}

pub fn v1_target() -> Target {
    Target::new(
        Endpoint::new("10.0.0.1").expect("valid host"),
        Credential::v1(COMMUNITY_RO),
    )
}

// =============================================================================
// Canned tool output
// =============================================================================

pub const SYSTEM_WALK: &str = "\
.1.3.6.1.2.1.1.1.0 = STRING: \"Linux test-agent 5.15.0\"
.1.3.6.1.2.1.1.2.0 = OID: .1.3.6.1.4.1.8072.3.2.10
.1.3.6.1.2.1.1.3.0 = Timeticks: 4242
";

pub const INTERFACES_WALK: &str = "\
.1.3.6.1.2.1.2.1.0 = INTEGER: 2
";

pub const IF_TABLE: &str = "\
SNMP table: IF-MIB::ifTable

index|ifIndex|ifDescr
1|1|lo
2|2|eth0
";

pub const IF_X_TABLE: &str = "\
SNMP table: IF-MIB::ifXTable

index|ifName|ifAlias
1|lo|loopback
2|eth0|uplink to core
";

/// Client backed by a fresh mock executor; returns both.
pub fn mock_client() -> (Client<MockExecutor>, MockExecutor) {
    mock_client_with(Config::default())
}

pub fn mock_client_with(config: Config) -> (Client<MockExecutor>, MockExecutor) {
    let mock = MockExecutor::new();
    let client = Client::with_executor(config, mock.clone()).expect("valid config");
    (client, mock)
}
