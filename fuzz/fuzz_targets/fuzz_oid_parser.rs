#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_shell::oid::{ObjectId, Oid};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A parsed OID must survive its own rendering
        if let Ok(oid) = Oid::parse(s) {
            assert_eq!(Oid::parse(&oid.to_numeric_string()).ok(), Some(oid));
        }
        if let Ok(id) = ObjectId::parse(s) {
            let _ = id.to_operand();
        }
    }
});
