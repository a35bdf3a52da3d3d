#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_shell::parse_scalar_output;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = parse_scalar_output(&text);
});
