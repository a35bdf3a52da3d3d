#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_shell::parse_table_output;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if let Ok(rows) = parse_table_output(&text, "|") {
        // Every row has as many cells as the header has columns
        if let Some(first) = rows.first() {
            assert!(rows.iter().all(|r| r.len() == first.len()));
        }
    }
});
