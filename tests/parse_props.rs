//! Property tests for the output parsers.

use proptest::prelude::*;
use snmp_shell::{Oid, parse_scalar_output, parse_table_output};

fn arcs() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100_000, 1..20)
}

fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._-]{0,12}"
}

proptest! {
    #[test]
    fn scalar_never_panics(text in "\\PC*") {
        let _ = parse_scalar_output(&text);
    }

    #[test]
    fn table_never_panics(text in "\\PC*", delimiter in "[|#;,]") {
        let _ = parse_table_output(&text, &delimiter);
    }

    #[test]
    fn integer_bindings_round_trip(rows in prop::collection::vec((arcs(), any::<i32>()), 1..30)) {
        let text: String = rows
            .iter()
            .map(|(arcs, v)| format!("{} = INTEGER: {}\n", Oid::from_slice(arcs).to_numeric_string(), v))
            .collect();

        let vbs = parse_scalar_output(&text).unwrap();
        prop_assert_eq!(vbs.len(), rows.len());
        for (vb, (arcs, v)) in vbs.iter().zip(&rows) {
            prop_assert_eq!(vb.oid.arcs(), arcs.as_slice());
            prop_assert_eq!(&vb.value, &v.to_string());
        }
    }

    #[test]
    fn table_rows_preserved(
        width in 1usize..6,
        body in prop::collection::vec(prop::collection::vec(cell(), 6), 0..20),
    ) {
        let header: Vec<String> = (0..width).map(|i| format!("col{i}")).collect();
        let mut text = format!("SNMP table: TEST-MIB::testTable\n\n{}\n", header.join("|"));
        let body: Vec<Vec<String>> = body
            .into_iter()
            .map(|mut r| { r.truncate(width); r })
            // blank lines are skipped by the parser
            .filter(|r| !r.join("|").trim().is_empty())
            .collect();
        for row in &body {
            text.push_str(&row.join("|"));
            text.push('\n');
        }

        let rows = parse_table_output(&text, "|").unwrap();
        prop_assert_eq!(rows.len(), body.len());
        for (row, expected) in rows.iter().zip(&body) {
            prop_assert_eq!(row.len(), width);
            for (i, value) in expected.iter().enumerate() {
                prop_assert_eq!(row.get(&format!("col{i}")), Some(value.as_str()));
            }
        }
    }
}
