//! Output parser and command builder benchmarks.
//!
//! Walks of large subtrees produce tens of thousands of lines; these
//! benchmarks track how parsing scales with output size.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use snmp_shell::command::{Operation, build};
use snmp_shell::v3::{AuthProtocol, PrivProtocol};
use snmp_shell::{
    Config, Credential, Endpoint, ObjectId, normalize, oid, parse_scalar_output,
    parse_table_output,
};

/// Walk output with a mix of value types.
fn walk_output(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => out.push_str(&format!(
                ".1.3.6.1.2.1.2.2.1.2.{i} = STRING: \"GigabitEthernet0/{i}\"\n"
            )),
            1 => out.push_str(&format!(".1.3.6.1.2.1.2.2.1.3.{i} = INTEGER: 6\n")),
            2 => out.push_str(&format!(
                ".1.3.6.1.2.1.2.2.1.10.{i} = Counter32: {}\n",
                i * 1000
            )),
            _ => out.push_str(&format!(
                ".1.3.6.1.2.1.2.2.1.6.{i} = Hex-STRING: 00 1A 2B 3C 4D {:02X}\n",
                i % 256
            )),
        }
    }
    out
}

fn table_output(rows: usize) -> String {
    let mut out = String::from("SNMP table: IF-MIB::ifTable\n\nindex|ifIndex|ifDescr|ifType|ifMtu\n");
    for i in 1..=rows {
        out.push_str(&format!("{i}|{i}|eth{i}|ethernetCsmacd|1500\n"));
    }
    out
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scalar");

    for lines in [10, 100, 1000, 10_000] {
        let text = walk_output(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| black_box(parse_scalar_output(text)))
        });
    }

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_table");

    for rows in [10, 100, 1000] {
        let text = table_output(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| black_box(parse_table_output(text, "|")))
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let credential = Credential::v3("admin")
        .auth(AuthProtocol::Sha, "authpass123")
        .privacy(PrivProtocol::Aes, "privpass123");
    let endpoint = Endpoint::new("192.168.1.1").unwrap();
    let config = Config::default();
    let operation = Operation::Get(vec![
        oid!(1, 3, 6, 1, 2, 1, 1, 1, 0).into(),
        ObjectId::Named("sysName.0".into()),
    ]);

    c.bench_function("build_get_v3", |b| {
        b.iter(|| {
            let map = normalize(black_box(&credential));
            black_box(build(&operation, &map, &endpoint, "", &config).unwrap().to_string())
        })
    });
}

criterion_group!(benches, bench_scalar, bench_table, bench_build);
criterion_main!(benches);
